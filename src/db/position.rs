//! Translation of 1-based listing positions into row ids.

use super::db::Db;
use crate::libs::error::{ServiceError, ServiceResult};

/// Returns the id of the row shown at `index` when `table` is listed.
///
/// Positions follow the storage-native order used by every listing, so the
/// answer is only stable while nothing else writes to the table.
pub fn resolve(db: &Db, table: &str, index: usize) -> ServiceResult<i64> {
    let rows = db.fetch_all(table, &["id"])?;
    let count = rows.len();

    if index == 0 || index > count {
        return Err(ServiceError::IndexOutOfRange { index, count });
    }

    let id: i64 = rows[index - 1].get_as("id")?;
    tracing::debug!(table, index, id, "Resolved position");
    Ok(id)
}
