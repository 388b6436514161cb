//! User-facing message catalog and the macros that print it.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
