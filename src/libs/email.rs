//! Email syntax validation and normalization.
//!
//! An address is accepted when it passes the RFC-style check from `validator`
//! and its domain ends in an alphabetic top-level domain of at least two
//! characters. Accepted addresses are stored in lowercase, so normalizing an
//! already normalized address returns it unchanged.

use super::error::ValidationError;
use validator::ValidateEmail;

pub fn validate_and_normalize(email: &str) -> Result<String, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidEmail {
        email: email.to_string(),
        reason: reason.to_string(),
    };

    let candidate = email.trim();
    if candidate.is_empty() {
        return Err(invalid("the address is empty"));
    }
    if candidate.starts_with('@') {
        return Err(invalid("the part before '@' is missing"));
    }

    let (_, domain) = candidate.rsplit_once('@').ok_or_else(|| invalid("the address must contain '@'"))?;
    if !candidate.to_string().validate_email() {
        return Err(invalid("the address contains disallowed characters or is malformed"));
    }

    match domain.rsplit_once('.') {
        Some((_, tld)) if tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) => {}
        Some(_) => return Err(invalid("the top-level domain is not valid")),
        None => return Err(invalid("the domain has no top-level domain")),
    }

    Ok(candidate.to_lowercase())
}

pub fn is_valid(email: &str) -> bool {
    validate_and_normalize(email).is_ok()
}
