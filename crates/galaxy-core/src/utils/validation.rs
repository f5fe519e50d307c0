//! Path key validation.
//!
//! Namespace and collection names are URL-safe tokens (`[0-9a-z_]+`);
//! versions are semantic-version strings (`[0-9A-Za-z.+-]+`). A path key that
//! does not match can never name an existing object, so it is reported as
//! not found rather than as a validation failure.

use crate::ports::CoreError;

/// Whether `s` is a valid namespace or collection name.
#[must_use]
pub fn is_valid_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase() || b == b'_')
}

/// Whether `s` is a valid version token.
#[must_use]
pub fn is_valid_version(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'+' | b'-'))
}

/// Validate a `namespace/name` path key.
pub fn validate_collection_key(namespace: &str, name: &str) -> Result<(), CoreError> {
    if is_valid_name(namespace) && is_valid_name(name) {
        Ok(())
    } else {
        Err(CoreError::NotFound(format!("collection {namespace}/{name}")))
    }
}

/// Validate a `namespace/name/version` path key.
pub fn validate_version_key(namespace: &str, name: &str, version: &str) -> Result<(), CoreError> {
    validate_collection_key(namespace, name)?;
    if is_valid_version(version) {
        Ok(())
    } else {
        Err(CoreError::NotFound(format!(
            "collection version {namespace}/{name}/{version}"
        )))
    }
}
