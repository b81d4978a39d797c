//! Short code generation and validation utilities.

use crate::error::AppError;
use rand::{Rng, distr::Alphanumeric};
use serde_json::json;

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Codes reserved for system routes that can never be short links.
const RESERVED_CODES: &[&str] = &["api", "health", "static"];

/// Generates a random alphanumeric short code of the given length.
///
/// The alphabet is `[A-Za-z0-9]`, so every generated code also passes
/// [`validate_custom_code`]. Uniqueness is not guaranteed here; the caller
/// checks the store and retries on collision.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 4-32 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved system code
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < 4 || code.len() > 32 {
        return Err(AppError::bad_request(
            "Custom code must be 4-32 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
