//! Validation of editor text.

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Outcome of validating a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Parser message when invalid.
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Check that `text` is syntactically valid JSON.
pub fn validate_json(text: &str) -> ValidationResult {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => ValidationResult::ok(),
        Err(err) => ValidationResult::invalid(err.to_string()),
    }
}

/// Validate `text` as JSON, then decode it into `T`.
///
/// Syntax errors and shape errors are both reported as a [`ValidationError`]
/// carrying the parser message.
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ValidationError> {
    let result = validate_json(text);
    if !result.valid {
        return Err(ValidationError::new(result.message.unwrap_or_default()));
    }
    Ok(serde_json::from_str(text)?)
}
