use thiserror::Error;

/// A failed step validation, shown inline next to the step's editor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors raised while building or driving a wizard.
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("wizard has no steps")]
    NoSteps,

    #[error("failed to serialize wizard data: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WizardError>;
