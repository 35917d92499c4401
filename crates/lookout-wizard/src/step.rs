//! Step descriptors.

use crate::error::ValidationError;

/// Turns the editor text of a step into validated data.
pub type Validator<T> = fn(&str) -> Result<T, ValidationError>;

/// One entry of a wizard's ordered step table.
pub struct StepDescriptor<T> {
    pub id: &'static str,
    /// Translation key of the step title.
    pub label_key: &'static str,
    /// Gate checked before leaving the step forward.
    pub validate: Option<Validator<T>>,
    /// Whether the step edits the data (and so offers a reset).
    pub editable: bool,
}

impl<T> StepDescriptor<T> {
    pub const fn new(id: &'static str, label_key: &'static str) -> Self {
        Self {
            id,
            label_key,
            validate: None,
            editable: false,
        }
    }

    pub const fn with_validator(self, validate: Validator<T>) -> Self {
        Self {
            validate: Some(validate),
            ..self
        }
    }

    pub const fn editable(self) -> Self {
        Self {
            editable: true,
            ..self
        }
    }
}

impl<T> std::fmt::Debug for StepDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDescriptor")
            .field("id", &self.id)
            .field("label_key", &self.label_key)
            .field("validated", &self.validate.is_some())
            .field("editable", &self.editable)
            .finish()
    }
}
