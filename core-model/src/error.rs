use thiserror::Error;

/// Errors produced while mapping untyped script input to typed Beacon values.
///
/// Enum mismatches (`UnrecognizedValue`, `Configuration`) were process-aborting
/// in the original native bridges; here they are ordinary, catchable errors
/// carrying the same `fatal-configuration-error` wire code.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("unrecognized {field}: `{value}`")]
    UnrecognizedValue { field: &'static str, value: String },

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),
}

impl ModelError {
    /// Short error code surfaced to script-level callers.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::MissingField { .. } => "missing-required-argument",
            ModelError::UnrecognizedValue { .. } | ModelError::Configuration(_) => {
                "fatal-configuration-error"
            }
            ModelError::Validation(_) => "validation-failure",
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
