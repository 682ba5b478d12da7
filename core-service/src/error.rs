use core_model::ModelError;
use thiserror::Error;

/// Remediation steps surfaced when no SDK adapter is installed.
///
/// Every operation fails the same way in that state; nothing silently no-ops.
pub const LINKING_REMEDIATION: &str = "The Beacon SDK adapter doesn't seem to be linked. Make sure: \
     - a platform adapter implementing `BeaconSdk` is passed to `BeaconService::builder(..).sdk(..)` \
     - the host application was rebuilt after installing the adapter";

/// Errors surfaced to script-level callers as an immediate rejection.
///
/// Each error maps to one short wire code (see [`BeaconError::code`]); the
/// `Display` text is the human-readable message that travels with it. No
/// failure is ever retried internally.
#[derive(Error, Debug)]
pub enum BeaconError {
    #[error("{message}")]
    MissingArgument {
        argument: &'static str,
        message: &'static str,
    },

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("{}", LINKING_REMEDIATION)]
    NotLinked,

    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

impl BeaconError {
    pub(crate) fn missing(argument: &'static str, message: &'static str) -> BeaconError {
        BeaconError::MissingArgument { argument, message }
    }

    /// Short error code surfaced to script-level callers.
    pub fn code(&self) -> &'static str {
        match self {
            BeaconError::MissingArgument { .. } => "missing-required-argument",
            BeaconError::Validation(_) => "validation-failure",
            BeaconError::Model(err) => err.code(),
            BeaconError::NotLinked | BeaconError::Dispatch(_) => "linking-error",
        }
    }
}

pub type Result<T> = std::result::Result<T, BeaconError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let missing = BeaconError::missing("settings", "Missing settings.");
        assert_eq!(missing.code(), "missing-required-argument");

        assert_eq!(
            BeaconError::Validation("empty token".to_owned()).code(),
            "validation-failure"
        );
        assert_eq!(BeaconError::NotLinked.code(), "linking-error");

        let model: BeaconError = ModelError::MissingField { field: "beaconId" }.into();
        assert_eq!(model.code(), "missing-required-argument");
    }

    #[test]
    fn test_not_linked_message_carries_remediation() {
        let message = BeaconError::NotLinked.to_string();
        assert!(message.contains("rebuilt"));
        assert!(message.contains("BeaconSdk"));
    }
}
