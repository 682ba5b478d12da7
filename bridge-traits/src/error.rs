use thiserror::Error;

/// Errors raised by platform SDK adapters.
///
/// Adapter calls run on the UI scheduler after the originating operation has
/// already resolved, so these errors are logged by the dispatcher rather than
/// surfaced to script callers.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
