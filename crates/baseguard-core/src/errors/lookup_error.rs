//! Remote availability lookup errors.
//!
//! Every variant is recoverable: the classifier logs it and falls through to
//! the offline heuristic.

/// Errors from the remote availability service.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("network error: {reason}")]
    Transport { reason: String },

    #[error("availability service returned HTTP {status}")]
    Status { status: u16 },

    #[error("malformed availability response: {message}")]
    Malformed { message: String },

    #[error("remote lookup disabled")]
    Disabled,
}
