//! Unified error handling for slashgate.
//!
//! Unmatched events are not errors and never show up here: the dispatcher
//! drops them silently. What remains are explicit registry mutations on
//! unknown names, failures raised by user handlers, and misconfiguration of
//! the schema sync.

use thiserror::Error;

// ============================================================================
// Registry Errors
// ============================================================================

/// Errors from explicit registry mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("command not exists: {0}")]
    NotFound(String),
}

// ============================================================================
// Response Errors (response sink)
// ============================================================================

/// Errors reported by a [`ResponseSink`](crate::platform::ResponseSink).
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("platform rejected request ({status}): {reason}")]
    Rejected { status: u16, reason: String },

    #[error("response sink closed")]
    Closed,
}

// ============================================================================
// Handler Errors (chain execution)
// ============================================================================

/// Errors a handler may return to stop the chain.
///
/// The dispatcher only logs these; it never replies, retries or wraps them.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("response failed: {0}")]
    Response(#[from] ResponseError),

    #[error("missing option: {0}")]
    MissingOption(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Response(_) => "response_error",
            Self::MissingOption(_) => "missing_option",
            Self::Internal(_) => "internal_error",
            Self::Other(_) => "other",
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Sync Errors (schema sync)
// ============================================================================

/// Errors from pushing the command schema to the platform.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Neither an explicit application id nor the bot identity was available.
    #[error("cannot determine application id")]
    MissingApplicationId,

    #[error("sync transport error: {0}")]
    Transport(#[from] ResponseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_command() {
        let err = RegistryError::NotFound("ping".into());
        assert_eq!(err.to_string(), "command not exists: ping");
    }

    #[test]
    fn handler_error_codes() {
        assert_eq!(
            HandlerError::from(ResponseError::Closed).error_code(),
            "response_error"
        );
        assert_eq!(
            HandlerError::MissingOption("count".into()).error_code(),
            "missing_option"
        );
        assert_eq!(
            HandlerError::from(anyhow::anyhow!("boom")).error_code(),
            "other"
        );
    }

    #[test]
    fn sync_error_wraps_transport() {
        let err = SyncError::from(ResponseError::Transport("reset".into()));
        assert_eq!(err.to_string(), "sync transport error: transport error: reset");
    }
}
