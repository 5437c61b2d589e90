//! Logging setup and span constructors for dispatch observability.

use crate::config::LogConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice is
/// harmless; the second install is ignored.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "Tracing subscriber already installed");
    }
}

/// Standardized span constructors for dispatch.
pub mod spans {
    use tracing::{Span, debug_span};

    /// Create a span for an interaction dispatch.
    pub fn interaction(command: &str, interaction_id: &str) -> Span {
        debug_span!("interaction", command = %command, id = %interaction_id)
    }

    /// Create a span for a message command dispatch.
    pub fn message(command: &str, channel_id: &str, author_id: &str) -> Span {
        debug_span!(
            "message_command",
            command = %command,
            channel = %channel_id,
            author = %author_id
        )
    }
}
