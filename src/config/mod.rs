//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level config struct, logging and sync sections, loading
//! - [`message`]: Text command dispatch configuration (prefixes, delimiter)
//! - [`validation`]: Startup validation collecting every error found

mod message;
mod types;
mod validation;

pub use message::MessageConfig;
pub use types::{Config, ConfigError, LogConfig, SyncConfig};
pub use validation::{ValidationError, validate};
