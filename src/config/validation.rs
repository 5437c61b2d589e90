//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message.delimiter must not be empty")]
    EmptyDelimiter,
    #[error("message.prefixes[{0}] must not be empty")]
    EmptyPrefix(usize),
    #[error("message.prefixes is empty and mention_prefix is disabled; no message can match")]
    NoPrefix,
    #[error("sync.application_id must not be empty when set")]
    EmptyApplicationId,
    #[error("sync.guild_id must not be empty when set")]
    EmptyGuildId,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let message = &config.message;

    if message.delimiter.is_empty() {
        errors.push(ValidationError::EmptyDelimiter);
    }
    for (i, prefix) in message.prefixes.iter().enumerate() {
        if prefix.is_empty() {
            errors.push(ValidationError::EmptyPrefix(i));
        }
    }
    if message.prefixes.is_empty() && !message.mention_prefix {
        errors.push(ValidationError::NoPrefix);
    }

    if config.sync.application_id.as_deref() == Some("") {
        errors.push(ValidationError::EmptyApplicationId);
    }
    if config.sync.guild_id.as_deref() == Some("") {
        errors.push(ValidationError::EmptyGuildId);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MessageConfig;

    fn config_with(message: MessageConfig) -> Config {
        Config {
            message,
            ..Config::default()
        }
    }

    #[test]
    fn valid_config_passes() {
        let config = config_with(MessageConfig::with_prefixes(["d."]));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn mention_only_config_passes() {
        let config = config_with(MessageConfig::default().mention_prefix(true));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = config_with(MessageConfig {
            prefixes: vec!["d.".into(), String::new()],
            mention_prefix: false,
            delimiter: String::new(),
        });
        config.sync.application_id = Some(String::new());
        config.sync.guild_id = Some(String::new());

        let errors = validate(&config).expect_err("invalid config");
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyDelimiter,
                ValidationError::EmptyPrefix(1),
                ValidationError::EmptyApplicationId,
                ValidationError::EmptyGuildId,
            ]
        );
    }

    #[test]
    fn default_config_has_no_prefix() {
        let errors = validate(&Config::default()).expect_err("no prefix");
        assert_eq!(errors, vec![ValidationError::NoPrefix]);
    }
}
