//! Text command dispatch configuration.

use serde::Deserialize;

/// How free-text messages are recognised as commands.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageConfig {
    /// Literal prefixes, e.g. `["d.", "dis."]`.
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Also accept `<@ID>` and `<@!ID>` mentions of the bot as a prefix.
    #[serde(default)]
    pub mention_prefix: bool,
    /// Argument delimiter (default: a single space).
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            prefixes: Vec::new(),
            mention_prefix: false,
            delimiter: default_delimiter(),
        }
    }
}

impl MessageConfig {
    /// Config with the given literal prefixes and defaults otherwise.
    pub fn with_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Enable or disable mention prefixes.
    pub fn mention_prefix(mut self, enabled: bool) -> Self {
        self.mention_prefix = enabled;
        self
    }
}

fn default_delimiter() -> String {
    " ".to_string()
}
