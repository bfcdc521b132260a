//! Advisor configuration.
//!
//! [`AdvisorConfig`] carries everything the analysis core treats as injected
//! data: the stop-word set, the message table and the numeric knobs of the
//! pipeline. Configuration files are TOML (by `.toml` extension) or JSON, and
//! only need to name the values they change; everything else keeps its
//! default.
//!
//! # Example
//!
//! ```rust
//! use redactor_core::AdvisorConfig;
//!
//! let config = AdvisorConfig::from_toml_str(r#"
//!     min_keyword_words = 150
//!
//!     [messages.title.length]
//!     ok = "Titles should be at least 30 characters long."
//! "#).unwrap();
//!
//! assert_eq!(config.min_keyword_words, 150);
//! assert_eq!(config.messages.title.length.ok, "Titles should be at least 30 characters long.");
//! assert_eq!(config.recommended_keyword_count, 1);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::messages::MessageTable;
use crate::{AdvisorError, Result};

/// Default English stop words, never recommended as keywords.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any", "are", "aren't",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but", "by", "can",
    "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't", "doing", "don't", "down",
    "during", "each", "even", "ever", "every", "few", "for", "from", "further", "get", "gets", "got", "had",
    "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "however", "i", "if", "in", "into", "is", "isn't", "it", "its", "itself", "just",
    "let", "like", "made", "make", "many", "may", "me", "might", "more", "most", "much", "must", "my", "myself",
    "never", "new", "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or", "other", "ought",
    "our", "ours", "ourselves", "out", "over", "own", "really", "same", "say", "says", "she", "should",
    "shouldn't", "since", "so", "some", "still", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
    "up", "upon", "us", "very", "was", "wasn't", "way", "we", "well", "were", "weren't", "what", "when", "where",
    "whether", "which", "while", "who", "whom", "whose", "why", "will", "with", "within", "without", "won't",
    "would", "wouldn't", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Words never recommended as keywords (default: English stop words).
    pub stop_words: Vec<String>,

    /// Diagnostic messages keyed by field and outcome.
    pub messages: MessageTable,

    /// Body word count at which keyword and readability statistics are computed (default: 100).
    pub min_keyword_words: usize,

    /// Number of recommended keywords kept in the report (default: 1).
    pub recommended_keyword_count: usize,

    /// Minimum keyword token length in characters (default: 3).
    pub min_keyword_length: usize,

    /// Quiet interval before a burst of edits is analyzed, in milliseconds (default: 1000).
    pub debounce_ms: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            messages: MessageTable::default(),
            min_keyword_words: 100,
            recommended_keyword_count: 1,
            min_keyword_length: 3,
            debounce_ms: 1000,
        }
    }
}

impl AdvisorConfig {
    /// Creates a new builder for AdvisorConfig.
    pub fn builder() -> AdvisorConfigBuilder {
        AdvisorConfigBuilder::new()
    }

    /// Parses a TOML document, filling unspecified values from defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let overrides: Value = toml::from_str(contents)?;
        Self::from_overrides(overrides)
    }

    /// Parses a JSON document, filling unspecified values from defaults.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let overrides: Value =
            serde_json::from_str(contents).map_err(|e| AdvisorError::ConfigParse(e.to_string()))?;
        Self::from_overrides(overrides)
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.toml` are parsed as TOML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

        let config = match ext {
            "toml" => Self::from_toml_str(&contents)?,
            _ => Self::from_json_str(&contents)?,
        };

        tracing::debug!(path = %path.display(), "loaded advisor configuration");
        Ok(config)
    }

    /// Loads configuration from a file, falling back to defaults on any failure.
    ///
    /// A missing file is silent; a file that exists but cannot be parsed is
    /// logged as a warning.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable configuration");
            Self::default()
        })
    }

    /// Checks values that deserialize fine but cannot drive an analysis.
    pub fn validate(&self) -> Result<()> {
        if self.recommended_keyword_count == 0 {
            return Err(AdvisorError::Config("recommended_keyword_count must be at least 1".to_string()));
        }
        if self.min_keyword_length == 0 {
            return Err(AdvisorError::Config("min_keyword_length must be at least 1".to_string()));
        }
        Ok(())
    }

    fn from_overrides(overrides: Value) -> Result<Self> {
        let mut merged = serde_json::to_value(Self::default())?;
        merge_values(&mut merged, overrides);

        let config: Self = serde_json::from_value(merged).map_err(|e| AdvisorError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Overlay `overrides` onto `base`, recursing into tables
fn merge_values(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, value) => *base = value,
    }
}

/// Default location of the user configuration file.
///
/// Resolves to `<config dir>/redactor/config.toml`, or `None` when the
/// platform has no configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("redactor").join("config.toml"))
}

/// Builder for AdvisorConfig.
///
/// # Example
///
/// ```rust
/// use redactor_core::AdvisorConfig;
///
/// let config = AdvisorConfig::builder()
///     .stop_words(["lorem", "ipsum"])
///     .min_keyword_words(50)
///     .build();
/// assert_eq!(config.stop_words, vec!["lorem".to_string(), "ipsum".to_string()]);
/// ```
pub struct AdvisorConfigBuilder {
    config: AdvisorConfig,
}

impl AdvisorConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AdvisorConfig::default() }
    }

    /// Replaces the stop-word set.
    pub fn stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the message table.
    pub fn messages(mut self, messages: MessageTable) -> Self {
        self.config.messages = messages;
        self
    }

    /// Sets the body word count needed for keyword statistics.
    pub fn min_keyword_words(mut self, value: usize) -> Self {
        self.config.min_keyword_words = value;
        self
    }

    /// Sets how many recommended keywords the report keeps.
    pub fn recommended_keyword_count(mut self, value: usize) -> Self {
        self.config.recommended_keyword_count = value;
        self
    }

    /// Sets the minimum keyword token length.
    pub fn min_keyword_length(mut self, value: usize) -> Self {
        self.config.min_keyword_length = value;
        self
    }

    /// Sets the debounce quiet interval in milliseconds.
    pub fn debounce_ms(mut self, value: u64) -> Self {
        self.config.debounce_ms = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> AdvisorConfig {
        self.config
    }
}

impl Default for AdvisorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
