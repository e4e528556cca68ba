use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_REFERENCE_ACTOR};
use crate::error::LoadError;

/// How a hash chain decides that an entry belongs to the searched name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyMatch {
    /// Hash must match, then the stored name must match.
    #[default]
    Exact,
    /// Only the stored hash is compared. Names whose hashes coincide alias
    /// to the same entry.
    HashOnly,
}

/// Graph construction and query configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Target of every bacon-number query.
    pub reference_actor: String,
    /// Separator between the movie title and cast names on a dataset line.
    pub delimiter: char,
    /// Key comparison used by both name indexes.
    pub key_match: KeyMatch,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            reference_actor: DEFAULT_REFERENCE_ACTOR.to_string(),
            delimiter: DEFAULT_DELIMITER,
            key_match: KeyMatch::default(),
        }
    }
}

impl GraphConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, LoadError> {
        let config: Self = toml::from_str(input).map_err(|e| LoadError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        if !self.delimiter.is_ascii() || matches!(self.delimiter, '\n' | '\r') {
            return Err(LoadError::Config {
                reason: format!("delimiter {:?} must be a single-byte, non-newline character", self.delimiter),
            });
        }
        if self.reference_actor.is_empty() {
            return Err(LoadError::Config {
                reason: "reference_actor must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Delimiter as the byte the tokenizer splits on. Call after `validate`.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}
