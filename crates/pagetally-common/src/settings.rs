use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Noun used in notice text when no label is configured.
pub const DEFAULT_RECORD_LABEL: &str = "page count";

/// Tunables for an aggregation run, loadable from TOML.
///
/// ```toml
/// record_label = "chapter length"
/// notices = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AggregatorSettings {
    pub record_label: String,
    /// When false, per-record skip notices are suppressed. The null-or-empty
    /// notice is always emitted.
    pub notices: bool,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            record_label: DEFAULT_RECORD_LABEL.to_string(),
            notices: true,
        }
    }
}

impl AggregatorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record_label(mut self, label: impl Into<String>) -> Self {
        self.record_label = label.into();
        self
    }

    pub fn with_notices(mut self, enabled: bool) -> Self {
        self.notices = enabled;
        self
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.record_label.trim().is_empty() {
            return Err(Error::invalid_settings("record_label must not be empty"));
        }
        Ok(())
    }
}
