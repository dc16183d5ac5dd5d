//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Start with the "uncertain only" graph filter enabled.
    #[serde(default)]
    pub only_uncertain: bool,

    /// Snapshot JSON file to load. Empty means the built-in demo installation.
    #[serde(default)]
    pub data_file: String,
}

impl GeneralConfig {
    /// The configured snapshot file, if any.
    #[must_use]
    pub fn data_file(&self) -> Option<&str> {
        let trimmed = self.data_file.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
