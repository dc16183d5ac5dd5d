//! # sk-config
//!
//! Layered configuration loading for Stromkreis using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STROMKREIS_*` prefix, `__` as separator)
//! 2. Project-level `.stromkreis/config.toml`
//! 3. User-level `~/.config/stromkreis/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STROMKREIS_LAYOUT__X_GAP` -> `layout.x_gap`,
//! `STROMKREIS_GENERAL__DATA_FILE` -> `general.data_file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sk_config::SkConfig;
//!
//! let config = SkConfig::load_with_dotenv().expect("config");
//! println!("layer gap: {}", config.layout.x_gap);
//! ```

mod error;
mod general;
mod layout;
mod panel;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use layout::LayoutSettings;
pub use panel::PanelSettings;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SkConfig {
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub panel: PanelSettings,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SkConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`SkConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".stromkreis/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("STROMKREIS_").split("__"))
    }

    /// Reject gaps and cell sizes that would collapse or mirror the views.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks = [
            ("layout.x_gap", self.layout.x_gap),
            ("layout.y_gap", self.layout.y_gap),
            ("panel.cell_width", self.panel.cell_width),
            ("panel.cell_height", self.panel.cell_height),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stromkreis").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SkConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.general.only_uncertain);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: SkConfig = SkConfig::figment().extract()?;
            assert!((config.layout.x_gap - 200.0).abs() < f64::EPSILON);
            assert!((config.panel.cell_height - 80.0).abs() < f64::EPSILON);
            Ok(())
        });
    }

    #[test]
    fn validate_rejects_zero_gap() {
        let mut config = SkConfig::default();
        config.layout.y_gap = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field, .. } if field == "layout.y_gap"));
    }

    #[test]
    fn validate_rejects_negative_cell() {
        let mut config = SkConfig::default();
        config.panel.cell_width = -140.0;
        assert!(config.validate().is_err());
    }
}
