//! CLI configuration loading
//!
//! An optional TOML file with one section per integration; every field
//! falls back to the integration crate's defaults, so a missing file or
//! an empty section is fine.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use integration_wienerlinien::WienerLinienConfig;
use integration_wienmobil::WienMobilConfig;

/// Top-level configuration for the CLI
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Wiener Linien realtime monitor API section
    pub wienerlinien: WienerLinienConfig,
    /// WienMobil Rad bike-share section
    pub wienmobil: WienMobilConfig,
}

impl AppConfig {
    /// Load configuration from an optional TOML file
    ///
    /// With no path, defaults apply. With a path, the file must exist,
    /// parse, and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// validation.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        config
            .wienerlinien
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid [wienerlinien] config: {e}"))?;
        config
            .wienmobil
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid [wienmobil] config: {e}"))?;

        Ok(config)
    }
}
