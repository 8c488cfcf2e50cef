//! Wiener Linien monitor service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Wiener Linien realtime monitor API (OGD realtime)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WienerLinienConfig {
    /// Base URL for the OGD realtime API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://www.wienerlinien.at/ogd_realtime".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for WienerLinienConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WienerLinienConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
