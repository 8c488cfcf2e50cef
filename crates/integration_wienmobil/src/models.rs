//! Bike-share data models

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fixed bike-share docking station with live availability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BikeStation {
    /// Stable station identifier
    pub station_id: String,
    /// Human-readable station name
    pub name: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// Number of bikes currently available (0 when unknown)
    pub bikes_available: u32,
}

impl BikeStation {
    /// Format as a one-line availability summary
    #[must_use]
    pub fn format_line(&self) -> String {
        format!("🚲 {} ({} bikes available)", self.name, self.bikes_available)
    }
}

impl fmt::Display for BikeStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_line())
    }
}
