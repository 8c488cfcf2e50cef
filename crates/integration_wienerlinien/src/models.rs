//! Realtime monitor data models
//!
//! Typed representations of one realtime snapshot for a stop, the lines
//! serving it, and their upcoming departures, as reported by the Wiener
//! Linien OGD realtime API.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One realtime snapshot for a physical stop
///
/// Constructed fresh per API call and discarded after formatting or
/// matching; there is no cache and no update lifecycle. An empty `lines`
/// sequence is a valid "no data" state, in which case `title` is empty
/// as well (the API reports titles per monitor entry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StopMonitor {
    /// Stop title as reported by the API
    pub title: String,
    /// Lines serving the stop, in source order (monitors, then lines)
    pub lines: Vec<LineDeparture>,
}

impl StopMonitor {
    /// Format the snapshot as a multi-line realtime listing
    #[must_use]
    pub fn format_realtime(&self) -> String {
        if self.lines.is_empty() {
            return String::from("No realtime data available for this stop.");
        }

        let mut out = format!("Realtime departures for {}:\n", self.title);
        for line in &self.lines {
            out.push_str(&format!("{}\n", line.format_detail()));
            for departure in &line.departures {
                out.push_str(&format!("    {}\n", departure.format_line()));
            }
        }
        out
    }
}

impl fmt::Display for StopMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_realtime())
    }
}

/// One transit line serving a stop, with its upcoming departures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineDeparture {
    /// Line name (e.g., "U3", "48A")
    pub name: String,
    /// Travel direction ("towards")
    pub towards: String,
    /// Vehicle kind derived from the raw `type` field
    pub kind: VehicleKind,
    /// Accessibility flag; only buses report it, absent means false
    #[serde(default)]
    pub barrier_free: bool,
    /// Upcoming departures in source order
    pub departures: Vec<Departure>,
}

impl LineDeparture {
    /// Format as a one-line summary with direction
    #[must_use]
    pub fn format_detail(&self) -> String {
        let emoji = self.kind.emoji();
        let accessible = if self.barrier_free {
            " (barrier-free)"
        } else {
            ""
        };
        format!("{emoji} {} → {}{accessible}", self.name, self.towards)
    }
}

impl fmt::Display for LineDeparture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_detail())
    }
}

/// A single upcoming departure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Departure {
    /// Planned departure time exactly as the API sent it
    pub time_planned: String,
    /// Minutes until departure; negative means already departed
    pub countdown: i32,
}

impl Departure {
    /// Parse the planned time, if it is a recognizable timestamp
    ///
    /// The API sends RFC 3339 with a colon-less offset (`+0100`), so a
    /// strict RFC 3339 parse is tried first and the API's own flavor
    /// second.
    #[must_use]
    pub fn planned_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.time_planned)
            .or_else(|_| DateTime::parse_from_str(&self.time_planned, "%Y-%m-%dT%H:%M:%S%.3f%z"))
            .ok()
    }

    /// Format as "HH:MM (in N min)", falling back to the raw time string
    #[must_use]
    pub fn format_line(&self) -> String {
        let time = self.planned_time().map_or_else(
            || self.time_planned.clone(),
            |t| t.format("%H:%M").to_string(),
        );

        if self.countdown < 0 {
            format!("{time} (departed)")
        } else {
            format!("{time} (in {} min)", self.countdown)
        }
    }
}

impl fmt::Display for Departure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_line())
    }
}

/// Vehicle kind classification
///
/// Derived solely from a case-sensitive substring match on the raw
/// `type` field; everything unrecognized is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    /// City bus
    Bus,
    /// Metro / U-Bahn
    Metro,
    /// Tram or any unrecognized vehicle type
    Other,
}

impl VehicleKind {
    /// Classify a raw `type` field value
    #[must_use]
    pub fn from_type(raw: Option<&str>) -> Self {
        match raw {
            Some(t) if t.contains("Bus") => Self::Bus,
            Some(t) if t.contains("Metro") => Self::Metro,
            _ => Self::Other,
        }
    }

    /// Emoji representation for listing output
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Bus => "🚌",
            Self::Metro => "🚇",
            Self::Other => "🚋",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Metro => "Metro",
            Self::Other => "Transit",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
