//! Naive route matching
//!
//! Finds a line serving both of two stops by scanning their realtime
//! snapshots for a shared line name. This is a "same line serves both
//! stops" heuristic over live monitor data, not a path search over a
//! transit graph: no transfers, no travel times, no directionality
//! check. The first-match nested iteration order is compatibility
//! behavior and must stay as is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::MonitorClient;
use crate::error::MonitorError;
use crate::models::StopMonitor;

/// A matched direct connection between two stops
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteMatch {
    /// Name of the line serving both stops
    pub line: String,
    /// Title of the origin stop
    pub origin: String,
    /// Title of the destination stop
    pub destination: String,
    /// First planned departure of the matching line at the origin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_departure: Option<String>,
}

/// Outcome of a route lookup between two stops
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RouteResult {
    /// A line serving both stops was found
    Found(RouteMatch),
    /// At least one of the two stops reported no realtime data
    NoDataAvailable,
    /// No line name appears at both stops
    NoConnection,
}

impl RouteResult {
    /// Format the outcome as a short human-readable summary
    #[must_use]
    pub fn format_summary(&self) -> String {
        match self {
            Self::Found(route) => {
                let mut out = format!(
                    "Shared line {}:\n  from: {}\n  to:   {}",
                    route.line, route.origin, route.destination
                );
                if let Some(departure) = &route.first_departure {
                    out.push_str(&format!("\n  next planned departure: {departure}"));
                }
                out
            }
            Self::NoDataAvailable => {
                String::from("No realtime data available for start or destination.")
            }
            Self::NoConnection => {
                String::from("No direct connection found between start and destination.")
            }
        }
    }
}

impl fmt::Display for RouteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_summary())
    }
}

/// Find the first line name shared between two stop snapshots
///
/// Iterates all (start line × destination line) pairs in the fixed
/// nested order, start lines outermost, and returns the first pair
/// whose names are exactly equal. Line order within each snapshot
/// preserves the API's monitors-then-lines source order, so the scan
/// covers the full cross-product in a deterministic sequence.
#[must_use]
pub fn find_shared_line(start: &StopMonitor, dest: &StopMonitor) -> RouteResult {
    if start.lines.is_empty() || dest.lines.is_empty() {
        return RouteResult::NoDataAvailable;
    }

    for start_line in &start.lines {
        for dest_line in &dest.lines {
            if start_line.name == dest_line.name {
                return RouteResult::Found(RouteMatch {
                    line: start_line.name.clone(),
                    origin: start.title.clone(),
                    destination: dest.title.clone(),
                    first_departure: start_line
                        .departures
                        .first()
                        .map(|d| d.time_planned.clone()),
                });
            }
        }
    }

    RouteResult::NoConnection
}

/// Look up a direct connection between two stops via live monitor data
///
/// Fetches the start snapshot first and the destination second; the
/// first fetch error aborts the lookup unchanged, without touching the
/// other stop. The two snapshots are taken sequentially and may reflect
/// different real-world instants.
///
/// # Errors
///
/// Propagates any [`MonitorError`] from either fetch as is.
pub async fn match_route<C>(
    client: &C,
    start_stop_id: &str,
    dest_stop_id: &str,
) -> Result<RouteResult, MonitorError>
where
    C: MonitorClient + ?Sized,
{
    let start = client.fetch_monitor(start_stop_id).await?;
    let dest = client.fetch_monitor(dest_stop_id).await?;

    Ok(find_shared_line(&start, &dest))
}
