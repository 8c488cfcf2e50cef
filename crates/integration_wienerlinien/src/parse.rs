//! Monitor payload parsing
//!
//! Pure functions turning a raw OGD realtime response body into typed
//! models. No I/O happens here; everything is testable on a fixture
//! payload.
//!
//! Extraction is strict where the API contract is: a line without a
//! `name` or `towards`, or a monitor without a stop title, fails the
//! whole operation. Departure entries missing their time fields are
//! skipped instead, the API omits them for vehicles without realtime
//! tracking.

use serde::Deserialize;

use crate::error::MonitorError;
use crate::models::{Departure, LineDeparture, StopMonitor, VehicleKind};

/// Parse a monitor response body into a full stop snapshot
///
/// The stop title is taken from the first monitor entry; a body with an
/// empty `monitors` array yields an empty snapshot (valid "no data"
/// state) with an empty title.
///
/// # Errors
///
/// Returns [`MonitorError::InvalidPayload`] when the body is not the
/// expected envelope, [`MonitorError::NoMonitors`] when the `monitors`
/// key is absent, and [`MonitorError::MissingField`] when a required
/// field is missing from a monitor or line record.
pub fn stop_monitor(body: &str) -> Result<StopMonitor, MonitorError> {
    let monitors = monitors_from_body(body)?;

    let title = match monitors.first() {
        Some(monitor) => stop_title(monitor)?,
        None => String::new(),
    };

    Ok(StopMonitor {
        title,
        lines: lines_from_monitors(monitors)?,
    })
}

/// Parse a monitor response body into the flat normalized line sequence
///
/// Output preserves the source order of monitors, then lines within
/// each monitor. For N well-formed line records the result holds
/// exactly N entries.
///
/// # Errors
///
/// Same failure rules as [`stop_monitor`], minus the stop title
/// extraction.
pub fn vehicle_lines(body: &str) -> Result<Vec<LineDeparture>, MonitorError> {
    lines_from_monitors(monitors_from_body(body)?)
}

fn monitors_from_body(body: &str) -> Result<Vec<RawMonitor>, MonitorError> {
    let raw: RawMonitorResponse =
        serde_json::from_str(body).map_err(|e| MonitorError::InvalidPayload(e.to_string()))?;

    let data = raw
        .data
        .ok_or_else(|| MonitorError::InvalidPayload("missing `data` envelope".to_string()))?;

    data.monitors.ok_or(MonitorError::NoMonitors)
}

fn lines_from_monitors(monitors: Vec<RawMonitor>) -> Result<Vec<LineDeparture>, MonitorError> {
    let mut lines = Vec::new();

    for monitor in monitors {
        for line in monitor.lines {
            lines.push(convert_line(line)?);
        }
    }

    Ok(lines)
}

fn convert_line(raw: RawLine) -> Result<LineDeparture, MonitorError> {
    let name = raw.name.ok_or(MonitorError::MissingField("name"))?;
    let towards = raw.towards.ok_or(MonitorError::MissingField("towards"))?;
    let kind = VehicleKind::from_type(raw.vehicle_type.as_deref());
    let barrier_free = raw.barrier_free.unwrap_or(false);

    let departures = raw
        .departures
        .map(|d| d.departure)
        .unwrap_or_default()
        .into_iter()
        .filter_map(convert_departure)
        .collect();

    Ok(LineDeparture {
        name,
        towards,
        kind,
        barrier_free,
        departures,
    })
}

fn convert_departure(raw: RawDeparture) -> Option<Departure> {
    let time = raw.departure_time?;
    Some(Departure {
        time_planned: time.time_planned?,
        countdown: time.countdown?,
    })
}

fn stop_title(monitor: &RawMonitor) -> Result<String, MonitorError> {
    monitor
        .location_stop
        .as_ref()
        .and_then(|stop| stop.properties.as_ref())
        .and_then(|properties| properties.title.clone())
        .ok_or(MonitorError::MissingField("title"))
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawMonitorResponse {
    data: Option<RawMonitorData>,
}

#[derive(Debug, Deserialize)]
struct RawMonitorData {
    monitors: Option<Vec<RawMonitor>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMonitor {
    location_stop: Option<RawLocationStop>,
    #[serde(default)]
    lines: Vec<RawLine>,
}

#[derive(Debug, Deserialize)]
struct RawLocationStop {
    properties: Option<RawStopProperties>,
}

#[derive(Debug, Deserialize)]
struct RawStopProperties {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLine {
    name: Option<String>,
    towards: Option<String>,
    #[serde(rename = "type")]
    vehicle_type: Option<String>,
    barrier_free: Option<bool>,
    departures: Option<RawDepartures>,
}

#[derive(Debug, Deserialize)]
struct RawDepartures {
    #[serde(default)]
    departure: Vec<RawDeparture>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDeparture {
    departure_time: Option<RawDepartureTime>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDepartureTime {
    time_planned: Option<String>,
    countdown: Option<i32>,
}
