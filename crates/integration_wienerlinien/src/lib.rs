//! Wiener Linien realtime integration for LibreOeffis
//!
//! Fetches realtime departure monitors from the Wiener Linien
//! [OGD realtime API](https://www.wienerlinien.at/ogd_realtime/doku/)
//! keyed by stop id, normalizes the heterogeneous vehicle records into
//! typed models, and offers a naive shared-line route lookup between
//! two stops.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with the other
//! integration crates. [`MonitorClient`] defines the fetch interface,
//! implemented by [`WienerLinienClient`]. Payload decoding lives in
//! [`parse`] as pure functions, route matching in [`matcher`]. An
//! optional [`RequestAudit`] hook records every successful request.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_wienerlinien::{MonitorClient, WienerLinienClient, WienerLinienConfig};
//!
//! let config = WienerLinienConfig::default();
//! let client = WienerLinienClient::new(&config)?;
//!
//! let monitor = client.fetch_monitor("4613").await?;
//! println!("{}", monitor.format_realtime());
//! ```

mod audit;
mod client;
mod config;
mod error;
pub mod matcher;
mod models;
pub mod parse;

pub use audit::{FileRequestAudit, RequestAudit};
pub use client::{MonitorClient, WienerLinienClient};
pub use config::WienerLinienConfig;
pub use error::MonitorError;
pub use matcher::{RouteMatch, RouteResult, find_shared_line, match_route};
pub use models::{Departure, LineDeparture, StopMonitor, VehicleKind};
