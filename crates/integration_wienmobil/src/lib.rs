//! WienMobil Rad bike-share integration for LibreOeffis
//!
//! Queries the WienMobil Rad station feeds (GBFS-style
//! `station_information` and `station_status`) and joins them into
//! availability records. This is a secondary, best-effort data source:
//! feed failures are swallowed into an empty result instead of being
//! surfaced to callers.

mod client;
mod config;
mod models;

pub use client::{BikeFeedError, BikeShareClient, WienMobilClient};
pub use config::WienMobilConfig;
pub use models::BikeStation;
