//! Application services

mod mobility_service;
mod transit_service;

pub use mobility_service::{MobilityService, format_stations};
pub use transit_service::{TransitService, format_vehicles};
