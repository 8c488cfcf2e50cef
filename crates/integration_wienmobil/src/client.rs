//! WienMobil Rad bike-share client
//!
//! Fetches the two GBFS-style feeds (`station_information.json` and
//! `station_status.json`) and joins them by station id into
//! availability records.
//!
//! This data source is best-effort by contract: every feed failure,
//! transport or parse alike, is logged and swallowed into an empty
//! result. Callers never see an error from [`fetch_bike_stations`];
//! this is deliberately different from the monitor client's fail-fast
//! behavior.
//!
//! [`fetch_bike_stations`]: BikeShareClient::fetch_bike_stations

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::config::WienMobilConfig;
use crate::models::BikeStation;

/// Errors of the bike-share feeds
///
/// Only client construction surfaces these; feed failures during a
/// fetch are logged and swallowed into an empty station list.
#[derive(Debug, Error)]
pub enum BikeFeedError {
    /// HTTP client could not be initialized
    #[error("client initialization failed: {0}")]
    ClientInit(String),

    /// Connection to a feed failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// A feed answered with a non-success status
    #[error("feed request failed with HTTP {0}")]
    Status(u16),

    /// A feed body did not parse as the expected shape
    #[error("feed parse error: {0}")]
    Parse(String),
}

/// Trait for bike-share availability clients
#[async_trait]
pub trait BikeShareClient: Send + Sync {
    /// Fetch all stations with their live availability
    ///
    /// Never fails the caller: any problem with either feed yields an
    /// empty vector.
    async fn fetch_bike_stations(&self) -> Vec<BikeStation>;
}

/// HTTP client for the WienMobil Rad feeds
#[derive(Debug)]
pub struct WienMobilClient {
    client: Client,
    config: WienMobilConfig,
}

impl WienMobilClient {
    /// Create a new bike-share client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &WienMobilConfig) -> Result<Self, BikeFeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("libreoeffis/0.1")
            .build()
            .map_err(|e| BikeFeedError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    async fn fetch_feed<T>(&self, feed: &str) -> Result<Vec<T>, BikeFeedError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{feed}", self.config.base_url);
        debug!(?url, "Fetching bike-share feed");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BikeFeedError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BikeFeedError::Status(status.as_u16()));
        }

        let body: RawFeed<T> = response
            .json()
            .await
            .map_err(|e| BikeFeedError::Parse(e.to_string()))?;

        Ok(body.data.stations)
    }

    async fn fetch_joined(&self) -> Result<Vec<BikeStation>, BikeFeedError> {
        let information: Vec<RawStationInformation> =
            self.fetch_feed("station_information.json").await?;
        let status: Vec<RawStationStatus> = self.fetch_feed("station_status.json").await?;

        Ok(join_stations(information, &status))
    }
}

#[async_trait]
impl BikeShareClient for WienMobilClient {
    #[instrument(skip(self))]
    async fn fetch_bike_stations(&self) -> Vec<BikeStation> {
        match self.fetch_joined().await {
            Ok(stations) => {
                debug!(count = stations.len(), "Bike stations fetched");
                stations
            }
            Err(e) => {
                warn!(error = %e, "Bike-share fetch failed, returning no stations");
                Vec::new()
            }
        }
    }
}

/// Join the information feed with the status feed by station id
///
/// The status feed is scanned linearly per station; the datasets are
/// tens to low hundreds of entries. A station without a status entry
/// reports zero available bikes.
fn join_stations(
    information: Vec<RawStationInformation>,
    status: &[RawStationStatus],
) -> Vec<BikeStation> {
    information
        .into_iter()
        .map(|info| {
            let bikes_available = status
                .iter()
                .find(|s| s.station_id == info.station_id)
                .map_or(0, |s| s.num_bikes_available);

            BikeStation {
                station_id: info.station_id,
                name: info.name,
                latitude: info.lat,
                longitude: info.lon,
                bikes_available,
            }
        })
        .collect()
}

// --- Raw feed types for deserialization ---

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawFeed<T> {
    data: RawFeedData<T>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawFeedData<T> {
    #[serde(default)]
    stations: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct RawStationInformation {
    station_id: String,
    name: String,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct RawStationStatus {
    station_id: String,
    num_bikes_available: u32,
}
