//! Alternative-mobility service
//!
//! Thin orchestration over the bike-share client. The underlying data
//! source is best-effort, so this service has no error path: an
//! unreachable or broken feed simply reads as "no stations".

use std::sync::Arc;

use tracing::{debug, instrument};

use integration_wienmobil::{BikeShareClient, BikeStation};

/// Service for bike-share availability listings
pub struct MobilityService {
    bikes: Arc<dyn BikeShareClient>,
}

impl std::fmt::Debug for MobilityService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MobilityService")
            .field("bikes", &"BikeShareClient")
            .finish()
    }
}

impl MobilityService {
    /// Create a new mobility service over a bike-share client
    #[must_use]
    pub fn new(bikes: Arc<dyn BikeShareClient>) -> Self {
        Self { bikes }
    }

    /// Fetch all bike stations with live availability
    #[instrument(skip(self))]
    pub async fn stations(&self) -> Vec<BikeStation> {
        let stations = self.bikes.fetch_bike_stations().await;
        debug!(count = stations.len(), "Bike stations listed");
        stations
    }

    /// Fetch and format the station listing
    pub async fn stations_text(&self) -> String {
        format_stations(&self.stations().await)
    }
}

/// Format a station listing as a multi-line string
#[must_use]
pub fn format_stations(stations: &[BikeStation]) -> String {
    if stations.is_empty() {
        return String::from("No bike-share data available.");
    }

    stations
        .iter()
        .map(BikeStation::format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;

    use super::*;

    mock! {
        Bikes {}

        #[async_trait]
        impl BikeShareClient for Bikes {
            async fn fetch_bike_stations(&self) -> Vec<BikeStation>;
        }
    }

    fn sample_station(id: &str, name: &str, bikes: u32) -> BikeStation {
        BikeStation {
            station_id: id.to_string(),
            name: name.to_string(),
            latitude: 48.2,
            longitude: 16.37,
            bikes_available: bikes,
        }
    }

    #[tokio::test]
    async fn test_stations() {
        let mut mock = MockBikes::new();
        mock.expect_fetch_bike_stations()
            .returning(|| vec![sample_station("S1", "Karlsplatz", 4)]);

        let service = MobilityService::new(Arc::new(mock));
        let stations = service.stations().await;

        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].bikes_available, 4);
    }

    #[tokio::test]
    async fn test_stations_text() {
        let mut mock = MockBikes::new();
        mock.expect_fetch_bike_stations().returning(|| {
            vec![
                sample_station("S1", "Karlsplatz", 4),
                sample_station("S2", "Schwedenplatz", 0),
            ]
        });

        let service = MobilityService::new(Arc::new(mock));
        let text = service.stations_text().await;

        assert!(text.contains("Karlsplatz"));
        assert!(text.contains("Schwedenplatz"));
        assert!(text.contains("0 bikes"));
    }

    #[tokio::test]
    async fn test_stations_text_empty() {
        let mut mock = MockBikes::new();
        mock.expect_fetch_bike_stations().returning(Vec::new);

        let service = MobilityService::new(Arc::new(mock));
        assert_eq!(
            service.stations_text().await,
            "No bike-share data available."
        );
    }

    #[test]
    fn test_format_stations_empty() {
        assert_eq!(format_stations(&[]), "No bike-share data available.");
    }
}
