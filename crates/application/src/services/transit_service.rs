//! Realtime transit service
//!
//! Exposes the three entry points the presentation layer works with:
//! formatted realtime text for a stop, the normalized vehicle listing,
//! and the shared-line route lookup between two stops. The service
//! validates input and delegates to the monitor client; it never
//! retries and never softens a monitor error.

use std::sync::Arc;

use tracing::{debug, instrument};

use integration_wienerlinien::{LineDeparture, MonitorClient, RouteResult, match_route};

use crate::error::ApplicationError;

/// Service for realtime stop data and route lookups
pub struct TransitService {
    monitor: Arc<dyn MonitorClient>,
}

impl std::fmt::Debug for TransitService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitService")
            .field("monitor", &"MonitorClient")
            .finish()
    }
}

impl TransitService {
    /// Create a new transit service over a monitor client
    #[must_use]
    pub fn new(monitor: Arc<dyn MonitorClient>) -> Self {
        Self { monitor }
    }

    /// Validate a caller-supplied stop id
    fn validated(stop_id: &str) -> Result<&str, ApplicationError> {
        let stop_id = stop_id.trim();
        if stop_id.is_empty() {
            return Err(ApplicationError::EmptyStopId);
        }
        Ok(stop_id)
    }

    /// Fetch and format the realtime listing for a stop
    ///
    /// An empty snapshot renders the no-data message rather than
    /// failing; monitor errors surface unchanged.
    #[instrument(skip(self))]
    pub async fn realtime_text(&self, stop_id: &str) -> Result<String, ApplicationError> {
        let stop_id = Self::validated(stop_id)?;

        let monitor = self.monitor.fetch_monitor(stop_id).await?;
        debug!(stop = %monitor.title, lines = monitor.lines.len(), "Formatting realtime snapshot");

        Ok(monitor.format_realtime())
    }

    /// List the normalized vehicles currently serving a stop
    #[instrument(skip(self))]
    pub async fn vehicles(&self, stop_id: &str) -> Result<Vec<LineDeparture>, ApplicationError> {
        let stop_id = Self::validated(stop_id)?;

        let monitor = self.monitor.fetch_monitor(stop_id).await?;
        Ok(monitor.lines)
    }

    /// Look up a direct connection between two stops
    #[instrument(skip(self))]
    pub async fn plan_route(
        &self,
        start_stop_id: &str,
        dest_stop_id: &str,
    ) -> Result<RouteResult, ApplicationError> {
        let start_stop_id = Self::validated(start_stop_id)?;
        let dest_stop_id = Self::validated(dest_stop_id)?;

        let result = match_route(self.monitor.as_ref(), start_stop_id, dest_stop_id).await?;
        Ok(result)
    }

    /// Check if the monitor API is reachable
    pub async fn is_available(&self) -> bool {
        self.monitor.is_healthy().await
    }
}

/// Format a normalized vehicle listing as a multi-line string
#[must_use]
pub fn format_vehicles(vehicles: &[LineDeparture]) -> String {
    if vehicles.is_empty() {
        return String::from("No vehicles reported for this stop.");
    }

    vehicles
        .iter()
        .map(|vehicle| format!("- {}", vehicle.format_detail()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    use integration_wienerlinien::{
        Departure, MonitorError, RouteResult, StopMonitor, VehicleKind,
    };

    use super::*;

    mock! {
        Monitor {}

        #[async_trait]
        impl MonitorClient for Monitor {
            async fn fetch_monitor(&self, stop_id: &str) -> Result<StopMonitor, MonitorError>;
            async fn fetch_monitor_raw(&self, stop_id: &str) -> Result<String, MonitorError>;
            async fn is_healthy(&self) -> bool;
        }
    }

    fn sample_monitor(title: &str, line_names: &[&str]) -> StopMonitor {
        StopMonitor {
            title: title.to_string(),
            lines: line_names
                .iter()
                .map(|name| LineDeparture {
                    name: (*name).to_string(),
                    towards: "Endstation".to_string(),
                    kind: VehicleKind::Other,
                    barrier_free: false,
                    departures: vec![Departure {
                        time_planned: "2025-03-07T12:34:00.000+0100".to_string(),
                        countdown: 4,
                    }],
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_realtime_text() {
        let mut mock = MockMonitor::new();
        mock.expect_fetch_monitor()
            .with(eq("4613"))
            .returning(|_| Ok(sample_monitor("Stephansplatz", &["U3"])));

        let service = TransitService::new(Arc::new(mock));
        let text = service.realtime_text("4613").await.unwrap();

        assert!(text.contains("Stephansplatz"));
        assert!(text.contains("U3"));
    }

    #[tokio::test]
    async fn test_realtime_text_trims_stop_id() {
        let mut mock = MockMonitor::new();
        mock.expect_fetch_monitor()
            .with(eq("4613"))
            .returning(|_| Ok(sample_monitor("Stephansplatz", &["U3"])));

        let service = TransitService::new(Arc::new(mock));
        assert!(service.realtime_text(" 4613 ").await.is_ok());
    }

    #[tokio::test]
    async fn test_realtime_text_empty_stop_id() {
        let service = TransitService::new(Arc::new(MockMonitor::new()));
        let err = service.realtime_text("   ").await.unwrap_err();
        assert!(matches!(err, ApplicationError::EmptyStopId));
    }

    #[tokio::test]
    async fn test_realtime_text_no_data() {
        let mut mock = MockMonitor::new();
        mock.expect_fetch_monitor()
            .returning(|_| Ok(sample_monitor("", &[])));

        let service = TransitService::new(Arc::new(mock));
        let text = service.realtime_text("4613").await.unwrap();
        assert!(text.contains("No realtime data available"));
    }

    #[tokio::test]
    async fn test_realtime_text_surfaces_monitor_error() {
        let mut mock = MockMonitor::new();
        mock.expect_fetch_monitor()
            .returning(|_| Err(MonitorError::HttpStatus { code: 404 }));

        let service = TransitService::new(Arc::new(mock));
        let err = service.realtime_text("4613").await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Monitor(MonitorError::HttpStatus { code: 404 })
        ));
    }

    #[tokio::test]
    async fn test_vehicles() {
        let mut mock = MockMonitor::new();
        mock.expect_fetch_monitor()
            .with(eq("4613"))
            .returning(|_| Ok(sample_monitor("Stephansplatz", &["U3", "1A"])));

        let service = TransitService::new(Arc::new(mock));
        let vehicles = service.vehicles("4613").await.unwrap();

        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[0].name, "U3");
        assert_eq!(vehicles[1].name, "1A");
    }

    #[tokio::test]
    async fn test_plan_route_found() {
        let mut mock = MockMonitor::new();
        mock.expect_fetch_monitor()
            .with(eq("4613"))
            .returning(|_| Ok(sample_monitor("Karlsplatz", &["U1", "U4"])));
        mock.expect_fetch_monitor()
            .with(eq("400"))
            .returning(|_| Ok(sample_monitor("Stephansplatz", &["U3", "U1"])));

        let service = TransitService::new(Arc::new(mock));
        let result = service.plan_route("4613", "400").await.unwrap();

        let RouteResult::Found(route) = result else {
            panic!("expected a match");
        };
        assert_eq!(route.line, "U1");
        assert_eq!(route.origin, "Karlsplatz");
        assert_eq!(route.destination, "Stephansplatz");
    }

    #[tokio::test]
    async fn test_plan_route_start_error_skips_destination() {
        let mut mock = MockMonitor::new();
        mock.expect_fetch_monitor()
            .with(eq("4613"))
            .returning(|_| Err(MonitorError::HttpStatus { code: 404 }));
        mock.expect_fetch_monitor().with(eq("400")).times(0);

        let service = TransitService::new(Arc::new(mock));
        let err = service.plan_route("4613", "400").await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Monitor(MonitorError::HttpStatus { code: 404 })
        ));
    }

    #[tokio::test]
    async fn test_plan_route_empty_ids_fetch_nothing() {
        let service = TransitService::new(Arc::new(MockMonitor::new()));
        assert!(matches!(
            service.plan_route("", "400").await.unwrap_err(),
            ApplicationError::EmptyStopId
        ));
        assert!(matches!(
            service.plan_route("4613", "").await.unwrap_err(),
            ApplicationError::EmptyStopId
        ));
    }

    #[tokio::test]
    async fn test_is_available() {
        let mut mock = MockMonitor::new();
        mock.expect_is_healthy().returning(|| true);

        let service = TransitService::new(Arc::new(mock));
        assert!(service.is_available().await);
    }

    #[test]
    fn test_format_vehicles() {
        let monitor = sample_monitor("Stephansplatz", &["U3", "1A"]);
        let text = format_vehicles(&monitor.lines);
        assert!(text.contains("U3"));
        assert!(text.contains("1A"));
        assert!(text.starts_with("- "));
    }

    #[test]
    fn test_format_vehicles_empty() {
        assert_eq!(format_vehicles(&[]), "No vehicles reported for this stop.");
    }
}
