use anyhow::Result;
use futures::stream::{self, StreamExt};

use crate::config::Config;
use crate::libraries::reading_format::format_reading;
use crate::models::{Coordinate, LocationReading, LocationResult};
use crate::services::open_meteo::{
    OpenMeteoClient, CARBON_MONOXIDE, NITROGEN_DIOXIDE, OZONE, TEMPERATURE,
};

const UNKNOWN_TIMEZONE: &str = "N/A";

/// Fetches and merges air quality and temperature readings per coordinate
#[derive(Debug, Clone)]
pub struct LocationFetcher {
    client: OpenMeteoClient,
    concurrency: usize,
}

impl LocationFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: OpenMeteoClient::new(config)?,
            concurrency: config.fetch_concurrency.max(1),
        })
    }

    /// Fetch every coordinate. Output order always matches input order,
    /// whatever the configured concurrency.
    pub async fn fetch_all(&self, coordinates: &[Coordinate]) -> Vec<LocationResult> {
        stream::iter(coordinates.iter().copied())
            .map(|coordinate| self.fetch(coordinate))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// Fetch one coordinate. Never fails; upstream errors become a failure record.
    pub async fn fetch(&self, coordinate: Coordinate) -> LocationResult {
        match self.fetch_reading(coordinate).await {
            Ok(reading) => LocationResult::Success(reading),
            Err(e) => {
                tracing::warn!("Failed to fetch data for {}: {:#}", coordinate, e);
                LocationResult::failure(coordinate, format!("Failed to fetch data: {:#}", e))
            }
        }
    }

    async fn fetch_reading(&self, coordinate: Coordinate) -> Result<LocationReading> {
        let air = self.client.current_air_quality(coordinate).await?;
        let weather = self.client.current_temperature(coordinate).await?;

        Ok(LocationReading {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            timezone: air.timezone.unwrap_or_else(|| UNKNOWN_TIMEZONE.to_string()),
            carbon_monoxide: format_reading(&air.current, &air.current_units, CARBON_MONOXIDE),
            nitrogen_dioxide: format_reading(&air.current, &air.current_units, NITROGEN_DIOXIDE),
            ozone: format_reading(&air.current, &air.current_units, OZONE),
            temperature: format_reading(&weather.current, &weather.current_units, TEMPERATURE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> Config {
        // Port 9 (discard) on loopback refuses connections on test machines
        Config {
            air_quality_api_url: "http://127.0.0.1:9/air-quality".to_string(),
            weather_api_url: "http://127.0.0.1:9/forecast".to_string(),
            upstream_timeout_secs: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = Config {
            fetch_concurrency: 0,
            ..Default::default()
        };
        let fetcher = LocationFetcher::new(&config).unwrap();
        assert_eq!(fetcher.concurrency, 1);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_becomes_failure_record() {
        let fetcher = LocationFetcher::new(&unreachable_config()).unwrap();
        let coordinate = Coordinate::new(34.05, -118.24);

        let result = fetcher.fetch(coordinate).await;

        match result {
            LocationResult::Failure(failure) => {
                assert_eq!(failure.latitude, 34.05);
                assert_eq!(failure.longitude, -118.24);
                assert!(failure.error.starts_with("Failed to fetch data: "));
                assert!(failure
                    .error
                    .contains("Open-Meteo air quality request failed"));
                assert!(!failure.error.contains('\n'));
            }
            LocationResult::Success(_) => panic!("expected a failure record"),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_of_nothing() {
        let fetcher = LocationFetcher::new(&unreachable_config()).unwrap();
        assert!(fetcher.fetch_all(&[]).await.is_empty());
    }
}
