use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;
use std::time::Duration;

use crate::config::Config;
use crate::models::Coordinate;

pub const CARBON_MONOXIDE: &str = "carbon_monoxide";
pub const NITROGEN_DIOXIDE: &str = "nitrogen_dioxide";
pub const OZONE: &str = "ozone";
pub const TEMPERATURE: &str = "temperature_2m";

/// Shape shared by both endpoints. `current` and `current_units` are required;
/// a body without them is treated as a failed call.
#[derive(Debug, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub timezone: Option<String>,
    pub current: Map<String, Value>,
    pub current_units: Map<String, Value>,
}

#[derive(Debug, Serialize)]
struct AirQualityQuery {
    latitude: f64,
    longitude: f64,
    current: String,
    domains: &'static str,
    timezone: &'static str,
}

#[derive(Debug, Serialize)]
struct TemperatureQuery {
    latitude: f64,
    longitude: f64,
    current: &'static str,
    temperature_unit: &'static str,
    timezone: &'static str,
}

/// Thin client over the Open-Meteo air quality and forecast endpoints
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
    air_quality_url: String,
    weather_url: String,
}

impl OpenMeteoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            air_quality_url: config.air_quality_api_url.clone(),
            weather_url: config.weather_api_url.clone(),
        })
    }

    /// Current CO, NO2 and O3 for a coordinate, from the CAMS global domain
    pub async fn current_air_quality(&self, coordinate: Coordinate) -> Result<CurrentConditions> {
        let query = AirQualityQuery {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            current: [CARBON_MONOXIDE, NITROGEN_DIOXIDE, OZONE].join(","),
            domains: "cams_global",
            timezone: "auto",
        };

        self.get_current("air quality", &self.air_quality_url, &query)
            .await
    }

    /// Current temperature in Fahrenheit for a coordinate
    pub async fn current_temperature(&self, coordinate: Coordinate) -> Result<CurrentConditions> {
        let query = TemperatureQuery {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            current: TEMPERATURE,
            temperature_unit: "fahrenheit",
            timezone: "auto",
        };

        self.get_current("temperature", &self.weather_url, &query)
            .await
    }

    async fn get_current<Q: Serialize>(
        &self,
        label: &str,
        url: &str,
        query: &Q,
    ) -> Result<CurrentConditions> {
        tracing::info!("🌍 Querying Open-Meteo {} API at {}", label, url);

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                // Log the full chain; the returned error keeps it on one line via `{:#}`
                let mut log_msg = format!("Open-Meteo {} request failed: {}", label, e);
                let mut source = e.source();
                while let Some(err) = source {
                    log_msg.push_str(&format!("\n  Caused by: {}", err));
                    source = err.source();
                }
                tracing::warn!("{}", log_msg);
                anyhow::Error::from(e).context(format!("Open-Meteo {} request failed", label))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Open-Meteo {} API returned HTTP {}", label, status);
            return Err(anyhow!("Open-Meteo {} API returned error: {}", label, status));
        }

        tracing::debug!("✅ Open-Meteo {} API responded successfully", label);

        response
            .json::<CurrentConditions>()
            .await
            .with_context(|| format!("Failed to parse Open-Meteo {} response", label))
    }
}
