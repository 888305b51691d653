use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    // Open-Meteo air quality endpoint (CO, NO2, O3)
    #[serde(default = "default_air_quality_api_url")]
    pub air_quality_api_url: String,

    // Open-Meteo forecast endpoint, used for current temperature
    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,

    // Per-request timeout applied to every upstream call
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    // Number of coordinates fetched at once; 1 keeps fetching strictly sequential
    #[serde(default = "default_fetch_concurrency")]
    pub fetch_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            air_quality_api_url: default_air_quality_api_url(),
            weather_api_url: default_weather_api_url(),
            upstream_timeout_secs: default_upstream_timeout_secs(),
            fetch_concurrency: default_fetch_concurrency(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_air_quality_api_url() -> String {
    "https://air-quality-api.open-meteo.com/v1/air-quality".to_string()
}

fn default_weather_api_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

fn default_fetch_concurrency() -> usize {
    1
}
