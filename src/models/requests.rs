use serde::{Deserialize, Serialize};

use super::reading::LocationResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetDataRequest {
    /// e.g. "34.05,-118.24;40.71,-74.01"
    #[serde(default)]
    pub coordinates_str: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GetDataResponse {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<LocationResult>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GetDataResponse {
    pub fn success(results: Vec<LocationResult>) -> Self {
        Self {
            success: true,
            results: Some(results),
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            results: None,
            error: Some(message),
        }
    }
}
