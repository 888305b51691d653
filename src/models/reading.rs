use serde::{Serialize, Serializer};

use super::coordinate::Coordinate;

/// Current conditions for one coordinate, each reading rendered as `"<value> <unit>"`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationReading {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    #[serde(rename = "co")]
    pub carbon_monoxide: String,
    #[serde(rename = "no2")]
    pub nitrogen_dioxide: String,
    #[serde(rename = "o3")]
    pub ozone: String,
    #[serde(rename = "temp")]
    pub temperature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFailure {
    pub latitude: f64,
    pub longitude: f64,
    pub error: String,
}

/// Outcome of fetching one coordinate. Serialized flat with a boolean `success` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationResult {
    Success(LocationReading),
    Failure(LocationFailure),
}

impl LocationResult {
    pub fn failure(coordinate: Coordinate, error: String) -> Self {
        Self::Failure(LocationFailure {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            error,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The coordinate this result was produced for
    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::Success(reading) => Coordinate::new(reading.latitude, reading.longitude),
            Self::Failure(failure) => Coordinate::new(failure.latitude, failure.longitude),
        }
    }
}

impl Serialize for LocationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            success: bool,
            #[serde(flatten)]
            body: &'a T,
        }

        match self {
            Self::Success(reading) => Tagged {
                success: true,
                body: reading,
            }
            .serialize(serializer),
            Self::Failure(failure) => Tagged {
                success: false,
                body: failure,
            }
            .serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_flat_with_short_field_names() {
        let result = LocationResult::Success(LocationReading {
            latitude: 34.05,
            longitude: -118.24,
            timezone: "America/Los_Angeles".to_string(),
            carbon_monoxide: "150.0 μg/m³".to_string(),
            nitrogen_dioxide: "12.3 μg/m³".to_string(),
            ozone: "80.1 μg/m³".to_string(),
            temperature: "71.2 °F".to_string(),
        });

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": true,
                "latitude": 34.05,
                "longitude": -118.24,
                "timezone": "America/Los_Angeles",
                "co": "150.0 μg/m³",
                "no2": "12.3 μg/m³",
                "o3": "80.1 μg/m³",
                "temp": "71.2 °F"
            })
        );
    }

    #[test]
    fn test_failure_keeps_its_coordinate() {
        let result = LocationResult::failure(
            Coordinate::new(40.71, -74.01),
            "Failed to fetch data: boom".to_string(),
        );

        assert!(!result.is_success());
        assert_eq!(result.coordinate(), Coordinate::new(40.71, -74.01));
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": false,
                "latitude": 40.71,
                "longitude": -74.01,
                "error": "Failed to fetch data: boom"
            })
        );
    }
}
