/// A single latitude/longitude pair supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateParseError {
    #[error("expected `latitude,longitude` but found {found} value(s) in {pair:?}")]
    WrongArity { pair: String, found: usize },

    #[error("could not convert {token:?} to a number: {source}")]
    InvalidNumber {
        token: String,
        source: std::num::ParseFloatError,
    },

    #[error("{token:?} is not a finite number")]
    NonFinite { token: String },
}
