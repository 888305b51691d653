pub mod coordinate;
pub mod reading;
pub mod requests;

// Re-export commonly used types
pub use coordinate::{Coordinate, CoordinateParseError};
pub use reading::{LocationFailure, LocationReading, LocationResult};
pub use requests::{GetDataRequest, GetDataResponse};
