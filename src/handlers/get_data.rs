use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{
    libraries::coordinate_parser::parse_coordinates,
    models::{GetDataRequest, GetDataResponse},
    services::location_fetcher::LocationFetcher,
};

const INVALID_INPUT_PREFIX: &str = "Invalid coordinate format or processing error";

/// Fetch current air quality and temperature for every coordinate in the request
///
/// A malformed coordinate string (or body) fails the whole request with 400.
/// Once parsing succeeds the response is always 200, and each point reports its
/// own success or failure in input order.
pub async fn get_data(
    State(fetcher): State<Arc<LocationFetcher>>,
    payload: Result<Json<GetDataRequest>, JsonRejection>,
) -> (StatusCode, Json<GetDataResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected get_data body: {}", rejection.body_text());
            return bad_request(rejection.body_text());
        }
    };

    debug!("Parsing coordinates: {:?}", request.coordinates_str);

    let coordinates = match parse_coordinates(&request.coordinates_str) {
        Ok(coordinates) => coordinates,
        Err(e) => {
            warn!("Invalid coordinate string {:?}: {}", request.coordinates_str, e);
            return bad_request(e.to_string());
        }
    };

    info!("Fetching data for {} location(s)", coordinates.len());

    let results = fetcher.fetch_all(&coordinates).await;

    let failed: Vec<_> = results
        .iter()
        .filter(|r| !r.is_success())
        .map(|r| r.coordinate().to_string())
        .collect();
    if !failed.is_empty() {
        warn!(
            "{} of {} location(s) failed: {}",
            failed.len(),
            results.len(),
            failed.join(", ")
        );
    }

    (StatusCode::OK, Json(GetDataResponse::success(results)))
}

fn bad_request(detail: String) -> (StatusCode, Json<GetDataResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(GetDataResponse::error(format!(
            "{}: {}",
            INVALID_INPUT_PREFIX, detail
        ))),
    )
}
