use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("Address cannot be empty")]
    EmptyAddress,

    #[error("At least one waypoint is required")]
    NoWaypoints,

    #[error("Failed to geocode address {address}: {source}")]
    GeocodingTransport {
        address: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Geocoding failed for address: {address} (status {status})")]
    GeocodingNoResult { address: String, status: String },

    #[error("Failed to fetch route from directions API: {0}")]
    DirectionsTransport(#[source] reqwest::Error),

    #[error("Error from directions API: {status}")]
    DirectionsProvider { status: String },

    #[error("Unexpected response structure from directions API: {0}")]
    DirectionsMalformedResponse(String),
}

impl RoutingError {
    /// Errors caused by the caller's input rather than by a provider call.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, RoutingError::EmptyAddress | RoutingError::NoWaypoints)
    }
}
