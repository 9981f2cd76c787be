use serde::Deserialize;
use tracing::debug;

use crate::{coordinate::Coordinate, error::RoutingError};

pub const GOOGLE_DIRECTIONS_API_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Only `status` is decoded eagerly so that a provider error is reported as
/// such even when the rest of the body does not have the route shape.
#[derive(Deserialize)]
struct DirectionsEnvelope {
    status: String,
    #[serde(default)]
    routes: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    pub start_location: Coordinate,
    pub end_location: Coordinate,
    /// Meters
    pub distance: LegValue,
    /// Seconds
    pub duration: LegValue,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LegValue {
    pub value: u64,
}

pub struct DirectionsClientParams {
    pub api_key: String,
    pub url: String,
}

pub struct DirectionsClient {
    params: DirectionsClientParams,
    client: reqwest::Client,
}

fn malformed(message: impl ToString) -> RoutingError {
    RoutingError::DirectionsMalformedResponse(message.to_string())
}

impl DirectionsClient {
    pub fn new(params: DirectionsClientParams) -> Self {
        Self::with_client(params, reqwest::Client::new())
    }

    pub fn with_client(params: DirectionsClientParams, client: reqwest::Client) -> Self {
        Self { params, client }
    }

    /// Fetches the legs of the first route from `origin` to `destination`
    /// through `waypoints`. Waypoints are passed in the given order and the
    /// provider is not asked to reorder them.
    pub async fn fetch_legs(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        waypoints: &[Coordinate],
    ) -> Result<Vec<DirectionsLeg>, RoutingError> {
        let mut query = vec![
            ("origin", origin.to_string()),
            ("destination", destination.to_string()),
        ];

        if !waypoints.is_empty() {
            let waypoints = waypoints
                .iter()
                .map(Coordinate::to_string)
                .collect::<Vec<_>>()
                .join("|");
            query.push(("waypoints", waypoints));
        }

        query.push(("key", self.params.api_key.clone()));

        let response = self
            .client
            .get(&self.params.url)
            .query(&query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(RoutingError::DirectionsTransport)?;

        let bytes = response
            .bytes()
            .await
            .map_err(RoutingError::DirectionsTransport)?;

        debug!(
            "Directions API response: {}",
            String::from_utf8_lossy(bytes.as_ref())
        );

        let envelope: DirectionsEnvelope = serde_json::from_slice(bytes.as_ref()).map_err(malformed)?;

        if envelope.status != "OK" {
            return Err(RoutingError::DirectionsProvider {
                status: envelope.status,
            });
        }

        let route = envelope
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| malformed("response contains no route"))?;

        let route: DirectionsRoute = serde_json::from_value(route).map_err(malformed)?;

        if route.legs.is_empty() {
            return Err(malformed("route contains no legs"));
        }

        Ok(route.legs)
    }
}
