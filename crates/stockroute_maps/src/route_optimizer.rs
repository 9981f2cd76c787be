use futures::{StreamExt, TryStreamExt, stream};
use tracing::info;

use crate::{
    coordinate::Coordinate,
    directions_api::{DirectionsClient, DirectionsClientParams},
    error::RoutingError,
    geocoding_api::{GeocodingClient, GeocodingClientParams},
    route_summary::RouteSummary,
};

pub struct RouteOptimizerParams {
    pub api_key: String,
    pub geocoding_url: String,
    pub directions_url: String,
    /// Maximum number of waypoints geocoded at the same time
    pub geocode_concurrency: usize,
}

/// Geocodes a start address and its waypoints, then asks the directions
/// provider for a round trip from the start through every waypoint.
pub struct RouteOptimizer {
    geocoding_client: GeocodingClient,
    directions_client: DirectionsClient,
    geocode_concurrency: usize,
}

impl RouteOptimizer {
    pub fn new(params: RouteOptimizerParams) -> Self {
        let client = reqwest::Client::new();

        Self {
            geocoding_client: GeocodingClient::with_client(
                GeocodingClientParams {
                    api_key: params.api_key.clone(),
                    url: params.geocoding_url,
                },
                client.clone(),
            ),
            directions_client: DirectionsClient::with_client(
                DirectionsClientParams {
                    api_key: params.api_key,
                    url: params.directions_url,
                },
                client,
            ),
            geocode_concurrency: params.geocode_concurrency.max(1),
        }
    }

    /// Any failure aborts the whole computation, no partial route is returned.
    pub async fn optimize_route<S>(&self, start: &str, points: &[S]) -> Result<RouteSummary, RoutingError>
    where
        S: AsRef<str>,
    {
        if points.is_empty() {
            return Err(RoutingError::NoWaypoints);
        }

        let start_coordinate = self.geocoding_client.geocode(start).await?;

        // `buffered` yields in input order, so the first error seen is the
        // first failing waypoint.
        let geocode_futures: Vec<_> = points
            .iter()
            .map(|point| self.geocoding_client.geocode(point.as_ref()))
            .collect();
        let waypoints: Vec<Coordinate> = stream::iter(geocode_futures)
            .buffered(self.geocode_concurrency)
            .try_collect()
            .await?;

        let legs = self
            .directions_client
            .fetch_legs(start_coordinate, start_coordinate, &waypoints)
            .await?;

        let summary = RouteSummary::from_legs(&legs)?;

        info!(
            "Computed route from '{}' through {} waypoints: {} legs, {} km, {} h",
            start,
            points.len(),
            summary.leg_count(),
            summary.distance_km,
            summary.duration_hr
        );

        Ok(summary)
    }
}
