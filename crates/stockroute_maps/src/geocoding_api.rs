use serde::Deserialize;
use tracing::debug;

use crate::{coordinate::Coordinate, error::RoutingError};

pub const GOOGLE_GEOCODING_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Deserialize)]
struct GeocodingResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Deserialize)]
struct GeocodingResult {
    geometry: GeocodingGeometry,
}

#[derive(Deserialize)]
struct GeocodingGeometry {
    location: Coordinate,
}

pub struct GeocodingClientParams {
    pub api_key: String,
    pub url: String,
}

pub struct GeocodingClient {
    params: GeocodingClientParams,
    client: reqwest::Client,
}

impl GeocodingClient {
    pub fn new(params: GeocodingClientParams) -> Self {
        Self::with_client(params, reqwest::Client::new())
    }

    pub fn with_client(params: GeocodingClientParams, client: reqwest::Client) -> Self {
        Self { params, client }
    }

    /// Resolves a free-text address to the location of the provider's first
    /// result. One request per call, nothing is cached.
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, RoutingError> {
        if address.trim().is_empty() {
            return Err(RoutingError::EmptyAddress);
        }

        let transport_error = |source| RoutingError::GeocodingTransport {
            address: address.to_owned(),
            source,
        };

        let response = self
            .client
            .get(&self.params.url)
            .query(&[("address", address), ("key", self.params.api_key.as_str())])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(transport_error)?;

        let body: GeocodingResponse = response.json().await.map_err(transport_error)?;

        if body.status != "OK" {
            return Err(RoutingError::GeocodingNoResult {
                address: address.to_owned(),
                status: body.status,
            });
        }

        let Some(result) = body.results.into_iter().next() else {
            return Err(RoutingError::GeocodingNoResult {
                address: address.to_owned(),
                status: body.status,
            });
        };

        let coordinate = result.geometry.location;
        debug!("Geocoded '{}' to {}", address, coordinate);

        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    fn create_client(server: &MockServer) -> GeocodingClient {
        GeocodingClient::new(GeocodingClientParams {
            api_key: String::from("test-key"),
            url: server.url("/geocode/json"),
        })
    }

    #[tokio::test]
    async fn test_geocode_returns_first_result() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/geocode/json")
                    .query_param("address", "Grand Place, Brussels")
                    .query_param("key", "test-key");
                then.status(200).json_body(json!({
                    "status": "OK",
                    "results": [
                        { "geometry": { "location": { "lat": 50.8467, "lng": 4.3525 } } },
                        { "geometry": { "location": { "lat": 1.0, "lng": 2.0 } } }
                    ]
                }));
            })
            .await;

        let coordinate = create_client(&server)
            .geocode("Grand Place, Brussels")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(coordinate, Coordinate::new(50.8467, 4.3525));

        let text = coordinate.to_string();
        let (lat, lng) = text.split_once(',').unwrap();
        assert!(lat.parse::<f64>().is_ok());
        assert!(lng.parse::<f64>().is_ok());
    }

    #[tokio::test]
    async fn test_geocode_zero_results() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode/json");
                then.status(200)
                    .json_body(json!({ "status": "ZERO_RESULTS", "results": [] }));
            })
            .await;

        let error = create_client(&server)
            .geocode("Nowhere at all")
            .await
            .unwrap_err();

        match error {
            RoutingError::GeocodingNoResult { address, status } => {
                assert_eq!(address, "Nowhere at all");
                assert_eq!(status, "ZERO_RESULTS");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_geocode_ok_without_results() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode/json");
                then.status(200).json_body(json!({ "status": "OK", "results": [] }));
            })
            .await;

        let error = create_client(&server).geocode("Somewhere").await.unwrap_err();

        assert!(matches!(error, RoutingError::GeocodingNoResult { .. }));
    }

    #[tokio::test]
    async fn test_geocode_http_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode/json");
                then.status(503).body("unavailable");
            })
            .await;

        let error = create_client(&server).geocode("Somewhere").await.unwrap_err();

        assert!(matches!(error, RoutingError::GeocodingTransport { .. }));
    }

    #[tokio::test]
    async fn test_geocode_empty_address_skips_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/geocode/json");
                then.status(200).json_body(json!({ "status": "OK", "results": [] }));
            })
            .await;

        let error = create_client(&server).geocode("   ").await.unwrap_err();

        assert!(matches!(error, RoutingError::EmptyAddress));
        mock.assert_hits_async(0).await;
    }
}
