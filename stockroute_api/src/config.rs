use axum::http::HeaderValue;
use stockroute_maps::{
    directions_api::GOOGLE_DIRECTIONS_API_URL, geocoding_api::GOOGLE_GEOCODING_API_URL,
    route_optimizer::RouteOptimizerParams,
};
use thiserror::Error;

const API_KEY_ENV_VAR: &str = "GOOGLE_MAPS_API_KEY";
const BIND_ADDRESS_ENV_VAR: &str = "STOCKROUTE_BIND_ADDRESS";
const CORS_ORIGIN_ENV_VAR: &str = "STOCKROUTE_CORS_ORIGIN";
const DISPATCH_ORIGIN_ENV_VAR: &str = "STOCKROUTE_DISPATCH_ORIGIN";
const GEOCODING_URL_ENV_VAR: &str = "STOCKROUTE_GEOCODING_URL";
const DIRECTIONS_URL_ENV_VAR: &str = "STOCKROUTE_DIRECTIONS_URL";
const GEOCODE_CONCURRENCY_ENV_VAR: &str = "STOCKROUTE_GEOCODE_CONCURRENCY";

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_DISPATCH_ORIGIN: &str = "1600 Amphitheatre Parkway, Mountain View, CA";
const DEFAULT_GEOCODE_CONCURRENCY: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingApiKey(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub provider_api_key: String,
    pub bind_address: String,
    pub cors_origin: HeaderValue,
    pub dispatch_origin: String,
    pub geocoding_url: String,
    pub directions_url: String,
    pub geocode_concurrency: usize,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider_api_key = lookup(API_KEY_ENV_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey(API_KEY_ENV_VAR))?;

        let or_default = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_owned());

        let cors_origin = or_default(CORS_ORIGIN_ENV_VAR, DEFAULT_CORS_ORIGIN);
        let cors_origin =
            HeaderValue::from_str(&cors_origin).map_err(|_| ConfigError::InvalidValue {
                name: CORS_ORIGIN_ENV_VAR,
                value: cors_origin.clone(),
            })?;

        let geocode_concurrency = match lookup(GEOCODE_CONCURRENCY_ENV_VAR) {
            Some(value) => value
                .parse::<usize>()
                .ok()
                .filter(|&concurrency| concurrency > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: GEOCODE_CONCURRENCY_ENV_VAR,
                    value,
                })?,
            None => DEFAULT_GEOCODE_CONCURRENCY,
        };

        Ok(ApiConfig {
            provider_api_key,
            bind_address: or_default(BIND_ADDRESS_ENV_VAR, DEFAULT_BIND_ADDRESS),
            cors_origin,
            dispatch_origin: or_default(DISPATCH_ORIGIN_ENV_VAR, DEFAULT_DISPATCH_ORIGIN),
            geocoding_url: or_default(GEOCODING_URL_ENV_VAR, GOOGLE_GEOCODING_API_URL),
            directions_url: or_default(DIRECTIONS_URL_ENV_VAR, GOOGLE_DIRECTIONS_API_URL),
            geocode_concurrency,
        })
    }

    pub fn route_optimizer_params(&self) -> RouteOptimizerParams {
        RouteOptimizerParams {
            api_key: self.provider_api_key.clone(),
            geocoding_url: self.geocoding_url.clone(),
            directions_url: self.directions_url.clone(),
            geocode_concurrency: self.geocode_concurrency,
        }
    }
}
