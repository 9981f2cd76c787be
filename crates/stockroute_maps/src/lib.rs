pub mod coordinate;
pub mod directions_api;
pub mod error;
pub mod geocoding_api;
pub mod route_optimizer;
pub mod route_summary;
