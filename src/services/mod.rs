pub mod health;
pub mod http;

pub use health::{HealthCheck, HttpConnectivityProbe};
pub use http::build_http_client;
