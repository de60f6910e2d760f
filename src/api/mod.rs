//! Pantry API Client
//!
//! HTTP bindings to the pantry endpoints.

mod error;
mod pantry;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

pub use error::ApiError;
pub use pantry::*;

/// Read the body of a 2xx response as JSON
async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !response.ok() {
        return Err(ApiError::Status(status));
    }
    let raw = response.text().await?;
    serde_json::from_str(&raw).map_err(ApiError::Decode)
}
