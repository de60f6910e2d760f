//! Pantry Endpoints

use gloo_net::http::Request;
use pantry_core::models::{ClearResponse, PantryListResponse, ToggleRequest, ToggleResponse};
use pantry_core::PantryConfig;

use super::{decode_json, ApiError};

// ========================
// Commands
// ========================

pub async fn list_pantry(config: &PantryConfig) -> Result<PantryListResponse, ApiError> {
    let response = Request::get(&config.list_url).send().await?;
    decode_json(response).await
}

/// Failure responses (404 for unknown ingredients) still carry a JSON body,
/// so the body is parsed before the status is consulted.
pub async fn toggle_pantry(
    config: &PantryConfig,
    csrf: &str,
    request: ToggleRequest,
) -> Result<ToggleResponse, ApiError> {
    let body = serde_json::to_string(&request).map_err(ApiError::Encode)?;
    let response = Request::post(&config.toggle_url)
        .header("Content-Type", "application/json")
        .header(&config.csrf_header, csrf)
        .body(body)?
        .send()
        .await?;

    let status = response.status();
    let ok = response.ok();
    let raw = response.text().await?;
    let parsed: ToggleResponse = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(_) if !ok => return Err(ApiError::Status(status)),
        Err(e) => return Err(ApiError::Decode(e)),
    };

    if !parsed.success {
        let reason = parsed
            .error
            .unwrap_or_else(|| format!("status {}", status));
        return Err(ApiError::Rejected(reason));
    }
    Ok(parsed)
}

pub async fn clear_pantry(config: &PantryConfig, csrf: &str) -> Result<ClearResponse, ApiError> {
    let response = Request::post(&config.clear_url)
        .header(&config.csrf_header, csrf)
        .send()
        .await?;
    decode_json(response).await
}
