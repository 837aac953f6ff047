pub mod dashboard;

use campaign_common::ApiError;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use crate::settings;

/// Common GET request handler.
///
/// Dashboard endpoints answer with the bare payload, no envelope.
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error = ApiError::Request(e.to_string());
            log::error!("GET {} - {}", endpoint, error);
            error
        })?;

    if !response.ok() {
        let error = ApiError::Status(response.status());
        log::error!("GET {} - {}", endpoint, error);
        return Err(error);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let error = ApiError::Decode(e.to_string());
            log::error!("GET {} - {}", endpoint, error);
            error
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
