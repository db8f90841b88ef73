//! REST client for the crop service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` carrying the body's `message`
//! when present; transport and decode failures keep their text so the inline
//! error line can show something useful.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
use super::error::ApiError;
use super::service::CropService;
use super::types::{Crop, CropPayload, UserData};

/// `CropService` over HTTP.
#[derive(Clone, Debug, Default)]
pub struct HttpCropService {
    config: ApiConfig,
}

impl HttpCropService {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(feature = "hydrate")]
fn encode(err: gloo_net::Error) -> ApiError {
    ApiError::Encode(err.to_string())
}

impl CropService for HttpCropService {
    async fn fetch_all(&self) -> Result<Vec<Crop>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.crops_url())
                .send()
                .await
                .map_err(network)?;
            let rows = check(resp)
                .await?
                .json::<Vec<serde_json::Value>>()
                .await
                .map_err(decode)?;
            Ok(super::types::decode_crop_list(rows))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn create(&self, payload: &CropPayload) -> Result<Option<Crop>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.crops_url())
                .json(payload)
                .map_err(encode)?
                .send()
                .await
                .map_err(network)?;
            // Any 2xx means the record exists; the echoed body is optional.
            let body = check(resp).await?.text().await.unwrap_or_default();
            Ok(serde_json::from_str::<Crop>(&body).ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    async fn update(&self, id: &str, payload: &CropPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.config.crop_url(id))
                .json(payload)
                .map_err(encode)?
                .send()
                .await
                .map_err(network)?;
            check(resp).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, payload);
            Err(ApiError::Unavailable)
        }
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.config.crop_url(id))
                .send()
                .await
                .map_err(network)?;
            check(resp).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn publish(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.publish_url(id))
                .send()
                .await
                .map_err(network)?;
            check(resp).await.map(drop)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

/// Fetch the signed-in farmer's profile for the dashboard header.
///
/// # Errors
///
/// Returns an `ApiError` if the request fails, the service rejects it, or
/// (outside the browser) always with `ApiError::Unavailable`.
pub async fn fetch_user_data(config: &ApiConfig) -> Result<UserData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.user_url())
            .send()
            .await
            .map_err(network)?;
        check(resp).await?.json::<UserData>().await.map_err(decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}
