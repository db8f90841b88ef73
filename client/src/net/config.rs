//! Crop service location.
//!
//! The base URL is fixed at build time through `KRISHI_API_BASE_URL` so the
//! hydrated bundle and the server-rendered shell agree on it without a
//! runtime round-trip.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_API_BASE: &str = "/api";

/// Where the crop service lives, without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

impl ApiConfig {
    /// Build from an explicit base URL. Blank input falls back to `/api`.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_owned()
        } else {
            trimmed.to_owned()
        };
        Self { base_url }
    }

    /// Read `KRISHI_API_BASE_URL` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("KRISHI_API_BASE_URL").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET`/`POST` collection endpoint.
    pub fn crops_url(&self) -> String {
        format!("{}/crops", self.base_url)
    }

    /// `PUT`/`DELETE` endpoint for one record.
    pub fn crop_url(&self, id: &str) -> String {
        format!("{}/crops/{id}", self.base_url)
    }

    pub fn publish_url(&self, id: &str) -> String {
        format!("{}/crops/{id}/publish", self.base_url)
    }

    pub fn user_url(&self) -> String {
        format!("{}/user", self.base_url)
    }
}
