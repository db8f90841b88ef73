//! The seam between crop state and the remote service.
//!
//! The browser build talks HTTP through `api::HttpCropService`; tests drive
//! the same flows with an in-memory implementation.

use super::error::ApiError;
use super::types::{Crop, CropPayload};

/// Remote CRUD + publish operations over crop records.
///
/// Futures are not `Send`: every implementation runs on the browser's single
/// event loop.
#[allow(async_fn_in_trait)]
pub trait CropService {
    /// All crops in the order the service chooses.
    async fn fetch_all(&self) -> Result<Vec<Crop>, ApiError>;

    /// Create a record; the service assigns its id. A success response may
    /// or may not echo the new record.
    async fn create(&self, payload: &CropPayload) -> Result<Option<Crop>, ApiError>;

    /// Replace every field of an existing record.
    async fn update(&self, id: &str, payload: &CropPayload) -> Result<(), ApiError>;

    async fn remove(&self, id: &str) -> Result<(), ApiError>;

    /// One-way status change; idempotency is the service's concern.
    async fn publish(&self, id: &str) -> Result<(), ApiError>;
}
