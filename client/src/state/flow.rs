//! Request orchestration between the crop stores and the crop service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these from `spawn_local` handlers. Each function reads
//! what it needs from a `CropStore`, awaits the service, and writes the
//! outcome back as state. Nothing here returns a transport error to the
//! caller; failures end up in `CropsState` and the log.
//!
//! CONCURRENCY
//! ===========
//! Calls are neither queued nor deduplicated. Two saves of the same record in
//! flight race at the service and the last response wins; each successful
//! mutation triggers its own full refresh.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use leptos::prelude::*;

use super::crops::{CropsState, Mutation};
use super::form::ValidationError;
use super::modal::ModalState;
use crate::net::error::ApiError;
use crate::net::service::CropService;

/// Read/write access to the crop panel's state.
pub trait CropStore {
    /// Current modal state, read without subscribing.
    fn modal(&self) -> ModalState;

    fn update_modal(&self, f: impl FnOnce(&mut ModalState));

    fn update_crops(&self, f: impl FnOnce(&mut CropsState));
}

/// The reactive store components share through context.
#[derive(Clone, Copy, Debug)]
pub struct SignalCropStore {
    pub crops: RwSignal<CropsState>,
    pub modal: RwSignal<ModalState>,
}

impl SignalCropStore {
    pub fn new() -> Self {
        Self {
            crops: RwSignal::new(CropsState::default()),
            modal: RwSignal::new(ModalState::default()),
        }
    }
}

impl Default for SignalCropStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CropStore for SignalCropStore {
    fn modal(&self) -> ModalState {
        self.modal.get_untracked()
    }

    fn update_modal(&self, f: impl FnOnce(&mut ModalState)) {
        self.modal.update(f);
    }

    fn update_crops(&self, f: impl FnOnce(&mut CropsState)) {
        self.crops.update(f);
    }
}

/// Result of a submit attempt, for the caller's UI feedback.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Saved; the form is closed and the list refreshed.
    Saved,
    /// Blocked before any request.
    Invalid(ValidationError),
    /// The service rejected the save; the form stays open.
    Failed(ApiError),
    /// No form was open.
    NotEditing,
}

/// Re-fetch the whole crop list.
pub async fn refresh<S: CropService>(service: &S, store: &impl CropStore) {
    store.update_crops(CropsState::begin_fetch);
    let result = service.fetch_all().await;
    match &result {
        Ok(items) => log::debug!("fetched {} crops", items.len()),
        Err(err) => log::error!("failed to fetch crops: {err}"),
    }
    store.update_crops(|s| s.finish_fetch(result));
}

/// Validate the open draft and create or update it.
pub async fn submit<S: CropService>(service: &S, store: &impl CropStore) -> SubmitOutcome {
    let submission = match store.modal().submission() {
        None => return SubmitOutcome::NotEditing,
        Some(Err(err)) => {
            log::warn!("crop form rejected: {err}");
            return SubmitOutcome::Invalid(err);
        }
        Some(Ok(submission)) => submission,
    };

    let mutation = if submission.target_id.is_some() {
        Mutation::Update
    } else {
        Mutation::Add
    };
    log::debug!("submitting crop ({mutation:?}): {:?}", submission.payload);

    store.update_crops(|s| s.begin(mutation));
    let result = match submission.target_id.as_deref() {
        Some(id) => service.update(id, &submission.payload).await,
        None => service.create(&submission.payload).await.map(|created| {
            if let Some(crop) = created {
                log::debug!("created crop {}", crop.id);
            }
        }),
    };
    store.update_crops(|s| s.finish(mutation, result.as_ref().err()));

    match result {
        Ok(()) => {
            store.update_modal(|m| m.finish_submit(submission.generation));
            refresh(service, store).await;
            SubmitOutcome::Saved
        }
        Err(err) => {
            log::error!("failed to save crop details: {err}");
            SubmitOutcome::Failed(err)
        }
    }
}

/// Delete a crop, then refresh on success.
pub async fn remove<S: CropService>(service: &S, store: &impl CropStore, id: &str) {
    store.update_crops(|s| s.begin(Mutation::Remove));
    let result = service.remove(id).await;
    settle_row_mutation(service, store, Mutation::Remove, id, result).await;
}

/// Publish a crop, then refresh on success.
pub async fn publish<S: CropService>(service: &S, store: &impl CropStore, id: &str) {
    store.update_crops(|s| s.begin(Mutation::Publish));
    let result = service.publish(id).await;
    settle_row_mutation(service, store, Mutation::Publish, id, result).await;
}

async fn settle_row_mutation<S: CropService>(
    service: &S,
    store: &impl CropStore,
    mutation: Mutation,
    id: &str,
    result: Result<(), ApiError>,
) {
    store.update_crops(|s| s.finish(mutation, result.as_ref().err()));
    match result {
        Ok(()) => refresh(service, store).await,
        Err(err) => log::error!("{mutation:?} failed for crop {id}: {err}"),
    }
}
