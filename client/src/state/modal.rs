//! Which overlay the crop panel shows: nothing, the form, or a detail card.
//!
//! DESIGN
//! ======
//! One enum instead of separate "show modal" / "viewed crop" / "current id"
//! flags, so the form and the detail card can never be open together and a
//! draft cannot outlive its modal.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::sync::atomic::{AtomicU64, Ordering};

use super::form::{CropField, CropForm, ValidationError};
use crate::net::types::{Crop, CropPayload};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// The draft behind an open form modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub form: CropForm,
    /// Record being edited; `None` means the form creates a new crop.
    pub target_id: Option<String>,
    /// Unique per opened form, so a late save result can tell whether the
    /// draft it came from is still the one on screen.
    pub generation: u64,
}

impl Draft {
    /// A freshly opened form with its own generation.
    pub fn new(form: CropForm, target_id: Option<String>) -> Self {
        Self {
            form,
            target_id,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.target_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_edit() { "Edit Crop" } else { "Add Crop" }
    }
}

/// A validated draft ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub target_id: Option<String>,
    pub payload: CropPayload,
    /// Generation of the draft this was taken from.
    pub generation: u64,
}

/// Overlay state of the crop panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Idle,
    /// Create/edit form is open.
    Editing(Draft),
    /// Read-only detail card for a snapshot of one crop.
    Viewing(Crop),
}

impl ModalState {
    /// Open an empty form for a new crop.
    pub fn start_create(&mut self) {
        *self = Self::Editing(Draft::new(CropForm::default(), None));
    }

    /// Open the form pre-filled from `crop`, targeting its id.
    pub fn start_edit(&mut self, crop: &Crop) {
        *self = Self::Editing(Draft::new(CropForm::from_crop(crop), Some(crop.id.clone())));
    }

    pub fn start_view(&mut self, crop: &Crop) {
        *self = Self::Viewing(crop.clone());
    }

    /// Discard the draft. Only meaningful while editing.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Editing(_)) {
            *self = Self::Idle;
        }
    }

    pub fn close_view(&mut self) {
        if matches!(self, Self::Viewing(_)) {
            *self = Self::Idle;
        }
    }

    /// Update one draft field; ignored when no form is open.
    pub fn set_field(&mut self, field: CropField, value: String) {
        if let Self::Editing(draft) = self {
            draft.form.set(field, value);
        }
    }

    pub fn draft(&self) -> Option<&Draft> {
        match self {
            Self::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn viewing(&self) -> Option<&Crop> {
        match self {
            Self::Viewing(crop) => Some(crop),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Validate the open draft. `None` when no form is open.
    pub fn submission(&self) -> Option<Result<Submission, ValidationError>> {
        let draft = self.draft()?;
        Some(draft.form.to_payload().map(|payload| Submission {
            target_id: draft.target_id.clone(),
            payload,
            generation: draft.generation,
        }))
    }

    /// Close the form after a successful save, unless the user has since
    /// opened a different draft (even another create) or the detail card.
    pub fn finish_submit(&mut self, generation: u64) {
        if let Self::Editing(draft) = self
            && draft.generation == generation
        {
            *self = Self::Idle;
        }
    }
}
