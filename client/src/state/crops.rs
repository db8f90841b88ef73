//! Crop list state for the management table.
//!
//! DESIGN
//! ======
//! The list is a cache of the last successful fetch and is replaced wholesale
//! after every successful mutation. Fetch and each mutation kind keep their
//! own error slot so one failure never hides another; a slot's error is only
//! cleared when that same operation is attempted again.

#[cfg(test)]
#[path = "crops_test.rs"]
mod crops_test;

use crate::net::error::ApiError;
use crate::net::types::Crop;

/// Mutating operations the table and form can issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mutation {
    Add,
    Update,
    Remove,
    Publish,
}

impl Mutation {
    /// Prefix for the inline error line.
    pub fn error_prefix(self) -> &'static str {
        match self {
            Self::Add => "Error adding crop details",
            Self::Update => "Error updating crop details",
            Self::Remove => "Error removing crop",
            Self::Publish => "Error publishing crop",
        }
    }
}

/// In-flight count and last error for one mutation kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MutationStatus {
    /// Overlapping calls of this kind still outstanding.
    pub in_flight: u32,
    pub error: Option<String>,
}

impl MutationStatus {
    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }
}

/// Server-known crops plus per-operation request state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CropsState {
    pub items: Vec<Crop>,
    /// Set once the first fetch resolves, successfully or not.
    pub loaded: bool,
    pub fetching: bool,
    pub fetch_error: Option<String>,
    pub add: MutationStatus,
    pub update: MutationStatus,
    pub remove: MutationStatus,
    pub publish: MutationStatus,
}

impl CropsState {
    /// True only while the very first fetch is outstanding.
    pub fn is_initial_loading(&self) -> bool {
        !self.loaded
    }

    pub fn begin_fetch(&mut self) {
        self.fetching = true;
        self.fetch_error = None;
    }

    /// Record a fetch result. Failures keep the previous items.
    pub fn finish_fetch(&mut self, result: Result<Vec<Crop>, ApiError>) {
        self.fetching = false;
        self.loaded = true;
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.fetch_error = Some(err.user_message()),
        }
    }

    pub fn status(&self, mutation: Mutation) -> &MutationStatus {
        match mutation {
            Mutation::Add => &self.add,
            Mutation::Update => &self.update,
            Mutation::Remove => &self.remove,
            Mutation::Publish => &self.publish,
        }
    }

    fn status_mut(&mut self, mutation: Mutation) -> &mut MutationStatus {
        match mutation {
            Mutation::Add => &mut self.add,
            Mutation::Update => &mut self.update,
            Mutation::Remove => &mut self.remove,
            Mutation::Publish => &mut self.publish,
        }
    }

    /// A new attempt supersedes the previous error of the same kind.
    pub fn begin(&mut self, mutation: Mutation) {
        let status = self.status_mut(mutation);
        status.in_flight += 1;
        status.error = None;
    }

    pub fn finish(&mut self, mutation: Mutation, error: Option<&ApiError>) {
        let status = self.status_mut(mutation);
        status.in_flight = status.in_flight.saturating_sub(1);
        if let Some(err) = error {
            status.error = Some(err.user_message());
        }
    }

    /// Inline error lines in display order: fetch first, then mutations.
    pub fn error_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(err) = &self.fetch_error {
            lines.push(format!("Error fetching crops: {err}"));
        }
        for mutation in [Mutation::Add, Mutation::Update, Mutation::Remove, Mutation::Publish] {
            if let Some(err) = &self.status(mutation).error {
                lines.push(format!("{}: {err}", mutation.error_prefix()));
            }
        }
        lines
    }
}
