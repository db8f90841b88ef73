//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display math
//! from page and component logic to improve reuse and testability.

pub mod alert;
pub mod chart;
pub mod format;
