//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and the crop management surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod crop_detail;
pub mod crop_form_modal;
pub mod crop_panel;
pub mod crop_table;
pub mod revenue_chart;
pub mod sidebar;
pub mod summary;
