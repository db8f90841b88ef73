//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`crops`, `modal`, `form`, `user`, `ui`) so
//! components depend on small focused models; `flow` is the only module
//! that talks to the crop service.

pub mod crops;
pub mod flow;
pub mod form;
pub mod modal;
pub mod ui;
pub mod user;
