//! Networking modules for the crop service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `service` defines the CRUD seam, `api` implements it over HTTP, `config`
//! locates the service, `error` classifies failures, and `types` defines the
//! wire schema.

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod types;
