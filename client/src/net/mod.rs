//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the response payloads
//! that are specific to the API rather than the catalog model.

pub mod api;
pub mod types;
