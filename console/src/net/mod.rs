//! Networking: REST helpers for the backend API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request goes to this page's own origin using the relative paths from
//! `wire::Endpoints`; the host server forwards them to the configured backend.

pub mod api;
