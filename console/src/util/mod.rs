//! Utility helpers shared across console modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, abort
//! controllers) from page and component logic so the latter compile and test
//! the same on the server and natively.

pub mod abort;
pub mod auth;
pub mod session_store;
pub mod timer;
