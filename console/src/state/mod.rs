//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`, `list`, `form`, `request`)
//! so pages hold small plain models inside `RwSignal`s and the transition
//! logic stays testable without a browser.

pub mod form;
pub mod list;
pub mod request;
pub mod session;
pub mod toast;
