//! Routed pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per screen. The three admin resources share `entity_list` and
//! `entity_form`; `entities` binds them to concrete route components.

pub mod api_testing;
pub mod dashboard;
pub mod entities;
pub mod entity_form;
pub mod entity_list;
pub mod forgot;
pub mod home;
pub mod loading;
pub mod login;
pub mod reset_password;
pub mod root;
