//! Reusable UI components for the admin console.
//!
//! DESIGN
//! ======
//! Components are grouped by surface area (layout, feedback, forms, lists)
//! so pages can compose them without duplicating chrome. `detail_panel` is a
//! plain generic function rather than a `#[component]` because it is
//! parameterized by the resource type.

pub mod confirm_modal;
pub mod detail_panel;
pub mod empty_state;
pub mod form_field;
pub mod layout;
pub mod pagination_bar;
pub mod toaster;
