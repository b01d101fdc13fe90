//! Per-entity configuration for the generic admin screens.
//!
//! DESIGN
//! ======
//! Companies, user groups, and users share one list page, one detail panel,
//! and one add/edit form. Everything that differs between them (columns,
//! detail layout, schemas, payload shape, copy) lives behind
//! [`AdminResource`], implemented by a zero-sized marker per entity.


mod companies;
mod user_groups;
mod users;

pub use companies::Companies;
pub use user_groups::UserGroups;
pub use users::Users;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::{FormValues, Resource, Schema};

/// One table column: header text and a cell renderer.
pub struct Column<T: 'static> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

/// A titled block of label/value rows in the detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailSection {
    pub heading: &'static str,
    pub rows: Vec<(&'static str, String)>,
}

/// Empty-state and search copy for a list page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyCopy {
    pub no_records_title: &'static str,
    pub no_records_body: &'static str,
    pub no_results_title: &'static str,
    pub no_results_body: &'static str,
}

pub trait AdminResource: 'static {
    type Record: Clone + PartialEq + Send + Sync + DeserializeOwned + 'static;
    type Save: Serialize + 'static;

    const RESOURCE: Resource;
    /// Plural title, e.g. `Companies`.
    const TITLE: &'static str;
    /// Singular title, e.g. `User Group`.
    const SINGULAR: &'static str;
    /// Client route prefix, e.g. `/userGroups`.
    const ROUTE: &'static str;
    const EMPTY: EmptyCopy;

    fn id(record: &Self::Record) -> &str;
    fn columns() -> Vec<Column<Self::Record>>;
    fn detail_sections(record: &Self::Record) -> Vec<DetailSection>;
    fn add_schema() -> Schema;
    fn edit_schema() -> Schema;
    fn add_payload(values: &FormValues) -> Self::Save;
    fn edit_payload(id: &str, values: &FormValues) -> Self::Save;
    fn prefill(record: &Self::Record) -> FormValues;

    fn can_delete() -> bool {
        Self::RESOURCE.deletable()
    }

    fn list_route() -> String {
        format!("{}/list", Self::ROUTE)
    }

    fn add_route() -> String {
        format!("{}/add", Self::ROUTE)
    }

    fn edit_route(id: &str) -> String {
        format!("{}/edit/{}", Self::ROUTE, wire::endpoints::encode_segment(id))
    }

    fn register_label() -> String {
        format!("Register {}", Self::SINGULAR)
    }

    fn delete_failed_message() -> String {
        format!("Error deleting {}.", Self::SINGULAR.to_lowercase())
    }
}

fn form_values<const N: usize>(pairs: [(&str, String); N]) -> FormValues {
    pairs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() { "-".to_owned() } else { value.to_owned() }
}
