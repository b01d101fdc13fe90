//! Route components binding each admin resource to the shared screens.

use leptos::prelude::*;

use super::entity_form::{entity_add_page, entity_edit_page};
use super::entity_list::entity_list_page;
use crate::resources::{Companies, UserGroups, Users};

#[component]
pub fn CompanyListPage() -> impl IntoView {
    entity_list_page::<Companies>()
}

#[component]
pub fn CompanyAddPage() -> impl IntoView {
    entity_add_page::<Companies>()
}

#[component]
pub fn CompanyEditPage() -> impl IntoView {
    entity_edit_page::<Companies>()
}

#[component]
pub fn UserGroupListPage() -> impl IntoView {
    entity_list_page::<UserGroups>()
}

#[component]
pub fn UserGroupAddPage() -> impl IntoView {
    entity_add_page::<UserGroups>()
}

#[component]
pub fn UserGroupEditPage() -> impl IntoView {
    entity_edit_page::<UserGroups>()
}

#[component]
pub fn UserListPage() -> impl IntoView {
    entity_list_page::<Users>()
}

#[component]
pub fn UserAddPage() -> impl IntoView {
    entity_add_page::<Users>()
}

#[component]
pub fn UserEditPage() -> impl IntoView {
    entity_edit_page::<Users>()
}
