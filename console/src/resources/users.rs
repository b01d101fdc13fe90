use wire::display::short_date;
use wire::schema::{self, non_empty, value};
use wire::{FormValues, Resource, Schema, User, UserSave};

use super::{AdminResource, Column, DetailSection, EmptyCopy, form_values, or_dash};

/// Users can be listed, viewed, added, and edited, never deleted.
#[derive(Clone, Copy, Debug)]
pub struct Users;

impl AdminResource for Users {
    type Record = User;
    type Save = UserSave;

    const RESOURCE: Resource = Resource::Users;
    const TITLE: &'static str = "Users";
    const SINGULAR: &'static str = "User";
    const ROUTE: &'static str = "/users";
    const EMPTY: EmptyCopy = EmptyCopy {
        no_records_title: "No Registered Users",
        no_records_body: "Users you register will be listed here.",
        no_results_title: "No Results Found",
        no_results_body: "No user matches that name. Try another search.",
    };

    fn id(record: &User) -> &str {
        &record.id
    }

    fn columns() -> Vec<Column<User>> {
        vec![
            Column { header: "Name", cell: |u| u.name.clone() },
            Column { header: "Company", cell: |u| or_dash(&u.company_name) },
            Column { header: "User group", cell: |u| or_dash(&u.user_group_name) },
            Column { header: "Email", cell: |u| u.email.clone() },
            Column { header: "Created", cell: |u| short_date(&u.created_at) },
        ]
    }

    fn detail_sections(u: &User) -> Vec<DetailSection> {
        vec![
            DetailSection {
                heading: "User",
                rows: vec![("Name", u.name.clone()), ("Email", or_dash(&u.email)), ("Role", or_dash(&u.role))],
            },
            DetailSection {
                heading: "Membership",
                rows: vec![
                    ("Company", or_dash(&u.company_name)),
                    ("User group", or_dash(&u.user_group_name)),
                    ("Created", short_date(&u.created_at)),
                    ("Updated", short_date(&u.updated_at)),
                ],
            },
        ]
    }

    fn add_schema() -> Schema {
        schema::user_add()
    }

    fn edit_schema() -> Schema {
        schema::user_edit()
    }

    fn add_payload(values: &FormValues) -> UserSave {
        UserSave {
            id: None,
            name: value(values, "name"),
            user_group: non_empty(values, "userGroup"),
            email: non_empty(values, "email"),
            password: values.get("password").cloned(),
            confirmation_password: values.get("confirmationPassword").cloned(),
        }
    }

    fn edit_payload(id: &str, values: &FormValues) -> UserSave {
        UserSave {
            id: Some(id.to_owned()),
            name: value(values, "name"),
            email: non_empty(values, "email"),
            ..UserSave::default()
        }
    }

    fn prefill(u: &User) -> FormValues {
        form_values([("name", u.name.clone()), ("email", u.email.clone())])
    }
}
