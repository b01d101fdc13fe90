use wire::display::short_date;
use wire::schema::{self, value};
use wire::{FormValues, Resource, Schema, UserGroup, UserGroupSave};

use super::{AdminResource, Column, DetailSection, EmptyCopy, form_values, or_dash};

#[derive(Clone, Copy, Debug)]
pub struct UserGroups;

impl AdminResource for UserGroups {
    type Record = UserGroup;
    type Save = UserGroupSave;

    const RESOURCE: Resource = Resource::UserGroups;
    const TITLE: &'static str = "User Groups";
    const SINGULAR: &'static str = "User Group";
    const ROUTE: &'static str = "/userGroups";
    const EMPTY: EmptyCopy = EmptyCopy {
        no_records_title: "No Registered User Groups",
        no_records_body: "User groups you register will be listed here.",
        no_results_title: "No Results Found",
        no_results_body: "No user group matches that name. Try another search.",
    };

    fn id(record: &UserGroup) -> &str {
        &record.id
    }

    fn columns() -> Vec<Column<UserGroup>> {
        vec![
            Column { header: "Name", cell: |g| g.name.clone() },
            Column { header: "Company", cell: |g| or_dash(&g.company_name) },
            Column { header: "Members", cell: |g| g.member_count.to_string() },
            Column { header: "Created", cell: |g| short_date(&g.created_at) },
        ]
    }

    fn detail_sections(g: &UserGroup) -> Vec<DetailSection> {
        vec![DetailSection {
            heading: "User Group",
            rows: vec![
                ("Name", g.name.clone()),
                ("Company", or_dash(&g.company_name)),
                ("Members", g.member_count.to_string()),
                ("Created", short_date(&g.created_at)),
                ("Updated", short_date(&g.updated_at)),
            ],
        }]
    }

    fn add_schema() -> Schema {
        schema::user_group_add()
    }

    fn edit_schema() -> Schema {
        schema::user_group_edit()
    }

    fn add_payload(values: &FormValues) -> UserGroupSave {
        UserGroupSave { id: None, name: value(values, "name") }
    }

    fn edit_payload(id: &str, values: &FormValues) -> UserGroupSave {
        UserGroupSave { id: Some(id.to_owned()), name: value(values, "name") }
    }

    fn prefill(g: &UserGroup) -> FormValues {
        form_values([("name", g.name.clone())])
    }
}
