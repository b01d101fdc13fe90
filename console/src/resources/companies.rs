use wire::display::short_date;
use wire::schema::{self, non_empty, value};
use wire::{Company, CompanySave, FormValues, Resource, Schema};

use super::{AdminResource, Column, DetailSection, EmptyCopy, form_values, or_dash};

#[derive(Clone, Copy, Debug)]
pub struct Companies;

fn leader_name(c: &Company) -> String {
    c.leader_user.as_ref().map_or_else(|| "-".to_owned(), |l| or_dash(&l.name))
}

fn leader_email(c: &Company) -> String {
    c.leader_user.as_ref().map_or_else(|| "-".to_owned(), |l| or_dash(&l.email))
}

impl AdminResource for Companies {
    type Record = Company;
    type Save = CompanySave;

    const RESOURCE: Resource = Resource::Companies;
    const TITLE: &'static str = "Companies";
    const SINGULAR: &'static str = "Company";
    const ROUTE: &'static str = "/companies";
    const EMPTY: EmptyCopy = EmptyCopy {
        no_records_title: "No Registered Companies",
        no_records_body: "Companies you register will be listed here.",
        no_results_title: "No Results Found",
        no_results_body: "No company matches that name. Try another search.",
    };

    fn id(record: &Company) -> &str {
        &record.id
    }

    fn columns() -> Vec<Column<Company>> {
        vec![
            Column { header: "Name", cell: |c| c.name.clone() },
            Column { header: "Leader", cell: leader_name },
            Column { header: "Leader email", cell: leader_email },
            Column { header: "Members", cell: |c| c.member_count.to_string() },
            Column { header: "Created", cell: |c| short_date(&c.created_at) },
        ]
    }

    fn detail_sections(c: &Company) -> Vec<DetailSection> {
        let leader = c.leader_user.clone().unwrap_or_default();
        vec![
            DetailSection {
                heading: "Company",
                rows: vec![
                    ("Name", c.name.clone()),
                    ("Members", c.member_count.to_string()),
                    ("Created", short_date(&c.created_at)),
                    ("Updated", short_date(&c.updated_at)),
                ],
            },
            DetailSection {
                heading: "Leader",
                rows: vec![("Name", or_dash(&leader.name)), ("Email", or_dash(&leader.email))],
            },
        ]
    }

    fn add_schema() -> Schema {
        schema::company_add()
    }

    fn edit_schema() -> Schema {
        schema::company_edit()
    }

    fn add_payload(values: &FormValues) -> CompanySave {
        CompanySave {
            id: None,
            name: value(values, "name"),
            leader_name: non_empty(values, "leaderName"),
            email: non_empty(values, "email"),
            password: values.get("password").cloned(),
            confirmation_password: values.get("confirmationPassword").cloned(),
            member_count: None,
        }
    }

    fn edit_payload(id: &str, values: &FormValues) -> CompanySave {
        CompanySave {
            id: Some(id.to_owned()),
            name: value(values, "name"),
            member_count: non_empty(values, "member_cnt"),
            ..CompanySave::default()
        }
    }

    fn prefill(c: &Company) -> FormValues {
        form_values([("name", c.name.clone()), ("member_cnt", c.member_count.to_string())])
    }
}
