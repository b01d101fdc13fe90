use clap::Parser;

use super::*;

#[test]
fn resource_aliases_parse() {
    assert_eq!(parse_resource("user-groups"), Ok(Resource::UserGroups));
    assert_eq!(parse_resource("Companies"), Ok(Resource::Companies));
    assert!(parse_resource("meetings").is_err());
}

#[test]
fn list_defaults_to_first_page_of_five() {
    let cli = Cli::try_parse_from(["meetctl", "--token", "t", "list", "companies"]).unwrap();
    assert_eq!(cli.auth_scheme, AuthScheme::Raw);
    match cli.command {
        Command::List { resource, page, limit, name } => {
            assert_eq!(resource, Resource::Companies);
            assert_eq!((page, limit), (1, 5));
            assert!(name.is_empty());
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn bearer_scheme_is_opt_in() {
    let cli = Cli::try_parse_from(["meetctl", "--auth-scheme", "bearer", "get", "users", "3"]).unwrap();
    assert_eq!(cli.auth_scheme, AuthScheme::Bearer);
    assert!(Cli::try_parse_from(["meetctl", "--auth-scheme", "basic", "get", "users", "3"]).is_err());
}

#[test]
fn meet_join_requires_every_field() {
    let partial = ["meetctl", "meet", "join", "--email", "a@b.co", "--password", "x", "--meeting-id", "1"];
    assert!(Cli::try_parse_from(partial).is_err());
}
