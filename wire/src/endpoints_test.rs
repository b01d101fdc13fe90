use super::*;

#[test]
fn normalize_adds_scheme_to_bare_host() {
    assert_eq!(normalize_base_url("api.meet.test:8000"), "http://api.meet.test:8000");
}

#[test]
fn normalize_keeps_https_and_strips_trailing_slashes() {
    assert_eq!(normalize_base_url(" https://api.meet.test// "), "https://api.meet.test");
}

#[test]
fn normalize_empty_base_is_same_origin() {
    assert_eq!(normalize_base_url("   "), "");
    assert_eq!(Endpoints::same_origin().login(), "/api/auth/login");
}

#[test]
fn list_detail_save_paths_per_resource() {
    let ep = Endpoints::new("http://backend:8000");
    assert_eq!(ep.list(Resource::Companies), "http://backend:8000/api/companies/all");
    assert_eq!(ep.list(Resource::UserGroups), "http://backend:8000/api/user-group/all");
    assert_eq!(ep.list(Resource::Users), "http://backend:8000/api/users/all");
    assert_eq!(ep.detail(Resource::Users, "u1"), "http://backend:8000/api/users/u1");
    assert_eq!(ep.save(Resource::UserGroups), "http://backend:8000/api/user-group/save");
}

#[test]
fn delete_path_has_no_api_prefix() {
    let ep = Endpoints::same_origin();
    assert_eq!(ep.delete(Resource::Companies, "c1"), "/companies/c1");
    assert_eq!(ep.delete(Resource::UserGroups, "g1"), "/user-group/g1");
}

#[test]
fn path_segments_are_percent_encoded() {
    let ep = Endpoints::same_origin();
    assert_eq!(ep.detail(Resource::Companies, "a/b c"), "/api/companies/a%2Fb%20c");
    assert_eq!(ep.reset_password("tok.en-1_~"), "/reset-password/tok.en-1_~");
}

#[test]
fn meeting_harness_paths() {
    let ep = Endpoints::new("https://meet.test");
    assert_eq!(ep.meet_login(), "https://meet.test/api/meet/login");
    assert_eq!(ep.meet_create(), "https://meet.test/api/meet/create");
    assert_eq!(ep.meet_join(), "https://meet.test/api/meet/join");
}

#[test]
fn list_query_always_sends_name_and_clamps_page() {
    let query = ListQuery::new(0, 5, "");
    assert_eq!(
        query.pairs(),
        [("page", "1".to_owned()), ("limit", "5".to_owned()), ("name", String::new())]
    );
}

#[test]
fn resource_parse_aliases() {
    assert_eq!(Resource::parse("Companies"), Some(Resource::Companies));
    assert_eq!(Resource::parse("user-groups"), Some(Resource::UserGroups));
    assert_eq!(Resource::parse("user"), Some(Resource::Users));
    assert_eq!(Resource::parse("meetings"), None);
}

#[test]
fn only_users_are_not_deletable() {
    assert!(Resource::Companies.deletable());
    assert!(Resource::UserGroups.deletable());
    assert!(!Resource::Users.deletable());
}
