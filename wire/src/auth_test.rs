use super::*;

#[test]
fn raw_scheme_sends_bare_token() {
    assert_eq!(authorization_value(AuthScheme::default(), "abc"), "abc");
}

#[test]
fn bearer_scheme_prefixes_token() {
    assert_eq!(authorization_value(AuthScheme::Bearer, "abc"), "Bearer abc");
}

#[test]
fn parse_scheme_names() {
    assert_eq!(AuthScheme::parse("RAW"), Some(AuthScheme::Raw));
    assert_eq!(AuthScheme::parse(" bearer "), Some(AuthScheme::Bearer));
    assert_eq!(AuthScheme::parse("basic"), None);
}
