use super::*;

#[test]
fn count_label_formats() {
    assert_eq!(count_label(Some(1)), "1 registered");
    assert_eq!(count_label(Some(12)), "12 registered");
    assert_eq!(count_label(None), "-");
}

#[test]
fn tiles_cover_every_resource() {
    for resource in Resource::ALL {
        assert!(TILES.iter().any(|t| t.resource == Some(resource)), "missing {resource}");
    }
    assert!(TILES.iter().any(|t| t.href == "/api-testing"));
}
