use super::*;

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages_for(12, 5), 3);
    assert_eq!(total_pages_for(10, 5), 2);
    assert_eq!(total_pages_for(0, 5), 0);
    assert_eq!(total_pages_for(3, 0), 0);
}

#[test]
fn default_pager_is_first_page_of_five() {
    let pager = Pager::default();
    assert_eq!(pager.page, 1);
    assert_eq!(pager.page_size, PAGE_SIZE);
    assert!(!pager.can_prev());
}

#[test]
fn twelve_items_reach_page_three_and_stop() {
    let mut pager = Pager::default();
    pager.apply_meta(ListMeta { total: 12, total_pages: total_pages_for(12, PAGE_SIZE) });
    assert_eq!(pager.total_pages, 3);
    assert!(pager.can_next());

    assert!(pager.next());
    assert!(pager.next());
    assert_eq!(pager.page, 3);
    assert!(!pager.can_next());
    assert!(!pager.next());
    assert_eq!(pager.page, 3);
}

#[test]
fn prev_disabled_exactly_on_page_one() {
    let mut pager = Pager { page: 2, total_pages: 3, total_items: 12, ..Pager::default() };
    assert!(pager.can_prev());
    assert!(pager.prev());
    assert!(!pager.can_prev());
    assert!(!pager.prev());
    assert_eq!(pager.page, 1);
}

#[test]
fn next_disabled_when_no_pages() {
    let mut pager = Pager::default();
    pager.apply_meta(ListMeta { total: 0, total_pages: 0 });
    assert!(!pager.can_next());
    assert!(!pager.can_prev());
}

#[test]
fn reset_returns_to_first_page() {
    let mut pager = Pager { page: 3, total_pages: 3, total_items: 12, ..Pager::default() };
    pager.reset();
    assert_eq!(pager.page, 1);
    assert_eq!(pager.total_pages, 3);
}
