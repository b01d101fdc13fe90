use super::*;

#[test]
fn latest_ticket_wins() {
    let guard = RequestGuard::default();
    let first = guard.issue();
    let second = guard.issue();
    assert!(!guard.is_current(first));
    assert!(guard.is_current(second));
}

#[test]
fn out_of_order_completion_discards_older() {
    let guard = RequestGuard::default();
    let search_a = guard.issue();
    let search_ab = guard.issue();
    // "ab" resolves first, then the slower "a" arrives.
    let mut applied = Vec::new();
    for (ticket, label) in [(search_ab, "ab"), (search_a, "a")] {
        if guard.is_current(ticket) {
            applied.push(label);
        }
    }
    assert_eq!(applied, vec!["ab"]);
}

#[test]
fn cancel_invalidates_outstanding() {
    let guard = RequestGuard::default();
    let ticket = guard.issue();
    guard.clone().cancel();
    assert!(!guard.is_current(ticket));
}
