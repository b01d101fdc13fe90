use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("Deletion Completed!", ToastVariant::Success);
    let b = state.push("Error deleting company.", ToastVariant::Destructive);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("one", ToastVariant::Success);
    state.push("two", ToastVariant::Cancel);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].title, "two");
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn overflow_drops_oldest() {
    let mut state = ToastState::default();
    for i in 0..6 {
        state.push(format!("t{i}"), ToastVariant::Success);
    }
    assert_eq!(state.toasts.len(), MAX_TOASTS);
    assert_eq!(state.toasts[0].title, "t2");
}

#[test]
fn variant_classes() {
    assert_eq!(ToastVariant::Destructive.class(), "toast toast--destructive");
}
