use super::*;
use crate::state::session::Session;

#[test]
fn landing_route_depends_on_session() {
    assert_eq!(landing_route(&SessionState::restored(None)), "/login");
    let signed_in = SessionState::restored(Some(Session { token: "t".to_owned(), user: wire::SessionUser::default() }));
    assert_eq!(landing_route(&signed_in), "/home");
}
