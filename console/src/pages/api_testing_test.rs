use super::*;
use wire::Passcode;

fn values(pairs: &[(&str, &str)]) -> FormValues {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn toast_titles() {
    assert_eq!(Harness::Login.done_toast(), "Login Completed");
    assert_eq!(Harness::Join.failed_toast(), "Join not completed");
}

#[test]
fn join_request_collects_every_field() {
    let req = join_request(&values(&[
        ("email", " op@meet.test "),
        ("password", "pw"),
        ("meeting_id", "m-1"),
        ("meeting_url", "https://meet.test/m-1"),
        ("meeting_passcode", "0042"),
    ]));
    assert_eq!(req.email, "op@meet.test");
    assert_eq!(req.meeting_passcode, "0042");
}

#[test]
fn create_rows_render_numeric_passcode() {
    let rows = create_rows(MeetCreateResponse {
        meeting_type: Some("zoom".to_owned()),
        meeting_url: None,
        meeting_id: Some("m-1".to_owned()),
        meeting_passcode: Some(Passcode::Number(1234)),
    });
    assert_eq!(rows[1], ("Meeting URL", "-".to_owned()));
    assert_eq!(rows[3], ("Passcode", "1234".to_owned()));
}

#[test]
fn login_rows_dash_missing_keys() {
    let rows = login_rows(MeetLoginResponse { zoom_api_key: Some("z".to_owned()), ..MeetLoginResponse::default() });
    assert_eq!(rows, vec![
        ("Google API key", "-".to_owned()),
        ("Zoom API key", "z".to_owned()),
        ("Teams API key", "-".to_owned()),
    ]);
}

#[test]
fn join_rows_report_start_flag() {
    assert_eq!(join_rows(MeetJoinResponse { start_meeting: Some(true) })[0].1, "yes");
    assert_eq!(join_rows(MeetJoinResponse::default())[0].1, "-");
}

#[test]
fn each_harness_has_its_schema() {
    assert_eq!(Harness::Create.schema().fields.len(), 3);
    assert_eq!(Harness::Join.schema().fields.len(), 5);
}
