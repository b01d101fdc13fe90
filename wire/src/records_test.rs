use super::*;

// =============================================================
// Entities
// =============================================================

#[test]
fn company_reads_backend_field_names() {
    let company: Company = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": "Acme",
        "leader_user": { "name": "Ana", "email": "ana@acme.test" },
        "member_cnt": 12,
        "created_at": "2025-04-12T10:00:00Z",
        "updated_at": "2025-04-13T10:00:00Z"
    }))
    .expect("company");
    assert_eq!(company.id, "c1");
    assert_eq!(company.member_count, 12);
    assert_eq!(company.leader_user.expect("leader").email, "ana@acme.test");
}

#[test]
fn company_accepts_numeric_id_and_missing_leader() {
    let company: Company = serde_json::from_value(serde_json::json!({
        "id": 42,
        "name": "Acme"
    }))
    .expect("company");
    assert_eq!(company.id, "42");
    assert!(company.leader_user.is_none());
    assert_eq!(company.member_count, 0);
    assert_eq!(company.created_at, "");
}

#[test]
fn member_count_accepts_numeric_string() {
    let group: UserGroup = serde_json::from_value(serde_json::json!({
        "id": "g1",
        "name": "Sales",
        "company_name": null,
        "member_cnt": " 7 "
    }))
    .expect("group");
    assert_eq!(group.member_count, 7);
    assert_eq!(group.company_name, "");
}

#[test]
fn member_count_rejects_garbage() {
    let err = serde_json::from_value::<UserGroup>(serde_json::json!({
        "id": "g1",
        "member_cnt": "many"
    }))
    .expect_err("should reject");
    assert!(err.to_string().contains("numeric string"));
}

#[test]
fn id_rejects_non_scalar() {
    let err = serde_json::from_value::<User>(serde_json::json!({ "id": {"x": 1} })).expect_err("object id");
    assert!(err.to_string().contains("expected string or number id"));
}

#[test]
fn null_text_fields_read_as_empty() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Ann",
        "email": null,
        "created_at": "2025-04-12T10:00:00Z",
        "updated_at": null
    }))
    .expect("user");
    assert_eq!(user.email, "");
    assert_eq!(user.updated_at, "");

    let company: Company = serde_json::from_value(serde_json::json!({
        "id": "c1",
        "name": null,
        "leader_user": { "name": null, "email": "ana@acme.test" }
    }))
    .expect("company");
    assert_eq!(company.name, "");
    let leader = company.leader_user.expect("leader");
    assert_eq!(leader.name, "");
    assert_eq!(leader.email, "ana@acme.test");
}

#[test]
fn one_null_row_does_not_sink_the_page() {
    let page: ListEnvelope<UserGroup> = serde_json::from_value(serde_json::json!({
        "data": [
            { "id": "g1", "name": "Sales", "created_at": null },
            { "id": "g2", "name": "Support", "updated_at": "2025-04-13T10:00:00Z" }
        ],
        "meta": { "total": 2, "total_pages": 1 }
    }))
    .expect("page");
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].created_at, "");
}

#[test]
fn list_envelope_reads_meta() {
    let env: ListEnvelope<User> = serde_json::from_value(serde_json::json!({
        "data": [{ "id": "u1", "name": "Nakao", "user_group_name": "Sales Department" }],
        "meta": { "total": 12, "total_pages": 3 }
    }))
    .expect("envelope");
    assert_eq!(env.data.len(), 1);
    assert_eq!(env.data[0].user_group_name, "Sales Department");
    assert_eq!(env.meta, ListMeta { total: 12, total_pages: 3 });
}

#[test]
fn list_envelope_defaults_missing_meta() {
    let env: ListEnvelope<Company> = serde_json::from_value(serde_json::json!({ "data": [] })).expect("envelope");
    assert!(env.data.is_empty());
    assert_eq!(env.meta, ListMeta::default());
}

// =============================================================
// Save payloads
// =============================================================

#[test]
fn company_create_payload_uses_camel_case_keys() {
    let payload = CompanySave {
        id: None,
        name: "Acme".to_owned(),
        leader_name: Some("Ana".to_owned()),
        email: Some("ana@acme.test".to_owned()),
        password: Some("secret1".to_owned()),
        confirmation_password: Some("secret1".to_owned()),
        member_count: None,
    };
    let json = serde_json::to_value(&payload).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Acme",
            "leaderName": "Ana",
            "email": "ana@acme.test",
            "password": "secret1",
            "confirmationPassword": "secret1"
        })
    );
}

#[test]
fn user_group_edit_payload_is_id_and_name_only() {
    let payload = UserGroupSave { id: Some("g9".to_owned()), name: "Sales".to_owned() };
    assert_eq!(
        serde_json::to_value(&payload).expect("json"),
        serde_json::json!({ "id": "g9", "name": "Sales" })
    );
}

#[test]
fn company_edit_payload_sends_member_cnt() {
    let payload = CompanySave {
        id: Some("c1".to_owned()),
        name: "Acme".to_owned(),
        member_count: Some("12".to_owned()),
        ..CompanySave::default()
    };
    assert_eq!(
        serde_json::to_value(&payload).expect("json"),
        serde_json::json!({ "id": "c1", "name": "Acme", "member_cnt": "12" })
    );
}

// =============================================================
// Auth + meeting harness
// =============================================================

#[test]
fn login_response_keeps_unknown_user_fields() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "access_token": "tok",
        "user": { "id": 7, "name": "Admin", "email": "a@b.c", "role": "leader" }
    }))
    .expect("login");
    assert_eq!(resp.access_token, "tok");
    assert_eq!(resp.user.id, "7");
    assert_eq!(resp.user.extra.get("role"), Some(&serde_json::json!("leader")));
}

#[test]
fn reset_password_request_uses_new_password_key() {
    let req = ResetPasswordRequest { new_password: "abcdef".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).expect("json"),
        serde_json::json!({ "newPassword": "abcdef" })
    );
}

#[test]
fn passcode_accepts_number_or_string() {
    let numeric: MeetCreateResponse =
        serde_json::from_value(serde_json::json!({ "meeting_passcode": 123_456 })).expect("numeric");
    assert_eq!(numeric.meeting_passcode, Some(Passcode::Number(123_456)));
    assert_eq!(numeric.meeting_passcode.expect("code").to_string(), "123456");

    let text: MeetCreateResponse =
        serde_json::from_value(serde_json::json!({ "meeting_passcode": "a1b2" })).expect("text");
    assert_eq!(text.meeting_passcode, Some(Passcode::Text("a1b2".to_owned())));
}

#[test]
fn meet_join_response_defaults_to_unknown() {
    let resp: MeetJoinResponse = serde_json::from_value(serde_json::json!({})).expect("join");
    assert_eq!(resp.start_meeting, None);
}
