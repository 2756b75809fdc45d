use super::*;

#[test]
fn login_request_serializes_expected_fields() {
    let body = LoginRequest { email: "a@b.com", password: "pw" };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn login_response_reads_token_and_ignores_extra_fields() {
    let raw = r#"{"msg":"ok","token":"jwt-abc","user":{"id":1,"username":"u","email":"a@b.com"}}"#;
    let parsed: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.token, "jwt-abc");
}

#[test]
fn register_and_reset_requests_use_backend_field_names() {
    let register = RegisterRequest { username: "ann", email: "a@b.com", password: "abc123", code: "123456" };
    assert_eq!(
        serde_json::to_value(&register).unwrap(),
        serde_json::json!({ "username": "ann", "email": "a@b.com", "password": "abc123", "code": "123456" })
    );

    let reset = ResetPasswordRequest { email: "a@b.com", code: "123456", new_password: "xyz789" };
    assert_eq!(
        serde_json::to_value(&reset).unwrap(),
        serde_json::json!({ "email": "a@b.com", "code": "123456", "new_password": "xyz789" })
    );
}

#[test]
fn message_response_tolerates_extra_and_missing_fields() {
    let parsed: MessageResponse = serde_json::from_str(r#"{"msg":"sent","user":{"id":3}}"#).unwrap();
    assert_eq!(parsed.msg, "sent");
    let empty: MessageResponse = serde_json::from_str("{}").unwrap();
    assert!(empty.msg.is_empty());
}

#[test]
fn failed_message_includes_detail() {
    assert_eq!(
        failed_message("login", 401, r#"{"detail":"wrong email or password"}"#),
        "login failed (401): wrong email or password"
    );
}

#[test]
fn failed_message_without_detail_uses_status() {
    assert_eq!(failed_message("login", 500, "Internal Server Error"), "login failed: 500");
    assert_eq!(failed_message("register", 422, r#"{"detail":[{"loc":["body"]}]}"#), "register failed: 422");
}

#[test]
fn task_url_encodes_task_id() {
    assert_eq!(task_url(SUMMARY_STATUS_ENDPOINT, "9f2c"), "/api/summary/status?task_id=9f2c");
    assert_eq!(task_url(SUMMARY_CANCEL_ENDPOINT, "a&b"), "/api/summary/cancel?task_id=a%26b");
}

#[test]
fn task_status_reads_null_fields() {
    let raw = r#"{"task_id":"t1","status":"running","progress":60,"stage":"summarizing",
        "error":null,"transcript":"hello","summary":null,"cancelled":false}"#;
    let status: TaskStatus = serde_json::from_str(raw).unwrap();
    assert_eq!(status.progress, Some(60));
    assert_eq!(status.transcript.as_deref(), Some("hello"));
    assert_eq!(status.summary, None);
    assert!(!status.is_finished());
    assert_eq!(status.describe(), "Running: summarizing (60%)");
}

#[test]
fn task_status_finished_states() {
    for state in ["done", "error", "cancelled"] {
        let status = TaskStatus { status: state.to_owned(), ..TaskStatus::queued("t") };
        assert!(status.is_finished(), "{state}");
    }
    assert!(!TaskStatus::queued("t").is_finished());
}

#[test]
fn task_status_describes_errors_and_pending_cancel() {
    let failed = TaskStatus { status: "error".to_owned(), error: Some("no speech".to_owned()), ..TaskStatus::queued("t") };
    assert_eq!(failed.describe(), "Failed: no speech");

    let cancelling = TaskStatus { status: "running".to_owned(), cancelled: true, ..TaskStatus::queued("t") };
    assert_eq!(cancelling.describe(), "Cancelling after the current step...");
    assert_eq!(TaskStatus::queued("t").describe(), "Queued.");
}
