use super::*;

#[test]
fn interaction_deserializes_camel_case_and_null_response() {
    let json = r#"{"id":"i1","prompt":"hello","response":null,"createdAt":"t0"}"#;
    let parsed: Interaction = serde_json::from_str(json).expect("interaction");
    assert_eq!(parsed.id, "i1");
    assert_eq!(parsed.prompt, "hello");
    assert!(parsed.response.is_none());
    assert_eq!(parsed.created_at, "t0");
}

#[test]
fn interaction_deserializes_filled_response() {
    let json = r#"{"id":"i1","prompt":"hello","response":"hi there","createdAt":"t0"}"#;
    let parsed: Interaction = serde_json::from_str(json).expect("interaction");
    assert_eq!(parsed.response.as_deref(), Some("hi there"));
}

#[test]
fn login_response_room_id_defaults_to_none() {
    let json = r#"{"token":"tok-1"}"#;
    let parsed: LoginResponse = serde_json::from_str(json).expect("login response");
    assert_eq!(parsed.token, "tok-1");
    assert!(parsed.room_id.is_none());
}

#[test]
fn create_room_response_uses_camel_case() {
    let json = r#"{"roomId":"r1"}"#;
    let parsed: CreateRoomResponse = serde_json::from_str(json).expect("create room response");
    assert_eq!(parsed.room_id, "r1");
}

#[test]
fn create_interaction_request_serializes_prompt_only() {
    let body = CreateInteractionRequest { prompt: "hello".to_owned() };
    let json = serde_json::to_string(&body).expect("request body");
    assert_eq!(json, r#"{"prompt":"hello"}"#);
}
