use super::*;
use crate::error::ChatErrorKind;

#[test]
fn request_serializes_with_default_context() {
    let request = ChatRequest::new("Hello", ChatContext::default());
    assert_eq!(
        serde_json::to_string(&request).expect("serialize"),
        r#"{"message":"Hello","context":{"destination":"Unknown","days":"3"}}"#
    );
}

#[test]
fn page_values_are_defaulted_independently() {
    let context = ChatContext::from_page(Some("Lisbon".into()), None);
    assert_eq!(context.destination, "Lisbon");
    assert_eq!(context.days, "3");

    let context = ChatContext::from_page(None, Some("5".into()));
    assert_eq!(context.destination, "Unknown");
    assert_eq!(context.days, "5");
}

#[test]
fn parses_response_field() {
    let response = parse_chat_response(r#"{"response":"Hi there!"}"#).expect("parse");
    assert_eq!(response.response, "Hi there!");
}

#[test]
fn ignores_extra_fields() {
    let response =
        parse_chat_response(r#"{"response":"ok","model":"x","tokens":3}"#).expect("parse");
    assert_eq!(response.response, "ok");
}

#[test]
fn missing_response_is_malformed() {
    let err = parse_chat_response("{}").expect_err("must fail");
    assert_eq!(err.kind(), ChatErrorKind::MalformedResponse);
}

#[test]
fn non_string_response_is_malformed() {
    let err = parse_chat_response(r#"{"response":42}"#).expect_err("must fail");
    assert_eq!(err.kind(), ChatErrorKind::MalformedResponse);
}

#[test]
fn non_json_body_is_invalid() {
    let err = parse_chat_response("<html>502</html>").expect_err("must fail");
    assert_eq!(err.kind(), ChatErrorKind::InvalidBody);
}
