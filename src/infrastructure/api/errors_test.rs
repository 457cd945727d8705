use super::extract_message;
use super::humanize_http_error;
use super::MISSING_KEY_MESSAGE;

#[test]
fn it_returns_fixed_messages_for_known_statuses() {
    insta::assert_snapshot!(humanize_http_error(400, None), @"We could not process your request. Please check your input and try again.");
    insta::assert_snapshot!(humanize_http_error(401, None), @"You are not authorized to perform this action. Please check your credentials.");
    insta::assert_snapshot!(humanize_http_error(403, None), @"You are not authorized to perform this action. Please check your credentials.");
    insta::assert_snapshot!(humanize_http_error(413, None), @"File is too large. Please upload a smaller file or compress it.");
    insta::assert_snapshot!(humanize_http_error(415, None), @"Unsupported file type. Please upload a supported format.");
    insta::assert_snapshot!(humanize_http_error(429, None), @"You are sending requests too quickly. Please slow down and try again.");
}

#[test]
fn it_prefers_the_raw_message_for_400_and_auth_statuses() {
    assert_eq!(humanize_http_error(400, Some("Prompt is required")), "Prompt is required");
    assert_eq!(humanize_http_error(401, Some("Token expired")), "Token expired");
}

#[test]
fn it_ignores_the_raw_message_for_upload_statuses() {
    assert_eq!(
        humanize_http_error(413, Some("payload too large")),
        "File is too large. Please upload a smaller file or compress it."
    );
    assert_eq!(
        humanize_http_error(415, Some("bad mime")),
        "Unsupported file type. Please upload a supported format."
    );
}

#[test]
fn it_returns_missing_key_message_regardless_of_status() {
    for status in [400, 401, 413, 429, 500, 503] {
        assert_eq!(
            humanize_http_error(status, Some("GEMINI_API_KEY is not set")),
            MISSING_KEY_MESSAGE
        );
        assert_eq!(
            humanize_http_error(status, Some("env GOOGLE_API_KEY missing")),
            MISSING_KEY_MESSAGE
        );
    }
}

#[test]
fn it_uses_raw_message_for_server_errors() {
    assert_eq!(humanize_http_error(500, Some("boom")), "boom");
    insta::assert_snapshot!(humanize_http_error(500, None), @"The server had an issue. Please try again shortly.");
    insta::assert_snapshot!(humanize_http_error(503, None), @"The server had an issue. Please try again shortly.");
}

#[test]
fn it_falls_back_for_unknown_statuses() {
    assert_eq!(humanize_http_error(418, Some("teapot")), "teapot");
    insta::assert_snapshot!(humanize_http_error(418, None), @"Something went wrong. Please try again.");
}

#[test]
fn it_extracts_json_fields_in_priority_order() {
    assert_eq!(extract_message(r#"{"error":"a","message":"b","text":"c"}"#), "a");
    assert_eq!(extract_message(r#"{"message":"b","text":"c"}"#), "b");
    assert_eq!(extract_message(r#"{"text":"c"}"#), "c");
}

#[test]
fn it_skips_empty_and_null_fields() {
    assert_eq!(extract_message(r#"{"error":"","message":"b"}"#), "b");
    assert_eq!(extract_message(r#"{"error":null,"text":"c"}"#), "c");
}

#[test]
fn it_stringifies_non_string_fields() {
    assert_eq!(
        extract_message(r#"{"error":{"code":42}}"#),
        r#"{"code":42}"#
    );
}

#[test]
fn it_falls_back_to_the_raw_body_when_not_json() {
    assert_eq!(extract_message("upstream exploded"), "upstream exploded");
}

#[test]
fn it_returns_empty_when_nothing_matches() {
    assert_eq!(extract_message(r#"{"status":"failed"}"#), "");
}
