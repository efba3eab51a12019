//! Non-2xx responses surface as typed API errors

use crate::mock_server::MockServerFixture;
use elevenlabs_client::tts::{OutputOptions, TextToSpeechRequest};
use elevenlabs_client::{ApiErrorKind, Error};

const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

#[tokio::test]
async fn each_status_maps_to_its_kind() {
    let cases = [
        (400, ApiErrorKind::BadRequest),
        (401, ApiErrorKind::Authentication),
        (402, ApiErrorKind::PaymentRequired),
        (403, ApiErrorKind::Forbidden),
        (404, ApiErrorKind::NotFound),
        (422, ApiErrorKind::UnprocessableEntity),
        (429, ApiErrorKind::RateLimit),
        (503, ApiErrorKind::ServiceUnavailable),
        (500, ApiErrorKind::Other),
        (418, ApiErrorKind::Other),
    ];

    for (status, expected) in cases {
        let mut fixture = MockServerFixture::new().await;
        let body = format!(r#"{{"detail":"failure {}"}}"#, status);
        let _mock = fixture
            .mock_json("GET", "/v1/models", status as usize, &body)
            .await;

        let err = fixture.client().models().list().await.unwrap_err();

        match err {
            Error::Api {
                kind,
                status: got,
                message,
            } => {
                assert_eq!(kind, expected, "status {}", status);
                assert_eq!(got, status);
                assert_eq!(message, format!("failure {}", status));
            }
            other => panic!("status {}: expected API error, got {:?}", status, other),
        }
    }
}

#[tokio::test]
async fn plain_text_error_body_becomes_message() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_text("GET", "/v1/user/subscription", 500, "upstream exploded\n")
        .await;

    let err = fixture.client().user().subscription().await.unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::Other));
    assert_eq!(err.status(), Some(500));
    match err {
        Error::Api { message, .. } => assert_eq!(message, "upstream exploded"),
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn validation_messages_are_joined_in_order() {
    let mut fixture = MockServerFixture::new().await;
    let body = r#"{"detail":[
        {"loc":["body","text"],"msg":"field required","type":"value_error.missing"},
        {"loc":["body","model_id"],"msg":"unknown model","type":"value_error"}
    ]}"#;
    let _mock = fixture
        .mock_json("POST", &format!("/v1/text-to-speech/{}", VOICE_ID), 422, body)
        .await;

    let err = fixture
        .client()
        .text_to_speech()
        .convert(VOICE_ID, &TextToSpeechRequest::new("hi"), &OutputOptions::default())
        .await
        .unwrap_err();

    match err {
        Error::Api { kind, message, .. } => {
            assert_eq!(kind, ApiErrorKind::UnprocessableEntity);
            assert_eq!(message, "field required; unknown model");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_unauthorized_body_uses_default_message() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("GET", "/v1/voices")
        .with_status(401)
        .create_async()
        .await;

    let err = fixture.client().voices().list().await.unwrap_err();

    assert!(!err.is_retryable());
    match err {
        Error::Api { kind, message, .. } => {
            assert_eq!(kind, ApiErrorKind::Authentication);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn rate_limit_is_retryable() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "GET",
            "/v1/history",
            429,
            r#"{"detail":{"status":"too_many_concurrent_requests","message":"Too many concurrent requests"}}"#,
        )
        .await;

    let err = fixture
        .client()
        .history()
        .list(&Default::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::RateLimit));
    assert!(err.is_retryable());
    assert!(err.to_string().contains("Too many concurrent requests"));
}

#[tokio::test]
async fn failed_stream_never_invokes_callback() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_json(
            "POST",
            &format!("/v1/text-to-speech/{}/stream", VOICE_ID),
            401,
            r#"{"detail":{"status":"invalid_api_key","message":"Invalid API key"}}"#,
        )
        .await;

    let mut calls = 0;
    let err = fixture
        .client()
        .text_to_speech()
        .convert_stream(
            VOICE_ID,
            &TextToSpeechRequest::new("hi"),
            &OutputOptions::default(),
            |_| {
                calls += 1;
                Ok(())
            },
        )
        .await
        .unwrap_err();

    assert_eq!(calls, 0);
    assert_eq!(err.kind(), Some(ApiErrorKind::Authentication));
}

#[tokio::test]
async fn failed_timestamp_stream_never_invokes_callback() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_text(
            "POST",
            &format!("/v1/text-to-speech/{}/stream/with-timestamps", VOICE_ID),
            503,
            "",
        )
        .await;

    let mut calls = 0;
    let err = fixture
        .client()
        .text_to_speech()
        .stream_with_timestamps(
            VOICE_ID,
            &TextToSpeechRequest::new("hi"),
            &OutputOptions::default(),
            |_| {
                calls += 1;
                Ok(())
            },
        )
        .await
        .unwrap_err();

    assert_eq!(calls, 0);
    match err {
        Error::Api { kind, message, .. } => {
            assert_eq!(kind, ApiErrorKind::ServiceUnavailable);
            assert_eq!(message, "HTTP 503");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}
