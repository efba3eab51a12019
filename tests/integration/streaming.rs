//! Chunked responses delivered through callbacks

use crate::mock_server::{MockServerFixture, TEST_API_KEY};
use elevenlabs_client::tts::{AudioWithTimestamps, OutputFormat, OutputOptions, TextToSpeechRequest};
use elevenlabs_client::{Error, RequestSpec, StreamChunk, StreamMode};
use std::io::Write;

const VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

fn audio_fixture() -> Vec<u8> {
    (0..48_000u32).map(|i| (i % 251) as u8).collect()
}

#[tokio::test]
async fn audio_stream_delivers_every_byte_in_order() {
    let audio = audio_fixture();
    let served = audio.clone();

    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", format!("/v1/text-to-speech/{}/stream", VOICE_ID).as_str())
        .match_header("xi-api-key", TEST_API_KEY)
        .match_header("accept", "audio/mpeg")
        .match_query(mockito::Matcher::UrlEncoded(
            "output_format".into(),
            "mp3_44100_128".into(),
        ))
        .with_status(200)
        .with_header("content-type", "audio/mpeg")
        .with_chunked_body(move |w| {
            for piece in served.chunks(4096) {
                w.write_all(piece)?;
                w.flush()?;
            }
            Ok(())
        })
        .create_async()
        .await;

    let mut received = Vec::new();
    let mut calls = 0usize;
    let summary = fixture
        .client()
        .text_to_speech()
        .convert_stream(
            VOICE_ID,
            &TextToSpeechRequest::new("A longer sentence to stream."),
            &OutputOptions::format(OutputFormat::MP3_44100_128),
            |chunk| {
                assert!(!chunk.is_empty());
                received.extend_from_slice(&chunk);
                calls += 1;
                Ok(())
            },
        )
        .await
        .unwrap();

    assert_eq!(received, audio);
    assert_eq!(summary.status, 200);
    assert_eq!(summary.content_type.as_deref(), Some("audio/mpeg"));
    assert_eq!(summary.bytes, audio.len() as u64);
    assert_eq!(summary.chunks, calls);
    assert!(calls >= 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn stream_alias_hits_the_same_endpoint() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_audio(
            "POST",
            &format!("/v1/text-to-speech/{}/stream", VOICE_ID),
            b"ID3\x04audio",
        )
        .await;

    let mut received = Vec::new();
    fixture
        .client()
        .text_to_speech()
        .stream(
            VOICE_ID,
            &TextToSpeechRequest::new("hi"),
            &OutputOptions::default(),
            |chunk| {
                received.extend_from_slice(&chunk);
                Ok(())
            },
        )
        .await
        .unwrap();

    assert_eq!(received, b"ID3\x04audio");
    mock.assert_async().await;
}

#[tokio::test]
async fn timestamp_stream_yields_one_callback_per_line() {
    // "part-0", "part-1", "part-2" in base64
    let lines = [
        r#"{"audio_base64":"cGFydC0w","alignment":{"characters":["H"],"character_start_times_seconds":[0.0],"character_end_times_seconds":[0.1]}}"#,
        r#"{"audio_base64":"cGFydC0x","alignment":{"characters":["é"],"character_start_times_seconds":[0.1],"character_end_times_seconds":[0.2]}}"#,
        r#"{"audio_base64":"cGFydC0y","alignment":null}"#,
    ];
    let body = format!("{}\n{}\n{}\n", lines[0], lines[1], lines[2]).into_bytes();

    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock(
            "POST",
            format!("/v1/text-to-speech/{}/stream/with-timestamps", VOICE_ID).as_str(),
        )
        .match_header("xi-api-key", TEST_API_KEY)
        .with_status(200)
        .with_header("content-type", "application/x-ndjson")
        .with_chunked_body(move |w| {
            // Uneven pieces so lines and the two-byte "é" straddle writes
            for piece in body.chunks(37) {
                w.write_all(piece)?;
                w.flush()?;
            }
            Ok(())
        })
        .create_async()
        .await;

    let mut chunks: Vec<AudioWithTimestamps> = Vec::new();
    let summary = fixture
        .client()
        .text_to_speech()
        .stream_with_timestamps(
            VOICE_ID,
            &TextToSpeechRequest::new("Hé!"),
            &OutputOptions::default(),
            |chunk| {
                chunks.push(chunk);
                Ok(())
            },
        )
        .await
        .unwrap();

    assert_eq!(summary.chunks, 3);
    let audio: Vec<Vec<u8>> = chunks.iter().map(|c| c.audio_bytes().unwrap()).collect();
    assert_eq!(audio, vec![b"part-0".to_vec(), b"part-1".to_vec(), b"part-2".to_vec()]);
    assert_eq!(chunks[1].alignment.as_ref().unwrap().text(), "é");
    assert_eq!(chunks[2].alignment, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn unterminated_last_line_is_still_delivered() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/v1/custom/stream")
        .with_status(200)
        .with_header("content-type", "application/x-ndjson")
        .with_body("{\"n\":1}\n\n{\"n\":2}")
        .create_async()
        .await;

    let mut seen = Vec::new();
    let summary = fixture
        .client()
        .transport()
        .execute_stream(
            RequestSpec::post(&["v1", "custom", "stream"]),
            StreamMode::JsonLines,
            |chunk| {
                match chunk {
                    StreamChunk::Json(v) => seen.push(v["n"].as_i64().unwrap()),
                    StreamChunk::Audio(_) => panic!("raw chunk in line mode"),
                }
                Ok(())
            },
        )
        .await
        .unwrap();

    assert_eq!(seen, vec![1, 2]);
    assert_eq!(summary.chunks, 2);
}

#[tokio::test]
async fn callback_error_stops_the_stream() {
    let body = "{\"audio_base64\":\"cGFydC0w\"}\n{\"audio_base64\":\"cGFydC0x\"}\n{\"audio_base64\":\"cGFydC0y\"}\n";
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock(
            "POST",
            format!("/v1/text-to-speech/{}/stream/with-timestamps", VOICE_ID).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/x-ndjson")
        .with_body(body)
        .create_async()
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
                if calls == 2 {
                    Err(Error::stream("listener went away"))
                } else {
                    Ok(())
                }
            },
        )
        .await
        .unwrap_err();

    assert_eq!(calls, 2);
    match err {
        Error::Stream { message } => assert_eq!(message, "listener went away"),
        other => panic!("expected stream error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_line_is_a_serialization_error() {
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock(
            "POST",
            format!("/v1/text-to-speech/{}/stream/with-timestamps", VOICE_ID).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/x-ndjson")
        .with_body("{\"audio_base64\":\"cGFydC0w\"}\n{not json}\n")
        .create_async()
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

    assert_eq!(calls, 1);
    assert!(matches!(err, Error::Serialization(_)), "got {:?}", err);
}
