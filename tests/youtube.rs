//! Transcript loading against a mocked watch page and timed-text endpoint
#![cfg(feature = "youtube")]

use link_summarizer::config::Config;
use link_summarizer::error::AppError;
use link_summarizer::extract::{build_http_client, TranscriptLoader, YouTubeTranscriptLoader};
use link_summarizer::options::SummaryOptions;
use link_summarizer::summarizer::Summarizer;
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMED_TEXT: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript>
<text start="0.0" dur="1.5">Welcome back</text>
<text start="1.5" dur="2.0">today we talk about &amp;quot;Rust&amp;quot;</text>
</transcript>"#;

fn watch_page(server: &MockServer, video_id: &str) -> String {
    format!(
        r#"<html><body><script>var ytInitialPlayerResponse = {{"captions":{{"playerCaptionsTracklistRenderer":{{"captionTracks":[{{"baseUrl":"{}/api/timedtext?v={}&lang=en","name":{{"simpleText":"English"}},"languageCode":"en"}}]}}}}}};</script></body></html>"#,
        server.uri(),
        video_id
    )
}

async fn mount_video(server: &MockServer, video_id: &str) {
    Mock::given(method("GET"))
        .and(path("/watch"))
        .and(query_param("v", video_id))
        .respond_with(ResponseTemplate::new(200).set_body_raw(watch_page(server, video_id), "text/html"))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .and(query_param("v", video_id))
        .respond_with(ResponseTemplate::new(200).set_body_raw(TIMED_TEXT, "text/xml"))
        .expect(1)
        .mount(server)
        .await;
}

fn loader_for(server: &MockServer) -> YouTubeTranscriptLoader {
    let client = build_http_client(&Config::default()).unwrap();
    YouTubeTranscriptLoader::new(client, server.uri())
}

#[tokio::test]
async fn test_loads_segments_in_order() {
    let server = MockServer::start().await;
    mount_video(&server, "XYZ").await;

    let segments = loader_for(&server)
        .load("https://www.youtube.com/watch?v=XYZ")
        .await
        .unwrap();

    let texts: Vec<_> = segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(texts, vec!["Welcome back", "today we talk about \"Rust\""]);
    assert_eq!(segments[1].start, 1.5);
    assert_eq!(segments[1].duration, 2.0);
}

#[tokio::test]
async fn test_video_without_captions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/watch"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html><body>no captions</body></html>", "text/html"))
        .mount(&server)
        .await;

    let err = loader_for(&server)
        .load("https://www.youtube.com/watch?v=nocap")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::FetchError(msg) if msg.contains("nocap")));
}

#[tokio::test]
async fn test_short_link_is_summarized_from_transcript() {
    let server = MockServer::start().await;
    mount_video(&server, "abc123").await;
    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(body_string_contains("Welcome back\\n\\ntoday we talk about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "A video about Rust." } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        groq_api_url: server.uri(),
        youtube_base_url: server.uri(),
        groq_api_key: Some("gsk_env".to_string()),
        ..Default::default()
    };
    let summary = Summarizer::from_config(&config)
        .unwrap()
        .summarize("https://youtu.be/abc123?t=5", &SummaryOptions::default(), None)
        .await
        .unwrap();

    assert_eq!(summary.text, "A video about Rust.");
    assert_eq!(summary.target.kind(), "video");
    // No `v` parameter, so the short link is passed through untouched.
    assert_eq!(summary.target.url(), "https://youtu.be/abc123?t=5");
}
