mod common;

use axum::http::StatusCode;
use common::*;
use parley_analysis::BLOCK_ERROR_SENTINEL;
use parley_server::app;
use parley_types::PageAccess;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn analyst_provider() -> Arc<FakeIdentityProvider> {
    Arc::new(FakeIdentityProvider::default().with_user(
        "analyst-token",
        identity(
            "user_1",
            Some("analyst@example.com"),
            &[PageAccess::TranscriptAnalyzer],
        ),
    ))
}

#[tokio::test]
async fn processes_all_blocks() {
    let summarizer = Arc::new(FakeSummarizer::default());
    let app = app(state(
        analyst_provider(),
        Some(summarizer.clone()),
        Arc::new(FakePlatform::default()),
    ));

    let response = app
        .oneshot(request(
            "POST",
            "/api/transcript/process",
            Some("analyst-token"),
            Some(json!({
                "transcript": "We discussed the launch plan.",
                "customBlocks": [
                    { "key": "summary", "prompt": "summarize" },
                    { "key": "goals", "prompt": "list goals" }
                ]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["summary"], "result for summarize");
    assert_eq!(body["goals"], "result for list goals");
    assert_eq!(body["originalTranscript"], "We discussed the launch plan.");
    assert!(body["timestamp"].is_string());
    assert_eq!(summarizer.call_count(), 2);
}

#[tokio::test]
async fn failed_block_yields_sentinel_not_batch_failure() {
    let summarizer = Arc::new(FakeSummarizer::default());
    let app = app(state(
        analyst_provider(),
        Some(summarizer.clone()),
        Arc::new(FakePlatform::default()),
    ));

    let response = app
        .oneshot(request(
            "POST",
            "/api/transcript/process",
            Some("analyst-token"),
            Some(json!({
                "transcript": "We discussed the launch plan.",
                "customBlocks": [
                    { "key": "one", "prompt": "first" },
                    { "key": "two", "prompt": "please fail" },
                    { "key": "three", "prompt": "third" }
                ]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["one"], "result for first");
    assert_eq!(body["two"], BLOCK_ERROR_SENTINEL);
    assert_eq!(body["three"], "result for third");
    assert_eq!(summarizer.call_count(), 3);
}

#[tokio::test]
async fn missing_transcript_is_400_before_any_call() {
    let summarizer = Arc::new(FakeSummarizer::default());
    let app = app(state(
        analyst_provider(),
        Some(summarizer.clone()),
        Arc::new(FakePlatform::default()),
    ));

    for body in [
        json!({ "customBlocks": [{ "key": "summary", "prompt": "summarize" }] }),
        json!({ "transcript": "", "customBlocks": [{ "key": "summary", "prompt": "summarize" }] }),
        json!({ "transcript": "   ", "customBlocks": [{ "key": "summary", "prompt": "summarize" }] }),
    ] {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/transcript/process",
                Some("analyst-token"),
                Some(body),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Transcript is required");
    }

    assert_eq!(summarizer.call_count(), 0);
}

#[tokio::test]
async fn missing_credential_is_500_before_any_call() {
    // No summarizer wired: the completion credential is absent.
    let app = app(state(
        analyst_provider(),
        None,
        Arc::new(FakePlatform::default()),
    ));

    let response = app
        .oneshot(request(
            "POST",
            "/api/transcript/process",
            Some("analyst-token"),
            Some(json!({
                "transcript": "hello",
                "customBlocks": [{ "key": "summary", "prompt": "summarize" }]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Server configuration error - API key missing");
}

#[tokio::test]
async fn block_catalog_seeds_a_session() {
    let app = app(state(
        analyst_provider(),
        None,
        Arc::new(FakePlatform::default()),
    ));

    let response = app
        .oneshot(request(
            "GET",
            "/api/transcript/blocks",
            Some("analyst-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let blocks = body.as_array().unwrap();
    assert_eq!(blocks.len(), 8);
    assert_eq!(blocks[0]["key"], "summary");
    assert_eq!(blocks[0]["enabled"], true);
    assert_eq!(blocks[0]["custom"], false);
    // participants and feedback ship disabled.
    let disabled: Vec<&str> = blocks
        .iter()
        .filter(|b| b["enabled"] == false)
        .map(|b| b["key"].as_str().unwrap())
        .collect();
    assert_eq!(disabled, vec!["participants", "feedback"]);
}

#[tokio::test]
async fn identical_batches_are_processed_independently() {
    let summarizer = Arc::new(FakeSummarizer::default());
    let app = app(state(
        analyst_provider(),
        Some(summarizer.clone()),
        Arc::new(FakePlatform::default()),
    ));

    let body = json!({
        "transcript": "same transcript",
        "customBlocks": [{ "key": "summary", "prompt": "summarize" }]
    });

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(request(
                "POST",
                "/api/transcript/process",
                Some("analyst-token"),
                Some(body.clone()),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    // No caching across batches.
    assert_eq!(summarizer.call_count(), 2);
}
