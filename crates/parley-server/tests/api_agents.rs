mod common;

use axum::http::StatusCode;
use common::*;
use parley_server::app;
use parley_types::PageAccess;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn dashboard_provider() -> Arc<FakeIdentityProvider> {
    Arc::new(
        FakeIdentityProvider::default()
            .with_user(
                "owner-token",
                identity("user_owner", Some("owner@example.com"), &[PageAccess::Dashboard]),
            )
            .with_user(
                "other-token",
                identity("user_other", Some("other@example.com"), &[PageAccess::Dashboard]),
            ),
    )
}

#[tokio::test]
async fn create_then_list_round_trips_through_the_store() {
    let platform = Arc::new(FakePlatform::default());
    let app = app(state(dashboard_provider(), None, platform.clone()));

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/agents/create",
            Some("owner-token"),
            Some(json!({
                "name": "Study Buddy",
                "systemPrompt": "You help with homework.",
                "firstMessage": "Hi!"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["name"], "Study Buddy");
    let agent_id = body["agentId"].as_str().unwrap().to_string();
    assert_eq!(platform.created.lock().unwrap().len(), 1);

    let response = app
        .oneshot(request("GET", "/api/agents/list", Some("owner-token"), None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["agents"][0]["agentId"], agent_id);
    assert_eq!(body["agents"][0]["name"], "Study Buddy");
}

#[tokio::test]
async fn agents_are_not_visible_across_users() {
    let app = app(state(
        dashboard_provider(),
        None,
        Arc::new(FakePlatform::default()),
    ));

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/agents/create",
            Some("owner-token"),
            Some(json!({ "name": "Private Agent" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(request("GET", "/api/agents/list", Some("other-token"), None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn delete_removes_locally_even_when_platform_fails() {
    let platform = Arc::new(FakePlatform {
        fail_delete: true,
        ..FakePlatform::default()
    });
    let app = app(state(dashboard_provider(), None, platform.clone()));

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/agents/create",
            Some("owner-token"),
            Some(json!({ "name": "Doomed Agent" })),
        ))
        .await
        .unwrap();
    let agent_id = body_json(response).await["agentId"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/agents/{agent_id}"),
            Some("owner-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(platform.deleted.lock().unwrap().as_slice(), [agent_id]);

    let response = app
        .oneshot(request("GET", "/api/agents/list", Some("owner-token"), None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["total"], 0);
}

#[tokio::test]
async fn deleting_an_unknown_agent_is_404() {
    let app = app(state(
        dashboard_provider(),
        None,
        Arc::new(FakePlatform::default()),
    ));

    let response = app
        .oneshot(request(
            "DELETE",
            "/api/agents/agent_unknown",
            Some("owner-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_another_users_agent_is_404() {
    let app = app(state(
        dashboard_provider(),
        None,
        Arc::new(FakePlatform::default()),
    ));

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/agents/create",
            Some("owner-token"),
            Some(json!({ "name": "Private Agent" })),
        ))
        .await
        .unwrap();
    let agent_id = body_json(response).await["agentId"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(request(
            "DELETE",
            &format!("/api/agents/{agent_id}"),
            Some("other-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
