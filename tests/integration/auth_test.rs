//! Integration tests for registration and the session flow.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_then_me() {
    let app = helpers::TestApp::new().await;
    let id = app.register("bob@dylan.com", "toto1234!").await;
    let token = app.connect("bob@dylan.com", "toto1234!").await;

    let response = app.get("/users/me", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "id": id, "email": "bob@dylan.com" }));
}

#[tokio::test]
async fn test_register_validation() {
    let app = helpers::TestApp::new().await;

    let cases = [
        (json!({}), "Missing email"),
        (json!({ "email": "a@b.c" }), "Missing password"),
    ];
    for (body, message) in cases {
        let response = app.request("POST", "/users", Some(body), &[]).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], message);
    }

    app.register("a@b.c", "pw").await;
    let response = app
        .request(
            "POST",
            "/users",
            Some(json!({ "email": "a@b.c", "password": "other" })),
            &[],
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Already exist");
}

#[tokio::test]
async fn test_connect_rejects_bad_credentials() {
    let app = helpers::TestApp::new().await;
    app.register("bob@dylan.com", "toto1234!").await;

    for headers in [
        vec![("authorization", helpers::basic("bob@dylan.com", "wrong"))],
        vec![("authorization", helpers::basic("nobody@x.com", "toto1234!"))],
        vec![("authorization", "Basic %%%".to_string())],
        vec![],
    ] {
        let response = app.request("GET", "/connect", None, &headers).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "Unauthorized");
    }
}

#[tokio::test]
async fn test_disconnect_revokes_token() {
    let app = helpers::TestApp::new().await;
    let token = app.signed_in("bob@dylan.com").await;

    let response = app
        .request("GET", "/disconnect", None, &[("x-token", token.clone())])
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.get("/users/me", Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/disconnect", None, &[("x-token", token)])
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = helpers::TestApp::new().await;

    for path in ["/users/me", "/files", "/disconnect"] {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
        let response = app.get(path, Some("bogus")).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{path}");
    }
}

#[tokio::test]
async fn test_status_and_stats() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/status", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "redis": true, "db": true }));

    let token = app.signed_in("bob@dylan.com").await;
    app.create_file(&token, json!({ "name": "docs", "type": "folder" }))
        .await;

    let response = app.get("/stats", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "users": 1, "files": 1 }));
}
