//! Integration tests for file creation, listing, publishing and content.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use filekeep_core::types::ThumbnailJob;

#[tokio::test]
async fn test_create_read_roundtrip() {
    let app = helpers::TestApp::new().await;
    let token = app.signed_in("bob@dylan.com").await;

    let created = app
        .create_file(
            &token,
            json!({ "name": "hello.txt", "type": "file", "data": helpers::b64(b"Hello Webstack!") }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["parentId"], 0);
    assert_eq!(created.body["isPublic"], false);
    assert!(created.body["localPath"].is_string());
    let id = created.body["id"].as_str().unwrap().to_string();

    let fetched = app.get(&format!("/files/{id}"), Some(&token)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "hello.txt");
    assert!(fetched.body.get("localPath").is_none());

    let content = app.get(&format!("/files/{id}/data"), Some(&token)).await;
    assert_eq!(content.status, StatusCode::OK);
    assert_eq!(&content.raw[..], b"Hello Webstack!");
    assert_eq!(content.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn test_create_validation_order() {
    let app = helpers::TestApp::new().await;
    let token = app.signed_in("bob@dylan.com").await;

    let cases = [
        (json!({ "type": "file", "data": "eA==" }), "Missing name"),
        (json!({ "name": "a" }), "Invalid type"),
        (json!({ "name": "a", "type": "video" }), "Invalid type"),
        (json!({ "name": "a", "type": "file" }), "Missing data"),
        (json!({ "name": "a", "type": "file", "data": "" }), "Missing data"),
        (json!({ "name": "a", "type": "image", "data": "@@@" }), "Invalid data"),
        (
            json!({ "name": "a", "type": "folder", "parentId": "5f1e7d3a9b8c7d6e5f4a3b2c" }),
            "Invalid parent folder",
        ),
    ];
    for (body, message) in cases {
        let response = app.create_file(&token, body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["error"], message);
    }
    assert_eq!(app.store.nb_files().await.unwrap(), 0);
}

#[tokio::test]
async fn test_files_are_scoped_to_owner() {
    let app = helpers::TestApp::new().await;
    let bob = app.signed_in("bob@dylan.com").await;
    let alice = app.signed_in("alice@x.com").await;

    let created = app
        .create_file(&bob, json!({ "name": "docs", "type": "folder" }))
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();

    let response = app.get(&format!("/files/{id}"), Some(&alice)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not found");

    let response = app.get("/files/not-an-id", Some(&bob)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.get("/files", Some(&alice)).await;
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_listing_pages_and_parents() {
    let app = helpers::TestApp::new().await;
    let token = app.signed_in("bob@dylan.com").await;

    let folder = app
        .create_file(&token, json!({ "name": "docs", "type": "folder" }))
        .await;
    let folder_id = folder.body["id"].as_str().unwrap().to_string();

    for i in 0..22 {
        let response = app
            .create_file(
                &token,
                json!({ "name": format!("f{i}.txt"), "type": "file", "parentId": folder_id, "data": "eA==" }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let root = app.get("/files", Some(&token)).await;
    assert_eq!(root.body.as_array().unwrap().len(), 1);

    let first = app
        .get(&format!("/files?parentId={folder_id}"), Some(&token))
        .await;
    let second = app
        .get(&format!("/files?parentId={folder_id}&page=1"), Some(&token))
        .await;
    let first = first.body.as_array().unwrap();
    let second = second.body.as_array().unwrap();

    assert_eq!(first.len(), 20);
    assert_eq!(second.len(), 2);
    assert_eq!(first[0]["name"], "f21.txt");
    assert_eq!(second[1]["name"], "f0.txt");
    assert!(first.iter().all(|f| f["parentId"] == folder_id.as_str()));

    let bogus = app.get("/files?page=-4&parentId=0", Some(&token)).await;
    assert_eq!(bogus.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_publish_controls_anonymous_reads() {
    let app = helpers::TestApp::new().await;
    let bob = app.signed_in("bob@dylan.com").await;
    let alice = app.signed_in("alice@x.com").await;

    let created = app
        .create_file(
            &bob,
            json!({ "name": "notes.md", "type": "file", "data": helpers::b64(b"# hi") }),
        )
        .await;
    let id = created.body["id"].as_str().unwrap().to_string();
    let data_path = format!("/files/{id}/data");

    assert_eq!(app.get(&data_path, None).await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.get(&data_path, Some(&alice)).await.status,
        StatusCode::NOT_FOUND
    );

    for _ in 0..2 {
        let response = app
            .request(
                "PUT",
                &format!("/files/{id}/publish"),
                None,
                &[("x-token", bob.clone())],
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["isPublic"], true);
    }

    let response = app.get(&data_path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(&response.raw[..], b"# hi");

    let response = app
        .request(
            "PUT",
            &format!("/files/{id}/unpublish"),
            None,
            &[("x-token", alice)],
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &format!("/files/{id}/unpublish"),
            None,
            &[("x-token", bob)],
        )
        .await;
    assert_eq!(response.body["isPublic"], false);
    assert_eq!(app.get(&data_path, None).await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_folder_has_no_content() {
    let app = helpers::TestApp::new().await;
    let token = app.signed_in("bob@dylan.com").await;
    let folder = app
        .create_file(&token, json!({ "name": "docs", "type": "folder", "isPublic": true }))
        .await;
    let id = folder.body["id"].as_str().unwrap();

    let response = app.get(&format!("/files/{id}/data"), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "A folder doesn't have content");
}

#[tokio::test]
async fn test_image_enqueues_thumbnail_job() {
    let app = helpers::TestApp::new().await;
    let token = app.signed_in("bob@dylan.com").await;

    let created = app
        .create_file(
            &token,
            json!({ "name": "pic.png", "type": "image", "isPublic": true, "data": "iVBORw0KGgo=" }),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);

    let job: ThumbnailJob = app.queue.source.next().await.unwrap().expect("job queued");
    assert_eq!(job.file_id.to_string(), created.body["id"].as_str().unwrap());
    assert_eq!(job.user_id.to_string(), created.body["userId"].as_str().unwrap());
    assert!(app.queue.source.next().await.unwrap().is_none());

    let id = created.body["id"].as_str().unwrap();
    let response = app.get(&format!("/files/{id}/data?size=500"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
