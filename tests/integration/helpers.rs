//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use filekeep_api::AppState;
use filekeep_auth::{AuthService, SessionStore};
use filekeep_cache::CacheManager;
use filekeep_core::config::AppConfig;
use filekeep_core::traits::cache::CacheProvider;
use filekeep_database::PersistentStore;
use filekeep_service::{FileService, StatusService, UserService};
use filekeep_storage::LocalBlobStore;
use filekeep_worker::queue::JobQueue;

/// Test application context backed entirely by in-memory stores.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<PersistentStore>,
    pub queue: JobQueue,
    /// Blob root; removed when the app is dropped.
    pub blob_root: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AppConfig::default();
        let blob_root = TempDir::new().expect("Failed to create blob root");

        let store = Arc::new(PersistentStore::in_memory());
        let cache: Arc<dyn CacheProvider> = Arc::new(
            CacheManager::new(&config.cache)
                .await
                .expect("Failed to init cache"),
        );
        let blobs = Arc::new(LocalBlobStore::new(blob_root.path().join("files_manager")));
        let queue = JobQueue::in_memory();

        let sessions = SessionStore::new(cache, &config.session);
        let state = AppState {
            auth: Arc::new(AuthService::new(store.users(), sessions.clone())),
            users: Arc::new(UserService::new(store.users())),
            files: Arc::new(FileService::new(
                store.files(),
                blobs,
                Arc::clone(&queue.dispatcher),
            )),
            status: Arc::new(StatusService::new(Arc::clone(&store), sessions)),
            max_body_bytes: config.server.max_body_bytes,
        };

        Self {
            router: filekeep_api::build_router(state),
            store,
            queue,
            blob_root,
        }
    }

    /// Register a user and return their id.
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/users",
                Some(serde_json::json!({ "email": email, "password": password })),
                &[],
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"]
            .as_str()
            .expect("No id in register response")
            .to_string()
    }

    /// Log in and return the session token.
    pub async fn connect(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "GET",
                "/connect",
                None,
                &[("authorization", basic(email, password))],
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("No token in connect response")
            .to_string()
    }

    /// Register and log in a fresh user.
    pub async fn signed_in(&self, email: &str) -> String {
        self.register(email, "toto1234!").await;
        self.connect(email, "toto1234!").await
    }

    /// Create a file as the owner of `token`.
    pub async fn create_file(&self, token: &str, body: Value) -> TestResponse {
        self.request("POST", "/files", Some(body), &[("x-token", token.to_string())])
            .await
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        let headers: Vec<(&str, String)> = token
            .map(|t| vec![("x-token", t.to_string())])
            .unwrap_or_default();
        self.request("GET", path, None, &headers).await
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, String)],
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json");
        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }
        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let raw = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");
        let body: Value = serde_json::from_slice(&raw).unwrap_or(Value::Null);

        TestResponse {
            status,
            content_type,
            raw,
            body,
        }
    }
}

/// `Authorization: Basic` value for the given credentials.
pub fn basic(email: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email}:{password}")))
}

pub fn b64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub raw: Bytes,
    /// Parsed JSON body, `Null` when the body is not JSON.
    pub body: Value,
}
