//! Filekeep server: multi-tenant file storage over HTTP.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use filekeep_api::AppState;
use filekeep_auth::{AuthService, SessionStore};
use filekeep_cache::CacheManager;
use filekeep_core::config::AppConfig;
use filekeep_core::error::AppError;
use filekeep_core::traits::blob::BlobStore;
use filekeep_core::traits::cache::CacheProvider;
use filekeep_database::PersistentStore;
use filekeep_service::{FileService, StatusService, UserService};
use filekeep_storage::{LocalBlobStore, ThumbnailGenerator};
use filekeep_worker::{ThumbnailJobHandler, WorkerRunner};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `FILEKEEP_ENV` overlay and the environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FILEKEEP_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing. `RUST_LOG` takes precedence over `logging.level`.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Filekeep v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Document store ───────────────────────────────────
    tracing::info!(provider = %config.database.provider, "Opening document store");
    let store = Arc::new(PersistentStore::connect(&config.database).await?);

    // ── Step 2: Session cache ────────────────────────────────────
    let cache = CacheManager::new(&config.cache).await?;
    tracing::info!(provider = cache.provider_name(), "Session cache ready");
    let cache: Arc<dyn CacheProvider> = Arc::new(cache);
    let sessions = SessionStore::new(cache, &config.session);

    // ── Step 3: Blob storage ─────────────────────────────────────
    let blob_root = config.storage.root_dir();
    tracing::info!(root = %blob_root.display(), "Using blob root");
    let blobs: Arc<dyn BlobStore> = Arc::new(LocalBlobStore::new(blob_root));
    blobs.ensure_root().await?;

    // ── Step 4: Thumbnail queue ──────────────────────────────────
    let queue = filekeep_worker::queue::connect(&config.worker, &config.cache.redis).await?;

    // ── Step 5: Services ─────────────────────────────────────────
    let state = AppState {
        auth: Arc::new(AuthService::new(store.users(), sessions.clone())),
        users: Arc::new(UserService::new(store.users())),
        files: Arc::new(FileService::new(
            store.files(),
            Arc::clone(&blobs),
            Arc::clone(&queue.dispatcher),
        )),
        status: Arc::new(StatusService::new(Arc::clone(&store), sessions)),
        max_body_bytes: config.server.max_body_bytes,
    };

    // ── Step 6: Shutdown channel & worker ────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let worker_handle = if config.worker.enabled {
        let generator = ThumbnailGenerator::new(blobs, config.worker.thumbnail_widths.clone());
        let handler = Arc::new(ThumbnailJobHandler::new(store.files(), generator));
        let runner = WorkerRunner::new(Arc::clone(&queue.source), handler, &config.worker);
        Some(tokio::spawn(async move { runner.run(shutdown_rx).await }))
    } else {
        tracing::info!("Thumbnail worker disabled");
        None
    };

    // ── Step 7: HTTP server ──────────────────────────────────────
    let app = filekeep_api::build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "Filekeep server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = shutdown_tx.send(true);
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 8: Drain ────────────────────────────────────────────
    if let Some(handle) = worker_handle {
        let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
        if tokio::time::timeout(grace, handle).await.is_err() {
            tracing::warn!("Thumbnail worker did not stop within the grace period");
        }
    }
    store.close().await;

    tracing::info!("Filekeep stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
