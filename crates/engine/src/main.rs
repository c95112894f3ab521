//! Storyweb Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storyweb_domain::NodeId;
use storyweb_engine::{
    api,
    content::colony_story,
    infrastructure::{config::AppConfig, index_page::IndexPage},
    App,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root, then the working directory.
    load_dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storyweb_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Storyweb Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!(
        index_template = %config.index_template.display(),
        static_dir = %config.static_dir.display(),
        "Configuration loaded"
    );

    // Build the story graph once; it is read-only from here on.
    let graph = colony_story().context("Failed to build story graph")?;
    let report = graph.integrity_report(NodeId::START);
    tracing::info!(nodes = graph.len(), "Story graph loaded");
    for dangling in &report.dangling {
        tracing::warn!(
            source_node = %dangling.source,
            target_node = %dangling.target,
            "Choice points at an undeclared node"
        );
    }
    if !report.unreachable.is_empty() {
        tracing::warn!(
            unreachable = ?report.unreachable,
            "Story nodes unreachable from start"
        );
    }

    let index_page = IndexPage::load(&config.index_template, &config.title)?;

    let app = Arc::new(App::new(Arc::new(graph), index_page));

    let mut router = api::http::routes(&config.static_dir)
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = config.cors_layer() {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
