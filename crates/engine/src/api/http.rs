//! HTTP routes.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use crate::app::App;
use crate::use_cases::story::{CHOICE_PARAM, STORY_STEP_PATH};

/// Create all HTTP routes.
///
/// Files under `static_dir` are served as-is below `/static`.
pub fn routes(static_dir: &Path) -> Router<Arc<App>> {
    Router::new()
        .route("/", get(index))
        .route(STORY_STEP_PATH, get(story_step))
        .route("/api/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
}

async fn health() -> &'static str {
    "OK"
}

async fn index(State(app): State<Arc<App>>) -> Html<String> {
    Html(app.index_page.html().to_string())
}

/// First value of the choice parameter; repeats after it are ignored.
fn requested_choice(pairs: Vec<(String, String)>) -> String {
    pairs
        .into_iter()
        .find(|(key, _)| key == CHOICE_PARAM)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Render the requested story node. Unknown ids still answer 200 with the
/// empty fragment.
async fn story_step(
    State(app): State<Arc<App>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Html<String> {
    let requested = requested_choice(pairs);
    let fragment = app.use_cases.story.renderer.render(&requested);

    if fragment.resolved() {
        tracing::debug!(node_id = %fragment.node_id(), "Rendered story node");
    } else {
        tracing::warn!(
            node_id = %fragment.node_id(),
            "Unknown story node requested, rendering empty fragment"
        );
    }

    Html(fragment.into_markup())
}
