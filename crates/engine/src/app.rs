//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::index_page::IndexPage;
use crate::infrastructure::ports::StoryGraphPort;
use crate::use_cases::{FragmentRenderer, StoryUseCases};

/// Main application state.
///
/// Built once at startup and passed to HTTP handlers via Axum state.
/// Everything in here is read-only after construction.
pub struct App {
    pub use_cases: UseCases,
    pub index_page: IndexPage,
}

/// Container for all use cases.
pub struct UseCases {
    pub story: StoryUseCases,
}

impl App {
    pub fn new(graph: Arc<dyn StoryGraphPort>, index_page: IndexPage) -> Self {
        let renderer = Arc::new(FragmentRenderer::new(graph));

        Self {
            use_cases: UseCases {
                story: StoryUseCases::new(renderer),
            },
            index_page,
        }
    }
}
