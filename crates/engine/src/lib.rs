//! Storyweb Engine library.
//!
//! Serves an interactive story as htmx fragments.
//!
//! ## Structure
//!
//! - `content/` - Built-in story graphs
//! - `use_cases/` - Fragment rendering
//! - `infrastructure/` - Configuration, landing page template, graph port
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod content;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
