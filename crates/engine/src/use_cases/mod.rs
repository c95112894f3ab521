//! Use cases - request-level operations composed from the domain and ports.

pub mod story;

pub use story::{Fragment, FragmentRenderer, StoryUseCases};
