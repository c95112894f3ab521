//! Port traits for infrastructure boundaries.
//!
//! The story graph is the only dependency the renderer has, so it is the only
//! port. Swapping in an alternate graph (tests, other stories) means handing
//! the renderer a different `Arc<dyn StoryGraphPort>`.

mod story;

pub use story::StoryGraphPort;

#[cfg(test)]
pub use story::MockStoryGraphPort;
