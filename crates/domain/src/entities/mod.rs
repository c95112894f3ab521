//! Domain entities

mod story_node;

pub use story_node::{Choice, StoryNode};
