//! Built-in story content.

pub mod colony;

pub use colony::colony_story;
