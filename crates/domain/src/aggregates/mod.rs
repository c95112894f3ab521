//! Aggregate roots - domain objects that own their related data
//!
//! A story graph owns its nodes, and each node owns its choices. Once built
//! an aggregate is never mutated.

pub mod story_graph;

pub use story_graph::{DanglingTarget, IntegrityReport, StoryGraph, StoryGraphBuilder};
