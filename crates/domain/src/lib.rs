//! Storyweb domain types.
//!
//! The story graph model: node ids, story nodes and their choices, and the
//! immutable graph that maps one to the other.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod ids;

pub use aggregates::{DanglingTarget, IntegrityReport, StoryGraph, StoryGraphBuilder};
pub use entities::{Choice, StoryNode};
pub use error::DomainError;
pub use ids::NodeId;
