//! Unified error types for the domain layer
//!
//! Story graphs are assembled once from literal data, so these errors only
//! surface while a graph is being built. Lookups never fail; an unknown node
//! id is an ordinary `None`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),

    /// A node id was declared twice while building a graph
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),
}

impl DomainError {
    /// Creates an invalid ID error.
    ///
    /// # Example
    /// ```ignore
    /// if id.is_empty() {
    ///     return Err(DomainError::invalid_id("node id cannot be empty"));
    /// }
    /// ```
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Create a duplicate node error
    pub fn duplicate_node(id: impl Into<String>) -> Self {
        Self::DuplicateNode(id.into())
    }
}
