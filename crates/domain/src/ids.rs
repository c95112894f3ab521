use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Key of a story node within a story graph.
///
/// Node ids are author-chosen strings (`"start"`, `"repair_core"`). Any string
/// can be used for a lookup; only graph construction insists on non-empty ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Id of the node every traversal begins at.
    pub const START: &'static str = "start";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id for use as a graph key, rejecting the empty string.
    pub fn parse(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::invalid_id("node id cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn start() -> Self {
        Self(Self::START.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
