//! Story graph aggregate - the complete narrative as a directed graph
//!
//! The graph maps node ids to nodes. It is assembled once through
//! [`StoryGraphBuilder`] and is read-only afterwards: there are no `&mut`
//! methods, so an `Arc<StoryGraph>` can be shared by any number of readers.
//!
//! Cycles are allowed. Choice targets are not required to resolve; use
//! [`StoryGraph::integrity_report`] to find the ones that don't.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::{DomainError, NodeId, StoryNode};

#[derive(Debug, Clone, Default, Serialize)]
pub struct StoryGraph {
    nodes: HashMap<NodeId, StoryNode>,
}

impl StoryGraph {
    pub fn builder() -> StoryGraphBuilder {
        StoryGraphBuilder::default()
    }

    /// Exact-match lookup. Absence is a normal outcome for unknown input.
    pub fn get(&self, id: &str) -> Option<&StoryNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All declared node ids, sorted
    pub fn node_ids(&self) -> Vec<&NodeId> {
        let mut ids: Vec<&NodeId> = self.nodes.keys().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &StoryNode)> {
        self.nodes.iter()
    }

    /// Choices whose target is not a declared node, ordered by source id
    /// and then by choice position.
    pub fn dangling_targets(&self) -> Vec<DanglingTarget> {
        let mut dangling = Vec::new();
        for source in self.node_ids() {
            for target in self.nodes[source].targets() {
                if !self.nodes.contains_key(target) {
                    dangling.push(DanglingTarget {
                        source: source.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        dangling
    }

    /// Declared nodes that cannot be reached by following choices from `root`.
    ///
    /// If `root` itself is not declared, every node is unreachable.
    pub fn unreachable_from(&self, root: &str) -> Vec<NodeId> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        if self.contains(root) {
            seen.insert(root);
            queue.push_back(root);
        }

        while let Some(id) = queue.pop_front() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            for target in node.targets() {
                if self.contains(target.as_str()) && seen.insert(target.as_str()) {
                    queue.push_back(target.as_str());
                }
            }
        }

        self.node_ids()
            .into_iter()
            .filter(|id| !seen.contains(id.as_str()))
            .cloned()
            .collect()
    }

    pub fn integrity_report(&self, root: &str) -> IntegrityReport {
        IntegrityReport {
            root: NodeId::new(root),
            dangling: self.dangling_targets(),
            unreachable: self.unreachable_from(root),
        }
    }
}

/// Accumulates nodes and produces an immutable [`StoryGraph`].
///
/// Node insertion order does not matter; choice order within a node does.
#[derive(Debug, Default)]
pub struct StoryGraphBuilder {
    nodes: HashMap<NodeId, StoryNode>,
    error: Option<DomainError>,
}

impl StoryGraphBuilder {
    pub fn node(mut self, id: impl Into<String>, node: StoryNode) -> Self {
        if self.error.is_some() {
            return self;
        }

        let id = match NodeId::parse(id) {
            Ok(id) => id,
            Err(e) => {
                self.error = Some(e);
                return self;
            }
        };

        if self.nodes.contains_key(&id) {
            self.error = Some(DomainError::duplicate_node(id.as_str()));
            return self;
        }

        self.nodes.insert(id, node);
        self
    }

    /// Finish the graph, reporting the first construction error if any.
    pub fn build(self) -> Result<StoryGraph, DomainError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(StoryGraph { nodes: self.nodes }),
        }
    }
}

/// A choice pointing at a node id the graph does not declare
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingTarget {
    pub source: NodeId,
    pub target: NodeId,
}

/// Content problems found by walking the graph. Never computed per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub root: NodeId,
    pub dangling: Vec<DanglingTarget>,
    pub unreachable: Vec<NodeId>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.unreachable.is_empty()
    }
}
