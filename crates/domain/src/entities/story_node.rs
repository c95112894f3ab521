//! Story node entity - One page of the narrative
//!
//! A node is a block of narrative text plus the ordered list of choices the
//! reader can make from it. Choices are owned by their node and have no
//! identity of their own; the order they are declared in is the order they
//! are shown in.

use serde::{Deserialize, Serialize};

use crate::NodeId;

/// A labelled edge from one story node to another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Text shown to the reader
    pub label: String,
    /// Node the reader is taken to; not guaranteed to exist in the graph
    pub target: NodeId,
}

impl Choice {
    pub fn new(label: impl Into<String>, target: impl Into<NodeId>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// A unit of narrative content and its outgoing choices
///
/// `StoryNode::default()` is the empty node: no text and no choices. It is
/// what an unknown node id renders as.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    pub text: String,
    pub choices: Vec<Choice>,
}

impl StoryNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice after any already declared
    pub fn with_choice(mut self, label: impl Into<String>, target: impl Into<NodeId>) -> Self {
        self.choices.push(Choice::new(label, target));
        self
    }

    /// A node with no choices ends the story
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn targets(&self) -> impl Iterator<Item = &NodeId> {
        self.choices.iter().map(|c| &c.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_keep_declaration_order() {
        let node = StoryNode::new("A fork in the corridor.")
            .with_choice("Go left.", "left")
            .with_choice("Go right.", "right")
            .with_choice("Go back.", "start");

        let targets: Vec<&str> = node.targets().map(NodeId::as_str).collect();
        assert_eq!(targets, vec!["left", "right", "start"]);
        assert_eq!(node.choices[1].label, "Go right.");
    }

    #[test]
    fn terminal_nodes_have_no_choices() {
        assert!(StoryNode::new("The end.").is_terminal());
        assert!(!StoryNode::new("Keep going.")
            .with_choice("Onward.", "next")
            .is_terminal());
    }

    #[test]
    fn default_node_is_empty() {
        let node = StoryNode::default();
        assert!(node.text.is_empty());
        assert!(node.is_terminal());
    }
}
