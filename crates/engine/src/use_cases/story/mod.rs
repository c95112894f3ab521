//! Story use cases.
//!
//! Rendering a step of the story: resolve the requested node id, look it up,
//! and format the result as an HTML fragment. The current position in the
//! story lives entirely in the client; nothing here keeps per-reader state.

pub mod fragment;

use std::sync::Arc;

use storyweb_domain::{NodeId, StoryNode};

use crate::infrastructure::ports::StoryGraphPort;

pub use fragment::{step_url, CHOICE_PARAM, STORY_STEP_PATH};

/// Container for story use cases.
pub struct StoryUseCases {
    pub renderer: Arc<FragmentRenderer>,
}

impl StoryUseCases {
    pub fn new(renderer: Arc<FragmentRenderer>) -> Self {
        Self { renderer }
    }
}

/// URL the landing page loads first.
pub fn initial_story_url() -> String {
    step_url(&NodeId::start())
}

/// A rendered story step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    node_id: NodeId,
    resolved: bool,
    markup: String,
}

impl Fragment {
    /// Node id after default substitution
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// False when the id was unknown and the empty node was rendered
    pub fn resolved(&self) -> bool {
        self.resolved
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn into_markup(self) -> String {
        self.markup
    }
}

/// Turns node ids into HTML fragments.
///
/// Pure with respect to the graph: the same id always renders the same bytes.
pub struct FragmentRenderer {
    graph: Arc<dyn StoryGraphPort>,
}

impl FragmentRenderer {
    pub fn new(graph: Arc<dyn StoryGraphPort>) -> Self {
        Self { graph }
    }

    /// Render the node for `requested`.
    ///
    /// An empty id means the start node. An unknown id renders the empty node
    /// (no text, no choices) rather than failing.
    pub fn render(&self, requested: &str) -> Fragment {
        let node_id = if requested.is_empty() {
            NodeId::start()
        } else {
            NodeId::new(requested)
        };

        let (node, resolved) = match self.graph.node(node_id.as_str()) {
            Some(node) => (node, true),
            None => (StoryNode::default(), false),
        };

        Fragment {
            markup: fragment::node_markup(&node),
            node_id,
            resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::colony_story;
    use crate::infrastructure::ports::MockStoryGraphPort;
    use storyweb_domain::StoryGraph;

    const EMPTY_FRAGMENT: &str = r#"<p class="text-lg mb-4"></p>"#;

    fn colony_renderer() -> FragmentRenderer {
        FragmentRenderer::new(Arc::new(colony_story().unwrap()))
    }

    /// (target, label) pairs in the order they appear in the markup.
    fn rendered_choices(markup: &str) -> Vec<(String, String)> {
        let marker = r#"hx-get="/next?choice="#;
        let mut choices = Vec::new();
        let mut rest = markup;
        while let Some(pos) = rest.find(marker) {
            rest = &rest[pos + marker.len()..];
            let target_end = rest.find('"').unwrap();
            let target = rest[..target_end].to_string();
            let label_start = rest.find('>').unwrap() + 1;
            let label_end = rest.find("</div>").unwrap();
            choices.push((target, rest[label_start..label_end].to_string()));
            rest = &rest[label_end..];
        }
        choices
    }

    #[test]
    fn every_node_renders_text_and_choices_in_order() {
        let graph = colony_story().unwrap();
        let renderer = FragmentRenderer::new(Arc::new(graph.clone()));

        for (id, node) in graph.iter() {
            let fragment = renderer.render(id.as_str());
            assert!(fragment.resolved());
            assert!(fragment.markup().contains(&node.text), "text missing for {id}");

            let expected: Vec<(String, String)> = node
                .choices
                .iter()
                .map(|c| (c.target.to_string(), c.label.clone()))
                .collect();
            assert_eq!(rendered_choices(fragment.markup()), expected, "choices for {id}");
        }
    }

    #[test]
    fn empty_id_renders_start() {
        let renderer = colony_renderer();
        let empty = renderer.render("");
        assert_eq!(empty, renderer.render("start"));
        assert_eq!(empty.node_id().as_str(), NodeId::START);
    }

    #[test]
    fn unknown_id_renders_empty_fragment() {
        let renderer = colony_renderer();
        for id in ["nowhere", "START", " start", "<script>"] {
            let fragment = renderer.render(id);
            assert!(!fragment.resolved());
            assert_eq!(fragment.node_id().as_str(), id);
            assert_eq!(fragment.markup(), EMPTY_FRAGMENT);
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let renderer = colony_renderer();
        let first = renderer.render("alien_communication").into_markup();
        for _ in 0..3 {
            assert_eq!(renderer.render("alien_communication").into_markup(), first);
        }
    }

    #[test]
    fn start_scenario() {
        let fragment = colony_renderer().render("start");
        assert!(fragment.markup().contains("Welcome to the colony"));

        let targets: Vec<String> = rendered_choices(fragment.markup())
            .into_iter()
            .map(|(target, _)| target)
            .collect();
        assert_eq!(targets, vec!["core", "array", "signals"]);
    }

    #[test]
    fn end_scenario() {
        let fragment = colony_renderer().render("end");
        assert!(fragment.markup().contains("The adventure ends here"));
        assert!(rendered_choices(fragment.markup()).is_empty());
        assert!(!fragment.markup().contains("<div"));
    }

    #[test]
    fn alien_encounter_scenario() {
        let fragment = colony_renderer().render("alien_encounter");
        assert_eq!(
            rendered_choices(fragment.markup()),
            vec![
                (
                    "accept_help".to_string(),
                    "Accept the alien's help.".to_string()
                ),
                (
                    "repair_core".to_string(),
                    "Decline and try to fix it yourself.".to_string()
                ),
            ]
        );
    }

    #[test]
    fn looks_up_start_when_id_is_empty() {
        let mut graph = MockStoryGraphPort::new();
        graph
            .expect_node()
            .withf(|id| id == "start")
            .times(1)
            .returning(|_| Some(StoryNode::new("Begin.").with_choice("Go.", "next")));

        let fragment = FragmentRenderer::new(Arc::new(graph)).render("");
        assert_eq!(fragment.markup(), r##"<p class="text-lg mb-4">Begin.</p><div class="choice p-4 m-2 bg-gray-800 text-white rounded-lg cursor-pointer hover:bg-gray-600 transition" hx-get="/next?choice=next" hx-target="#content">Go.</div>"##);
    }

    #[test]
    fn dangling_target_renders_but_leads_nowhere() {
        let graph = StoryGraph::builder()
            .node("start", StoryNode::new("Door.").with_choice("Open it.", "void"))
            .build()
            .unwrap();
        let renderer = FragmentRenderer::new(Arc::new(graph));

        assert_eq!(rendered_choices(renderer.render("start").markup()).len(), 1);
        assert!(!renderer.render("void").resolved());
    }

    #[test]
    fn initial_url_requests_start() {
        assert_eq!(initial_story_url(), "/next?choice=start");
    }
}
