//! HTML fragment formatting.
//!
//! The element structure here is the contract with the landing page: a text
//! paragraph followed by one htmx `div` per choice, each swapping the next
//! fragment into `#content`. Text and labels are trusted author content and
//! are inserted verbatim.

use storyweb_domain::{Choice, NodeId, StoryNode};

/// Path of the story step endpoint.
pub const STORY_STEP_PATH: &str = "/next";

/// Query parameter carrying the requested node id.
pub const CHOICE_PARAM: &str = "choice";

/// Element the landing page swaps fragments into.
pub const CONTENT_TARGET: &str = "#content";

const TEXT_CLASS: &str = "text-lg mb-4";
const CHOICE_CLASS: &str =
    "choice p-4 m-2 bg-gray-800 text-white rounded-lg cursor-pointer hover:bg-gray-600 transition";

/// URL that requests the given node's fragment.
pub fn step_url(target: &NodeId) -> String {
    format!("{STORY_STEP_PATH}?{CHOICE_PARAM}={target}")
}

pub fn text_block(text: &str) -> String {
    format!(r#"<p class="{TEXT_CLASS}">{text}</p>"#)
}

pub fn choice_element(choice: &Choice) -> String {
    format!(
        r#"<div class="{CHOICE_CLASS}" hx-get="{url}" hx-target="{CONTENT_TARGET}">{label}</div>"#,
        url = step_url(&choice.target),
        label = choice.label,
    )
}

/// Text block followed by the choices in declaration order.
pub fn node_markup(node: &StoryNode) -> String {
    let mut html = text_block(&node.text);
    for choice in &node.choices {
        html.push_str(&choice_element(choice));
    }
    html
}
