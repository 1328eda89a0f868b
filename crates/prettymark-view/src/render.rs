//! Plain indented-text rendering of a presentation tree.
//!
//! This is the library-level fallback renderer: two spaces of indent per
//! nesting level, one line per structural unit. Hosts that want styling
//! (colors, widgets) walk the tree themselves instead.

use crate::tree::{TagView, ViewNode};

/// Render presentation nodes as indented text, one line per unit.
#[must_use]
pub fn render_plain(nodes: &[ViewNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        render_node(&mut out, node, 0);
    }
    out
}

fn render_node(out: &mut String, node: &ViewNode, indent: usize) {
    let prefix = "  ".repeat(indent);
    match node {
        ViewNode::Element(element) => {
            out.push_str(&prefix);
            out.push_str(&open_tag_text(&element.open_tag));
            out.push('\n');
            for child in &element.children {
                render_node(out, child, indent + 1);
            }
            if let Some(close_tag) = &element.close_tag {
                out.push_str(&prefix);
                out.push_str(&format!("</{}>\n", close_tag.name));
            }
        }
        ViewNode::Comment { text } => {
            out.push_str(&format!("{prefix}<!--{text}-->\n"));
        }
        ViewNode::Text { text } => {
            let display = text.replace('\n', "\\n");
            out.push_str(&format!("{prefix}\"{display}\"\n"));
        }
    }
}

/// The opening tag on one line: `<name attr="value" bare>`.
fn open_tag_text(tag: &TagView) -> String {
    let mut text = format!("<{}", tag.name);
    for attribute in &tag.attributes {
        match &attribute.value {
            Some(value) => text.push_str(&format!(" {}=\"{}\"", attribute.name, value)),
            None => text.push_str(&format!(" {}", attribute.name)),
        }
    }
    text.push('>');
    text
}
