//! Generic-tree to presentation-tree transform.

use prettymark_dom::{Attribute, Node, is_void_element};

use crate::tree::{AttributeView, CloseTagView, ElementView, TagView, ViewNode};

/// Transform a generic tree into presentation nodes.
///
/// Returns a sequence because fragments flatten into their children rather
/// than wrapping themselves in an extra presentation node; every other node
/// kind yields exactly one entry.
///
/// Void-set matching here is case-insensitive, and the displayed tag name is
/// always the lower-cased form regardless of how the source wrote it. This
/// normalizes display without altering what the parser recorded: a `<BR>`
/// scanned as an ordinary element still presents as a void `br` with no
/// children and no closing tag.
#[must_use]
pub fn pretty_print(node: &Node) -> Vec<ViewNode> {
    match node {
        Node::Fragment { children } => children.iter().flat_map(pretty_print).collect(),
        Node::Comment { text } => vec![ViewNode::Comment { text: text.clone() }],
        Node::Text { text } => vec![ViewNode::Text { text: text.clone() }],
        Node::Element {
            tag_name,
            attributes,
            children,
        } => {
            let name = tag_name.to_lowercase();
            let open_tag = TagView {
                name: name.clone(),
                attributes: attributes.iter().map(attribute_view).collect(),
            };
            let element = if is_void_element(&name) {
                ElementView {
                    is_void: true,
                    open_tag,
                    children: Vec::new(),
                    close_tag: None,
                }
            } else {
                ElementView {
                    is_void: false,
                    open_tag,
                    children: children.iter().flat_map(pretty_print).collect(),
                    close_tag: Some(CloseTagView { name }),
                }
            };
            vec![ViewNode::Element(element)]
        }
    }
}

/// One attribute's rendering view: lower-cased name, value only when the
/// source actually had one.
fn attribute_view(attribute: &Attribute) -> AttributeView {
    AttributeView {
        name: attribute.name.to_lowercase(),
        value: attribute
            .has_value()
            .then(|| attribute.value.clone()),
    }
}
