//! End-to-end tests: raw markup through the parser and the transform.

use prettymark_parser::parse;
use prettymark_view::{ViewNode, pretty_print};

/// Helper running the whole pipeline.
fn format(source: &str) -> Vec<ViewNode> {
    pretty_print(&parse(source))
}

/// Helper to unwrap a single element view.
fn as_element(node: &ViewNode) -> &prettymark_view::ElementView {
    match node {
        ViewNode::Element(view) => view,
        other => panic!("expected element view, got {other:?}"),
    }
}

#[test]
fn test_bare_void_element() {
    let views = format("<br>");
    assert_eq!(views.len(), 1);
    let view = as_element(&views[0]);
    assert!(view.is_void);
    assert_eq!(view.open_tag.name, "br");
    assert!(view.open_tag.attributes.is_empty());
    assert!(view.children.is_empty());
    assert!(view.close_tag.is_none());
}

#[test]
fn test_element_with_attributes_and_text() {
    let views = format(r#"<div class="a" id=x>hi</div>"#);
    let view = as_element(&views[0]);
    assert!(!view.is_void);
    assert_eq!(view.open_tag.name, "div");

    let attrs = &view.open_tag.attributes;
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs[0].name, "class");
    assert_eq!(attrs[0].value.as_deref(), Some("a"));
    assert_eq!(attrs[1].name, "id");
    assert_eq!(attrs[1].value.as_deref(), Some("x"));

    assert_eq!(
        view.children,
        vec![ViewNode::Text {
            text: "hi".to_string()
        }]
    );
    assert_eq!(view.close_tag.as_ref().map(|c| c.name.as_str()), Some("div"));
}

#[test]
fn test_unclosed_element_still_gets_close_tag() {
    let views = format("<p>unclosed");
    let view = as_element(&views[0]);
    assert!(!view.is_void);
    assert_eq!(view.open_tag.name, "p");
    assert_eq!(
        view.children,
        vec![ViewNode::Text {
            text: "unclosed".to_string()
        }]
    );
    assert_eq!(view.close_tag.as_ref().map(|c| c.name.as_str()), Some("p"));
}

#[test]
fn test_lone_comment() {
    let views = format("<!-- hello -->");
    assert_eq!(
        views,
        vec![ViewNode::Comment {
            text: " hello ".to_string()
        }]
    );
}

#[test]
fn test_self_closed_void_with_attribute() {
    let views = format("<img src='x.png'/>");
    assert_eq!(views.len(), 1);
    let view = as_element(&views[0]);
    assert!(view.is_void);
    assert_eq!(view.open_tag.name, "img");
    assert_eq!(view.open_tag.attributes[0].name, "src");
    assert_eq!(view.open_tag.attributes[0].value.as_deref(), Some("x.png"));
    assert!(view.close_tag.is_none());
}

#[test]
fn test_text_around_unclosed_element() {
    let views = format("a<b>c");
    assert_eq!(views.len(), 2);
    assert!(matches!(&views[0], ViewNode::Text { text } if text == "a"));

    let view = as_element(&views[1]);
    assert_eq!(view.open_tag.name, "b");
    assert_eq!(
        view.children,
        vec![ViewNode::Text {
            text: "c".to_string()
        }]
    );
    // The close tag is present even though the source never closed <b>.
    assert_eq!(view.close_tag.as_ref().map(|c| c.name.as_str()), Some("b"));
}

#[test]
fn test_upper_case_void_presents_as_void() {
    // The parser scans <BR> as an ordinary element (void matching there is
    // case-sensitive); the presentation layer normalizes it to a void `br`
    // and drops whatever was parsed underneath it.
    let views = format("<BR>x");
    let view = as_element(&views[0]);
    assert!(view.is_void);
    assert_eq!(view.open_tag.name, "br");
    assert!(view.children.is_empty());
    assert!(view.close_tag.is_none());
}

#[test]
fn test_pipeline_is_idempotent() {
    let source = r#"x<div a="1"><br><!-- c --><p>y</div>"#;
    assert_eq!(format(source), format(source));
}

#[test]
fn test_pipeline_never_fails_on_junk() {
    for source in [
        "",
        "<",
        "</",
        "<>",
        "<!--",
        "<p a='",
        "<div ~ ! @>",
        "</orphan>",
        "a < b",
    ] {
        // Any finite input produces some presentation output.
        let _ = format(source);
    }
}
