//! Rendered node trees and HTML output

use std::fmt;

use crate::attrs::AttrValue;
use crate::element::Element;
use crate::html::{escape, RenderError};

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A rendered markup node.
///
/// Produced by a component's render call and consumed immediately by the host
/// templating layer or by [`Node::to_html`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    /// Escaped text content.
    Text(String),
    /// Raw markup emitted verbatim (inline SVG icon constants).
    Raw(String),
    /// A sequence of nodes without a wrapper element.
    Fragment(Vec<Node>),
    /// Renders nothing; the unselected arm of a presence check.
    Empty,
}

/// An escaped text node.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// A raw markup node, emitted without escaping.
pub fn raw(markup: impl Into<String>) -> Node {
    Node::Raw(markup.into())
}

impl Node {
    pub fn empty() -> Node {
        Node::Empty
    }

    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Node {
        Node::Fragment(children.into_iter().collect())
    }

    /// Serializes the tree to an HTML string. Deterministic: the same tree
    /// always produces the same bytes.
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// Writes the serialized tree to an I/O sink.
    pub fn write_html<W: std::io::Write>(&self, sink: &mut W) -> Result<(), RenderError> {
        write!(sink, "{self}")?;
        Ok(())
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::Text(content.to_string())
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::Text(content)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(element) => write_element(element, f),
            Node::Text(content) => f.write_str(&escape(content)),
            Node::Raw(markup) => f.write_str(markup),
            Node::Fragment(children) => {
                for child in children {
                    write!(f, "{child}")?;
                }
                Ok(())
            }
            Node::Empty => Ok(()),
        }
    }
}

fn write_element(element: &Element, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<{}", element.tag)?;
    if !element.classes.is_empty() {
        write!(f, " class=\"{}\"", escape(&element.classes.join()))?;
    }
    for (name, value) in element.attrs.iter() {
        match value {
            AttrValue::Text(value) => write!(f, " {name}=\"{}\"", escape(value))?,
            AttrValue::Flag => write!(f, " {name}")?,
        }
    }
    f.write_str(">")?;
    if VOID_TAGS.contains(&element.tag.as_str()) {
        return Ok(());
    }
    for child in &element.children {
        write!(f, "{child}")?;
    }
    write!(f, "</{}>", element.tag)
}

/// Anything that renders to a node tree. Every Velum component implements
/// this; `to_html` is the snapshot surface tests compare against.
pub trait Render {
    fn render(&self) -> Node;

    fn to_html(&self) -> String {
        self.render().to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{div, img, input};

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(text("a < b").to_html(), "a &lt; b");
    }

    #[test]
    fn test_raw_is_not_escaped() {
        assert_eq!(raw("<svg></svg>").to_html(), "<svg></svg>");
    }

    #[test]
    fn test_void_tags_have_no_closing_tag() {
        assert_eq!(img().attr("src", "/a.png").into_node().to_html(), "<img src=\"/a.png\">");
        assert_eq!(
            input().attr("type", "text").flag("required", true).into_node().to_html(),
            "<input type=\"text\" required>"
        );
    }

    #[test]
    fn test_fragment_renders_children_in_order() {
        let node = Node::fragment([text("a"), text("b")]);
        assert_eq!(node.to_html(), "ab");
    }

    #[test]
    fn test_same_tree_same_bytes() {
        let build = || div().class("p-2").text("x").into_node().to_html();
        assert_eq!(build(), build());
    }
}
