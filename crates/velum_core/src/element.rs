//! Fluent element builder
//!
//! `div().class("p-2").child(span().text("hi"))` builds an owned [`Node`]
//! tree. Builders are plain values; there is no shared or retained state
//! between render calls.

use velum_js::Js;

use crate::attrs::Attrs;
use crate::classes::ClassList;
use crate::node::Node;

/// An element under construction: tag, class fragments, attributes, children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) classes: ClassList,
    pub(crate) attrs: Attrs,
    pub(crate) children: Vec<Node>,
}

/// Starts an element with an arbitrary tag.
pub fn el(tag: impl Into<String>) -> Element {
    Element {
        tag: tag.into(),
        ..Element::default()
    }
}

pub fn div() -> Element {
    el("div")
}

pub fn span() -> Element {
    el("span")
}

pub fn p() -> Element {
    el("p")
}

pub fn a() -> Element {
    el("a")
}

pub fn ul() -> Element {
    el("ul")
}

pub fn ol() -> Element {
    el("ol")
}

pub fn li() -> Element {
    el("li")
}

pub fn img() -> Element {
    el("img")
}

pub fn input() -> Element {
    el("input")
}

pub fn label() -> Element {
    el("label")
}

impl Element {
    /// Sets the `id` attribute.
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Appends one class fragment. Blank fragments are skipped when joining,
    /// so resolver output can be pushed unconditionally.
    pub fn class(mut self, fragment: impl AsRef<str>) -> Self {
        self.classes.push(fragment);
        self
    }

    /// Appends class fragments in order.
    pub fn classes<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classes.extend(fragments);
        self
    }

    /// Sets a text attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Sets a text attribute when `value` is present.
    pub fn maybe_attr(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Sets a bare boolean attribute (`disabled`, `required`, `checked`, ...)
    /// when `on` is true.
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        if on {
            self.attrs.set_flag(name);
        }
        self
    }

    /// Appends a pre-filtered passthrough bag after the attributes set so far.
    pub fn rest(mut self, rest: &Attrs) -> Self {
        self.attrs.merge(rest.clone());
        self
    }

    /// Attaches an interaction chain to a DOM event as a `data-on-{event}`
    /// attribute carrying the JSON wire form. Empty chains attach nothing;
    /// a serialization failure drops the binding with an error log rather
    /// than failing the render.
    pub fn on(self, event: &str, js: &Js) -> Self {
        if js.is_empty() {
            return self;
        }
        match js.to_json() {
            Ok(wire) => self.attr(format!("data-on-{event}"), wire),
            Err(error) => {
                tracing::error!(%event, %error, "could not serialize interaction chain");
                self
            }
        }
    }

    /// Appends one child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends children in order.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a child when present. Conditional fragments (icons, captions,
    /// footer rows) are presence checks at render entry, nothing more.
    pub fn maybe_child(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends an escaped text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Finishes the builder.
    pub fn into_node(self) -> Node {
        Node::Element(Box::new(self))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        element.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::Js;

    #[test]
    fn test_builder_chains() {
        let html = div()
            .id("x")
            .class("p-2")
            .class("")
            .child(span().text("a"))
            .into_node()
            .to_html();
        assert_eq!(html, "<div class=\"p-2\" id=\"x\"><span>a</span></div>");
    }

    #[test]
    fn test_empty_chain_attaches_nothing() {
        let html = div().on("click", &Js::new()).into_node().to_html();
        assert_eq!(html, "<div></div>");
    }

    #[test]
    fn test_on_embeds_wire_json() {
        let html = div()
            .on("click", &Js::new().toggle_class("open"))
            .into_node()
            .to_html();
        assert!(html.contains("data-on-click="));
        assert!(html.contains("toggle_class"));
    }
}
