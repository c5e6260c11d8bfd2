//! Velum markup core
//!
//! This crate provides the foundational primitives for the Velum component
//! library:
//!
//! - **Element tree**: a fluent builder (`div().class(..).child(..)`) over an
//!   owned [`Node`] tree of tags, attributes and children
//! - **Class assembly**: ordered utility-class fragment lists with falsy-skip
//!   joining, caller overrides always last
//! - **Serialization**: deterministic HTML output with escaping
//! - **Id derivation**: the `{id}-{index}` convention that lets interaction
//!   chains address repeated children
//!
//! A [`Node`] is owned exclusively by the render call that produced it and is
//! handed to the host templating layer (or [`Node::to_html`]) immediately;
//! nothing here is retained or mutated across renders.
//!
//! # Example
//!
//! ```
//! use velum_core::{div, span};
//!
//! let node = div()
//!     .id("greeting")
//!     .class("flex items-center gap-2")
//!     .child(span().text("Hello"))
//!     .into_node();
//!
//! assert_eq!(
//!     node.to_html(),
//!     "<div class=\"flex items-center gap-2\" id=\"greeting\"><span>Hello</span></div>"
//! );
//! ```

pub mod attrs;
pub mod classes;
pub mod element;
pub mod html;
pub mod id;
pub mod node;

pub use attrs::Attrs;
pub use classes::{join_classes, ClassList};
pub use element::{a, div, el, img, input, label, li, ol, p, span, ul, Element};
pub use html::{escape, RenderError};
pub use id::{child_id, suffixed_id};
pub use node::{raw, text, Node, Render};
