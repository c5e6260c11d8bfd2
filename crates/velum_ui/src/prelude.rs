//! Convenience re-exports for building pages with Velum components.

pub use velum_core::{child_id, div, el, raw, span, text, Attrs, Node, Render};
pub use velum_js::{Js, Transition};

pub use crate::components::*;
