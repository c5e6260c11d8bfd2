//! Tooltip component
//!
//! A wrapped child revealing a small bubble on hover, driven entirely by
//! `group-hover` utilities. A clickable mode toggles the same visibility
//! with a marker class instead, for touch targets.

use velum_core::{span, Node, Render};
use velum_js::Js;
use velum_theme::VariantTable;

use crate::macros::style_setters;

static POSITION_CLASS: VariantTable = VariantTable::new(
    "position_class",
    "top",
    &[
        ("top", "bottom-full start-1/2 -translate-x-1/2 mb-1.5"),
        ("bottom", "top-full start-1/2 -translate-x-1/2 mt-1.5"),
        ("left", "end-full top-1/2 -translate-y-1/2 me-1.5"),
        ("right", "start-full top-1/2 -translate-y-1/2 ms-1.5"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "dark",
    &[
        ("white", "bg-white text-[#3E3E3E] border border-[#DADADA]"),
        ("primary", "bg-[#4363EC] text-white"),
        ("secondary", "bg-[#6B6E7C] text-white"),
        ("dark", "bg-[#1E1E1E] text-white"),
        ("success", "bg-[#047857] text-white"),
        ("warning", "bg-[#FF8B08] text-white"),
        ("danger", "bg-[#E73B3B] text-white"),
        ("info", "bg-[#004FC4] text-white"),
        ("light", "bg-[#E3E7F1] text-[#707483]"),
        ("misc", "bg-[#52059C] text-white"),
        ("dawn", "bg-[#FFECDA] text-[#4D4137]"),
    ],
);

/// Tooltip builder.
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    id: Option<String>,
    text: String,
    position: Option<String>,
    color: Option<String>,
    class: Option<String>,
    child: Option<Node>,
    clickable: bool,
}

impl Tooltip {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Required in clickable mode so the chain can address the root.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    style_setters! {
        /// Bubble placement relative to the child.
        position,
        color,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// The element the tooltip describes.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.child = Some(child.into());
        self
    }

    /// Toggle on click instead of hover (touch targets).
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }
}

impl Render for Tooltip {
    fn render(&self) -> Node {
        let visibility = if self.clickable {
            "invisible opacity-0 [.show-tooltip_&]:visible [.show-tooltip_&]:opacity-100"
        } else {
            "invisible opacity-0 group-hover:visible group-hover:opacity-100"
        };
        let bubble = span()
            .attr("role", "tooltip")
            .class("absolute z-30 w-max max-w-56 rounded px-2 py-1 text-xs shadow transition-opacity duration-150")
            .class(visibility)
            .class(POSITION_CLASS.resolve(self.position.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .text(&self.text);
        let mut root = span().class("relative inline-flex group");
        if let Some(id) = &self.id {
            root = root.id(id);
            if self.clickable {
                let chain = Js::new().toggle_class_to(format!("#{id}"), "show-tooltip");
                root = root.on("click", &chain);
            }
        }
        root.maybe_child(self.child.clone()).child(bubble).into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;

    #[test]
    fn test_hover_mode_is_css_only() {
        let html = Tooltip::new("Copied!").child(text("copy")).to_html();
        assert!(html.contains("group-hover:visible"));
        assert!(!html.contains("data-on-click"));
    }

    #[test]
    fn test_clickable_mode_needs_id() {
        let html = Tooltip::new("hi").id("tip").clickable(true).child(text("x")).to_html();
        assert!(html.contains("data-on-click"));
        assert!(html.contains("show-tooltip"));
        let without_id = Tooltip::new("hi").clickable(true).child(text("x")).to_html();
        assert!(!without_id.contains("data-on-click"));
    }

    #[test]
    fn test_position_table() {
        let html = Tooltip::new("hi").position("bottom").child(text("x")).to_html();
        assert!(html.contains("top-full start-1/2"));
    }
}
