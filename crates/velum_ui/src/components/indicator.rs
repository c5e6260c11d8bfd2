//! Indicator component for status dots
//!
//! A colored dot, optionally pinging, standalone or pinned to a corner of a
//! wrapped child (an avatar, a button).

use velum_core::{span, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "size-1.5"),
        ("small", "size-2"),
        ("medium", "size-2.5"),
        ("large", "size-3"),
        ("extra_large", "size-3.5"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "success",
    &[
        ("white", "bg-white border border-[#DADADA]"),
        ("primary", "bg-[#4363EC]"),
        ("secondary", "bg-[#6B6E7C]"),
        ("dark", "bg-[#1E1E1E]"),
        ("success", "bg-[#047857]"),
        ("warning", "bg-[#FF8B08]"),
        ("danger", "bg-[#E73B3B]"),
        ("info", "bg-[#004FC4]"),
        ("light", "bg-[#707483]"),
        ("misc", "bg-[#52059C]"),
        ("dawn", "bg-[#4D4137]"),
    ],
);

static PLACEMENT_CLASS: VariantTable = VariantTable::new(
    "placement_class",
    "top_right",
    &[
        ("top_left", "top-0 start-0 -translate-x-1/3 -translate-y-1/3"),
        ("top_right", "top-0 end-0 translate-x-1/3 -translate-y-1/3"),
        ("bottom_left", "bottom-0 start-0 -translate-x-1/3 translate-y-1/3"),
        ("bottom_right", "bottom-0 end-0 translate-x-1/3 translate-y-1/3"),
    ],
);

/// Indicator builder.
#[derive(Clone, Debug, Default)]
pub struct Indicator {
    size: Option<String>,
    color: Option<String>,
    placement: Option<String>,
    class: Option<String>,
    pinging: bool,
    child: Option<Node>,
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    style_setters! {
        size,
        color,
        /// Corner the dot pins to when wrapping a child.
        placement,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn pinging(mut self, pinging: bool) -> Self {
        self.pinging = pinging;
        self
    }

    /// Wraps a child and pins the dot to one of its corners.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.child = Some(child.into());
        self
    }

    fn dot(&self) -> velum_core::Element {
        span()
            .class("inline-block rounded-full")
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(if self.pinging { "animate-ping" } else { "" })
            .class(self.class.as_deref().unwrap_or(""))
    }
}

impl Render for Indicator {
    fn render(&self) -> Node {
        match &self.child {
            None => self.dot().into_node(),
            Some(child) => span()
                .class("relative inline-flex")
                .child(child.clone())
                .child(
                    self.dot()
                        .class("absolute")
                        .class(PLACEMENT_CLASS.resolve(self.placement.as_deref())),
                )
                .into_node(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;

    #[test]
    fn test_standalone_dot() {
        let html = Indicator::new().color("danger").to_html();
        assert!(html.contains("bg-[#E73B3B]"));
        assert!(!html.contains("absolute"));
    }

    #[test]
    fn test_wrapped_dot_is_pinned() {
        let html = Indicator::new().placement("bottom_left").child(text("@")).to_html();
        assert!(html.contains("relative inline-flex"));
        assert!(html.contains("bottom-0 start-0"));
    }

    #[test]
    fn test_ping_animation_flag() {
        assert!(Indicator::new().pinging(true).to_html().contains("animate-ping"));
    }
}
