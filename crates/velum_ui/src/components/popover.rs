//! Popover component
//!
//! A trigger plus a floating panel with an arrow. Click mode toggles the
//! `show-popover` marker on the root; hover mode is pure CSS.

use velum_core::{div, span, Node, Render};
use velum_js::Js;
use velum_theme::VariantTable;

use crate::macros::style_setters;

static POSITION_CLASS: VariantTable = VariantTable::new(
    "position_class",
    "top",
    &[
        ("top", "bottom-full start-1/2 -translate-x-1/2 mb-2 [&_.popover-arrow]:top-full [&_.popover-arrow]:start-1/2 [&_.popover-arrow]:-translate-x-1/2"),
        ("bottom", "top-full start-1/2 -translate-x-1/2 mt-2 [&_.popover-arrow]:bottom-full [&_.popover-arrow]:start-1/2 [&_.popover-arrow]:-translate-x-1/2"),
        ("left", "end-full top-1/2 -translate-y-1/2 me-2 [&_.popover-arrow]:start-full [&_.popover-arrow]:top-1/2 [&_.popover-arrow]:-translate-y-1/2"),
        ("right", "start-full top-1/2 -translate-y-1/2 ms-2 [&_.popover-arrow]:end-full [&_.popover-arrow]:top-1/2 [&_.popover-arrow]:-translate-y-1/2"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "white",
    &[
        ("white", "bg-white text-[#3E3E3E] border-[#DADADA] [&_.popover-arrow]:bg-white"),
        ("primary", "bg-[#4363EC] text-white border-[#2441C2] [&_.popover-arrow]:bg-[#4363EC]"),
        ("secondary", "bg-[#6B6E7C] text-white border-[#60636F] [&_.popover-arrow]:bg-[#6B6E7C]"),
        ("dark", "bg-[#1E1E1E] text-white border-[#050404] [&_.popover-arrow]:bg-[#1E1E1E]"),
        ("success", "bg-[#ECFEF3] text-[#047857] border-[#6EE7B7] [&_.popover-arrow]:bg-[#ECFEF3]"),
        ("warning", "bg-[#FFF8E6] text-[#FF8B08] border-[#FF8B08] [&_.popover-arrow]:bg-[#FFF8E6]"),
        ("danger", "bg-[#FFE6E6] text-[#E73B3B] border-[#E73B3B] [&_.popover-arrow]:bg-[#FFE6E6]"),
        ("info", "bg-[#E5F0FF] text-[#004FC4] border-[#004FC4] [&_.popover-arrow]:bg-[#E5F0FF]"),
        ("light", "bg-[#E3E7F1] text-[#707483] border-[#707483] [&_.popover-arrow]:bg-[#E3E7F1]"),
        ("misc", "bg-[#FFE6FF] text-[#52059C] border-[#52059C] [&_.popover-arrow]:bg-[#FFE6FF]"),
        ("dawn", "bg-[#FFECDA] text-[#4D4137] border-[#4D4137] [&_.popover-arrow]:bg-[#FFECDA]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "text-xs max-w-48"),
        ("small", "text-sm max-w-60"),
        ("medium", "text-base max-w-72"),
        ("large", "text-lg max-w-80"),
        ("extra_large", "text-xl max-w-96"),
    ],
);

/// Popover builder.
#[derive(Clone, Debug, Default)]
pub struct Popover {
    id: String,
    position: Option<String>,
    color: Option<String>,
    size: Option<String>,
    class: Option<String>,
    trigger: Option<Node>,
    content: Option<Node>,
    hover: bool,
}

impl Popover {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Panel placement relative to the trigger.
        position,
        color,
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn trigger(mut self, trigger: impl Into<Node>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Opens on hover instead of click; no interaction chain is attached.
    pub fn hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    fn toggle_chain(&self) -> Js {
        Js::new().toggle_class_to(format!("#{}", self.id), "show-popover")
    }

    fn visibility_classes(&self) -> &'static str {
        if self.hover {
            "invisible opacity-0 group-hover:visible group-hover:opacity-100"
        } else {
            "invisible opacity-0 [.show-popover_&]:visible [.show-popover_&]:opacity-100"
        }
    }
}

impl Render for Popover {
    fn render(&self) -> Node {
        let mut trigger_wrap = div().class("inline-flex cursor-pointer");
        if !self.hover {
            trigger_wrap = trigger_wrap.on("click", &self.toggle_chain());
        }
        trigger_wrap = trigger_wrap.maybe_child(self.trigger.clone());
        let panel = div()
            .id(format!("{}-panel", self.id))
            .attr("role", "tooltip")
            .class("absolute z-30 w-max rounded-md border p-3 shadow-lg transition-opacity duration-150")
            .class(self.visibility_classes())
            .class(POSITION_CLASS.resolve(self.position.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .child(span().class("popover-arrow absolute size-2 rotate-45"))
            .maybe_child(self.content.clone());
        div()
            .id(&self.id)
            .class("relative inline-block group")
            .child(trigger_wrap)
            .child(panel)
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;
    use velum_js::SimDom;

    #[test]
    fn test_click_mode_toggles_marker() {
        let popover = Popover::new("pop").content(text("hi"));
        let mut dom = SimDom::new();
        dom.add("pop");
        dom.exec("pop", &popover.toggle_chain());
        assert!(dom.has_class("pop", "show-popover"));
    }

    #[test]
    fn test_hover_mode_is_css_only() {
        let html = Popover::new("pop").hover(true).content(text("hi")).to_html();
        assert!(!html.contains("data-on-click"));
        assert!(html.contains("group-hover:visible"));
    }

    #[test]
    fn test_position_moves_arrow() {
        let html = Popover::new("pop").position("right").content(text("hi")).to_html();
        assert!(html.contains("[&_.popover-arrow]:end-full"));
    }
}
