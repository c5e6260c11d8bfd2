//! Divider component
//!
//! A horizontal or vertical rule, optionally with centered text or an icon.

use velum_core::{div, raw, span, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

static TYPE_CLASS: VariantTable = VariantTable::new(
    "type_class",
    "solid",
    &[
        ("solid", "border-solid"),
        ("dashed", "border-dashed"),
        ("dotted", "border-dotted"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "light",
    &[
        ("white", "border-white"),
        ("primary", "border-[#4363EC]"),
        ("secondary", "border-[#6B6E7C]"),
        ("dark", "border-[#1E1E1E]"),
        ("success", "border-[#6EE7B7]"),
        ("warning", "border-[#FF8B08]"),
        ("danger", "border-[#E73B3B]"),
        ("info", "border-[#004FC4]"),
        ("light", "border-[#DADADA]"),
        ("misc", "border-[#52059C]"),
        ("dawn", "border-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "extra_small",
    &[
        ("extra_small", "border-t"),
        ("small", "border-t-2"),
        ("medium", "border-t-[3px]"),
        ("large", "border-t-4"),
        ("extra_large", "border-t-[5px]"),
    ],
);

/// Divider builder.
#[derive(Clone, Debug, Default)]
pub struct Divider {
    kind: Option<String>,
    color: Option<String>,
    size: Option<String>,
    class: Option<String>,
    text: Option<String>,
    icon: Option<String>,
    vertical: bool,
}

impl Divider {
    pub fn new() -> Self {
        Self::default()
    }

    style_setters! {
        /// Line style: `solid`, `dashed` or `dotted`.
        kind,
        color,
        /// Line thickness.
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Centered caption.
        text,
        /// Centered inline SVG markup; wins over `text`.
        icon,
    }

    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    fn line(&self) -> velum_core::Element {
        let mut line = div();
        if self.vertical {
            line = line.class("self-stretch border-s h-auto");
        } else {
            line = line.class("grow").class(SIZE_CLASS.resolve(self.size.as_deref()));
        }
        line.class(TYPE_CLASS.resolve(self.kind.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
    }
}

impl Render for Divider {
    fn render(&self) -> Node {
        if self.vertical {
            return self.line().class(self.class.as_deref().unwrap_or("")).into_node();
        }
        let caption: Option<Node> = match (&self.icon, &self.text) {
            (Some(svg), _) => Some(span().class("shrink-0 opacity-70").child(raw(svg)).into_node()),
            (None, Some(text)) => {
                Some(span().class("shrink-0 text-xs opacity-70").text(text).into_node())
            }
            (None, None) => None,
        };
        match caption {
            None => self.line().class(self.class.as_deref().unwrap_or("")).into_node(),
            Some(caption) => div()
                .class("flex w-full items-center gap-3")
                .class(self.class.as_deref().unwrap_or(""))
                .child(self.line())
                .child(caption)
                .child(self.line())
                .into_node(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_divider_is_a_single_rule() {
        let html = Divider::new().to_html();
        assert!(html.contains("border-t"));
        assert!(html.contains("border-[#DADADA]"));
        assert_eq!(html.matches("<div").count(), 1);
    }

    #[test]
    fn test_captioned_divider_has_two_rules() {
        let html = Divider::new().text("or").to_html();
        assert!(html.contains(">or<"));
        assert_eq!(html.matches("border-solid").count(), 2);
    }

    #[test]
    fn test_dashed_type() {
        assert!(Divider::new().kind("dashed").to_html().contains("border-dashed"));
    }

    #[test]
    fn test_vertical_uses_inline_edge() {
        let html = Divider::new().vertical(true).to_html();
        assert!(html.contains("border-s"));
    }
}
