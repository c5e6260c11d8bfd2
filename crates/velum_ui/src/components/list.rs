//! List component
//!
//! Ordered or unordered lists with a color/variant surface per item. Items
//! are rendered in caller order; an item can carry an icon and extra classes.

use velum_core::{li, ol, raw, ul, Node, Render};
use velum_theme::{PairTable, VariantTable};

use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "white"),
    &[
        ("default", "white", "[&>li]:bg-white [&>li]:text-[#3E3E3E]"),
        ("default", "primary", "[&>li]:bg-[#4363EC] [&>li]:text-white"),
        ("default", "secondary", "[&>li]:bg-[#6B6E7C] [&>li]:text-white"),
        ("default", "dark", "[&>li]:bg-[#1E1E1E] [&>li]:text-white"),
        ("default", "success", "[&>li]:bg-[#ECFEF3] [&>li]:text-[#047857]"),
        ("default", "warning", "[&>li]:bg-[#FFF8E6] [&>li]:text-[#FF8B08]"),
        ("default", "danger", "[&>li]:bg-[#FFE6E6] [&>li]:text-[#E73B3B]"),
        ("default", "info", "[&>li]:bg-[#E5F0FF] [&>li]:text-[#004FC4]"),
        ("default", "light", "[&>li]:bg-[#E3E7F1] [&>li]:text-[#707483]"),
        ("default", "misc", "[&>li]:bg-[#FFE6FF] [&>li]:text-[#52059C]"),
        ("default", "dawn", "[&>li]:bg-[#FFECDA] [&>li]:text-[#4D4137]"),
        ("bordered", "white", "[&>li]:border [&>li]:border-[#DADADA] [&>li]:text-[#3E3E3E]"),
        ("bordered", "primary", "[&>li]:border [&>li]:border-[#4363EC] [&>li]:text-[#4363EC]"),
        ("bordered", "secondary", "[&>li]:border [&>li]:border-[#6B6E7C] [&>li]:text-[#6B6E7C]"),
        ("bordered", "dark", "[&>li]:border [&>li]:border-[#1E1E1E] [&>li]:text-[#1E1E1E]"),
        ("bordered", "success", "[&>li]:border [&>li]:border-[#6EE7B7] [&>li]:text-[#047857]"),
        ("bordered", "warning", "[&>li]:border [&>li]:border-[#FF8B08] [&>li]:text-[#FF8B08]"),
        ("bordered", "danger", "[&>li]:border [&>li]:border-[#E73B3B] [&>li]:text-[#E73B3B]"),
        ("bordered", "info", "[&>li]:border [&>li]:border-[#004FC4] [&>li]:text-[#004FC4]"),
        ("bordered", "light", "[&>li]:border [&>li]:border-[#707483] [&>li]:text-[#707483]"),
        ("bordered", "misc", "[&>li]:border [&>li]:border-[#52059C] [&>li]:text-[#52059C]"),
        ("bordered", "dawn", "[&>li]:border [&>li]:border-[#4D4137] [&>li]:text-[#4D4137]"),
        ("plain", "white", "text-white"),
        ("plain", "primary", "text-[#4363EC]"),
        ("plain", "secondary", "text-[#6B6E7C]"),
        ("plain", "dark", "text-[#1E1E1E]"),
        ("plain", "success", "text-[#047857]"),
        ("plain", "warning", "text-[#FF8B08]"),
        ("plain", "danger", "text-[#E73B3B]"),
        ("plain", "info", "text-[#004FC4]"),
        ("plain", "light", "text-[#707483]"),
        ("plain", "misc", "text-[#52059C]"),
        ("plain", "dawn", "text-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "text-xs"),
        ("small", "text-sm"),
        ("medium", "text-base"),
        ("large", "text-lg"),
        ("extra_large", "text-xl"),
    ],
);

static SPACE_CLASS: VariantTable = VariantTable::new(
    "space_class",
    "extra_small",
    &[
        ("none", ""),
        ("extra_small", "space-y-1"),
        ("small", "space-y-2"),
        ("medium", "space-y-3"),
        ("large", "space-y-4"),
        ("extra_large", "space-y-5"),
    ],
);

/// One list entry.
#[derive(Clone, Debug, Default)]
pub struct ListItem {
    content: Option<Node>,
    icon: Option<String>,
    class: Option<String>,
}

impl ListItem {
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Inline SVG markup rendered before the content.
    pub fn icon(mut self, svg: impl Into<String>) -> Self {
        self.icon = Some(svg.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// List builder.
#[derive(Clone, Debug, Default)]
pub struct List {
    variant: Option<String>,
    color: Option<String>,
    size: Option<String>,
    space: Option<String>,
    class: Option<String>,
    ordered: bool,
    items: Vec<ListItem>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    style_setters! {
        /// Style variant: `default` (filled), `bordered` or `plain`.
        variant,
        color,
        size,
        /// Gap between items.
        space,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Renders an `<ol>` with decimal markers.
    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = ordered;
        self
    }

    pub fn item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }
}

impl Render for List {
    fn render(&self) -> Node {
        let items = self.items.iter().map(|item| {
            li().class("flex items-center gap-2 rounded px-2 py-1.5")
                .class(item.class.as_deref().unwrap_or(""))
                .maybe_child(item.icon.clone().map(raw))
                .maybe_child(item.content.clone())
        });
        let root = if self.ordered {
            ol().class("list-decimal ps-5")
        } else {
            ul().class("list-none")
        };
        root.class(COLOR_VARIANT.resolve(self.variant.as_deref(), self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(SPACE_CLASS.resolve(self.space.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .children(items)
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;

    #[test]
    fn test_unordered_by_default() {
        let html = List::new().item(ListItem::new(text("a"))).to_html();
        assert!(html.starts_with("<ul"));
    }

    #[test]
    fn test_ordered_switches_tag() {
        let html = List::new().ordered(true).item(ListItem::new(text("a"))).to_html();
        assert!(html.starts_with("<ol"));
        assert!(html.contains("list-decimal"));
    }

    #[test]
    fn test_items_keep_caller_order() {
        let html = List::new()
            .item(ListItem::new(text("first")))
            .item(ListItem::new(text("second")))
            .to_html();
        assert!(html.find("first").unwrap() < html.find("second").unwrap());
    }

    #[test]
    fn test_bordered_variant() {
        let html = List::new().variant("bordered").color("info").item(ListItem::new(text("x"))).to_html();
        assert!(html.contains("[&>li]:border-[#004FC4]"));
    }
}
