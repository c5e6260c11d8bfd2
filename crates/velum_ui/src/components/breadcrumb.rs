//! Breadcrumb component for hierarchical navigation
//!
//! An ordered trail of links separated by a chevron; the last item is the
//! current page and renders as plain text.

use velum_core::{a, el, li, ol, raw, span, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

const SEPARATOR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="12" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m9 18 6-6-6-6"/></svg>"#;

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "light",
    &[
        ("white", "text-white [&_.current]:text-white/70"),
        ("primary", "text-[#4363EC] [&_.current]:text-[#2441C2]"),
        ("secondary", "text-[#6B6E7C] [&_.current]:text-[#60636F]"),
        ("dark", "text-[#1E1E1E] [&_.current]:text-[#050404]"),
        ("success", "text-[#047857] [&_.current]:opacity-70"),
        ("warning", "text-[#FF8B08] [&_.current]:opacity-70"),
        ("danger", "text-[#E73B3B] [&_.current]:opacity-70"),
        ("info", "text-[#004FC4] [&_.current]:opacity-70"),
        ("light", "text-[#707483] [&_.current]:text-[#3E3E3E]"),
        ("misc", "text-[#52059C] [&_.current]:opacity-70"),
        ("dawn", "text-[#4D4137] [&_.current]:opacity-70"),
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

/// One trail entry; entries without an href render as the current page.
#[derive(Clone, Debug, Default)]
pub struct BreadcrumbItem {
    label: String,
    href: Option<String>,
    icon: Option<String>,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Inline SVG markup rendered before the label.
    pub fn icon(mut self, svg: impl Into<String>) -> Self {
        self.icon = Some(svg.into());
        self
    }
}

/// Breadcrumb builder.
#[derive(Clone, Debug, Default)]
pub struct Breadcrumb {
    color: Option<String>,
    size: Option<String>,
    class: Option<String>,
    items: Vec<BreadcrumbItem>,
}

impl Breadcrumb {
    pub fn new() -> Self {
        Self::default()
    }

    style_setters! {
        color,
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn item(mut self, item: BreadcrumbItem) -> Self {
        self.items.push(item);
        self
    }
}

impl Render for Breadcrumb {
    fn render(&self) -> Node {
        let last = self.items.len().saturating_sub(1);
        let items = self.items.iter().enumerate().map(|(i, item)| {
            let content: Node = match (&item.href, i == last) {
                (Some(href), false) => a()
                    .attr("href", href)
                    .class("hover:underline flex items-center gap-1")
                    .maybe_child(item.icon.clone().map(raw))
                    .text(&item.label)
                    .into_node(),
                _ => span()
                    .class("current flex items-center gap-1")
                    .maybe_child(item.icon.clone().map(raw))
                    .text(&item.label)
                    .into_node(),
            };
            let mut entry = li().class("flex items-center gap-1.5").child(content);
            if i != last {
                entry = entry.child(span().class("opacity-50").child(raw(SEPARATOR_SVG)));
            }
            entry.into_node()
        });
        el("nav")
            .attr("aria-label", "Breadcrumb")
            .child(
                ol().class("flex flex-wrap items-center gap-1.5 list-none")
                    .class(COLOR_CLASS.resolve(self.color.as_deref()))
                    .class(SIZE_CLASS.resolve(self.size.as_deref()))
                    .class(self.class.as_deref().unwrap_or(""))
                    .children(items),
            )
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail() -> Breadcrumb {
        Breadcrumb::new()
            .item(BreadcrumbItem::new("Home").href("/"))
            .item(BreadcrumbItem::new("Library").href("/library"))
            .item(BreadcrumbItem::new("Data"))
    }

    #[test]
    fn test_last_item_is_plain_text() {
        let html = trail().to_html();
        assert_eq!(html.matches("<a ").count(), 2);
        assert!(html.contains("current"));
        assert!(html.contains(">Data<"));
    }

    #[test]
    fn test_separators_between_items_only() {
        let html = trail().to_html();
        assert_eq!(html.matches("m9 18 6-6-6-6").count(), 2);
    }

    #[test]
    fn test_last_item_with_href_still_renders_as_current() {
        let html = Breadcrumb::new()
            .item(BreadcrumbItem::new("Home").href("/"))
            .item(BreadcrumbItem::new("Here").href("/here"))
            .to_html();
        assert_eq!(html.matches("<a ").count(), 1);
    }
}
