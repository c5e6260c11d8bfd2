//! Pagination component
//!
//! A page strip with previous/next controls. Clicking a page dispatches a
//! `select` event carrying `{"page": n}`; the host re-renders with the new
//! `current`, so no page state lives in the component. Long ranges collapse
//! to `1 … window … total` around the current page.

use serde_json::json;
use velum_core::{child_id, el, raw, span, Node, Render};
use velum_js::Js;
use velum_theme::VariantTable;

use crate::macros::style_setters;

const PREV_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m15 18-6-6 6-6"/></svg>"#;
const NEXT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m9 18 6-6-6-6"/></svg>"#;

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "primary",
    &[
        ("white", "[&_.active]:bg-white [&_.active]:text-[#3E3E3E] [&_.active]:border-[#DADADA]"),
        ("primary", "[&_.active]:bg-[#4363EC] [&_.active]:text-white"),
        ("secondary", "[&_.active]:bg-[#6B6E7C] [&_.active]:text-white"),
        ("dark", "[&_.active]:bg-[#1E1E1E] [&_.active]:text-white"),
        ("success", "[&_.active]:bg-[#ECFEF3] [&_.active]:text-[#047857]"),
        ("warning", "[&_.active]:bg-[#FFF8E6] [&_.active]:text-[#FF8B08]"),
        ("danger", "[&_.active]:bg-[#FFE6E6] [&_.active]:text-[#E73B3B]"),
        ("info", "[&_.active]:bg-[#E5F0FF] [&_.active]:text-[#004FC4]"),
        ("light", "[&_.active]:bg-[#E3E7F1] [&_.active]:text-[#707483]"),
        ("misc", "[&_.active]:bg-[#FFE6FF] [&_.active]:text-[#52059C]"),
        ("dawn", "[&_.active]:bg-[#FFECDA] [&_.active]:text-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "[&_button]:size-7 text-xs"),
        ("small", "[&_button]:size-8 text-sm"),
        ("medium", "[&_button]:size-9 text-base"),
        ("large", "[&_button]:size-10 text-lg"),
        ("extra_large", "[&_button]:size-11 text-xl"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "small",
    &[
        ("none", ""),
        ("extra_small", "[&_button]:rounded-sm"),
        ("small", "[&_button]:rounded"),
        ("medium", "[&_button]:rounded-md"),
        ("large", "[&_button]:rounded-lg"),
        ("full", "[&_button]:rounded-full"),
    ],
);

/// Pagination builder.
#[derive(Clone, Debug)]
pub struct Pagination {
    id: String,
    total: usize,
    current: usize,
    siblings: usize,
    color: Option<String>,
    size: Option<String>,
    rounded: Option<String>,
    class: Option<String>,
}

impl Pagination {
    /// `id` must be unique per page; page buttons render at `{id}-{n}`.
    pub fn new(id: impl Into<String>, total: usize) -> Self {
        Self {
            id: id.into(),
            total,
            current: 1,
            siblings: 1,
            color: None,
            size: None,
            rounded: None,
            class: None,
        }
    }

    style_setters! {
        /// Color of the active page button.
        color,
        size,
        rounded,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Currently shown page (1-based). Clamped to `1..=total`.
    pub fn current(mut self, current: usize) -> Self {
        self.current = current;
        self
    }

    /// Pages shown on each side of the current page before collapsing.
    pub fn siblings(mut self, siblings: usize) -> Self {
        self.siblings = siblings;
        self
    }

    fn clamped_current(&self) -> usize {
        self.current.clamp(1, self.total.max(1))
    }

    /// Page numbers to render, `None` marking a collapsed gap.
    fn window(&self) -> Vec<Option<usize>> {
        let current = self.clamped_current();
        let mut pages = Vec::new();
        let mut last_pushed = 0;
        for page in 1..=self.total {
            let near_current = page.abs_diff(current) <= self.siblings;
            if page == 1 || page == self.total || near_current {
                if last_pushed != 0 && page > last_pushed + 1 {
                    pages.push(None);
                }
                pages.push(Some(page));
                last_pushed = page;
            }
        }
        pages
    }

    fn select_chain(&self, page: usize) -> Js {
        Js::new().dispatch_detail("select", json!({ "page": page }))
    }
}

impl Render for Pagination {
    fn render(&self) -> Node {
        let current = self.clamped_current();
        let mut root = el("nav")
            .id(&self.id)
            .attr("aria-label", "Pagination")
            .class("flex items-center gap-1")
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(self.class.as_deref().unwrap_or(""));
        let nav_button = |label: &str, svg: &str, disabled: bool, chain: Js| {
            let mut button = el("button")
                .attr("type", "button")
                .attr("aria-label", label)
                .class("inline-flex items-center justify-center border border-transparent hover:bg-black/5 disabled:opacity-40 disabled:pointer-events-none")
                .flag("disabled", disabled);
            if !disabled {
                button = button.on("click", &chain);
            }
            button.child(raw(svg))
        };
        root = root.child(nav_button(
            "Previous page",
            PREV_SVG,
            current <= 1,
            self.select_chain(current.saturating_sub(1).max(1)),
        ));
        for entry in self.window() {
            root = match entry {
                None => root.child(span().class("px-1 opacity-60").text("…")),
                Some(page) => root.child(
                    el("button")
                        .attr("type", "button")
                        .id(child_id(&self.id, page))
                        .class("inline-flex items-center justify-center border border-transparent hover:bg-black/5")
                        .class(if page == current { "active" } else { "" })
                        .on("click", &self.select_chain(page))
                        .text(page.to_string()),
                ),
            };
        }
        root = root.child(nav_button(
            "Next page",
            NEXT_SVG,
            current >= self.total,
            self.select_chain((current + 1).min(self.total.max(1))),
        ));
        root.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    #[test]
    fn test_short_range_renders_every_page() {
        let html = Pagination::new("p", 5).current(2).to_html();
        for page in 1..=5 {
            assert!(html.contains(&format!("id=\"p-{page}\"")));
        }
        assert!(!html.contains("…"));
    }

    #[test]
    fn test_long_range_collapses_around_current() {
        let pagination = Pagination::new("p", 20).current(10);
        let window = pagination.window();
        assert_eq!(window.first(), Some(&Some(1)));
        assert_eq!(window.last(), Some(&Some(20)));
        assert!(window.contains(&Some(9)));
        assert!(window.contains(&Some(11)));
        assert_eq!(window.iter().filter(|entry| entry.is_none()).count(), 2);
        assert!(!window.contains(&Some(5)));
    }

    #[test]
    fn test_current_page_is_marked_active() {
        let html = Pagination::new("p", 3).current(2).to_html();
        assert!(html.contains("hover:bg-black/5 active\""));
        assert_eq!(html.matches(" active\"").count(), 1);
    }

    #[test]
    fn test_select_dispatches_page_payload() {
        let pagination = Pagination::new("p", 9).current(4);
        let mut dom = SimDom::new();
        dom.add("p-5");
        dom.exec("p-5", &pagination.select_chain(5));
        assert_eq!(dom.dispatched()[0].detail, Some(json!({ "page": 5 })));
    }

    #[test]
    fn test_edge_buttons_disable_at_bounds() {
        let first = Pagination::new("p", 3).current(1).to_html();
        assert!(first.contains("aria-label=\"Previous page\" disabled"));
        let last = Pagination::new("p", 3).current(3).to_html();
        assert!(last.contains("aria-label=\"Next page\" disabled"));
    }
}
