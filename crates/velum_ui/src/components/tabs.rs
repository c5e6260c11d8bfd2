//! Tabs component for switching between panels
//!
//! Tab triggers and panels are paired by index: trigger `{id}-{n}` controls
//! panel `{id}-{n}-panel` (1-based, caller-supplied order). Switching is
//! grouped-exclusive: the chain resets every trigger and panel before marking
//! the chosen one, so exactly one trigger carries `active-tab` after any
//! sequence of switches.
//!
//! When no tab is marked active, a mount chain activates tab 1.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = Tabs::new("settings")
//!     .variant("pills")
//!     .color("primary")
//!     .tab(Tab::new("Profile").content(text("profile form")))
//!     .tab(Tab::new("Billing"))
//!     .to_html();
//!
//! assert!(html.contains("data-on-mount"));
//! ```

use velum_core::{child_id, div, el, raw, Node, Render};
use velum_js::Js;
use velum_theme::{PairTable, VariantTable};

use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "primary"),
    &[
        ("default", "white", "[&.active-tab]:text-[#3E3E3E] [&.active-tab]:border-[#DADADA]"),
        ("default", "primary", "[&.active-tab]:text-[#4363EC] [&.active-tab]:border-[#4363EC]"),
        ("default", "secondary", "[&.active-tab]:text-[#6B6E7C] [&.active-tab]:border-[#6B6E7C]"),
        ("default", "dark", "[&.active-tab]:text-[#1E1E1E] [&.active-tab]:border-[#1E1E1E]"),
        ("default", "success", "[&.active-tab]:text-[#047857] [&.active-tab]:border-[#6EE7B7]"),
        ("default", "warning", "[&.active-tab]:text-[#FF8B08] [&.active-tab]:border-[#FF8B08]"),
        ("default", "danger", "[&.active-tab]:text-[#E73B3B] [&.active-tab]:border-[#E73B3B]"),
        ("default", "info", "[&.active-tab]:text-[#004FC4] [&.active-tab]:border-[#004FC4]"),
        ("default", "light", "[&.active-tab]:text-[#707483] [&.active-tab]:border-[#707483]"),
        ("default", "misc", "[&.active-tab]:text-[#52059C] [&.active-tab]:border-[#52059C]"),
        ("default", "dawn", "[&.active-tab]:text-[#4D4137] [&.active-tab]:border-[#4D4137]"),
        ("pills", "white", "[&.active-tab]:bg-white [&.active-tab]:text-[#3E3E3E] [&.active-tab]:shadow"),
        ("pills", "primary", "[&.active-tab]:bg-[#4363EC] [&.active-tab]:text-white"),
        ("pills", "secondary", "[&.active-tab]:bg-[#6B6E7C] [&.active-tab]:text-white"),
        ("pills", "dark", "[&.active-tab]:bg-[#1E1E1E] [&.active-tab]:text-white"),
        ("pills", "success", "[&.active-tab]:bg-[#ECFEF3] [&.active-tab]:text-[#047857]"),
        ("pills", "warning", "[&.active-tab]:bg-[#FFF8E6] [&.active-tab]:text-[#FF8B08]"),
        ("pills", "danger", "[&.active-tab]:bg-[#FFE6E6] [&.active-tab]:text-[#E73B3B]"),
        ("pills", "info", "[&.active-tab]:bg-[#E5F0FF] [&.active-tab]:text-[#004FC4]"),
        ("pills", "light", "[&.active-tab]:bg-[#E3E7F1] [&.active-tab]:text-[#707483]"),
        ("pills", "misc", "[&.active-tab]:bg-[#FFE6FF] [&.active-tab]:text-[#52059C]"),
        ("pills", "dawn", "[&.active-tab]:bg-[#FFECDA] [&.active-tab]:text-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "text-xs"),
        ("small", "text-sm"),
        ("medium", "text-base"),
        ("large", "text-lg"),
        ("extra_large", "text-xl"),
    ],
);

static GAP_CLASS: VariantTable = VariantTable::new(
    "gap_class",
    "small",
    &[
        ("none", ""),
        ("extra_small", "gap-1"),
        ("small", "gap-2"),
        ("medium", "gap-3"),
        ("large", "gap-4"),
        ("extra_large", "gap-5"),
    ],
);

static PADDING_SIZE: VariantTable = VariantTable::new(
    "padding_size",
    "small",
    &[
        ("none", ""),
        ("extra_small", "p-2"),
        ("small", "p-3"),
        ("medium", "p-4"),
        ("large", "p-5"),
        ("extra_large", "p-6"),
    ],
);

/// One trigger/panel pair.
#[derive(Clone, Debug, Default)]
pub struct Tab {
    title: String,
    icon: Option<String>,
    content: Option<Node>,
    active: bool,
}

impl Tab {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Inline SVG markup rendered before the title.
    pub fn icon(mut self, svg: impl Into<String>) -> Self {
        self.icon = Some(svg.into());
        self
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Marks this tab as the one selected on first render.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Tabs builder.
#[derive(Clone, Debug, Default)]
pub struct Tabs {
    id: String,
    variant: Option<String>,
    color: Option<String>,
    size: Option<String>,
    gap: Option<String>,
    padding: Option<String>,
    class: Option<String>,
    vertical: bool,
    tabs: Vec<Tab>,
}

impl Tabs {
    /// `id` must be unique per page; trigger and panel ids derive from it.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Style variant: `default` (underline) or `pills`.
        variant,
        color,
        /// Trigger text size.
        size,
        /// Gap between triggers.
        gap,
        /// Panel padding.
        padding,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Lays triggers out in a column beside the panels.
    pub fn vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn tab(mut self, tab: Tab) -> Self {
        self.tabs.push(tab);
        self
    }

    /// Index of the tab selected on first render, if any (1-based).
    fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.active).map(|i| i + 1)
    }

    /// "Show tab `index` of n": reset every trigger and panel, then mark the
    /// chosen pair. The resets must come first; reordering would leave two
    /// triggers marked when chains overlap.
    fn show_tab(&self, index: usize) -> Js {
        let count = self.tabs.len();
        let mut js = Js::new();
        for i in 1..=count {
            js = js.add_class_to(format!("#{}-panel", child_id(&self.id, i)), "hidden");
        }
        js = js.mark_exclusive(&self.id, count, index, "active-tab");
        js.remove_class_to(format!("#{}-panel", child_id(&self.id, index)), "hidden")
    }

    fn trigger_classes(&self) -> Vec<String> {
        let mut classes = vec![
            COLOR_VARIANT
                .resolve(self.variant.as_deref(), self.color.as_deref())
                .to_string(),
            SIZE_CLASS.resolve(self.size.as_deref()).into_owned(),
        ];
        classes.push(match self.variant.as_deref() {
            Some("pills") => "rounded-full px-4 py-1.5 transition-colors duration-200".to_string(),
            _ => "border-b-2 border-transparent px-3 py-2 transition-colors duration-200".to_string(),
        });
        if let Some(class) = &self.class {
            classes.push(class.clone());
        }
        classes
    }

    fn render_triggers(&self) -> Node {
        let triggers = self.tabs.iter().enumerate().map(|(i, tab)| {
            let index = i + 1;
            el("button")
                .attr("type", "button")
                .id(child_id(&self.id, index))
                .attr("role", "tab")
                .classes(self.trigger_classes())
                .class("flex items-center gap-1.5")
                .class(if tab.active { "active-tab" } else { "" })
                .on("click", &self.show_tab(index))
                .maybe_child(tab.icon.clone().map(raw))
                .text(&tab.title)
                .into_node()
        });
        div()
            .attr("role", "tablist")
            .class("flex")
            .class(if self.vertical { "flex-col" } else { "flex-row flex-wrap" })
            .class(GAP_CLASS.resolve(self.gap.as_deref()))
            .children(triggers)
            .into_node()
    }

    fn render_panels(&self) -> Node {
        let panels = self.tabs.iter().enumerate().map(|(i, tab)| {
            let index = i + 1;
            div()
                .id(format!("{}-panel", child_id(&self.id, index)))
                .attr("role", "tabpanel")
                .class(PADDING_SIZE.resolve(self.padding.as_deref()))
                .class(if tab.active { "" } else { "hidden" })
                .maybe_child(tab.content.clone())
                .into_node()
        });
        div().class("grow").children(panels).into_node()
    }
}

impl Render for Tabs {
    fn render(&self) -> Node {
        let mut root = div()
            .id(&self.id)
            .class("flex w-full")
            .class(if self.vertical { "flex-row gap-4" } else { "flex-col" });
        // No explicitly active slot: tab 1 becomes active on mount.
        if self.active_index().is_none() && !self.tabs.is_empty() {
            root = root.on("mount", &self.show_tab(1));
        }
        root.child(self.render_triggers())
            .child(self.render_panels())
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    fn tabs(n: usize) -> Tabs {
        let mut tabs = Tabs::new("t");
        for i in 0..n {
            tabs = tabs.tab(Tab::new(format!("tab {i}")));
        }
        tabs
    }

    fn dom_for(n: usize) -> SimDom {
        let mut dom = SimDom::new();
        for i in 1..=n {
            dom.add(format!("t-{i}"));
            dom.add_with_classes(format!("t-{i}-panel"), "hidden");
        }
        dom
    }

    #[test]
    fn test_trigger_and_panel_ids_are_paired() {
        let html = tabs(2).to_html();
        for expected in ["id=\"t-1\"", "id=\"t-1-panel\"", "id=\"t-2\"", "id=\"t-2-panel\""] {
            assert!(html.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_show_tab_is_mutually_exclusive_from_any_state() {
        let t = tabs(4);
        let mut dom = dom_for(4);
        for start in [3, 1, 4, 2, 2] {
            dom.exec("t", &t.show_tab(start));
            assert_eq!(dom.ids_with_class("active-tab"), vec![format!("t-{start}")]);
        }
    }

    #[test]
    fn test_mount_activates_first_tab_when_none_marked() {
        let t = tabs(3);
        let html = t.to_html();
        assert!(html.contains("data-on-mount"));
        let mut dom = dom_for(3);
        dom.exec("t", &t.show_tab(1));
        assert_eq!(dom.ids_with_class("active-tab"), vec!["t-1"]);
        assert!(!dom.has_class("t-1-panel", "hidden"));
        assert!(dom.has_class("t-2-panel", "hidden"));
    }

    #[test]
    fn test_explicit_active_tab_renders_statically() {
        let html = Tabs::new("t")
            .tab(Tab::new("a"))
            .tab(Tab::new("b").active(true))
            .to_html();
        assert!(!html.contains("data-on-mount"));
        assert!(html.contains(" active-tab\""));
    }

    #[test]
    fn test_vertical_layout() {
        let html = tabs(2).vertical(true).to_html();
        assert!(html.contains("flex-row gap-4"));
    }
}
