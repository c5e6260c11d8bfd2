//! Dropdown component for contextual menus
//!
//! A trigger plus an absolutely-positioned menu. The open/closed state is the
//! presence of the `show-dropdown` marker class on the root: clicking the
//! trigger toggles it, and the menu's own classes make it visible only under
//! a marked root. In hover mode no chain is attached at all; `group-hover`
//! utilities do the work.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = Dropdown::new("account-menu")
//!     .trigger_label("Account")
//!     .item(DropdownItem::new("Profile").href("/profile"))
//!     .item(DropdownItem::new("Sign out").href("/logout"))
//!     .to_html();
//!
//! assert!(html.contains("show-dropdown"));
//! ```

use velum_core::{a, div, el, raw, span, Node, Render};
use velum_js::Js;
use velum_theme::VariantTable;

use crate::components::shared::CHEVRON_DOWN_SVG;
use crate::macros::style_setters;

static POSITION_CLASS: VariantTable = VariantTable::new(
    "position_class",
    "bottom",
    &[
        ("bottom", "top-full start-0 mt-2"),
        ("top", "bottom-full start-0 mb-2"),
        ("left", "end-full top-0 me-2"),
        ("right", "start-full top-0 ms-2"),
    ],
);

static WIDTH_CLASS: VariantTable = VariantTable::new(
    "width_class",
    "medium",
    &[
        ("extra_small", "min-w-40"),
        ("small", "min-w-48"),
        ("medium", "min-w-56"),
        ("large", "min-w-64"),
        ("extra_large", "min-w-72"),
        ("full", "w-full"),
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

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "white",
    &[
        ("white", "bg-white text-[#3E3E3E] border-[#DADADA] [&_.dropdown-item:hover]:bg-[#E8E8E8]"),
        ("primary", "bg-[#4363EC] text-white border-[#2441C2] [&_.dropdown-item:hover]:bg-[#072ED3]"),
        ("secondary", "bg-[#6B6E7C] text-white border-[#60636F] [&_.dropdown-item:hover]:bg-[#60636F]"),
        ("dark", "bg-[#1E1E1E] text-white border-[#050404] [&_.dropdown-item:hover]:bg-[#111111]"),
        ("success", "bg-[#ECFEF3] text-[#047857] border-[#6EE7B7] [&_.dropdown-item:hover]:bg-[#D4FDE4]"),
        ("warning", "bg-[#FFF8E6] text-[#FF8B08] border-[#FF8B08] [&_.dropdown-item:hover]:bg-[#FFF1C2]"),
        ("danger", "bg-[#FFE6E6] text-[#E73B3B] border-[#E73B3B] [&_.dropdown-item:hover]:bg-[#FFCFCF]"),
        ("info", "bg-[#E5F0FF] text-[#004FC4] border-[#004FC4] [&_.dropdown-item:hover]:bg-[#CCE1FF]"),
        ("light", "bg-[#E3E7F1] text-[#707483] border-[#707483] [&_.dropdown-item:hover]:bg-[#D4DAE8]"),
        ("misc", "bg-[#FFE6FF] text-[#52059C] border-[#52059C] [&_.dropdown-item:hover]:bg-[#FFCCFF]"),
        ("dawn", "bg-[#FFECDA] text-[#4D4137] border-[#4D4137] [&_.dropdown-item:hover]:bg-[#FFDFC1]"),
    ],
);

/// One menu entry.
#[derive(Clone, Debug, Default)]
pub struct DropdownItem {
    label: String,
    href: Option<String>,
    icon: Option<String>,
    disabled: bool,
}

impl DropdownItem {
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

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Dropdown builder.
#[derive(Clone, Debug, Default)]
pub struct Dropdown {
    id: String,
    position: Option<String>,
    width: Option<String>,
    size: Option<String>,
    color: Option<String>,
    class: Option<String>,
    trigger_label: Option<String>,
    trigger: Option<Node>,
    hover: bool,
    items: Vec<DropdownItem>,
}

impl Dropdown {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Menu placement relative to the trigger.
        position,
        /// Menu width.
        width,
        size,
        color,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Text label for the default trigger button.
        trigger_label,
    }

    /// Replaces the default trigger button entirely.
    pub fn trigger(mut self, trigger: impl Into<Node>) -> Self {
        self.trigger = Some(trigger.into());
        self
    }

    /// Opens on hover instead of click; no interaction chain is attached.
    pub fn hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    pub fn item(mut self, item: DropdownItem) -> Self {
        self.items.push(item);
        self
    }

    /// Chain toggling the open marker on the root.
    fn toggle_chain(&self) -> Js {
        Js::new().toggle_class_to(format!("#{}", self.id), "show-dropdown")
    }

    fn render_trigger(&self) -> Node {
        if let Some(trigger) = &self.trigger {
            return trigger.clone();
        }
        let mut button = el("button")
            .attr("type", "button")
            .class("flex items-center gap-1.5 cursor-pointer select-none");
        if !self.hover {
            button = button.on("click", &self.toggle_chain());
        }
        button
            .text(self.trigger_label.clone().unwrap_or_default())
            .child(span().class("transition-transform duration-200 [.show-dropdown_&]:rotate-180").child(raw(CHEVRON_DOWN_SVG)))
            .into_node()
    }

    fn render_item(&self, item: &DropdownItem) -> Node {
        let element = match (&item.href, item.disabled) {
            (Some(href), false) => a().attr("href", href),
            _ => el("button").attr("type", "button").flag("disabled", item.disabled),
        };
        element
            .class("dropdown-item flex w-full items-center gap-2 px-3 py-2 text-start")
            .class(if item.disabled { "opacity-50 pointer-events-none" } else { "" })
            .maybe_child(item.icon.clone().map(raw))
            .text(&item.label)
            .into_node()
    }

    fn visibility_classes(&self) -> &'static str {
        if self.hover {
            "invisible opacity-0 group-hover:visible group-hover:opacity-100"
        } else {
            "invisible opacity-0 [.show-dropdown_&]:visible [.show-dropdown_&]:opacity-100"
        }
    }
}

impl Render for Dropdown {
    fn render(&self) -> Node {
        let menu = div()
            .id(format!("{}-menu", self.id))
            .class("absolute z-30 rounded-md border py-1 shadow-lg transition-opacity duration-150")
            .class(self.visibility_classes())
            .class(POSITION_CLASS.resolve(self.position.as_deref()))
            .class(WIDTH_CLASS.resolve(self.width.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .children(self.items.iter().map(|item| self.render_item(item)));
        div()
            .id(&self.id)
            .class("relative inline-block group")
            .child(self.render_trigger())
            .child(menu)
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    #[test]
    fn test_click_toggles_marker_on_root() {
        let dropdown = Dropdown::new("dd").item(DropdownItem::new("a"));
        let mut dom = SimDom::new();
        dom.add("dd");
        dom.exec("dd-trigger", &dropdown.toggle_chain());
        assert!(dom.has_class("dd", "show-dropdown"));
        dom.exec("dd-trigger", &dropdown.toggle_chain());
        assert!(!dom.has_class("dd", "show-dropdown"));
    }

    #[test]
    fn test_hover_mode_attaches_no_chain() {
        let html = Dropdown::new("dd").hover(true).item(DropdownItem::new("a")).to_html();
        assert!(!html.contains("data-on-click"));
        assert!(html.contains("group-hover:visible"));
    }

    #[test]
    fn test_disabled_item_is_a_button() {
        let html = Dropdown::new("dd")
            .item(DropdownItem::new("gone").href("/x").disabled(true))
            .to_html();
        assert!(html.contains("pointer-events-none"));
        assert!(!html.contains("href=\"/x\""));
    }

    #[test]
    fn test_position_and_width_tables() {
        let html = Dropdown::new("dd").position("top").width("large").to_html();
        assert!(html.contains("bottom-full start-0 mb-2"));
        assert!(html.contains("min-w-64"));
    }
}
