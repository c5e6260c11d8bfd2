//! Navbar component for top-level navigation
//!
//! A horizontal bar with an optional brand slot and a link list. Links get
//! derived ids `{id}-{n}` so application code can mark the current page, and
//! the link marked active carries the `active` class statically.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = Navbar::new("main-nav")
//!     .color("dark")
//!     .brand(text("Velum"))
//!     .link(NavbarLink::new("Docs", "/docs"))
//!     .link(NavbarLink::new("Pricing", "/pricing").active(true))
//!     .to_html();
//!
//! assert!(html.contains("id=\"main-nav-2\""));
//! ```

use velum_core::{a, child_id, div, el, li, ul, Node, Render};
use velum_theme::{PairTable, VariantTable};

use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "white"),
    &[
        ("default", "white", "bg-white text-[#3E3E3E] border-b border-[#DADADA] [&_.active]:text-[#4363EC]"),
        ("default", "primary", "bg-[#4363EC] text-white border-b border-[#2441C2] [&_.active]:text-[#CCE1FF]"),
        ("default", "secondary", "bg-[#6B6E7C] text-white border-b border-[#60636F] [&_.active]:text-[#E3E7F1]"),
        ("default", "dark", "bg-[#1E1E1E] text-white border-b border-[#050404] [&_.active]:text-[#CCE1FF]"),
        ("default", "success", "bg-[#ECFEF3] text-[#047857] border-b border-[#6EE7B7] [&_.active]:font-semibold"),
        ("default", "warning", "bg-[#FFF8E6] text-[#FF8B08] border-b border-[#FF8B08] [&_.active]:font-semibold"),
        ("default", "danger", "bg-[#FFE6E6] text-[#E73B3B] border-b border-[#E73B3B] [&_.active]:font-semibold"),
        ("default", "info", "bg-[#E5F0FF] text-[#004FC4] border-b border-[#004FC4] [&_.active]:font-semibold"),
        ("default", "light", "bg-[#E3E7F1] text-[#707483] border-b border-[#707483] [&_.active]:text-[#3E3E3E]"),
        ("default", "misc", "bg-[#FFE6FF] text-[#52059C] border-b border-[#52059C] [&_.active]:font-semibold"),
        ("default", "dawn", "bg-[#FFECDA] text-[#4D4137] border-b border-[#4D4137] [&_.active]:font-semibold"),
        ("transparent", "white", "bg-transparent text-[#3E3E3E] [&_.active]:text-[#4363EC]"),
        ("transparent", "primary", "bg-transparent text-[#4363EC] [&_.active]:font-semibold"),
        ("transparent", "secondary", "bg-transparent text-[#6B6E7C] [&_.active]:font-semibold"),
        ("transparent", "dark", "bg-transparent text-[#1E1E1E] [&_.active]:font-semibold"),
        ("transparent", "success", "bg-transparent text-[#047857] [&_.active]:font-semibold"),
        ("transparent", "warning", "bg-transparent text-[#FF8B08] [&_.active]:font-semibold"),
        ("transparent", "danger", "bg-transparent text-[#E73B3B] [&_.active]:font-semibold"),
        ("transparent", "info", "bg-transparent text-[#004FC4] [&_.active]:font-semibold"),
        ("transparent", "light", "bg-transparent text-[#707483] [&_.active]:font-semibold"),
        ("transparent", "misc", "bg-transparent text-[#52059C] [&_.active]:font-semibold"),
        ("transparent", "dawn", "bg-transparent text-[#4D4137] [&_.active]:font-semibold"),
    ],
);

static PADDING_SIZE: VariantTable = VariantTable::new(
    "padding_size",
    "small",
    &[
        ("extra_small", "px-3 py-1.5"),
        ("small", "px-4 py-2"),
        ("medium", "px-5 py-2.5"),
        ("large", "px-6 py-3"),
        ("extra_large", "px-8 py-4"),
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

/// One navigation link.
#[derive(Clone, Debug, Default)]
pub struct NavbarLink {
    label: String,
    href: String,
    active: bool,
}

impl NavbarLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    /// Marks this link as the current page.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Navbar builder.
#[derive(Clone, Debug, Default)]
pub struct Navbar {
    id: String,
    variant: Option<String>,
    color: Option<String>,
    padding: Option<String>,
    size: Option<String>,
    class: Option<String>,
    brand: Option<Node>,
    links: Vec<NavbarLink>,
}

impl Navbar {
    /// `id` must be unique per page; links render at `{id}-{n}`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Style variant: `default` or `transparent`.
        variant,
        color,
        padding,
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Logo/name slot at the start of the bar.
    pub fn brand(mut self, brand: impl Into<Node>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn link(mut self, link: NavbarLink) -> Self {
        self.links.push(link);
        self
    }
}

impl Render for Navbar {
    fn render(&self) -> Node {
        let links = self.links.iter().enumerate().map(|(i, link)| {
            li().child(
                a().id(child_id(&self.id, i + 1))
                    .attr("href", &link.href)
                    .class("hover:opacity-80 transition-opacity")
                    .class(if link.active { "active" } else { "" })
                    .text(&link.label),
            )
        });
        el("nav")
            .id(&self.id)
            .class("w-full flex items-center justify-between gap-4")
            .class(COLOR_VARIANT.resolve(self.variant.as_deref(), self.color.as_deref()))
            .class(PADDING_SIZE.resolve(self.padding.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .maybe_child(
                self.brand
                    .clone()
                    .map(|brand| div().class("font-semibold shrink-0").child(brand)),
            )
            .child(ul().class("flex items-center gap-4 list-none").children(links))
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;

    fn nav() -> Navbar {
        Navbar::new("nav")
            .link(NavbarLink::new("a", "/a"))
            .link(NavbarLink::new("b", "/b").active(true))
    }

    #[test]
    fn test_links_get_derived_ids_in_order() {
        let html = nav().to_html();
        let first = html.find("id=\"nav-1\"").unwrap();
        let second = html.find("id=\"nav-2\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_active_link_is_marked() {
        let html = nav().to_html();
        assert!(html.contains("transition-opacity active\""));
    }

    #[test]
    fn test_color_variant_applies_to_nav_root() {
        let html = nav().variant("transparent").color("dark").to_html();
        assert!(html.contains("bg-transparent text-[#1E1E1E]"));
    }

    #[test]
    fn test_brand_slot_renders_first() {
        let html = nav().brand(text("Velum")).to_html();
        assert!(html.find("Velum").unwrap() < html.find("href=\"/a\"").unwrap());
    }
}
