//! Drawer component for off-canvas panels
//!
//! A fixed panel sliding in from one edge, paired with a backdrop overlay at
//! `{id}-overlay`. Opening and closing are plain show/hide chains with a
//! translate transition matched to the edge; any element (a button, a navbar
//! link) can carry [`Drawer::show_chain`] to open it.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let drawer = Drawer::new("cart").position("right").color("white");
//! let open_button = el("button").on("click", &drawer.show_chain()).text("Cart");
//!
//! assert!(drawer.to_html().contains("id=\"cart-overlay\""));
//! assert!(open_button.into_node().to_html().contains("data-on-click"));
//! ```

use velum_core::{div, suffixed_id, Node, Render};
use velum_js::{Js, Transition};
use velum_theme::VariantTable;

use crate::components::shared::dismiss_button;
use crate::macros::style_setters;

static POSITION_CLASS: VariantTable = VariantTable::new(
    "position_class",
    "left",
    &[
        ("left", "inset-y-0 start-0 h-full"),
        ("right", "inset-y-0 end-0 h-full"),
        ("top", "inset-x-0 top-0 w-full"),
        ("bottom", "inset-x-0 bottom-0 w-full"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "[&.drawer-x]:w-60 [&.drawer-y]:h-40"),
        ("small", "[&.drawer-x]:w-64 [&.drawer-y]:h-48"),
        ("medium", "[&.drawer-x]:w-72 [&.drawer-y]:h-56"),
        ("large", "[&.drawer-x]:w-80 [&.drawer-y]:h-64"),
        ("extra_large", "[&.drawer-x]:w-96 [&.drawer-y]:h-72"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "white",
    &[
        ("white", "bg-white text-[#3E3E3E]"),
        ("primary", "bg-[#4363EC] text-white"),
        ("secondary", "bg-[#6B6E7C] text-white"),
        ("dark", "bg-[#1E1E1E] text-white"),
        ("success", "bg-[#ECFEF3] text-[#047857]"),
        ("warning", "bg-[#FFF8E6] text-[#FF8B08]"),
        ("danger", "bg-[#FFE6E6] text-[#E73B3B]"),
        ("info", "bg-[#E5F0FF] text-[#004FC4]"),
        ("light", "bg-[#E3E7F1] text-[#707483]"),
        ("misc", "bg-[#FFE6FF] text-[#52059C]"),
        ("dawn", "bg-[#FFECDA] text-[#4D4137]"),
    ],
);

/// Off-screen and resting translate classes for each edge.
fn translate_for(position: &str) -> (&'static str, &'static str) {
    match position {
        "right" => ("translate-x-full", "translate-x-0"),
        "top" => ("-translate-y-full", "translate-y-0"),
        "bottom" => ("translate-y-full", "translate-y-0"),
        _ => ("-translate-x-full", "translate-x-0"),
    }
}

/// Drawer builder.
#[derive(Clone, Debug, Default)]
pub struct Drawer {
    id: String,
    position: Option<String>,
    size: Option<String>,
    color: Option<String>,
    class: Option<String>,
    title: Option<String>,
    content: Option<Node>,
}

impl Drawer {
    /// `id` must be unique per page; the overlay renders at `{id}-overlay`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Edge the panel slides from: `left`, `right`, `top` or `bottom`.
        position,
        /// Panel width (for side drawers) or height (for top/bottom).
        size,
        color,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Heading shown beside the close button.
        title,
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    fn overlay_id(&self) -> String {
        suffixed_id(&self.id, "overlay")
    }

    fn position_value(&self) -> &str {
        self.position.as_deref().unwrap_or("left")
    }

    /// Chain that opens the drawer: backdrop first, then the sliding panel.
    pub fn show_chain(&self) -> Js {
        let (from, to) = translate_for(self.position_value());
        Js::new()
            .show_to(format!("#{}", self.overlay_id()))
            .show_transition(
                format!("#{}", self.id),
                Transition::ms(300)
                    .during("transition-transform ease-out")
                    .from(from)
                    .to(to),
            )
    }

    /// Chain that closes the drawer: panel slides out, then the backdrop goes.
    pub fn hide_chain(&self) -> Js {
        let (from, to) = translate_for(self.position_value());
        Js::new()
            .hide_transition(
                format!("#{}", self.id),
                Transition::ms(300)
                    .during("transition-transform ease-in")
                    .from(to)
                    .to(from),
            )
            .hide_to(format!("#{}", self.overlay_id()))
    }

    fn axis_class(&self) -> &'static str {
        match self.position_value() {
            "top" | "bottom" => "drawer-y",
            _ => "drawer-x",
        }
    }
}

impl Render for Drawer {
    fn render(&self) -> Node {
        let overlay = div()
            .id(self.overlay_id())
            .class("fixed inset-0 z-40 bg-black/40 hidden")
            .on("click", &self.hide_chain());
        let header = div()
            .class("flex items-center justify-between gap-2 p-4")
            .maybe_child(
                self.title
                    .as_ref()
                    .map(|title| div().class("font-semibold").text(title)),
            )
            .child(dismiss_button("Close drawer", &self.hide_chain()));
        let panel = div()
            .id(&self.id)
            .class("fixed z-50 hidden overflow-y-auto shadow-lg")
            .class(self.axis_class())
            .class(POSITION_CLASS.resolve(self.position.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .child(header)
            .maybe_child(self.content.clone().map(|content| div().class("p-4").child(content)));
        Node::fragment([overlay.into_node(), panel.into_node()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    #[test]
    fn test_renders_overlay_and_panel() {
        let html = Drawer::new("cart").to_html();
        assert!(html.contains("id=\"cart-overlay\""));
        assert!(html.contains("id=\"cart\""));
    }

    #[test]
    fn test_position_table_resolves_edges() {
        let html = Drawer::new("d").position("bottom").to_html();
        assert!(html.contains("inset-x-0 bottom-0 w-full"));
        assert!(html.contains("drawer-y"));
    }

    #[test]
    fn test_show_then_hide_round_trip() {
        let drawer = Drawer::new("cart").position("right");
        let mut dom = SimDom::new();
        dom.add_hidden("cart");
        dom.add_hidden("cart-overlay");
        dom.exec("open-btn", &drawer.show_chain());
        assert!(dom.is_visible("cart"));
        assert!(dom.is_visible("cart-overlay"));
        dom.exec("cart-overlay", &drawer.hide_chain());
        assert!(!dom.is_visible("cart"));
        assert!(!dom.is_visible("cart-overlay"));
    }

    #[test]
    fn test_translate_pairs_match_edge() {
        let wire = Drawer::new("d").position("right").show_chain().to_json().unwrap();
        assert!(wire.contains("translate-x-full"));
        assert!(wire.contains("translate-x-0"));
    }
}
