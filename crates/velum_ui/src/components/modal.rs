//! Modal component for dialogs
//!
//! A centered dialog over a backdrop at `{id}-overlay`. Both render hidden;
//! [`Modal::show_chain`] reveals backdrop then dialog, and closing reverses
//! the order. Clicking the backdrop closes the dialog.

use velum_core::{div, suffixed_id, Node, Render};
use velum_js::{Js, Transition};
use velum_theme::VariantTable;

use crate::components::shared::dismiss_button;
use crate::macros::style_setters;

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "max-w-xs"),
        ("small", "max-w-sm"),
        ("medium", "max-w-md"),
        ("large", "max-w-lg"),
        ("extra_large", "max-w-2xl"),
        ("screen", "max-w-[96vw] h-[96vh]"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "medium",
    &[
        ("none", ""),
        ("extra_small", "rounded-sm"),
        ("small", "rounded"),
        ("medium", "rounded-md"),
        ("large", "rounded-lg"),
        ("extra_large", "rounded-xl"),
    ],
);

static PADDING_SIZE: VariantTable = VariantTable::new(
    "padding_size",
    "medium",
    &[
        ("none", "p-0"),
        ("extra_small", "p-2"),
        ("small", "p-3"),
        ("medium", "p-4"),
        ("large", "p-5"),
        ("extra_large", "p-6"),
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

/// Modal builder.
#[derive(Clone, Debug, Default)]
pub struct Modal {
    id: String,
    size: Option<String>,
    rounded: Option<String>,
    padding: Option<String>,
    color: Option<String>,
    class: Option<String>,
    title: Option<String>,
    content: Option<Node>,
}

impl Modal {
    /// `id` must be unique per page; the backdrop renders at `{id}-overlay`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Dialog width step.
        size,
        rounded,
        padding,
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

    /// Chain that opens the dialog: backdrop first, then the dialog scales in.
    pub fn show_chain(&self) -> Js {
        Js::new()
            .show_to(format!("#{}", self.overlay_id()))
            .show_transition(
                format!("#{}", self.id),
                Transition::ms(200)
                    .during("transition-all ease-out")
                    .from("opacity-0 scale-95")
                    .to("opacity-100 scale-100"),
            )
    }

    /// Chain that closes the dialog, then drops the backdrop.
    pub fn hide_chain(&self) -> Js {
        Js::new()
            .hide_transition(
                format!("#{}", self.id),
                Transition::ms(200)
                    .during("transition-all ease-in")
                    .from("opacity-100 scale-100")
                    .to("opacity-0 scale-95"),
            )
            .hide_to(format!("#{}", self.overlay_id()))
    }
}

impl Render for Modal {
    fn render(&self) -> Node {
        let overlay = div()
            .id(self.overlay_id())
            .class("fixed inset-0 z-40 bg-black/50 hidden")
            .on("click", &self.hide_chain());
        let header = div()
            .class("flex items-center justify-between gap-2 mb-3")
            .maybe_child(
                self.title
                    .as_ref()
                    .map(|title| div().class("text-lg font-semibold").text(title)),
            )
            .child(dismiss_button("Close dialog", &self.hide_chain()));
        let dialog = div()
            .id(&self.id)
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .class("fixed start-1/2 top-1/2 z-50 hidden w-full -translate-x-1/2 -translate-y-1/2 shadow-xl")
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(PADDING_SIZE.resolve(self.padding.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .child(header)
            .maybe_child(self.content.clone());
        Node::fragment([overlay.into_node(), dialog.into_node()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    #[test]
    fn test_dialog_and_overlay_render_hidden() {
        let html = Modal::new("confirm").to_html();
        assert!(html.contains("id=\"confirm\""));
        assert!(html.contains("id=\"confirm-overlay\""));
        assert_eq!(html.matches("hidden").count(), 2);
    }

    #[test]
    fn test_show_hide_round_trip() {
        let modal = Modal::new("confirm");
        let mut dom = SimDom::new();
        dom.add_hidden("confirm");
        dom.add_hidden("confirm-overlay");
        dom.exec("open", &modal.show_chain());
        assert!(dom.is_visible("confirm"));
        assert!(dom.is_visible("confirm-overlay"));
        dom.exec("confirm-overlay", &modal.hide_chain());
        assert!(!dom.is_visible("confirm"));
        assert!(!dom.is_visible("confirm-overlay"));
    }

    #[test]
    fn test_size_table() {
        assert!(Modal::new("m").size("extra_large").to_html().contains("max-w-2xl"));
    }
}
