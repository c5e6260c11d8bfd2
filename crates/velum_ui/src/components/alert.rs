//! Alert component for flash messages and inline notices
//!
//! A static banner with a color/variant table and an optional dismiss
//! control. Dismissing hides the alert with a fade transition and dispatches
//! a `dismiss` event carrying the alert id, so a host can clear the flash on
//! its side; the alert itself keeps no state.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = Alert::new("flash-info")
//!     .color("info")
//!     .title("Heads up")
//!     .content(text("Your trial ends in 3 days."))
//!     .dismissable(true)
//!     .to_html();
//!
//! assert!(html.contains("role=\"alert\""));
//! ```

use serde_json::json;
use velum_core::{div, raw, span, Node, Render};
use velum_js::{Js, Transition};
use velum_theme::{PairTable, VariantTable};

use crate::components::shared::dismiss_button;
use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "white"),
    &[
        ("default", "white", "bg-white text-[#3E3E3E] border-[#DADADA]"),
        ("default", "primary", "bg-[#4363EC] text-white border-[#2441C2]"),
        ("default", "secondary", "bg-[#6B6E7C] text-white border-[#60636F]"),
        ("default", "dark", "bg-[#1E1E1E] text-white border-[#050404]"),
        ("default", "success", "bg-[#ECFEF3] text-[#047857] border-[#6EE7B7]"),
        ("default", "warning", "bg-[#FFF8E6] text-[#FF8B08] border-[#FF8B08]"),
        ("default", "danger", "bg-[#FFE6E6] text-[#E73B3B] border-[#E73B3B]"),
        ("default", "info", "bg-[#E5F0FF] text-[#004FC4] border-[#004FC4]"),
        ("default", "light", "bg-[#E3E7F1] text-[#707483] border-[#707483]"),
        ("default", "misc", "bg-[#FFE6FF] text-[#52059C] border-[#52059C]"),
        ("default", "dawn", "bg-[#FFECDA] text-[#4D4137] border-[#4D4137]"),
        ("outline", "white", "bg-transparent text-[#3E3E3E] border-[#DADADA]"),
        ("outline", "primary", "bg-transparent text-[#4363EC] border-[#4363EC]"),
        ("outline", "secondary", "bg-transparent text-[#6B6E7C] border-[#6B6E7C]"),
        ("outline", "dark", "bg-transparent text-[#1E1E1E] border-[#1E1E1E]"),
        ("outline", "success", "bg-transparent text-[#047857] border-[#6EE7B7]"),
        ("outline", "warning", "bg-transparent text-[#FF8B08] border-[#FF8B08]"),
        ("outline", "danger", "bg-transparent text-[#E73B3B] border-[#E73B3B]"),
        ("outline", "info", "bg-transparent text-[#004FC4] border-[#004FC4]"),
        ("outline", "light", "bg-transparent text-[#707483] border-[#707483]"),
        ("outline", "misc", "bg-transparent text-[#52059C] border-[#52059C]"),
        ("outline", "dawn", "bg-transparent text-[#4D4137] border-[#4D4137]"),
        ("shadow", "white", "bg-white text-[#3E3E3E] border-transparent shadow-md"),
        ("shadow", "primary", "bg-[#4363EC] text-white border-transparent shadow-md"),
        ("shadow", "secondary", "bg-[#6B6E7C] text-white border-transparent shadow-md"),
        ("shadow", "dark", "bg-[#1E1E1E] text-white border-transparent shadow-md"),
        ("shadow", "success", "bg-[#ECFEF3] text-[#047857] border-transparent shadow-md"),
        ("shadow", "warning", "bg-[#FFF8E6] text-[#FF8B08] border-transparent shadow-md"),
        ("shadow", "danger", "bg-[#FFE6E6] text-[#E73B3B] border-transparent shadow-md"),
        ("shadow", "info", "bg-[#E5F0FF] text-[#004FC4] border-transparent shadow-md"),
        ("shadow", "light", "bg-[#E3E7F1] text-[#707483] border-transparent shadow-md"),
        ("shadow", "misc", "bg-[#FFE6FF] text-[#52059C] border-transparent shadow-md"),
        ("shadow", "dawn", "bg-[#FFECDA] text-[#4D4137] border-transparent shadow-md"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "small",
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
    "small",
    &[
        ("none", "p-0"),
        ("extra_small", "p-2"),
        ("small", "p-3"),
        ("medium", "p-4"),
        ("large", "p-5"),
        ("extra_large", "p-6"),
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

/// Alert builder.
#[derive(Clone, Debug, Default)]
pub struct Alert {
    id: String,
    variant: Option<String>,
    color: Option<String>,
    rounded: Option<String>,
    padding: Option<String>,
    size: Option<String>,
    class: Option<String>,
    title: Option<String>,
    icon: Option<String>,
    content: Option<Node>,
    dismissable: bool,
}

impl Alert {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Style variant: `default`, `outline` or `shadow`.
        variant,
        color,
        rounded,
        padding,
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Bold leading line.
        title,
        /// Inline SVG markup rendered before the text.
        icon,
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Adds a close button that fades the alert out and dispatches `dismiss`.
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    fn dismiss_chain(&self) -> Js {
        Js::new()
            .hide_transition(
                format!("#{}", self.id),
                Transition::ms(300)
                    .during("transition-opacity ease-in")
                    .from("opacity-100")
                    .to("opacity-0"),
            )
            .dispatch_detail("dismiss", json!({ "id": self.id }))
    }
}

impl Render for Alert {
    fn render(&self) -> Node {
        let mut body = div().class("grow");
        if let Some(title) = &self.title {
            body = body.child(div().class("font-semibold").text(title));
        }
        body = body.maybe_child(self.content.clone());

        let mut root = div()
            .id(&self.id)
            .attr("role", "alert")
            .class(COLOR_VARIANT.resolve(self.variant.as_deref(), self.color.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(PADDING_SIZE.resolve(self.padding.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class("w-full border flex items-start gap-2")
            .class(self.class.as_deref().unwrap_or(""));
        if let Some(svg) = &self.icon {
            root = root.child(span().class("shrink-0").child(raw(svg)));
        }
        root = root.child(body);
        if self.dismissable {
            root = root.child(dismiss_button("Dismiss alert", &self.dismiss_chain()));
        }
        root.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    #[test]
    fn test_color_variant_fragment_is_in_class_list() {
        let html = Alert::new("a").variant("outline").color("danger").to_html();
        assert!(html.contains("bg-transparent text-[#E73B3B] border-[#E73B3B]"));
    }

    #[test]
    fn test_absent_dimensions_use_defaults() {
        let html = Alert::new("a").to_html();
        assert!(html.contains("bg-white text-[#3E3E3E] border-[#DADADA]"));
        assert!(html.contains("rounded"));
        assert!(html.contains("p-3"));
        assert!(html.contains("text-sm"));
    }

    #[test]
    fn test_raw_size_string_passes_through() {
        let html = Alert::new("a").size("text-[11px]").to_html();
        assert!(html.contains("text-[11px]"));
    }

    #[test]
    fn test_dismiss_hides_and_dispatches() {
        let alert = Alert::new("flash-1").dismissable(true);
        let mut dom = SimDom::new();
        dom.add("flash-1");
        dom.add("flash-1-close");
        dom.exec("flash-1-close", &alert.dismiss_chain());
        assert!(!dom.is_visible("flash-1"));
        let events = dom.dispatched();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "dismiss");
    }

    #[test]
    fn test_caller_class_is_last() {
        let html = Alert::new("a").class("my-override").to_html();
        let class_attr = html.split("class=\"").nth(1).unwrap().split('"').next().unwrap();
        assert!(class_attr.ends_with("my-override"));
    }
}
