//! Toast component for transient notifications
//!
//! Toasts live in a fixed-position [`ToastGroup`]. The group wires two
//! lifecycle events instead of clicks: when the host reports `connected`
//! every toast slides in, and on `disconnected` they all hide again. Each
//! toast also carries a dismiss control that fades just that toast out and
//! dispatches `dismiss` with its derived id.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = ToastGroup::new("notices")
//!     .vertical("top")
//!     .horizontal("right")
//!     .toast(Toast::new().color("success").title("Saved"))
//!     .to_html();
//!
//! assert!(html.contains("data-on-connected"));
//! assert!(html.contains("id=\"notices-1\""));
//! ```

use serde_json::json;
use velum_core::{child_id, div, raw, span, Node, Render};
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
        ("shadow", "white", "bg-white text-[#3E3E3E] border-transparent shadow-lg"),
        ("shadow", "primary", "bg-[#4363EC] text-white border-transparent shadow-lg"),
        ("shadow", "secondary", "bg-[#6B6E7C] text-white border-transparent shadow-lg"),
        ("shadow", "dark", "bg-[#1E1E1E] text-white border-transparent shadow-lg"),
        ("shadow", "success", "bg-[#ECFEF3] text-[#047857] border-transparent shadow-lg"),
        ("shadow", "warning", "bg-[#FFF8E6] text-[#FF8B08] border-transparent shadow-lg"),
        ("shadow", "danger", "bg-[#FFE6E6] text-[#E73B3B] border-transparent shadow-lg"),
        ("shadow", "info", "bg-[#E5F0FF] text-[#004FC4] border-transparent shadow-lg"),
        ("shadow", "light", "bg-[#E3E7F1] text-[#707483] border-transparent shadow-lg"),
        ("shadow", "misc", "bg-[#FFE6FF] text-[#52059C] border-transparent shadow-lg"),
        ("shadow", "dawn", "bg-[#FFECDA] text-[#4D4137] border-transparent shadow-lg"),
    ],
);

static VERTICAL_CLASS: VariantTable = VariantTable::new(
    "vertical_class",
    "bottom",
    &[("top", "top-4"), ("bottom", "bottom-4")],
);

static HORIZONTAL_CLASS: VariantTable = VariantTable::new(
    "horizontal_class",
    "right",
    &[
        ("left", "start-4 items-start"),
        ("center", "start-1/2 -translate-x-1/2 items-center"),
        ("right", "end-4 items-end"),
    ],
);

static SPACE_CLASS: VariantTable = VariantTable::new(
    "space_class",
    "small",
    &[
        ("extra_small", "space-y-2"),
        ("small", "space-y-3"),
        ("medium", "space-y-4"),
        ("large", "space-y-5"),
        ("extra_large", "space-y-6"),
    ],
);

/// One notification.
#[derive(Clone, Debug, Default)]
pub struct Toast {
    variant: Option<String>,
    color: Option<String>,
    title: Option<String>,
    icon: Option<String>,
    content: Option<Node>,
    dismissable: bool,
}

impl Toast {
    pub fn new() -> Self {
        Self {
            dismissable: true,
            ..Self::default()
        }
    }

    style_setters! {
        /// Style variant: `default` or `shadow`.
        variant,
        color,
        /// Bold leading line.
        title,
        /// Inline SVG markup rendered before the text.
        icon,
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }
}

/// Fixed-position container wiring toasts to host lifecycle events.
#[derive(Clone, Debug, Default)]
pub struct ToastGroup {
    id: String,
    vertical: Option<String>,
    horizontal: Option<String>,
    space: Option<String>,
    class: Option<String>,
    toasts: Vec<Toast>,
}

impl ToastGroup {
    /// `id` must be unique per page; toasts render at `{id}-{n}`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Screen edge: `top` or `bottom`.
        vertical,
        /// Screen side: `left`, `center` or `right`.
        horizontal,
        /// Gap between stacked toasts.
        space,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn toast(mut self, toast: Toast) -> Self {
        self.toasts.push(toast);
        self
    }

    fn slide_in(&self) -> Transition {
        Transition::ms(300)
            .during("transition-all ease-out")
            .from("opacity-0 translate-y-2")
            .to("opacity-100 translate-y-0")
    }

    /// Chain run when the host reports `connected`: every toast slides in.
    fn connected_chain(&self) -> Js {
        let mut js = Js::new();
        for i in 1..=self.toasts.len() {
            js = js.show_transition(format!("#{}", child_id(&self.id, i)), self.slide_in());
        }
        js
    }

    /// Chain run on `disconnected`: every toast hides, no transition.
    fn disconnected_chain(&self) -> Js {
        let mut js = Js::new();
        for i in 1..=self.toasts.len() {
            js = js.hide_to(format!("#{}", child_id(&self.id, i)));
        }
        js
    }

    fn dismiss_chain(&self, index: usize) -> Js {
        let toast_id = child_id(&self.id, index);
        Js::new()
            .hide_transition(
                format!("#{toast_id}"),
                Transition::ms(200)
                    .during("transition-opacity ease-in")
                    .from("opacity-100")
                    .to("opacity-0"),
            )
            .dispatch_detail("dismiss", json!({ "id": toast_id }))
    }

    fn render_toast(&self, index: usize, toast: &Toast) -> Node {
        let mut body = div().class("grow");
        if let Some(title) = &toast.title {
            body = body.child(div().class("font-semibold").text(title));
        }
        body = body.maybe_child(toast.content.clone());

        let mut root = div()
            .id(child_id(&self.id, index))
            .attr("role", "status")
            .class("pointer-events-auto hidden w-80 rounded-lg border p-3 text-sm flex items-start gap-2")
            .class(COLOR_VARIANT.resolve(toast.variant.as_deref(), toast.color.as_deref()));
        if let Some(svg) = &toast.icon {
            root = root.child(span().class("shrink-0").child(raw(svg)));
        }
        root = root.child(body);
        if toast.dismissable {
            root = root.child(dismiss_button("Dismiss notification", &self.dismiss_chain(index)));
        }
        root.into_node()
    }
}

impl Render for ToastGroup {
    fn render(&self) -> Node {
        div()
            .id(&self.id)
            .class("pointer-events-none fixed z-50 flex flex-col")
            .class(VERTICAL_CLASS.resolve(self.vertical.as_deref()))
            .class(HORIZONTAL_CLASS.resolve(self.horizontal.as_deref()))
            .class(SPACE_CLASS.resolve(self.space.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .on("connected", &self.connected_chain())
            .on("disconnected", &self.disconnected_chain())
            .children(
                self.toasts
                    .iter()
                    .enumerate()
                    .map(|(i, toast)| self.render_toast(i + 1, toast)),
            )
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    fn group() -> ToastGroup {
        ToastGroup::new("notices")
            .toast(Toast::new().color("success"))
            .toast(Toast::new().color("danger"))
    }

    #[test]
    fn test_lifecycle_chains_cover_every_toast() {
        let group = group();
        let mut dom = SimDom::new();
        dom.add_hidden("notices-1");
        dom.add_hidden("notices-2");
        dom.exec("notices", &group.connected_chain());
        assert!(dom.is_visible("notices-1"));
        assert!(dom.is_visible("notices-2"));
        dom.exec("notices", &group.disconnected_chain());
        assert!(!dom.is_visible("notices-1"));
        assert!(!dom.is_visible("notices-2"));
    }

    #[test]
    fn test_dismiss_targets_one_toast() {
        let group = group();
        let mut dom = SimDom::new();
        dom.add("notices-1");
        dom.add("notices-2");
        dom.exec("notices-1", &group.dismiss_chain(1));
        assert!(!dom.is_visible("notices-1"));
        assert!(dom.is_visible("notices-2"));
        assert_eq!(dom.dispatched()[0].event, "dismiss");
    }

    #[test]
    fn test_placement_tables() {
        let html = group().vertical("top").horizontal("center").to_html();
        assert!(html.contains("top-4"));
        assert!(html.contains("start-1/2 -translate-x-1/2 items-center"));
    }

    #[test]
    fn test_empty_group_attaches_no_lifecycle_chains() {
        let html = ToastGroup::new("notices").to_html();
        assert!(!html.contains("data-on-connected"));
    }
}
