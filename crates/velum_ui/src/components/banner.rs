//! Banner component for page-wide announcements
//!
//! A bar fixed to the top or bottom edge. Dismissing slides it off-screen;
//! there is no server round trip.

use velum_core::{div, Node, Render};
use velum_js::{Js, Transition};
use velum_theme::VariantTable;

use crate::components::shared::dismiss_button;
use crate::macros::style_setters;

static POSITION_CLASS: VariantTable = VariantTable::new(
    "position_class",
    "top",
    &[
        ("top", "top-0 inset-x-0"),
        ("bottom", "bottom-0 inset-x-0"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "primary",
    &[
        ("white", "bg-white text-[#3E3E3E] border-b border-[#DADADA]"),
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

/// Banner builder.
#[derive(Clone, Debug, Default)]
pub struct Banner {
    id: String,
    position: Option<String>,
    color: Option<String>,
    padding: Option<String>,
    class: Option<String>,
    content: Option<Node>,
    dismissable: bool,
}

impl Banner {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dismissable: true,
            ..Self::default()
        }
    }

    style_setters! {
        /// Screen edge: `top` or `bottom`.
        position,
        color,
        padding,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    fn dismiss_chain(&self) -> Js {
        let (from, to) = match self.position.as_deref() {
            Some("bottom") => ("translate-y-0", "translate-y-full"),
            _ => ("translate-y-0", "-translate-y-full"),
        };
        Js::new().hide_transition(
            format!("#{}", self.id),
            Transition::ms(300)
                .during("transition-transform ease-in")
                .from(from)
                .to(to),
        )
    }
}

impl Render for Banner {
    fn render(&self) -> Node {
        let mut banner = div()
            .id(&self.id)
            .attr("role", "banner")
            .class("fixed z-40 flex w-full items-center justify-between gap-3")
            .class(POSITION_CLASS.resolve(self.position.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(PADDING_SIZE.resolve(self.padding.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .maybe_child(self.content.clone().map(|content| div().class("grow").child(content)));
        if self.dismissable {
            banner = banner.child(dismiss_button("Dismiss banner", &self.dismiss_chain()));
        }
        banner.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    #[test]
    fn test_position_default_is_top() {
        let html = Banner::new("promo").to_html();
        assert!(html.contains("top-0 inset-x-0"));
    }

    #[test]
    fn test_dismiss_direction_follows_position() {
        let top = Banner::new("b").dismiss_chain().to_json().unwrap();
        assert!(top.contains("-translate-y-full"));
        let bottom = Banner::new("b").position("bottom").dismiss_chain().to_json().unwrap();
        assert!(bottom.contains("\"translate-y-full\""));
    }

    #[test]
    fn test_dismiss_hides_banner() {
        let banner = Banner::new("promo");
        let mut dom = SimDom::new();
        dom.add("promo");
        dom.exec("promo", &banner.dismiss_chain());
        assert!(!dom.is_visible("promo"));
    }
}
