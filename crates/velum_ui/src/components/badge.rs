//! Badge component for labels and counts
//!
//! A small inline pill. Optionally carries a pinging indicator dot or a
//! dismiss control that hides just this badge.

use velum_core::{span, Node, Render};
use velum_js::{Js, Transition};
use velum_theme::{PairTable, VariantTable};

use crate::components::shared::dismiss_button;
use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "light"),
    &[
        ("default", "white", "bg-white text-[#3E3E3E] border border-[#DADADA]"),
        ("default", "primary", "bg-[#4363EC] text-white"),
        ("default", "secondary", "bg-[#6B6E7C] text-white"),
        ("default", "dark", "bg-[#1E1E1E] text-white"),
        ("default", "success", "bg-[#ECFEF3] text-[#047857]"),
        ("default", "warning", "bg-[#FFF8E6] text-[#FF8B08]"),
        ("default", "danger", "bg-[#FFE6E6] text-[#E73B3B]"),
        ("default", "info", "bg-[#E5F0FF] text-[#004FC4]"),
        ("default", "light", "bg-[#E3E7F1] text-[#707483]"),
        ("default", "misc", "bg-[#FFE6FF] text-[#52059C]"),
        ("default", "dawn", "bg-[#FFECDA] text-[#4D4137]"),
        ("outline", "white", "bg-transparent text-[#3E3E3E] border border-[#DADADA]"),
        ("outline", "primary", "bg-transparent text-[#4363EC] border border-[#4363EC]"),
        ("outline", "secondary", "bg-transparent text-[#6B6E7C] border border-[#6B6E7C]"),
        ("outline", "dark", "bg-transparent text-[#1E1E1E] border border-[#1E1E1E]"),
        ("outline", "success", "bg-transparent text-[#047857] border border-[#6EE7B7]"),
        ("outline", "warning", "bg-transparent text-[#FF8B08] border border-[#FF8B08]"),
        ("outline", "danger", "bg-transparent text-[#E73B3B] border border-[#E73B3B]"),
        ("outline", "info", "bg-transparent text-[#004FC4] border border-[#004FC4]"),
        ("outline", "light", "bg-transparent text-[#707483] border border-[#707483]"),
        ("outline", "misc", "bg-transparent text-[#52059C] border border-[#52059C]"),
        ("outline", "dawn", "bg-transparent text-[#4D4137] border border-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "px-1.5 py-0.5 text-[10px]"),
        ("small", "px-2 py-0.5 text-xs"),
        ("medium", "px-2.5 py-1 text-sm"),
        ("large", "px-3 py-1 text-base"),
        ("extra_large", "px-3.5 py-1.5 text-lg"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "full",
    &[
        ("none", ""),
        ("extra_small", "rounded-sm"),
        ("small", "rounded"),
        ("medium", "rounded-md"),
        ("large", "rounded-lg"),
        ("extra_large", "rounded-xl"),
        ("full", "rounded-full"),
    ],
);

/// Indicator dot colors; solid tones so the dot reads at 8px.
static INDICATOR_CLASS: VariantTable = VariantTable::new(
    "indicator_class",
    "danger",
    &[
        ("white", "bg-white border border-[#DADADA]"),
        ("primary", "bg-[#4363EC]"),
        ("secondary", "bg-[#6B6E7C]"),
        ("dark", "bg-[#1E1E1E]"),
        ("success", "bg-[#047857]"),
        ("warning", "bg-[#FF8B08]"),
        ("danger", "bg-[#E73B3B]"),
        ("info", "bg-[#004FC4]"),
        ("light", "bg-[#707483]"),
        ("misc", "bg-[#52059C]"),
        ("dawn", "bg-[#4D4137]"),
    ],
);

/// Badge builder.
#[derive(Clone, Debug, Default)]
pub struct Badge {
    id: Option<String>,
    label: String,
    variant: Option<String>,
    color: Option<String>,
    size: Option<String>,
    rounded: Option<String>,
    class: Option<String>,
    indicator: Option<String>,
    pinging: bool,
    dismissable: bool,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Required when the badge is dismissable.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    style_setters! {
        /// Style variant: `default` or `outline`.
        variant,
        color,
        size,
        rounded,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Color of the leading indicator dot.
        indicator,
    }

    /// Animates the indicator dot.
    pub fn pinging(mut self, pinging: bool) -> Self {
        self.pinging = pinging;
        self
    }

    /// Adds a close control; needs an id to address the badge.
    pub fn dismissable(mut self, dismissable: bool) -> Self {
        self.dismissable = dismissable;
        self
    }

    fn dismiss_chain(&self, id: &str) -> Js {
        Js::new().hide_transition(
            format!("#{id}"),
            Transition::ms(150)
                .during("transition-opacity")
                .from("opacity-100")
                .to("opacity-0"),
        )
    }
}

impl Render for Badge {
    fn render(&self) -> Node {
        let mut badge = span()
            .class("inline-flex items-center gap-1.5 font-medium")
            .class(COLOR_VARIANT.resolve(self.variant.as_deref(), self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(self.class.as_deref().unwrap_or(""));
        if let Some(id) = &self.id {
            badge = badge.id(id);
        }
        if let Some(indicator) = &self.indicator {
            badge = badge.child(
                span()
                    .class("size-2 rounded-full")
                    .class(INDICATOR_CLASS.resolve(Some(indicator)))
                    .class(if self.pinging { "animate-ping" } else { "" }),
            );
        }
        badge = badge.text(&self.label);
        if self.dismissable {
            match &self.id {
                Some(id) => {
                    badge = badge.child(dismiss_button("Dismiss badge", &self.dismiss_chain(id)));
                }
                None => {
                    tracing::debug!("dismissable badge without an id, skipping close control");
                }
            }
        }
        badge.into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair_is_light() {
        let html = Badge::new("New").to_html();
        assert!(html.contains("bg-[#E3E7F1] text-[#707483]"));
    }

    #[test]
    fn test_indicator_dot_and_ping() {
        let html = Badge::new("3").indicator("success").pinging(true).to_html();
        assert!(html.contains("bg-[#047857]"));
        assert!(html.contains("animate-ping"));
    }

    #[test]
    fn test_dismiss_requires_id() {
        let without = Badge::new("x").dismissable(true).to_html();
        assert!(!without.contains("data-on-click"));
        let with = Badge::new("x").id("b1").dismissable(true).to_html();
        assert!(with.contains("data-on-click"));
    }
}
