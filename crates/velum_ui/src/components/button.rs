//! Button component
//!
//! Renders a `<button>`, or an `<a>` styled identically when `href` is set.
//! [`ButtonGroup`] joins buttons into a segmented control.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = Button::new("Save")
//!     .color("primary")
//!     .size("large")
//!     .to_html();
//!
//! assert!(html.contains("bg-[#4363EC]"));
//! ```

use velum_core::{a, div, el, raw, Node, Render};
use velum_js::Js;
use velum_theme::{PairTable, VariantTable};

use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "primary"),
    &[
        ("default", "white", "bg-white text-[#3E3E3E] border border-[#DADADA] hover:bg-[#E8E8E8]"),
        ("default", "primary", "bg-[#4363EC] text-white hover:bg-[#072ED3]"),
        ("default", "secondary", "bg-[#6B6E7C] text-white hover:bg-[#60636F]"),
        ("default", "dark", "bg-[#1E1E1E] text-white hover:bg-[#111111]"),
        ("default", "success", "bg-[#ECFEF3] text-[#047857] hover:bg-[#D4FDE4]"),
        ("default", "warning", "bg-[#FFF8E6] text-[#FF8B08] hover:bg-[#FFF1C2]"),
        ("default", "danger", "bg-[#FFE6E6] text-[#E73B3B] hover:bg-[#FFCFCF]"),
        ("default", "info", "bg-[#E5F0FF] text-[#004FC4] hover:bg-[#CCE1FF]"),
        ("default", "light", "bg-[#E3E7F1] text-[#707483] hover:bg-[#D4DAE8]"),
        ("default", "misc", "bg-[#FFE6FF] text-[#52059C] hover:bg-[#FFCCFF]"),
        ("default", "dawn", "bg-[#FFECDA] text-[#4D4137] hover:bg-[#FFDFC1]"),
        ("outline", "white", "bg-transparent text-[#3E3E3E] border border-[#DADADA] hover:bg-[#E8E8E8]"),
        ("outline", "primary", "bg-transparent text-[#4363EC] border border-[#4363EC] hover:bg-[#E5F0FF]"),
        ("outline", "secondary", "bg-transparent text-[#6B6E7C] border border-[#6B6E7C] hover:bg-[#EDEEF1]"),
        ("outline", "dark", "bg-transparent text-[#1E1E1E] border border-[#1E1E1E] hover:bg-[#E8E8E8]"),
        ("outline", "success", "bg-transparent text-[#047857] border border-[#6EE7B7] hover:bg-[#ECFEF3]"),
        ("outline", "warning", "bg-transparent text-[#FF8B08] border border-[#FF8B08] hover:bg-[#FFF8E6]"),
        ("outline", "danger", "bg-transparent text-[#E73B3B] border border-[#E73B3B] hover:bg-[#FFE6E6]"),
        ("outline", "info", "bg-transparent text-[#004FC4] border border-[#004FC4] hover:bg-[#E5F0FF]"),
        ("outline", "light", "bg-transparent text-[#707483] border border-[#707483] hover:bg-[#E3E7F1]"),
        ("outline", "misc", "bg-transparent text-[#52059C] border border-[#52059C] hover:bg-[#FFE6FF]"),
        ("outline", "dawn", "bg-transparent text-[#4D4137] border border-[#4D4137] hover:bg-[#FFECDA]"),
        ("transparent", "white", "bg-transparent text-[#3E3E3E] hover:bg-[#E8E8E8]"),
        ("transparent", "primary", "bg-transparent text-[#4363EC] hover:bg-[#E5F0FF]"),
        ("transparent", "secondary", "bg-transparent text-[#6B6E7C] hover:bg-[#EDEEF1]"),
        ("transparent", "dark", "bg-transparent text-[#1E1E1E] hover:bg-[#E8E8E8]"),
        ("transparent", "success", "bg-transparent text-[#047857] hover:bg-[#ECFEF3]"),
        ("transparent", "warning", "bg-transparent text-[#FF8B08] hover:bg-[#FFF8E6]"),
        ("transparent", "danger", "bg-transparent text-[#E73B3B] hover:bg-[#FFE6E6]"),
        ("transparent", "info", "bg-transparent text-[#004FC4] hover:bg-[#E5F0FF]"),
        ("transparent", "light", "bg-transparent text-[#707483] hover:bg-[#E3E7F1]"),
        ("transparent", "misc", "bg-transparent text-[#52059C] hover:bg-[#FFE6FF]"),
        ("transparent", "dawn", "bg-transparent text-[#4D4137] hover:bg-[#FFECDA]"),
        ("shadow", "white", "bg-white text-[#3E3E3E] shadow-md hover:bg-[#E8E8E8]"),
        ("shadow", "primary", "bg-[#4363EC] text-white shadow-md hover:bg-[#072ED3]"),
        ("shadow", "secondary", "bg-[#6B6E7C] text-white shadow-md hover:bg-[#60636F]"),
        ("shadow", "dark", "bg-[#1E1E1E] text-white shadow-md hover:bg-[#111111]"),
        ("shadow", "success", "bg-[#ECFEF3] text-[#047857] shadow-md hover:bg-[#D4FDE4]"),
        ("shadow", "warning", "bg-[#FFF8E6] text-[#FF8B08] shadow-md hover:bg-[#FFF1C2]"),
        ("shadow", "danger", "bg-[#FFE6E6] text-[#E73B3B] shadow-md hover:bg-[#FFCFCF]"),
        ("shadow", "info", "bg-[#E5F0FF] text-[#004FC4] shadow-md hover:bg-[#CCE1FF]"),
        ("shadow", "light", "bg-[#E3E7F1] text-[#707483] shadow-md hover:bg-[#D4DAE8]"),
        ("shadow", "misc", "bg-[#FFE6FF] text-[#52059C] shadow-md hover:bg-[#FFCCFF]"),
        ("shadow", "dawn", "bg-[#FFECDA] text-[#4D4137] shadow-md hover:bg-[#FFDFC1]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "px-2 py-1 text-xs"),
        ("small", "px-3 py-1.5 text-sm"),
        ("medium", "px-4 py-2 text-sm"),
        ("large", "px-5 py-2.5 text-base"),
        ("extra_large", "px-6 py-3 text-lg"),
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
        ("full", "rounded-full"),
    ],
);

/// Button builder.
#[derive(Clone, Debug, Default)]
pub struct Button {
    label: String,
    variant: Option<String>,
    color: Option<String>,
    size: Option<String>,
    rounded: Option<String>,
    class: Option<String>,
    icon: Option<String>,
    href: Option<String>,
    full_width: bool,
    disabled: bool,
    on_click: Option<Js>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Style variant: `default`, `outline`, `transparent` or `shadow`.
        variant,
        color,
        size,
        rounded,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Inline SVG markup rendered before the label.
        icon,
        /// Renders an anchor instead of a button.
        href,
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Interaction chain executed on click.
    pub fn on_click(mut self, js: Js) -> Self {
        self.on_click = Some(js);
        self
    }
}

impl Render for Button {
    fn render(&self) -> Node {
        let element = match &self.href {
            Some(href) => a().attr("href", href),
            None => el("button").attr("type", "button").flag("disabled", self.disabled),
        };
        let mut element = element
            .class("inline-flex items-center justify-center gap-2 font-medium transition-colors duration-150 cursor-pointer disabled:opacity-50 disabled:pointer-events-none")
            .class(if self.full_width { "w-full" } else { "" })
            .class(COLOR_VARIANT.resolve(self.variant.as_deref(), self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(self.class.as_deref().unwrap_or(""));
        if let Some(js) = &self.on_click {
            element = element.on("click", js);
        }
        element
            .maybe_child(self.icon.clone().map(raw))
            .text(&self.label)
            .into_node()
    }
}

/// A segmented row of buttons.
#[derive(Clone, Debug, Default)]
pub struct ButtonGroup {
    buttons: Vec<Button>,
    class: Option<String>,
}

impl ButtonGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Render for ButtonGroup {
    fn render(&self) -> Node {
        div()
            .class("inline-flex [&>*]:rounded-none [&>*:first-child]:rounded-s [&>*:last-child]:rounded-e [&>*+*]:border-s [&>*+*]:border-s-black/10")
            .class(self.class.as_deref().unwrap_or(""))
            .children(self.buttons.iter().map(Button::render))
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_variant_and_color() {
        let html = Button::new("Go").to_html();
        assert!(html.contains("bg-[#4363EC] text-white hover:bg-[#072ED3]"));
    }

    #[test]
    fn test_href_renders_anchor() {
        let html = Button::new("Docs").href("/docs").to_html();
        assert!(html.starts_with("<a"));
        assert!(html.contains("href=\"/docs\""));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_disabled_flag_only_on_buttons() {
        let html = Button::new("X").disabled(true).to_html();
        assert!(html.contains(" disabled"));
    }

    #[test]
    fn test_click_chain_is_attached() {
        let html = Button::new("Open").on_click(Js::new().show_to("#m")).to_html();
        assert!(html.contains("data-on-click"));
    }

    #[test]
    fn test_group_wraps_buttons_in_order() {
        let html = ButtonGroup::new()
            .button(Button::new("One"))
            .button(Button::new("Two"))
            .to_html();
        assert!(html.find("One").unwrap() < html.find("Two").unwrap());
    }
}
