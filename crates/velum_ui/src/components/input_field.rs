//! Single-line input fields
//!
//! One builder covers the whole `<input>` family (text, email, url, number,
//! search, password, telephone); the entry points differ only in the input
//! type and its default passthrough surface. Each field renders in one of
//! two structural layouts chosen once at render entry: an outer label block
//! above the input, or a floating label inside it. The two layouts share no
//! markup.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = InputField::email("signup-email")
//!     .label("Email address")
//!     .label_mode(LabelMode::Floating)
//!     .color("primary")
//!     .errors(["is required"])
//!     .to_html();
//!
//! assert!(html.contains("type=\"email\""));
//! assert!(html.contains("id=\"signup-email-errors\""));
//! ```

use velum_core::{div, input, label, Attrs, Node, Render};
use velum_theme::VariantTable;

use crate::components::field::{description_block, error_block, outer_label, LabelMode};
use crate::macros::style_setters;

/// Attributes the caller may pass through to the underlying input.
const ALLOWED_REST: &[&str] = &[
    "autocomplete",
    "disabled",
    "required",
    "readonly",
    "min",
    "max",
    "step",
    "minlength",
    "maxlength",
    "pattern",
    "inputmode",
    "form",
];

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "light",
    &[
        ("white", "border-[#DADADA] focus-within:border-[#3E3E3E] focus-within:ring-[#DADADA]"),
        ("primary", "border-[#4363EC] focus-within:border-[#2441C2] focus-within:ring-[#4363EC]"),
        ("secondary", "border-[#6B6E7C] focus-within:border-[#60636F] focus-within:ring-[#6B6E7C]"),
        ("dark", "border-[#1E1E1E] focus-within:border-[#050404] focus-within:ring-[#1E1E1E]"),
        ("success", "border-[#6EE7B7] focus-within:border-[#047857] focus-within:ring-[#6EE7B7]"),
        ("warning", "border-[#FF8B08] focus-within:border-[#FF8B08] focus-within:ring-[#FF8B08]"),
        ("danger", "border-[#E73B3B] focus-within:border-[#E73B3B] focus-within:ring-[#E73B3B]"),
        ("info", "border-[#004FC4] focus-within:border-[#004FC4] focus-within:ring-[#004FC4]"),
        ("light", "border-[#DADADA] focus-within:border-[#707483] focus-within:ring-[#E3E7F1]"),
        ("misc", "border-[#52059C] focus-within:border-[#52059C] focus-within:ring-[#52059C]"),
        ("dawn", "border-[#4D4137] focus-within:border-[#4D4137] focus-within:ring-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "text-xs [&_input]:h-8"),
        ("small", "text-sm [&_input]:h-9"),
        ("medium", "text-sm [&_input]:h-10"),
        ("large", "text-base [&_input]:h-11"),
        ("extra_large", "text-lg [&_input]:h-12"),
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

/// Wrapper classes applied whenever the caller passed validation errors,
/// overriding the color dimension.
const ERROR_BORDER: &str = "border-[#E73B3B] focus-within:border-[#E73B3B] focus-within:ring-[#E73B3B]";

/// Input field builder; see the module docs.
#[derive(Clone, Debug)]
pub struct InputField {
    id: String,
    input_type: &'static str,
    name: Option<String>,
    label: Option<String>,
    label_mode: LabelMode,
    placeholder: Option<String>,
    value: Option<String>,
    description: Option<String>,
    color: Option<String>,
    size: Option<String>,
    rounded: Option<String>,
    class: Option<String>,
    errors: Vec<String>,
    rest: Attrs,
}

impl InputField {
    fn new(id: impl Into<String>, input_type: &'static str) -> Self {
        Self {
            id: id.into(),
            input_type,
            name: None,
            label: None,
            label_mode: LabelMode::default(),
            placeholder: None,
            value: None,
            description: None,
            color: None,
            size: None,
            rounded: None,
            class: None,
            errors: Vec::new(),
            rest: Attrs::new(),
        }
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, "text")
    }

    pub fn email(id: impl Into<String>) -> Self {
        Self::new(id, "email")
    }

    pub fn url(id: impl Into<String>) -> Self {
        Self::new(id, "url")
    }

    pub fn number(id: impl Into<String>) -> Self {
        Self::new(id, "number")
    }

    pub fn search(id: impl Into<String>) -> Self {
        Self::new(id, "search")
    }

    pub fn password(id: impl Into<String>) -> Self {
        Self::new(id, "password")
    }

    pub fn telephone(id: impl Into<String>) -> Self {
        Self::new(id, "tel")
    }

    style_setters! {
        /// Form field name; defaults to the id.
        name,
        label,
        placeholder,
        /// Initial input value.
        value,
        /// Muted helper line under the input.
        description,
        /// Border/focus-ring color.
        color,
        size,
        rounded,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn label_mode(mut self, mode: LabelMode) -> Self {
        self.label_mode = mode;
        self
    }

    /// Caller-supplied validation errors, rendered under the input. The
    /// field renders them verbatim; producing them is the caller's business.
    pub fn errors<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }

    /// Passthrough attribute for the underlying input, checked against the
    /// component's allow-list.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.rest.set(name, value);
        self
    }

    fn wrapper_classes(&self) -> Vec<String> {
        let color = if self.errors.is_empty() {
            COLOR_CLASS.resolve(self.color.as_deref()).into_owned()
        } else {
            ERROR_BORDER.to_string()
        };
        vec![
            color,
            SIZE_CLASS.resolve(self.size.as_deref()).into_owned(),
            ROUNDED_SIZE.resolve(self.rounded.as_deref()).into_owned(),
            self.class.clone().unwrap_or_default(),
        ]
    }

    fn base_input(&self) -> velum_core::Element {
        let mut rest = self.rest.clone();
        rest.retain_allowed(ALLOWED_REST);
        input()
            .id(&self.id)
            .attr("type", self.input_type)
            .attr("name", self.name.clone().unwrap_or_else(|| self.id.clone()))
            .maybe_attr("value", self.value.clone())
            .rest(&rest)
    }

    fn render_outer(&self) -> Node {
        let input = self
            .base_input()
            .maybe_attr("placeholder", self.placeholder.clone())
            .class("w-full bg-transparent px-3 focus:outline-none");
        let wrapper = div()
            .class("w-full border transition-colors focus-within:ring-1")
            .classes(self.wrapper_classes())
            .child(input);
        div()
            .class("space-y-1.5")
            .maybe_child(
                self.label
                    .as_deref()
                    .map(|text| outer_label(&self.id, text)),
            )
            .child(wrapper)
            .maybe_child(self.description.as_deref().map(description_block))
            .child(error_block(&self.id, &self.errors))
            .into_node()
    }

    fn render_floating(&self) -> Node {
        // Floating labels need `placeholder-shown` to track content, so the
        // placeholder is a single space and the label does the talking.
        let input = self
            .base_input()
            .attr("placeholder", " ")
            .class("peer w-full bg-transparent px-3 pt-4 pb-1 focus:outline-none");
        let floating = label()
            .attr("for", &self.id)
            .class("pointer-events-none absolute start-3 top-1 text-xs opacity-70 transition-all peer-placeholder-shown:top-3 peer-placeholder-shown:text-sm peer-focus:top-1 peer-focus:text-xs")
            .text(self.label.clone().unwrap_or_default());
        let wrapper = div()
            .class("relative w-full border transition-colors focus-within:ring-1")
            .classes(self.wrapper_classes())
            .child(input)
            .child(floating);
        div()
            .class("space-y-1.5")
            .child(wrapper)
            .maybe_child(self.description.as_deref().map(description_block))
            .child(error_block(&self.id, &self.errors))
            .into_node()
    }
}

impl Render for InputField {
    fn render(&self) -> Node {
        match self.label_mode {
            LabelMode::Outer => self.render_outer(),
            LabelMode::Floating => self.render_floating(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_points_set_input_type() {
        for (field, expected) in [
            (InputField::text("f"), "type=\"text\""),
            (InputField::email("f"), "type=\"email\""),
            (InputField::url("f"), "type=\"url\""),
            (InputField::number("f"), "type=\"number\""),
            (InputField::search("f"), "type=\"search\""),
            (InputField::password("f"), "type=\"password\""),
            (InputField::telephone("f"), "type=\"tel\""),
        ] {
            assert!(field.to_html().contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_outer_and_floating_layouts_differ_structurally() {
        let outer = InputField::text("f").label("Name").to_html();
        let floating = InputField::text("f")
            .label("Name")
            .label_mode(LabelMode::Floating)
            .to_html();
        assert!(outer.starts_with("<div class=\"space-y-1.5\"><label"));
        assert!(floating.contains("peer-placeholder-shown:top-3"));
        assert!(!outer.contains("peer-placeholder-shown:top-3"));
    }

    #[test]
    fn test_errors_swap_color_for_danger_border() {
        let clean = InputField::text("f").color("primary");
        let broken = InputField::text("f").color("primary").errors(["is required"]);
        assert!(clean.to_html().contains("border-[#4363EC]"));
        assert!(!broken.to_html().contains("border-[#4363EC]"));
        assert!(broken.to_html().contains("id=\"f-errors\""));
    }

    #[test]
    fn test_rest_is_allow_listed() {
        let html = InputField::number("f")
            .attr("min", "0")
            .attr("max", "10")
            .attr("oninput", "alert(1)")
            .to_html();
        assert!(html.contains("min=\"0\""));
        assert!(html.contains("max=\"10\""));
        assert!(!html.contains("oninput"));
    }

    #[test]
    fn test_unknown_color_passes_through() {
        let html = InputField::text("f").color("border-pink-300").to_html();
        assert!(html.contains("border-pink-300"));
    }
}
