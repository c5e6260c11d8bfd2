//! Multi-line text field
//!
//! Same label/description/error surface as the single-line fields, with a
//! row count instead of a height scale.

use velum_core::{div, el, Attrs, Node, Render};
use velum_theme::VariantTable;

use crate::components::field::{description_block, error_block, outer_label};
use crate::macros::style_setters;

/// Attributes the caller may pass through to the underlying textarea.
const ALLOWED_REST: &[&str] = &[
    "autocomplete",
    "disabled",
    "required",
    "readonly",
    "minlength",
    "maxlength",
    "wrap",
    "form",
];

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "light",
    &[
        ("white", "border-[#DADADA] focus-within:border-[#3E3E3E]"),
        ("primary", "border-[#4363EC] focus-within:border-[#2441C2]"),
        ("secondary", "border-[#6B6E7C] focus-within:border-[#60636F]"),
        ("dark", "border-[#1E1E1E] focus-within:border-[#050404]"),
        ("success", "border-[#6EE7B7] focus-within:border-[#047857]"),
        ("warning", "border-[#FF8B08] focus-within:border-[#FF8B08]"),
        ("danger", "border-[#E73B3B] focus-within:border-[#E73B3B]"),
        ("info", "border-[#004FC4] focus-within:border-[#004FC4]"),
        ("light", "border-[#DADADA] focus-within:border-[#707483]"),
        ("misc", "border-[#52059C] focus-within:border-[#52059C]"),
        ("dawn", "border-[#4D4137] focus-within:border-[#4D4137]"),
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

/// Textarea field builder.
#[derive(Clone, Debug)]
pub struct TextareaField {
    id: String,
    name: Option<String>,
    label: Option<String>,
    placeholder: Option<String>,
    value: Option<String>,
    description: Option<String>,
    color: Option<String>,
    size: Option<String>,
    rounded: Option<String>,
    class: Option<String>,
    rows: u32,
    errors: Vec<String>,
    rest: Attrs,
}

impl TextareaField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            label: None,
            placeholder: None,
            value: None,
            description: None,
            color: None,
            size: None,
            rounded: None,
            class: None,
            rows: 4,
            errors: Vec::new(),
            rest: Attrs::new(),
        }
    }

    style_setters! {
        /// Form field name; defaults to the id.
        name,
        label,
        placeholder,
        /// Initial content.
        value,
        /// Muted helper line under the textarea.
        description,
        color,
        size,
        rounded,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    /// Caller-supplied validation errors, rendered under the textarea.
    pub fn errors<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }

    /// Passthrough attribute for the underlying textarea, checked against
    /// the component's allow-list.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.rest.set(name, value);
        self
    }
}

impl Render for TextareaField {
    fn render(&self) -> Node {
        let mut rest = self.rest.clone();
        rest.retain_allowed(ALLOWED_REST);
        let textarea = el("textarea")
            .id(&self.id)
            .attr("name", self.name.clone().unwrap_or_else(|| self.id.clone()))
            .attr("rows", self.rows.to_string())
            .maybe_attr("placeholder", self.placeholder.clone())
            .class("w-full resize-y border bg-transparent p-3 transition-colors focus:outline-none focus:ring-1")
            .class(if self.errors.is_empty() { "" } else { "border-[#E73B3B]" })
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .rest(&rest)
            .text(self.value.clone().unwrap_or_default());
        div()
            .class("space-y-1.5")
            .maybe_child(self.label.as_deref().map(|text| outer_label(&self.id, text)))
            .child(textarea)
            .maybe_child(self.description.as_deref().map(description_block))
            .child(error_block(&self.id, &self.errors))
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_renders_as_content_not_attribute() {
        let html = TextareaField::new("bio").value("hello").to_html();
        assert!(html.contains(">hello</textarea>"));
        assert!(!html.contains("value=\"hello\""));
    }

    #[test]
    fn test_rows_default_and_override() {
        assert!(TextareaField::new("b").to_html().contains("rows=\"4\""));
        assert!(TextareaField::new("b").rows(10).to_html().contains("rows=\"10\""));
    }

    #[test]
    fn test_errors_render_under_field() {
        let html = TextareaField::new("bio").errors(["is too long"]).to_html();
        assert!(html.contains("id=\"bio-errors\""));
        assert!(html.contains("is too long"));
    }
}
