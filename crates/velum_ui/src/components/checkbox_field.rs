//! Checkbox field for boolean form input
//!
//! A styled native checkbox beside its label. Color applies through
//! `checked:` utilities, so the box renders identically until checked.

use velum_core::{div, input, label, span, Attrs, Node, Render};
use velum_theme::VariantTable;

use crate::components::field::error_block;
use crate::macros::style_setters;

/// Attributes the caller may pass through to the underlying input.
const ALLOWED_REST: &[&str] = &["disabled", "required", "form", "value"];

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "size-3.5"),
        ("small", "size-4"),
        ("medium", "size-5"),
        ("large", "size-6"),
        ("extra_large", "size-7"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "primary",
    &[
        ("white", "checked:bg-white checked:border-[#DADADA]"),
        ("primary", "checked:bg-[#4363EC] checked:border-[#4363EC]"),
        ("secondary", "checked:bg-[#6B6E7C] checked:border-[#6B6E7C]"),
        ("dark", "checked:bg-[#1E1E1E] checked:border-[#1E1E1E]"),
        ("success", "checked:bg-[#047857] checked:border-[#047857]"),
        ("warning", "checked:bg-[#FF8B08] checked:border-[#FF8B08]"),
        ("danger", "checked:bg-[#E73B3B] checked:border-[#E73B3B]"),
        ("info", "checked:bg-[#004FC4] checked:border-[#004FC4]"),
        ("light", "checked:bg-[#707483] checked:border-[#707483]"),
        ("misc", "checked:bg-[#52059C] checked:border-[#52059C]"),
        ("dawn", "checked:bg-[#4D4137] checked:border-[#4D4137]"),
    ],
);

/// Checkbox field builder.
#[derive(Clone, Debug, Default)]
pub struct CheckboxField {
    id: String,
    name: Option<String>,
    label: Option<String>,
    size: Option<String>,
    color: Option<String>,
    class: Option<String>,
    checked: bool,
    errors: Vec<String>,
    rest: Attrs,
}

impl CheckboxField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Form field name; defaults to the id.
        name,
        /// Text rendered beside the box.
        label,
        size,
        color,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Caller-supplied validation errors, rendered under the field.
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
}

impl Render for CheckboxField {
    fn render(&self) -> Node {
        let mut rest = self.rest.clone();
        rest.retain_allowed(ALLOWED_REST);
        let box_input = input()
            .id(&self.id)
            .attr("type", "checkbox")
            .attr("name", self.name.clone().unwrap_or_else(|| self.id.clone()))
            .class("appearance-none rounded border border-[#DADADA] bg-white transition-colors cursor-pointer")
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .flag("checked", self.checked)
            .rest(&rest);
        div()
            .class("space-y-1")
            .child(
                label()
                    .attr("for", &self.id)
                    .class("inline-flex items-center gap-2 cursor-pointer select-none text-sm")
                    .class(self.class.as_deref().unwrap_or(""))
                    .child(box_input)
                    .maybe_child(self.label.as_ref().map(|text| span().text(text))),
            )
            .child(error_block(&self.id, &self.errors))
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_resolves_through_checked_utilities() {
        let html = CheckboxField::new("c").color("success").to_html();
        assert!(html.contains("checked:bg-[#047857]"));
    }

    #[test]
    fn test_size_and_color_independent_of_checked() {
        let unchecked = CheckboxField::new("c").color("danger").size("large").to_html();
        let checked = CheckboxField::new("c").color("danger").size("large").checked(true).to_html();
        assert!(unchecked.contains("size-6"));
        assert!(checked.contains("size-6"));
        assert!(checked.contains("checked:bg-[#E73B3B]"));
    }

    #[test]
    fn test_label_wraps_input() {
        let html = CheckboxField::new("c").label("Accept terms").to_html();
        assert!(html.contains("for=\"c\""));
        assert!(html.contains("Accept terms"));
    }
}
