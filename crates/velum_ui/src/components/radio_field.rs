//! Radio field for one-of-many form input
//!
//! A styled native radio beside its label. Radios sharing a `name` form a
//! browser-managed group; Velum adds no grouping logic of its own.

use velum_core::{div, input, label, span, Attrs, Node, Render};
use velum_theme::VariantTable;

use crate::components::field::error_block;
use crate::macros::style_setters;

/// Attributes the caller may pass through to the underlying input.
const ALLOWED_REST: &[&str] = &["disabled", "required", "form"];

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
        ("white", "checked:border-[#DADADA] checked:bg-white"),
        ("primary", "checked:border-[#4363EC] checked:bg-[#4363EC]"),
        ("secondary", "checked:border-[#6B6E7C] checked:bg-[#6B6E7C]"),
        ("dark", "checked:border-[#1E1E1E] checked:bg-[#1E1E1E]"),
        ("success", "checked:border-[#047857] checked:bg-[#047857]"),
        ("warning", "checked:border-[#FF8B08] checked:bg-[#FF8B08]"),
        ("danger", "checked:border-[#E73B3B] checked:bg-[#E73B3B]"),
        ("info", "checked:border-[#004FC4] checked:bg-[#004FC4]"),
        ("light", "checked:border-[#707483] checked:bg-[#707483]"),
        ("misc", "checked:border-[#52059C] checked:bg-[#52059C]"),
        ("dawn", "checked:border-[#4D4137] checked:bg-[#4D4137]"),
    ],
);

/// Radio field builder.
#[derive(Clone, Debug, Default)]
pub struct RadioField {
    id: String,
    name: Option<String>,
    value: Option<String>,
    label: Option<String>,
    size: Option<String>,
    color: Option<String>,
    class: Option<String>,
    checked: bool,
    errors: Vec<String>,
    rest: Attrs,
}

impl RadioField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Group name; radios with the same name are mutually exclusive.
        name,
        /// Submitted value for this option.
        value,
        /// Text rendered beside the radio.
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

impl Render for RadioField {
    fn render(&self) -> Node {
        let mut rest = self.rest.clone();
        rest.retain_allowed(ALLOWED_REST);
        let radio = input()
            .id(&self.id)
            .attr("type", "radio")
            .attr("name", self.name.clone().unwrap_or_else(|| self.id.clone()))
            .maybe_attr("value", self.value.clone())
            .class("appearance-none rounded-full border-2 border-[#DADADA] bg-white transition-colors cursor-pointer checked:shadow-[inset_0_0_0_3px_white]")
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
                    .child(radio)
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
    fn test_radios_share_group_by_name() {
        let a = RadioField::new("plan-basic").name("plan").value("basic").to_html();
        let b = RadioField::new("plan-pro").name("plan").value("pro").to_html();
        assert!(a.contains("name=\"plan\""));
        assert!(b.contains("name=\"plan\""));
        assert!(b.contains("value=\"pro\""));
    }

    #[test]
    fn test_color_table_resolves() {
        let html = RadioField::new("r").color("misc").to_html();
        assert!(html.contains("checked:border-[#52059C]"));
    }
}
