//! Fieldset component for grouping form fields
//!
//! A native `<fieldset>` with a styled legend. Fields are caller-supplied
//! children; disabling the fieldset disables every control inside it, which
//! is the browser's behavior, not Velum's.

use velum_core::{el, Node, Render};
use velum_theme::VariantTable;

use crate::components::field::error_block;
use crate::macros::style_setters;

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "light",
    &[
        ("white", "border-[#DADADA]"),
        ("primary", "border-[#4363EC]"),
        ("secondary", "border-[#6B6E7C]"),
        ("dark", "border-[#1E1E1E]"),
        ("success", "border-[#6EE7B7]"),
        ("warning", "border-[#FF8B08]"),
        ("danger", "border-[#E73B3B]"),
        ("info", "border-[#004FC4]"),
        ("light", "border-[#DADADA]"),
        ("misc", "border-[#52059C]"),
        ("dawn", "border-[#4D4137]"),
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

static SPACE_CLASS: VariantTable = VariantTable::new(
    "space_class",
    "small",
    &[
        ("none", ""),
        ("extra_small", "space-y-2"),
        ("small", "space-y-3"),
        ("medium", "space-y-4"),
        ("large", "space-y-5"),
        ("extra_large", "space-y-6"),
    ],
);

/// Fieldset builder.
#[derive(Clone, Debug, Default)]
pub struct Fieldset {
    id: String,
    legend: Option<String>,
    color: Option<String>,
    rounded: Option<String>,
    padding: Option<String>,
    space: Option<String>,
    class: Option<String>,
    disabled: bool,
    fields: Vec<Node>,
    errors: Vec<String>,
}

impl Fieldset {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Caption rendered in the border gap.
        legend,
        /// Border color.
        color,
        rounded,
        padding,
        /// Gap between grouped fields.
        space,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Disables every control inside the group.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn field(mut self, field: impl Into<Node>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Caller-supplied group-level validation errors.
    pub fn errors<I, S>(mut self, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.errors = errors.into_iter().map(Into::into).collect();
        self
    }
}

impl Render for Fieldset {
    fn render(&self) -> Node {
        el("fieldset")
            .id(&self.id)
            .flag("disabled", self.disabled)
            .class("w-full border disabled:opacity-60")
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(PADDING_SIZE.resolve(self.padding.as_deref()))
            .class(SPACE_CLASS.resolve(self.space.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .maybe_child(
                self.legend
                    .as_ref()
                    .map(|legend| el("legend").class("px-1.5 text-sm font-medium").text(legend)),
            )
            .children(self.fields.iter().cloned())
            .child(error_block(&self.id, &self.errors))
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::input_field::InputField;

    #[test]
    fn test_legend_and_fields_render_in_order() {
        let html = Fieldset::new("shipping")
            .legend("Shipping")
            .field(InputField::text("street").label("Street").render())
            .field(InputField::text("city").label("City").render())
            .to_html();
        assert!(html.starts_with("<fieldset"));
        let legend = html.find("<legend").unwrap();
        assert!(legend < html.find("id=\"street\"").unwrap());
        assert!(html.find("id=\"street\"").unwrap() < html.find("id=\"city\"").unwrap());
    }

    #[test]
    fn test_disabled_is_a_bare_flag() {
        assert!(Fieldset::new("f").disabled(true).to_html().contains(" disabled>"));
        assert!(!Fieldset::new("f").to_html().contains(" disabled>"));
    }

    #[test]
    fn test_group_errors_render_once() {
        let html = Fieldset::new("card").errors(["numbers do not match"]).to_html();
        assert!(html.contains("id=\"card-errors\""));
    }
}
