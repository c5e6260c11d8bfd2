//! Native select field
//!
//! A styled `<select>` with caller-supplied options. Multi-select is a flag
//! on the element; option state is the browser's business.

use velum_core::{div, el, Attrs, Node, Render};
use velum_theme::VariantTable;

use crate::components::field::{description_block, error_block, outer_label};
use crate::macros::style_setters;

/// Attributes the caller may pass through to the underlying select.
const ALLOWED_REST: &[&str] = &["disabled", "required", "form", "autocomplete"];

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "light",
    &[
        ("white", "border-[#DADADA] focus:border-[#3E3E3E]"),
        ("primary", "border-[#4363EC] focus:border-[#2441C2]"),
        ("secondary", "border-[#6B6E7C] focus:border-[#60636F]"),
        ("dark", "border-[#1E1E1E] focus:border-[#050404]"),
        ("success", "border-[#6EE7B7] focus:border-[#047857]"),
        ("warning", "border-[#FF8B08] focus:border-[#FF8B08]"),
        ("danger", "border-[#E73B3B] focus:border-[#E73B3B]"),
        ("info", "border-[#004FC4] focus:border-[#004FC4]"),
        ("light", "border-[#DADADA] focus:border-[#707483]"),
        ("misc", "border-[#52059C] focus:border-[#52059C]"),
        ("dawn", "border-[#4D4137] focus:border-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "text-xs h-8"),
        ("small", "text-sm h-9"),
        ("medium", "text-sm h-10"),
        ("large", "text-base h-11"),
        ("extra_large", "text-lg h-12"),
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

/// One option entry.
#[derive(Clone, Debug, Default)]
pub struct SelectOption {
    label: String,
    value: String,
    selected: bool,
    disabled: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            selected: false,
            disabled: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Native select builder.
#[derive(Clone, Debug, Default)]
pub struct NativeSelect {
    id: String,
    name: Option<String>,
    label: Option<String>,
    description: Option<String>,
    color: Option<String>,
    size: Option<String>,
    rounded: Option<String>,
    class: Option<String>,
    multiple: bool,
    options: Vec<SelectOption>,
    errors: Vec<String>,
    rest: Attrs,
}

impl NativeSelect {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Form field name; defaults to the id.
        name,
        label,
        /// Muted helper line under the select.
        description,
        color,
        size,
        rounded,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
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

    /// Passthrough attribute for the underlying select, checked against the
    /// component's allow-list.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.rest.set(name, value);
        self
    }
}

impl Render for NativeSelect {
    fn render(&self) -> Node {
        let mut rest = self.rest.clone();
        rest.retain_allowed(ALLOWED_REST);
        let options = self.options.iter().map(|option| {
            el("option")
                .attr("value", &option.value)
                .flag("selected", option.selected)
                .flag("disabled", option.disabled)
                .text(&option.label)
        });
        let select = el("select")
            .id(&self.id)
            .attr("name", self.name.clone().unwrap_or_else(|| self.id.clone()))
            .flag("multiple", self.multiple)
            .class("w-full border bg-transparent px-3 transition-colors focus:outline-none")
            .class(if self.multiple { "py-2 h-auto" } else { "" })
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .rest(&rest)
            .children(options);
        div()
            .class("space-y-1.5")
            .maybe_child(self.label.as_deref().map(|text| outer_label(&self.id, text)))
            .child(select)
            .maybe_child(self.description.as_deref().map(description_block))
            .child(error_block(&self.id, &self.errors))
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> NativeSelect {
        NativeSelect::new("plan")
            .option(SelectOption::new("Basic", "basic"))
            .option(SelectOption::new("Pro", "pro").selected(true))
    }

    #[test]
    fn test_options_render_in_order_with_state() {
        let html = select().to_html();
        let basic = html.find("value=\"basic\"").unwrap();
        let pro = html.find("value=\"pro\"").unwrap();
        assert!(basic < pro);
        assert!(html.contains("value=\"pro\" selected"));
    }

    #[test]
    fn test_multiple_flag() {
        assert!(select().multiple(true).to_html().contains("<select id=\"plan\" name=\"plan\" multiple"));
        assert!(!select().to_html().contains("multiple"));
    }

    #[test]
    fn test_color_table_resolves() {
        let html = select().color("info").to_html();
        assert!(html.contains("border-[#004FC4]"));
    }
}
