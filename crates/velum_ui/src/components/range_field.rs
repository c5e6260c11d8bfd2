//! Range field for numeric sliders
//!
//! A native range input with an accent color table and optional min/max
//! captions. The browser owns the thumb; Velum only styles the track accent.

use velum_core::{div, input, span, Attrs, Node, Render};
use velum_theme::VariantTable;

use crate::components::field::{error_block, outer_label};
use crate::macros::style_setters;

/// Attributes the caller may pass through to the underlying input.
const ALLOWED_REST: &[&str] = &["disabled", "required", "form", "list"];

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "primary",
    &[
        ("white", "accent-white"),
        ("primary", "accent-[#4363EC]"),
        ("secondary", "accent-[#6B6E7C]"),
        ("dark", "accent-[#1E1E1E]"),
        ("success", "accent-[#047857]"),
        ("warning", "accent-[#FF8B08]"),
        ("danger", "accent-[#E73B3B]"),
        ("info", "accent-[#004FC4]"),
        ("light", "accent-[#707483]"),
        ("misc", "accent-[#52059C]"),
        ("dawn", "accent-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "h-1"),
        ("small", "h-1.5"),
        ("medium", "h-2"),
        ("large", "h-2.5"),
        ("extra_large", "h-3"),
    ],
);

/// Range field builder.
#[derive(Clone, Debug, Default)]
pub struct RangeField {
    id: String,
    name: Option<String>,
    label: Option<String>,
    color: Option<String>,
    size: Option<String>,
    class: Option<String>,
    min: Option<i64>,
    max: Option<i64>,
    step: Option<i64>,
    value: Option<i64>,
    captions: bool,
    errors: Vec<String>,
    rest: Attrs,
}

impl RangeField {
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
        /// Track accent color.
        color,
        /// Track height.
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    /// Renders the min/max values under the track ends.
    pub fn captions(mut self, captions: bool) -> Self {
        self.captions = captions;
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

impl Render for RangeField {
    fn render(&self) -> Node {
        let mut rest = self.rest.clone();
        rest.retain_allowed(ALLOWED_REST);
        let slider = input()
            .id(&self.id)
            .attr("type", "range")
            .attr("name", self.name.clone().unwrap_or_else(|| self.id.clone()))
            .maybe_attr("min", self.min.map(|v| v.to_string()))
            .maybe_attr("max", self.max.map(|v| v.to_string()))
            .maybe_attr("step", self.step.map(|v| v.to_string()))
            .maybe_attr("value", self.value.map(|v| v.to_string()))
            .class("w-full cursor-pointer appearance-auto rounded-full bg-[#E3E7F1]")
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .rest(&rest);
        let mut root = div()
            .class("space-y-1.5")
            .maybe_child(self.label.as_deref().map(|text| outer_label(&self.id, text)))
            .child(slider);
        if self.captions {
            root = root.child(
                div()
                    .class("flex justify-between text-xs opacity-70")
                    .child(span().text(self.min.unwrap_or(0).to_string()))
                    .child(span().text(self.max.unwrap_or(100).to_string())),
            );
        }
        root.child(error_block(&self.id, &self.errors)).into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_render_as_attributes() {
        let html = RangeField::new("volume").min(0).max(11).step(1).value(7).to_html();
        for expected in ["min=\"0\"", "max=\"11\"", "step=\"1\"", "value=\"7\""] {
            assert!(html.contains(expected), "missing {expected}");
        }
    }

    #[test]
    fn test_accent_color_table() {
        let html = RangeField::new("r").color("warning").to_html();
        assert!(html.contains("accent-[#FF8B08]"));
    }

    #[test]
    fn test_captions_show_bounds() {
        let html = RangeField::new("r").min(10).max(90).captions(true).to_html();
        assert!(html.contains(">10</span>"));
        assert!(html.contains(">90</span>"));
    }
}
