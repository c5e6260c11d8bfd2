//! Toggle field for boolean form input
//!
//! A two-state switch: a hidden checkbox drives a track and dot styled by
//! `peer-checked` utilities. The track's size and color classes resolve the
//! same way whether or not the field starts checked; `checked` only sets the
//! input's initial state.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = ToggleField::new("newsletter")
//!     .label("Subscribe to the newsletter")
//!     .color("success")
//!     .checked(true)
//!     .to_html();
//!
//! assert!(html.contains("checked"));
//! ```

use velum_core::{div, input, label, span, Attrs, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

/// Attributes the caller may pass through to the underlying input.
const ALLOWED_REST: &[&str] = &["disabled", "required", "form", "autocomplete"];

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "w-8 h-4 after:size-3 after:top-0.5 after:start-0.5"),
        ("small", "w-9 h-5 after:size-4 after:top-0.5 after:start-0.5"),
        ("medium", "w-11 h-6 after:size-5 after:top-0.5 after:start-0.5"),
        ("large", "w-[52px] h-7 after:size-6 after:top-0.5 after:start-0.5"),
        ("extra_large", "w-14 h-8 after:size-7 after:top-0.5 after:start-0.5"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "primary",
    &[
        ("white", "peer-checked:bg-white peer-checked:border-[#DADADA]"),
        ("primary", "peer-checked:bg-[#4363EC]"),
        ("secondary", "peer-checked:bg-[#6B6E7C]"),
        ("dark", "peer-checked:bg-[#1E1E1E]"),
        ("success", "peer-checked:bg-[#047857]"),
        ("warning", "peer-checked:bg-[#FF8B08]"),
        ("danger", "peer-checked:bg-[#E73B3B]"),
        ("info", "peer-checked:bg-[#004FC4]"),
        ("light", "peer-checked:bg-[#707483]"),
        ("misc", "peer-checked:bg-[#52059C]"),
        ("dawn", "peer-checked:bg-[#4D4137]"),
    ],
);

/// Toggle field builder.
#[derive(Clone, Debug, Default)]
pub struct ToggleField {
    id: String,
    name: Option<String>,
    label: Option<String>,
    size: Option<String>,
    color: Option<String>,
    class: Option<String>,
    checked: bool,
    rest: Attrs,
}

impl ToggleField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Form field name; defaults to the id.
        name,
        /// Text rendered beside the switch.
        label,
        /// Track/dot size.
        size,
        /// Track color when checked.
        color,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Initial state of the underlying checkbox.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Passthrough attribute for the underlying input, checked against the
    /// component's allow-list.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.rest.set(name, value);
        self
    }

    /// Track classes: size then color, independent of `checked`.
    fn track_classes(&self) -> Vec<String> {
        vec![
            SIZE_CLASS.resolve(self.size.as_deref()).into_owned(),
            COLOR_CLASS.resolve(self.color.as_deref()).into_owned(),
        ]
    }
}

impl Render for ToggleField {
    fn render(&self) -> Node {
        let mut rest = self.rest.clone();
        rest.retain_allowed(ALLOWED_REST);
        let checkbox = input()
            .id(&self.id)
            .attr("type", "checkbox")
            .attr("name", self.name.clone().unwrap_or_else(|| self.id.clone()))
            .attr("value", "true")
            .class("peer sr-only")
            .flag("checked", self.checked)
            .rest(&rest);
        let track = div()
            .class("relative rounded-full bg-[#DADADA] transition-colors duration-200 after:absolute after:rounded-full after:bg-white after:transition-transform after:duration-200 peer-checked:after:translate-x-full")
            .classes(self.track_classes());
        label()
            .attr("for", &self.id)
            .class("inline-flex items-center gap-3 cursor-pointer select-none")
            .class(self.class.as_deref().unwrap_or(""))
            .child(checkbox)
            .child(track)
            .maybe_child(
                self.label
                    .as_ref()
                    .map(|label_text| span().class("text-sm").text(label_text)),
            )
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_classes_equal_size_then_color() {
        let field = ToggleField::new("t").color("danger").size("extra_large");
        assert_eq!(
            field.track_classes(),
            vec![
                SIZE_CLASS.resolve(Some("extra_large")).into_owned(),
                COLOR_CLASS.resolve(Some("danger")).into_owned(),
            ]
        );
    }

    #[test]
    fn test_resolution_is_independent_of_checked() {
        let unchecked = ToggleField::new("t").color("danger").size("extra_large");
        let checked = ToggleField::new("t").color("danger").size("extra_large").checked(true);
        assert_eq!(unchecked.track_classes(), checked.track_classes());
    }

    #[test]
    fn test_checked_sets_input_flag_only() {
        let html = ToggleField::new("t").checked(true).to_html();
        assert!(html.contains(" checked"));
        assert!(!ToggleField::new("t").to_html().contains(" checked"));
    }

    #[test]
    fn test_rest_is_allow_listed() {
        let html = ToggleField::new("t")
            .attr("disabled", "")
            .attr("onchange", "alert(1)")
            .to_html();
        assert!(html.contains("disabled"));
        assert!(!html.contains("onchange"));
    }

    #[test]
    fn test_name_defaults_to_id() {
        let html = ToggleField::new("opt-in").to_html();
        assert!(html.contains("name=\"opt-in\""));
    }
}
