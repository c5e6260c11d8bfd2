//! Spinner component for inline loading state

use velum_core::{raw, span, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

const SPINNER_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" width="100%" height="100%"><circle cx="12" cy="12" r="10" stroke="currentColor" stroke-opacity="0.25" stroke-width="4"/><path d="M22 12a10 10 0 0 1-10 10" stroke="currentColor" stroke-width="4" stroke-linecap="round"/></svg>"#;

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "size-3"),
        ("small", "size-4"),
        ("medium", "size-6"),
        ("large", "size-8"),
        ("extra_large", "size-10"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "primary",
    &[
        ("white", "text-white"),
        ("primary", "text-[#4363EC]"),
        ("secondary", "text-[#6B6E7C]"),
        ("dark", "text-[#1E1E1E]"),
        ("success", "text-[#047857]"),
        ("warning", "text-[#FF8B08]"),
        ("danger", "text-[#E73B3B]"),
        ("info", "text-[#004FC4]"),
        ("light", "text-[#707483]"),
        ("misc", "text-[#52059C]"),
        ("dawn", "text-[#4D4137]"),
    ],
);

/// Spinner builder.
#[derive(Clone, Debug, Default)]
pub struct Spinner {
    size: Option<String>,
    color: Option<String>,
    class: Option<String>,
}

impl Spinner {
    pub fn new() -> Self {
        Self::default()
    }

    style_setters! {
        size,
        color,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }
}

impl Render for Spinner {
    fn render(&self) -> Node {
        span()
            .attr("role", "status")
            .attr("aria-label", "Loading")
            .class("inline-block animate-spin")
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .child(raw(SPINNER_SVG))
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let html = Spinner::new().to_html();
        assert!(html.contains("animate-spin"));
        assert!(html.contains("size-4"));
        assert!(html.contains("text-[#4363EC]"));
    }

    #[test]
    fn test_raw_size_passes_through() {
        assert!(Spinner::new().size("size-20").to_html().contains("size-20"));
    }
}
