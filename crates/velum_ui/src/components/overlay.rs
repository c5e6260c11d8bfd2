//! Overlay component for backdrops
//!
//! A full-viewport layer used behind drawers, modals and spotlighted
//! content. Color and opacity are separate dimensions so `dark` at 25% and
//! `dark` at 75% share a table entry.

use velum_core::{div, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "dark",
    &[
        ("white", "bg-white"),
        ("primary", "bg-[#4363EC]"),
        ("secondary", "bg-[#6B6E7C]"),
        ("dark", "bg-black"),
        ("success", "bg-[#047857]"),
        ("warning", "bg-[#FF8B08]"),
        ("danger", "bg-[#E73B3B]"),
        ("info", "bg-[#004FC4]"),
        ("light", "bg-[#E3E7F1]"),
        ("misc", "bg-[#52059C]"),
        ("dawn", "bg-[#FFECDA]"),
    ],
);

static OPACITY_CLASS: VariantTable = VariantTable::new(
    "opacity_class",
    "medium",
    &[
        ("extra_small", "opacity-10"),
        ("small", "opacity-25"),
        ("medium", "opacity-40"),
        ("large", "opacity-60"),
        ("extra_large", "opacity-75"),
    ],
);

static BLUR_CLASS: VariantTable = VariantTable::new(
    "blur_class",
    "none",
    &[
        ("none", ""),
        ("extra_small", "backdrop-blur-sm"),
        ("small", "backdrop-blur"),
        ("medium", "backdrop-blur-md"),
        ("large", "backdrop-blur-lg"),
        ("extra_large", "backdrop-blur-xl"),
    ],
);

/// Overlay builder.
#[derive(Clone, Debug, Default)]
pub struct Overlay {
    id: Option<String>,
    color: Option<String>,
    opacity: Option<String>,
    blur: Option<String>,
    class: Option<String>,
    content: Option<Node>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Needed when interaction chains address this overlay.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    style_setters! {
        color,
        opacity,
        /// Backdrop blur strength.
        blur,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Content centered on top of the backdrop (a spinner, a message).
    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }
}

impl Render for Overlay {
    fn render(&self) -> Node {
        let mut overlay = div()
            .class("fixed inset-0 z-40")
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(OPACITY_CLASS.resolve(self.opacity.as_deref()))
            .class(BLUR_CLASS.resolve(self.blur.as_deref()))
            .class(self.class.as_deref().unwrap_or(""));
        if let Some(id) = &self.id {
            overlay = overlay.id(id);
        }
        match &self.content {
            None => overlay.into_node(),
            Some(content) => overlay
                .class("flex items-center justify-center")
                .child(content.clone())
                .into_node(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;

    #[test]
    fn test_defaults() {
        let html = Overlay::new().to_html();
        assert!(html.contains("bg-black"));
        assert!(html.contains("opacity-40"));
        assert!(!html.contains("backdrop-blur"));
    }

    #[test]
    fn test_opacity_and_blur_tables() {
        let html = Overlay::new().opacity("extra_large").blur("small").to_html();
        assert!(html.contains("opacity-75"));
        assert!(html.contains("backdrop-blur\""));
    }

    #[test]
    fn test_content_centers() {
        let html = Overlay::new().content(text("Loading")).to_html();
        assert!(html.contains("items-center justify-center"));
        assert!(html.contains("Loading"));
    }
}
