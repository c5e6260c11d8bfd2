//! Skeleton component for loading placeholders
//!
//! Gray blocks standing in for content while it loads. A convenience
//! constructor stacks text-line placeholders.

use velum_core::{div, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

static ANIMATION_CLASS: VariantTable = VariantTable::new(
    "animation_class",
    "pulse",
    &[("none", ""), ("pulse", "animate-pulse")],
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
        ("full", "rounded-full"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "light",
    &[
        ("white", "bg-white/60"),
        ("dark", "bg-[#1E1E1E]/20"),
        ("light", "bg-[#E3E7F1]"),
        ("dawn", "bg-[#FFECDA]"),
    ],
);

/// Skeleton builder.
#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    animation: Option<String>,
    rounded: Option<String>,
    color: Option<String>,
    class: Option<String>,
    lines: usize,
}

impl Skeleton {
    /// A single block; size it with `class` (`"h-32 w-full"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// A stack of text-line placeholders; the last line is shorter.
    pub fn lines(count: usize) -> Self {
        Self {
            lines: count,
            ..Self::default()
        }
    }

    style_setters! {
        /// `pulse` or `none`.
        animation,
        rounded,
        color,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    fn block(&self, extra: &str) -> Node {
        div()
            .class(ANIMATION_CLASS.resolve(self.animation.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(extra)
            .class(self.class.as_deref().unwrap_or(""))
            .into_node()
    }
}

impl Render for Skeleton {
    fn render(&self) -> Node {
        if self.lines == 0 {
            return self.block("h-4 w-full");
        }
        let blocks = (1..=self.lines).map(|line| {
            // Shorten the last line so the stack reads as a paragraph.
            let width = if line == self.lines { "w-2/3" } else { "w-full" };
            self.block(&format!("h-3 {width}"))
        });
        div().class("space-y-2").children(blocks).into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_pulses_by_default() {
        let html = Skeleton::new().to_html();
        assert!(html.contains("animate-pulse"));
        assert!(html.contains("bg-[#E3E7F1]"));
    }

    #[test]
    fn test_line_stack_shortens_last_line() {
        let html = Skeleton::lines(3).to_html();
        assert_eq!(html.matches("h-3").count(), 3);
        assert_eq!(html.matches("w-2/3").count(), 1);
    }

    #[test]
    fn test_animation_can_be_disabled() {
        assert!(!Skeleton::new().animation("none").to_html().contains("animate-pulse"));
    }
}
