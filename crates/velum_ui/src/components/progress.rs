//! Progress component
//!
//! A track with a filled bar. The percentage is the one inline style in the
//! library (widths are continuous, not a closed set); everything else is
//! table-resolved classes.

use velum_core::{div, span, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "primary",
    &[
        ("white", "[&_.progress-bar]:bg-white"),
        ("primary", "[&_.progress-bar]:bg-[#4363EC]"),
        ("secondary", "[&_.progress-bar]:bg-[#6B6E7C]"),
        ("dark", "[&_.progress-bar]:bg-[#1E1E1E]"),
        ("success", "[&_.progress-bar]:bg-[#047857]"),
        ("warning", "[&_.progress-bar]:bg-[#FF8B08]"),
        ("danger", "[&_.progress-bar]:bg-[#E73B3B]"),
        ("info", "[&_.progress-bar]:bg-[#004FC4]"),
        ("light", "[&_.progress-bar]:bg-[#707483]"),
        ("misc", "[&_.progress-bar]:bg-[#52059C]"),
        ("dawn", "[&_.progress-bar]:bg-[#4D4137]"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "h-1"),
        ("small", "h-2"),
        ("medium", "h-3"),
        ("large", "h-4"),
        ("extra_large", "h-5"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "full",
    &[
        ("none", ""),
        ("small", "rounded [&_.progress-bar]:rounded"),
        ("medium", "rounded-md [&_.progress-bar]:rounded-md"),
        ("large", "rounded-lg [&_.progress-bar]:rounded-lg"),
        ("full", "rounded-full [&_.progress-bar]:rounded-full"),
    ],
);

/// Progress builder.
#[derive(Clone, Debug, Default)]
pub struct Progress {
    value: u8,
    color: Option<String>,
    size: Option<String>,
    rounded: Option<String>,
    class: Option<String>,
    label: Option<String>,
    striped: bool,
}

impl Progress {
    /// `value` is a percentage, clamped to 100.
    pub fn new(value: u8) -> Self {
        Self {
            value: value.min(100),
            ..Self::default()
        }
    }

    style_setters! {
        /// Bar color.
        color,
        /// Track height.
        size,
        rounded,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Caption above the track; the percentage renders on the right.
        label,
    }

    pub fn striped(mut self, striped: bool) -> Self {
        self.striped = striped;
        self
    }
}

impl Render for Progress {
    fn render(&self) -> Node {
        let bar = div()
            .class("progress-bar h-full transition-[width] duration-300")
            .class(if self.striped {
                "bg-[linear-gradient(45deg,rgba(255,255,255,.2)25%,transparent_25%,transparent_50%,rgba(255,255,255,.2)50%,rgba(255,255,255,.2)75%,transparent_75%)] bg-[length:1rem_1rem]"
            } else {
                ""
            })
            .attr("style", format!("width: {}%", self.value));
        let track = div()
            .attr("role", "progressbar")
            .attr("aria-valuenow", self.value.to_string())
            .attr("aria-valuemin", "0")
            .attr("aria-valuemax", "100")
            .class("w-full overflow-hidden bg-[#E3E7F1]")
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .child(bar);
        match &self.label {
            None => track.into_node(),
            Some(label) => div()
                .class("w-full space-y-1")
                .child(
                    div()
                        .class("flex items-center justify-between text-xs")
                        .child(span().text(label))
                        .child(span().text(format!("{}%", self.value))),
                )
                .child(track)
                .into_node(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_renders_as_inline_width() {
        let html = Progress::new(40).to_html();
        assert!(html.contains("style=\"width: 40%\""));
        assert!(html.contains("aria-valuenow=\"40\""));
    }

    #[test]
    fn test_value_is_clamped() {
        let html = Progress::new(250).to_html();
        assert!(html.contains("width: 100%"));
    }

    #[test]
    fn test_label_adds_caption_row() {
        let html = Progress::new(70).label("Uploading").to_html();
        assert!(html.contains("Uploading"));
        assert!(html.contains("70%"));
    }

    #[test]
    fn test_color_styles_bar_not_track() {
        let html = Progress::new(10).color("success").to_html();
        assert!(html.contains("[&_.progress-bar]:bg-[#047857]"));
        assert!(html.contains("bg-[#E3E7F1]"));
    }
}
