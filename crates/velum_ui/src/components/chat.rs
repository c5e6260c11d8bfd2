//! Chat bubble component
//!
//! A single message bubble with an optional avatar, author line and
//! timestamp. `flipped` mirrors the layout for the sending side.

use velum_core::{div, img, Node, Render};
use velum_theme::{PairTable, VariantTable};

use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "light"),
    &[
        ("default", "white", "bg-white text-[#3E3E3E] border border-[#DADADA]"),
        ("default", "primary", "bg-[#4363EC] text-white"),
        ("default", "secondary", "bg-[#6B6E7C] text-white"),
        ("default", "dark", "bg-[#1E1E1E] text-white"),
        ("default", "success", "bg-[#ECFEF3] text-[#047857]"),
        ("default", "warning", "bg-[#FFF8E6] text-[#FF8B08]"),
        ("default", "danger", "bg-[#FFE6E6] text-[#E73B3B]"),
        ("default", "info", "bg-[#E5F0FF] text-[#004FC4]"),
        ("default", "light", "bg-[#E3E7F1] text-[#707483]"),
        ("default", "misc", "bg-[#FFE6FF] text-[#52059C]"),
        ("default", "dawn", "bg-[#FFECDA] text-[#4D4137]"),
        ("shadow", "white", "bg-white text-[#3E3E3E] shadow-md"),
        ("shadow", "primary", "bg-[#4363EC] text-white shadow-md"),
        ("shadow", "secondary", "bg-[#6B6E7C] text-white shadow-md"),
        ("shadow", "dark", "bg-[#1E1E1E] text-white shadow-md"),
        ("shadow", "success", "bg-[#ECFEF3] text-[#047857] shadow-md"),
        ("shadow", "warning", "bg-[#FFF8E6] text-[#FF8B08] shadow-md"),
        ("shadow", "danger", "bg-[#FFE6E6] text-[#E73B3B] shadow-md"),
        ("shadow", "info", "bg-[#E5F0FF] text-[#004FC4] shadow-md"),
        ("shadow", "light", "bg-[#E3E7F1] text-[#707483] shadow-md"),
        ("shadow", "misc", "bg-[#FFE6FF] text-[#52059C] shadow-md"),
        ("shadow", "dawn", "bg-[#FFECDA] text-[#4D4137] shadow-md"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "text-xs max-w-60"),
        ("small", "text-sm max-w-72"),
        ("medium", "text-base max-w-80"),
        ("large", "text-lg max-w-96"),
        ("extra_large", "text-xl max-w-[28rem]"),
    ],
);

/// Chat bubble builder.
#[derive(Clone, Debug, Default)]
pub struct Chat {
    variant: Option<String>,
    color: Option<String>,
    size: Option<String>,
    class: Option<String>,
    author: Option<String>,
    time: Option<String>,
    avatar: Option<String>,
    content: Option<Node>,
    flipped: bool,
}

impl Chat {
    pub fn new() -> Self {
        Self::default()
    }

    style_setters! {
        /// Style variant: `default` or `shadow`.
        variant,
        color,
        /// Text size and bubble max width.
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Name line above the message.
        author,
        /// Timestamp line under the message.
        time,
        /// Avatar image source.
        avatar,
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Mirrors the layout (avatar on the right, bubble tail flipped).
    pub fn flipped(mut self, flipped: bool) -> Self {
        self.flipped = flipped;
        self
    }
}

impl Render for Chat {
    fn render(&self) -> Node {
        let bubble = div()
            .class("rounded-xl px-3 py-2")
            .class(if self.flipped { "rounded-se-none" } else { "rounded-ss-none" })
            .class(COLOR_VARIANT.resolve(self.variant.as_deref(), self.color.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .maybe_child(
                self.author
                    .as_ref()
                    .map(|author| div().class("mb-0.5 text-xs font-semibold opacity-80").text(author)),
            )
            .maybe_child(self.content.clone())
            .maybe_child(
                self.time
                    .as_ref()
                    .map(|time| div().class("mt-1 text-end text-[10px] opacity-60").text(time)),
            );
        div()
            .class("flex items-end gap-2")
            .class(if self.flipped { "flex-row-reverse" } else { "" })
            .maybe_child(
                self.avatar
                    .as_ref()
                    .map(|src| img().class("size-8 rounded-full object-cover").attr("src", src).attr("alt", "")),
            )
            .child(bubble)
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;

    #[test]
    fn test_flipped_mirrors_layout() {
        let html = Chat::new().content(text("hi")).flipped(true).to_html();
        assert!(html.contains("flex-row-reverse"));
        assert!(html.contains("rounded-se-none"));
        let normal = Chat::new().content(text("hi")).to_html();
        assert!(normal.contains("rounded-ss-none"));
    }

    #[test]
    fn test_author_and_time_are_optional() {
        let bare = Chat::new().content(text("hi")).to_html();
        assert!(!bare.contains("font-semibold"));
        let full = Chat::new().author("Kim").time("12:41").content(text("hi")).to_html();
        assert!(full.contains("Kim"));
        assert!(full.contains("12:41"));
    }
}
