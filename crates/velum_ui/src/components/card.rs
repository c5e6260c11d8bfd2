//! Card component for grouped content
//!
//! Header, media, content and footer sections render in a fixed order; each
//! is emitted only when supplied.

use velum_core::{div, img, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "white",
    &[
        ("white", "bg-white text-[#3E3E3E] border-[#DADADA]"),
        ("primary", "bg-[#4363EC] text-white border-[#2441C2]"),
        ("secondary", "bg-[#6B6E7C] text-white border-[#60636F]"),
        ("dark", "bg-[#1E1E1E] text-white border-[#050404]"),
        ("success", "bg-[#ECFEF3] text-[#047857] border-[#6EE7B7]"),
        ("warning", "bg-[#FFF8E6] text-[#FF8B08] border-[#FF8B08]"),
        ("danger", "bg-[#FFE6E6] text-[#E73B3B] border-[#E73B3B]"),
        ("info", "bg-[#E5F0FF] text-[#004FC4] border-[#004FC4]"),
        ("light", "bg-[#E3E7F1] text-[#707483] border-[#707483]"),
        ("misc", "bg-[#FFE6FF] text-[#52059C] border-[#52059C]"),
        ("dawn", "bg-[#FFECDA] text-[#4D4137] border-[#4D4137]"),
    ],
);

static BORDER_CLASS: VariantTable = VariantTable::new(
    "border_class",
    "extra_small",
    &[
        ("none", "border-0"),
        ("extra_small", "border"),
        ("small", "border-2"),
        ("medium", "border-[3px]"),
        ("large", "border-4"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "medium",
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
        ("none", "[&_.card-section]:p-0"),
        ("extra_small", "[&_.card-section]:p-2"),
        ("small", "[&_.card-section]:p-3"),
        ("medium", "[&_.card-section]:p-4"),
        ("large", "[&_.card-section]:p-5"),
        ("extra_large", "[&_.card-section]:p-6"),
    ],
);

static SPACE_CLASS: VariantTable = VariantTable::new(
    "space_class",
    "none",
    &[
        ("none", ""),
        ("extra_small", "space-y-2"),
        ("small", "space-y-3"),
        ("medium", "space-y-4"),
        ("large", "space-y-5"),
        ("extra_large", "space-y-6"),
    ],
);

/// A card section slot with its own extra classes.
#[derive(Clone, Debug, Default)]
pub struct CardSection {
    content: Option<Node>,
    class: Option<String>,
}

impl CardSection {
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: Some(content.into()),
            class: None,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    fn render(&self, role: &str) -> Node {
        div()
            .class("card-section")
            .class(role)
            .class(self.class.as_deref().unwrap_or(""))
            .maybe_child(self.content.clone())
            .into_node()
    }
}

/// Card builder.
#[derive(Clone, Debug, Default)]
pub struct Card {
    color: Option<String>,
    border: Option<String>,
    rounded: Option<String>,
    padding: Option<String>,
    space: Option<String>,
    class: Option<String>,
    header: Option<CardSection>,
    media: Option<String>,
    content: Option<CardSection>,
    footer: Option<CardSection>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    style_setters! {
        color,
        border,
        rounded,
        /// Padding applied to every section.
        padding,
        /// Gap between sections.
        space,
        /// Free-form classes, appended after every resolved fragment.
        class,
        /// Image source rendered edge-to-edge between header and content.
        media,
    }

    pub fn header(mut self, section: CardSection) -> Self {
        self.header = Some(section);
        self
    }

    pub fn content(mut self, section: CardSection) -> Self {
        self.content = Some(section);
        self
    }

    pub fn footer(mut self, section: CardSection) -> Self {
        self.footer = Some(section);
        self
    }
}

impl Render for Card {
    fn render(&self) -> Node {
        div()
            .class("w-full overflow-hidden")
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(BORDER_CLASS.resolve(self.border.as_deref()))
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .class(PADDING_SIZE.resolve(self.padding.as_deref()))
            .class(SPACE_CLASS.resolve(self.space.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .maybe_child(
                self.header
                    .as_ref()
                    .map(|section| section.render("font-semibold border-b border-inherit")),
            )
            .maybe_child(
                self.media
                    .as_ref()
                    .map(|src| img().class("w-full object-cover").attr("src", src).attr("alt", "")),
            )
            .maybe_child(self.content.as_ref().map(|section| section.render("")))
            .maybe_child(
                self.footer
                    .as_ref()
                    .map(|section| section.render("border-t border-inherit text-sm")),
            )
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;

    #[test]
    fn test_sections_render_in_fixed_order() {
        let html = Card::new()
            .footer(CardSection::new(text("foot")))
            .header(CardSection::new(text("head")))
            .content(CardSection::new(text("body")))
            .to_html();
        let head = html.find("head").unwrap();
        let body = html.find("body").unwrap();
        let foot = html.find("foot").unwrap();
        assert!(head < body && body < foot);
    }

    #[test]
    fn test_missing_sections_are_absent() {
        let html = Card::new().content(CardSection::new(text("x"))).to_html();
        assert_eq!(html.matches("card-section").count(), 1);
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_media_renders_between_header_and_content() {
        let html = Card::new()
            .header(CardSection::new(text("head")))
            .media("/cover.png")
            .content(CardSection::new(text("body")))
            .to_html();
        let media = html.find("/cover.png").unwrap();
        assert!(html.find("head").unwrap() < media);
        assert!(media < html.find("body").unwrap());
    }
}
