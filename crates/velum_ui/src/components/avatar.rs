//! Avatar component for user images and initials
//!
//! Renders an image when a source is given, otherwise a lettered
//! placeholder. [`AvatarGroup`] stacks avatars with a negative horizontal
//! overlap.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = AvatarGroup::new()
//!     .avatar(Avatar::new().src("/u/1.png"))
//!     .avatar(Avatar::new().initials("AK").color("primary"))
//!     .to_html();
//!
//! assert!(html.contains("-space-x-3"));
//! ```

use velum_core::{div, img, span, Node, Render};
use velum_theme::VariantTable;

use crate::macros::style_setters;

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "size-8 text-xs"),
        ("small", "size-10 text-sm"),
        ("medium", "size-12 text-base"),
        ("large", "size-14 text-lg"),
        ("extra_large", "size-16 text-xl"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "full",
    &[
        ("none", ""),
        ("extra_small", "rounded-sm"),
        ("small", "rounded"),
        ("medium", "rounded-md"),
        ("large", "rounded-lg"),
        ("extra_large", "rounded-xl"),
        ("full", "rounded-full"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "light",
    &[
        ("white", "bg-white text-[#3E3E3E] border border-[#DADADA]"),
        ("primary", "bg-[#4363EC] text-white"),
        ("secondary", "bg-[#6B6E7C] text-white"),
        ("dark", "bg-[#1E1E1E] text-white"),
        ("success", "bg-[#ECFEF3] text-[#047857]"),
        ("warning", "bg-[#FFF8E6] text-[#FF8B08]"),
        ("danger", "bg-[#FFE6E6] text-[#E73B3B]"),
        ("info", "bg-[#E5F0FF] text-[#004FC4]"),
        ("light", "bg-[#E3E7F1] text-[#707483]"),
        ("misc", "bg-[#FFE6FF] text-[#52059C]"),
        ("dawn", "bg-[#FFECDA] text-[#4D4137]"),
    ],
);

static BORDER_CLASS: VariantTable = VariantTable::new(
    "border_class",
    "none",
    &[
        ("none", ""),
        ("extra_small", "ring-1 ring-white"),
        ("small", "ring-2 ring-white"),
        ("medium", "ring-[3px] ring-white"),
        ("large", "ring-4 ring-white"),
    ],
);

/// Avatar builder.
#[derive(Clone, Debug, Default)]
pub struct Avatar {
    src: Option<String>,
    alt: Option<String>,
    initials: Option<String>,
    size: Option<String>,
    rounded: Option<String>,
    color: Option<String>,
    border: Option<String>,
    class: Option<String>,
}

impl Avatar {
    pub fn new() -> Self {
        Self::default()
    }

    style_setters! {
        /// Image source; wins over `initials` when both are set.
        src,
        alt,
        /// Placeholder letters shown when there is no image.
        initials,
        size,
        rounded,
        /// Placeholder background color.
        color,
        /// White ring width separating stacked avatars.
        border,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    fn base_classes(&self) -> Vec<String> {
        vec![
            SIZE_CLASS.resolve(self.size.as_deref()).into_owned(),
            ROUNDED_SIZE.resolve(self.rounded.as_deref()).into_owned(),
            BORDER_CLASS.resolve(self.border.as_deref()).into_owned(),
            self.class.clone().unwrap_or_default(),
        ]
    }
}

impl Render for Avatar {
    fn render(&self) -> Node {
        match &self.src {
            Some(src) => img()
                .class("object-cover")
                .classes(self.base_classes())
                .attr("src", src)
                .attr("alt", self.alt.clone().unwrap_or_default())
                .into_node(),
            None => span()
                .class("inline-flex items-center justify-center font-medium select-none")
                .class(COLOR_CLASS.resolve(self.color.as_deref()))
                .classes(self.base_classes())
                .text(self.initials.clone().unwrap_or_default())
                .into_node(),
        }
    }
}

/// A stacked row of avatars.
#[derive(Clone, Debug, Default)]
pub struct AvatarGroup {
    avatars: Vec<Avatar>,
    class: Option<String>,
}

impl AvatarGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avatar(mut self, avatar: Avatar) -> Self {
        self.avatars.push(avatar);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl Render for AvatarGroup {
    fn render(&self) -> Node {
        div()
            .class("flex -space-x-3")
            .class(self.class.as_deref().unwrap_or(""))
            .children(self.avatars.iter().map(Avatar::render))
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_avatar_renders_img_tag() {
        let html = Avatar::new().src("/u/7.png").alt("Kim").to_html();
        assert!(html.starts_with("<img"));
        assert!(html.contains("src=\"/u/7.png\""));
        assert!(html.contains("rounded-full"));
    }

    #[test]
    fn test_initials_avatar_uses_color_table() {
        let html = Avatar::new().initials("AK").color("primary").to_html();
        assert!(html.contains("bg-[#4363EC] text-white"));
        assert!(html.contains(">AK<"));
    }

    #[test]
    fn test_size_independent_of_kind() {
        let with_img = Avatar::new().src("/x.png").size("extra_large").to_html();
        let with_text = Avatar::new().initials("X").size("extra_large").to_html();
        assert!(with_img.contains("size-16 text-xl"));
        assert!(with_text.contains("size-16 text-xl"));
    }

    #[test]
    fn test_group_preserves_order() {
        let html = AvatarGroup::new()
            .avatar(Avatar::new().initials("A"))
            .avatar(Avatar::new().initials("B"))
            .to_html();
        assert!(html.find(">A<").unwrap() < html.find(">B<").unwrap());
    }
}
