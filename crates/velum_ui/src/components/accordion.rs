//! Accordion component for expandable content sections
//!
//! A set of vertically stacked collapsible sections. Each item's panel is
//! shown or hidden by toggling marker classes; the browser's CSS transitions
//! do the animating. Items get derived ids `{id}-{n}` (1-based) so the
//! interaction chains can address them.
//!
//! Three structural modes, dispatched once at render entry:
//! - [`AccordionMode::Default`]: every section toggles independently
//! - [`AccordionMode::Menu`]: opening a section closes all siblings
//! - [`AccordionMode::Native`]: `<details>/<summary>` disclosure elements,
//!   no interaction chains at all
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let faq = Accordion::new("faq")
//!     .variant("default")
//!     .color("primary")
//!     .rounded("large")
//!     .item(AccordionItem::new("What is Velum?").description("A component library"))
//!     .item(AccordionItem::new("Is it themable?").open(true));
//!
//! let html = faq.to_html();
//! assert!(html.contains("id=\"faq-2-panel\""));
//! ```

use velum_core::{child_id, div, el, img, raw, span, Element, Node, Render};
use velum_js::Js;
use velum_theme::{PairTable, VariantTable};

use crate::components::shared::CHEVRON_DOWN_SVG;
use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "white"),
    &[
        ("default", "white", "bg-white text-[#3E3E3E] border-[#DADADA] hover:bg-[#E8E8E8]"),
        ("default", "primary", "bg-[#4363EC] text-white border-[#2441C2] hover:bg-[#072ED3]"),
        ("default", "secondary", "bg-[#6B6E7C] text-white border-[#60636F] hover:bg-[#60636F]"),
        ("default", "dark", "bg-[#1E1E1E] text-white border-[#050404] hover:bg-[#111111]"),
        ("default", "success", "bg-[#ECFEF3] text-[#047857] border-[#6EE7B7] hover:bg-[#D4FDE4]"),
        ("default", "warning", "bg-[#FFF8E6] text-[#FF8B08] border-[#FF8B08] hover:bg-[#FFF1C2]"),
        ("default", "danger", "bg-[#FFE6E6] text-[#E73B3B] border-[#E73B3B] hover:bg-[#FFCFCF]"),
        ("default", "info", "bg-[#E5F0FF] text-[#004FC4] border-[#004FC4] hover:bg-[#CCE1FF]"),
        ("default", "light", "bg-[#E3E7F1] text-[#707483] border-[#707483] hover:bg-[#D4DAE8]"),
        ("default", "misc", "bg-[#FFE6FF] text-[#52059C] border-[#52059C] hover:bg-[#FFCCFF]"),
        ("default", "dawn", "bg-[#FFECDA] text-[#4D4137] border-[#4D4137] hover:bg-[#FFDFC1]"),
        ("bordered", "white", "bg-transparent text-[#3E3E3E] border-[#DADADA]"),
        ("bordered", "primary", "bg-transparent text-[#4363EC] border-[#4363EC]"),
        ("bordered", "secondary", "bg-transparent text-[#6B6E7C] border-[#6B6E7C]"),
        ("bordered", "dark", "bg-transparent text-[#1E1E1E] border-[#1E1E1E]"),
        ("bordered", "success", "bg-transparent text-[#047857] border-[#6EE7B7]"),
        ("bordered", "warning", "bg-transparent text-[#FF8B08] border-[#FF8B08]"),
        ("bordered", "danger", "bg-transparent text-[#E73B3B] border-[#E73B3B]"),
        ("bordered", "info", "bg-transparent text-[#004FC4] border-[#004FC4]"),
        ("bordered", "light", "bg-transparent text-[#707483] border-[#707483]"),
        ("bordered", "misc", "bg-transparent text-[#52059C] border-[#52059C]"),
        ("bordered", "dawn", "bg-transparent text-[#4D4137] border-[#4D4137]"),
        ("shadow", "white", "bg-white text-[#3E3E3E] border-transparent shadow-md hover:bg-[#E8E8E8]"),
        ("shadow", "primary", "bg-[#4363EC] text-white border-transparent shadow-md hover:bg-[#072ED3]"),
        ("shadow", "secondary", "bg-[#6B6E7C] text-white border-transparent shadow-md hover:bg-[#60636F]"),
        ("shadow", "dark", "bg-[#1E1E1E] text-white border-transparent shadow-md hover:bg-[#111111]"),
        ("shadow", "success", "bg-[#ECFEF3] text-[#047857] border-transparent shadow-md hover:bg-[#D4FDE4]"),
        ("shadow", "warning", "bg-[#FFF8E6] text-[#FF8B08] border-transparent shadow-md hover:bg-[#FFF1C2]"),
        ("shadow", "danger", "bg-[#FFE6E6] text-[#E73B3B] border-transparent shadow-md hover:bg-[#FFCFCF]"),
        ("shadow", "info", "bg-[#E5F0FF] text-[#004FC4] border-transparent shadow-md hover:bg-[#CCE1FF]"),
        ("shadow", "light", "bg-[#E3E7F1] text-[#707483] border-transparent shadow-md hover:bg-[#D4DAE8]"),
        ("shadow", "misc", "bg-[#FFE6FF] text-[#52059C] border-transparent shadow-md hover:bg-[#FFCCFF]"),
        ("shadow", "dawn", "bg-[#FFECDA] text-[#4D4137] border-transparent shadow-md hover:bg-[#FFDFC1]"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "none",
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

static MEDIA_SIZE: VariantTable = VariantTable::new(
    "media_size",
    "small",
    &[
        ("extra_small", "[&_.accordion-media]:size-8"),
        ("small", "[&_.accordion-media]:size-10"),
        ("medium", "[&_.accordion-media]:size-12"),
        ("large", "[&_.accordion-media]:size-14"),
        ("extra_large", "[&_.accordion-media]:size-16"),
    ],
);

static PADDING_SIZE: VariantTable = VariantTable::new(
    "padding_size",
    "small",
    &[
        ("none", ""),
        ("extra_small", "p-2"),
        ("small", "p-3"),
        ("medium", "p-4"),
        ("large", "p-5"),
        ("extra_large", "p-6"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "medium",
    &[
        ("extra_small", "text-xs"),
        ("small", "text-sm"),
        ("medium", "text-base"),
        ("large", "text-lg"),
        ("extra_large", "text-xl"),
    ],
);

/// Structural mode, chosen once per accordion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionMode {
    /// Every section toggles independently.
    #[default]
    Default,
    /// Grouped-exclusive: opening a section closes all siblings.
    Menu,
    /// Native `<details>/<summary>` disclosure, no interaction chains.
    Native,
}

/// One collapsible section.
#[derive(Clone, Debug, Default)]
pub struct AccordionItem {
    title: String,
    description: Option<String>,
    icon: Option<String>,
    image: Option<String>,
    class: Option<String>,
    content: Option<Node>,
    open: bool,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Secondary line rendered under the title.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Inline SVG markup rendered before the title.
    pub fn icon(mut self, svg: impl Into<String>) -> Self {
        self.icon = Some(svg.into());
        self
    }

    /// Image rendered before the title, sized by `media_size`.
    pub fn image(mut self, src: impl Into<String>) -> Self {
        self.image = Some(src.into());
        self
    }

    /// Extra classes for this item's panel.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Panel content revealed when the section opens.
    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Renders the section expanded on mount.
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// Accordion builder.
#[derive(Clone, Debug, Default)]
pub struct Accordion {
    id: String,
    mode: AccordionMode,
    variant: Option<String>,
    color: Option<String>,
    rounded: Option<String>,
    space: Option<String>,
    media_size: Option<String>,
    padding: Option<String>,
    size: Option<String>,
    class: Option<String>,
    items: Vec<AccordionItem>,
}

impl Accordion {
    /// `id` must be unique per page; every child id derives from it.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Style variant: `default`, `bordered` or `shadow`.
        variant,
        /// Named color, or a raw class string to pass through.
        color,
        rounded,
        /// Gap between sections.
        space,
        /// Size of item icons/images.
        media_size,
        padding,
        /// Title text size.
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    pub fn mode(mut self, mode: AccordionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn item(mut self, item: AccordionItem) -> Self {
        self.items.push(item);
        self
    }

    /// The resolved summary class fragments, in documented order, with the
    /// caller's `class` last.
    fn summary_classes(&self) -> Vec<String> {
        let mut classes = vec![
            COLOR_VARIANT
                .resolve(self.variant.as_deref(), self.color.as_deref())
                .to_string(),
            ROUNDED_SIZE.resolve(self.rounded.as_deref()).into_owned(),
            SPACE_CLASS.resolve(self.space.as_deref()).into_owned(),
            MEDIA_SIZE.resolve(self.media_size.as_deref()).into_owned(),
            PADDING_SIZE.resolve(self.padding.as_deref()).into_owned(),
            SIZE_CLASS.resolve(self.size.as_deref()).into_owned(),
        ];
        if let Some(class) = &self.class {
            classes.push(class.clone());
        }
        classes
    }

    fn summary_content(&self, item: &AccordionItem) -> Vec<Node> {
        let mut content = Vec::new();
        if let Some(svg) = &item.icon {
            content.push(span().class("accordion-media shrink-0").child(raw(svg)).into_node());
        }
        if let Some(src) = &item.image {
            content.push(
                img()
                    .class("accordion-media shrink-0 rounded-full object-cover")
                    .attr("src", src)
                    .attr("alt", "")
                    .into_node(),
            );
        }
        let mut title_block = div().class("text-start").child(span().text(&item.title));
        if let Some(description) = &item.description {
            title_block = title_block.child(
                div().class("text-xs font-normal opacity-80").text(description),
            );
        }
        content.push(title_block.into_node());
        content
    }

    /// Chain for one trigger in [`AccordionMode::Default`].
    fn toggle_chain(&self, index: usize) -> Js {
        let item_id = child_id(&self.id, index);
        Js::new()
            .toggle_class_to(format!("#{item_id}"), "active")
            .toggle_class_to(format!("#{item_id}-panel"), "hidden")
    }

    /// Chain for one trigger in [`AccordionMode::Menu`]: reset every sibling
    /// first, then open the chosen section. Order matters; see `velum_js`.
    fn menu_chain(&self, index: usize) -> Js {
        let count = self.items.len();
        let mut js = Js::new();
        for i in 1..=count {
            let item_id = child_id(&self.id, i);
            js = js
                .remove_class_to(format!("#{item_id}"), "active")
                .add_class_to(format!("#{item_id}-panel"), "hidden");
        }
        let item_id = child_id(&self.id, index);
        js.add_class_to(format!("#{item_id}"), "active")
            .remove_class_to(format!("#{item_id}-panel"), "hidden")
    }

    fn render_item(&self, index: usize, item: &AccordionItem) -> Node {
        let item_id = child_id(&self.id, index);
        let chain = match self.mode {
            AccordionMode::Menu => self.menu_chain(index),
            _ => self.toggle_chain(index),
        };
        let trigger = el("button")
            .attr("type", "button")
            .id(&item_id)
            .classes(self.summary_classes())
            .class("flex w-full items-center justify-between gap-2")
            .class(if item.open { "active" } else { "" })
            .on("click", &chain)
            .children(self.summary_content(item))
            .child(
                span()
                    .class("shrink-0 transition-transform duration-300 [.active_&]:rotate-180")
                    .child(raw(CHEVRON_DOWN_SVG)),
            );
        let panel = div()
            .id(format!("{item_id}-panel"))
            .class("overflow-hidden transition-all duration-300")
            .class(PADDING_SIZE.resolve(self.padding.as_deref()))
            .class(item.class.as_deref().unwrap_or(""))
            .class(if item.open { "" } else { "hidden" })
            .maybe_child(item.content.clone());
        div()
            .class("accordion-item")
            .child(trigger)
            .child(panel)
            .into_node()
    }

    fn render_native_item(&self, index: usize, item: &AccordionItem) -> Node {
        let item_id = child_id(&self.id, index);
        el("details")
            .id(&item_id)
            .flag("open", item.open)
            .child(
                el("summary")
                    .classes(self.summary_classes())
                    .class("flex w-full cursor-pointer items-center justify-between gap-2 [&::-webkit-details-marker]:hidden")
                    .children(self.summary_content(item))
                    .child(
                        span()
                            .class("shrink-0 transition-transform duration-300 [[open]_&]:rotate-180")
                            .child(raw(CHEVRON_DOWN_SVG)),
                    ),
            )
            .child(
                div()
                    .class(PADDING_SIZE.resolve(self.padding.as_deref()))
                    .class(item.class.as_deref().unwrap_or(""))
                    .maybe_child(item.content.clone()),
            )
            .into_node()
    }

    fn render_root(&self) -> Element {
        let items = self.items.iter().enumerate().map(|(i, item)| match self.mode {
            AccordionMode::Native => self.render_native_item(i + 1, item),
            _ => self.render_item(i + 1, item),
        });
        div()
            .id(&self.id)
            .class("w-full")
            .class(SPACE_CLASS.resolve(self.space.as_deref()))
            .children(items)
    }
}

impl Render for Accordion {
    fn render(&self) -> Node {
        self.render_root().into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    fn three_items() -> Accordion {
        Accordion::new("faq")
            .item(AccordionItem::new("a"))
            .item(AccordionItem::new("b"))
            .item(AccordionItem::new("c"))
    }

    #[test]
    fn test_child_ids_are_one_based_and_stable() {
        let html = three_items().to_html();
        for expected in ["id=\"faq-1\"", "id=\"faq-2\"", "id=\"faq-3\"", "id=\"faq-3-panel\""] {
            assert!(html.contains(expected), "missing {expected}");
        }
        assert_eq!(html, three_items().to_html());
    }

    #[test]
    fn test_summary_contains_color_variant_fragment() {
        let accordion = Accordion::new("faq")
            .variant("default")
            .color("primary")
            .class("custom-class")
            .item(AccordionItem::new("a"));
        let classes = accordion.summary_classes();
        assert_eq!(
            classes[0],
            COLOR_VARIANT.resolve(Some("default"), Some("primary"))
        );
        assert_eq!(classes.last().map(String::as_str), Some("custom-class"));
    }

    #[test]
    fn test_unknown_color_falls_back_to_default_pair() {
        let accordion = Accordion::new("faq").color("chartreuse").item(AccordionItem::new("a"));
        assert_eq!(
            accordion.summary_classes()[0],
            COLOR_VARIANT.resolve(None, None)
        );
    }

    #[test]
    fn test_closed_items_render_hidden_panels() {
        let html = three_items().to_html();
        assert_eq!(html.matches(" hidden\"").count(), 3);
        let open = Accordion::new("faq")
            .item(AccordionItem::new("a").open(true))
            .to_html();
        assert!(!open.contains(" hidden\""));
    }

    #[test]
    fn test_native_mode_uses_details_elements() {
        let html = three_items().mode(AccordionMode::Native).to_html();
        assert!(html.contains("<details id=\"faq-1\">"));
        assert!(html.contains("<summary"));
        assert!(!html.contains("data-on-click"));
    }

    #[test]
    fn test_menu_mode_is_mutually_exclusive() {
        let accordion = three_items().mode(AccordionMode::Menu);
        let mut dom = SimDom::new();
        for i in 1..=3 {
            dom.add(format!("faq-{i}"));
            dom.add_with_classes(format!("faq-{i}-panel"), "hidden");
        }
        dom.exec("faq-2", &accordion.menu_chain(2));
        assert_eq!(dom.ids_with_class("active"), vec!["faq-2"]);
        dom.exec("faq-3", &accordion.menu_chain(3));
        assert_eq!(dom.ids_with_class("active"), vec!["faq-3"]);
        assert_eq!(
            dom.ids_with_class("hidden"),
            vec!["faq-1-panel", "faq-2-panel"]
        );
    }
}
