//! Rating component for star scores
//!
//! Renders `count` stars (1-based ids `{id}-{n}`). In interactive mode,
//! clicking star `k` marks stars `1..=k` as rated, clears the rest, and
//! dispatches a `rating` event carrying `{"rating": k}` for the host to
//! persist; the component itself keeps nothing.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = Rating::new("score").count(5).value(3).to_html();
//! assert!(html.contains("id=\"score-5\""));
//! ```

use serde_json::json;
use velum_core::{child_id, div, el, raw, Node, Render};
use velum_js::Js;
use velum_theme::VariantTable;

use crate::macros::style_setters;

const STAR_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor" width="100%" height="100%"><path d="M11.48 3.499a.562.562 0 0 1 1.04 0l2.125 5.111a.563.563 0 0 0 .475.345l5.518.442c.499.04.701.663.321.988l-4.204 3.602a.563.563 0 0 0-.182.557l1.285 5.385a.562.562 0 0 1-.84.61l-4.725-2.885a.562.562 0 0 0-.586 0L6.982 20.54a.562.562 0 0 1-.84-.61l1.285-5.386a.562.562 0 0 0-.182-.557l-4.204-3.602a.562.562 0 0 1 .321-.988l5.518-.442a.563.563 0 0 0 .475-.345L11.48 3.5Z"/></svg>"#;

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "[&_.rating-star]:size-4"),
        ("small", "[&_.rating-star]:size-5"),
        ("medium", "[&_.rating-star]:size-6"),
        ("large", "[&_.rating-star]:size-7"),
        ("extra_large", "[&_.rating-star]:size-8"),
    ],
);

static COLOR_CLASS: VariantTable = VariantTable::new(
    "color_class",
    "warning",
    &[
        ("white", "[&_.rated]:text-white"),
        ("primary", "[&_.rated]:text-[#4363EC]"),
        ("secondary", "[&_.rated]:text-[#6B6E7C]"),
        ("dark", "[&_.rated]:text-[#1E1E1E]"),
        ("success", "[&_.rated]:text-[#047857]"),
        ("warning", "[&_.rated]:text-[#FF8B08]"),
        ("danger", "[&_.rated]:text-[#E73B3B]"),
        ("info", "[&_.rated]:text-[#004FC4]"),
        ("light", "[&_.rated]:text-[#707483]"),
        ("misc", "[&_.rated]:text-[#52059C]"),
        ("dawn", "[&_.rated]:text-[#4D4137]"),
    ],
);

/// Rating builder.
#[derive(Clone, Debug)]
pub struct Rating {
    id: String,
    count: usize,
    value: usize,
    size: Option<String>,
    color: Option<String>,
    class: Option<String>,
    interactive: bool,
}

impl Rating {
    /// `id` must be unique per page; stars render at `{id}-{n}`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            count: 5,
            value: 0,
            size: None,
            color: None,
            class: None,
            interactive: false,
        }
    }

    style_setters! {
        /// Star size.
        size,
        /// Color of rated stars.
        color,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Number of stars.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Stars rated on first render. Clamped to `count`.
    pub fn value(mut self, value: usize) -> Self {
        self.value = value;
        self
    }

    /// Wires a click chain on every star.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Chain for clicking star `chosen`: re-mark stars `1..=chosen`, clear
    /// the rest, then tell the host.
    fn select_chain(&self, chosen: usize) -> Js {
        let mut js = Js::new();
        for i in 1..=self.count {
            let star = format!("#{}", child_id(&self.id, i));
            js = if i <= chosen {
                js.add_class_to(star, "rated")
            } else {
                js.remove_class_to(star, "rated")
            };
        }
        js.dispatch_detail("rating", json!({ "rating": chosen }))
    }
}

impl Render for Rating {
    fn render(&self) -> Node {
        let value = self.value.min(self.count);
        let stars = (1..=self.count).map(|i| {
            let mut star = el("button")
                .attr("type", "button")
                .id(child_id(&self.id, i))
                .attr("aria-label", format!("Rate {i}"))
                .class("rating-star text-[#DADADA] transition-colors duration-150")
                .class(if i <= value { "rated" } else { "" });
            if self.interactive {
                star = star.on("click", &self.select_chain(i));
            } else {
                star = star.flag("disabled", true);
            }
            star.child(raw(STAR_SVG)).into_node()
        });
        div()
            .id(&self.id)
            .class("inline-flex items-center gap-0.5")
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(COLOR_CLASS.resolve(self.color.as_deref()))
            .class(self.class.as_deref().unwrap_or(""))
            .children(stars)
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_js::SimDom;

    #[test]
    fn test_value_marks_leading_stars() {
        let html = Rating::new("r").count(5).value(2).to_html();
        assert!(html.contains("duration-150 rated\""));
        assert_eq!(html.matches(" rated\"").count(), 2);
    }

    #[test]
    fn test_value_is_clamped_to_count() {
        let html = Rating::new("r").count(3).value(9).to_html();
        assert_eq!(html.matches(" rated\"").count(), 3);
    }

    #[test]
    fn test_select_chain_re_marks_and_dispatches() {
        let rating = Rating::new("r").count(4).interactive(true);
        let mut dom = SimDom::new();
        for i in 1..=4 {
            dom.add(format!("r-{i}"));
        }
        dom.exec("r-4", &rating.select_chain(4));
        assert_eq!(dom.ids_with_class("rated").len(), 4);
        dom.exec("r-2", &rating.select_chain(2));
        assert_eq!(dom.ids_with_class("rated"), vec!["r-1", "r-2"]);
        let event = &dom.dispatched()[1];
        assert_eq!(event.event, "rating");
        assert_eq!(event.detail, Some(json!({ "rating": 2 })));
    }

    #[test]
    fn test_static_rating_disables_stars() {
        let html = Rating::new("r").count(2).to_html();
        assert_eq!(html.matches("disabled").count(), 2);
        assert!(!html.contains("data-on-click"));
    }
}
