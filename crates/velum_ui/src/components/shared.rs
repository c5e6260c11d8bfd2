//! Fragments shared across components

use velum_core::{el, raw, Element};
use velum_js::Js;

/// Chevron pointing down, rotated by marker classes when a section opens.
pub(crate) const CHEVRON_DOWN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="m6 9 6 6 6-6"/></svg>"#;

/// Close mark used by every dismissible component.
pub(crate) const CLOSE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="14" height="14" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M18 6 6 18"/><path d="m6 6 12 12"/></svg>"#;

/// A dismiss button executing `js` on click.
pub(crate) fn dismiss_button(aria_label: &str, js: &Js) -> Element {
    el("button")
        .attr("type", "button")
        .attr("aria-label", aria_label)
        .class("shrink-0 p-1 opacity-70 hover:opacity-100 focus:outline-none")
        .on("click", js)
        .child(raw(CLOSE_SVG))
}
