//! Cross-component checks of the styling laws: snapshot fragments, default
//! forwarding, pass-through, derived ids and caller-class-last ordering.

use velum_core::Render;
use velum_ui::prelude::*;

/// The summary of a default/primary accordion carries the primary palette
/// fragment plus every other resolved dimension, with the caller's class
/// appended last.
#[test]
fn accordion_summary_composes_documented_fragments() {
    let html = Accordion::new("faq")
        .variant("default")
        .color("primary")
        .rounded("large")
        .padding("medium")
        .size("small")
        .class("caller-override")
        .item(AccordionItem::new("Q"))
        .to_html();
    let summary_class = html
        .split("<button class=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("summary class attribute");
    assert!(summary_class.contains("bg-[#4363EC] text-white border-[#2441C2] hover:bg-[#072ED3]"));
    assert!(summary_class.contains("rounded-lg"));
    assert!(summary_class.contains("p-4"));
    assert!(summary_class.contains("text-sm"));
    let caller = summary_class.find("caller-override").expect("caller class present");
    assert!(caller > summary_class.find("bg-[#4363EC]").unwrap());
}

/// Size/color resolution of a toggle track is a pure function of the size
/// and color attributes; `checked` cannot change it.
#[test]
fn toggle_track_ignores_checked_state() {
    let off = ToggleField::new("t").color("danger").size("extra_large").to_html();
    let on = ToggleField::new("t")
        .color("danger")
        .size("extra_large")
        .checked(true)
        .to_html();
    assert!(off.contains("w-14 h-8"));
    assert!(off.contains("peer-checked:bg-[#E73B3B]"));
    assert!(on.contains("w-14 h-8"));
    assert!(on.contains("peer-checked:bg-[#E73B3B]"));
}

/// Unknown strings pass through every single-value dimension unchanged.
#[test]
fn raw_utility_strings_pass_through() {
    assert!(Alert::new("a").rounded("rounded-[11px]").to_html().contains("rounded-[11px]"));
    assert!(Spinner::new().color("text-rose-500").to_html().contains("text-rose-500"));
    assert!(Badge::new("x").size("px-10").to_html().contains("px-10"));
}

/// Derived child ids are 1-based and deterministic across re-renders.
#[test]
fn derived_ids_are_stable() {
    let build = || {
        Tabs::new("t")
            .tab(Tab::new("a"))
            .tab(Tab::new("b"))
            .tab(Tab::new("c"))
            .to_html()
    };
    let first = build();
    assert!(first.contains("id=\"t-3-panel\""));
    assert_eq!(first, build());
}

/// Every dismissable component embeds a serialized chain the simulator can
/// parse back and execute.
#[test]
fn embedded_chains_round_trip_through_the_wire() {
    let html = Alert::new("flash").dismissable(true).to_html();
    let wire_escaped = html
        .split("data-on-click=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .expect("embedded chain");
    let wire = wire_escaped.replace("&quot;", "\"");
    let js = velum_js::Js::from_json(&wire).expect("valid wire JSON");
    let mut dom = velum_js::SimDom::new();
    dom.add("flash");
    dom.exec("flash", &js);
    assert!(!dom.is_visible("flash"));
}
