//! Mutual-exclusion invariants for grouped components, checked by executing
//! the exact chains the components embed in their markup.

use velum_core::Render;
use velum_js::{Js, SimDom};
use velum_ui::prelude::*;

fn chain_from(html: &str, attr: &str) -> Vec<Js> {
    html.split(&format!("{attr}=\""))
        .skip(1)
        .map(|rest| {
            let wire = rest.split('"').next().unwrap().replace("&quot;", "\"");
            Js::from_json(&wire).expect("valid wire JSON")
        })
        .collect()
}

/// Whatever order tabs are clicked in, exactly one trigger carries the
/// active marker and exactly one panel is unhidden.
#[test]
fn tab_switching_keeps_one_tab_active() {
    let html = Tabs::new("t")
        .tab(Tab::new("a"))
        .tab(Tab::new("b"))
        .tab(Tab::new("c"))
        .tab(Tab::new("d"))
        .to_html();
    let clicks = chain_from(&html, "data-on-click");
    assert_eq!(clicks.len(), 4);

    let mut dom = SimDom::new();
    for i in 1..=4 {
        dom.add(format!("t-{i}"));
        dom.add_with_classes(format!("t-{i}-panel"), "hidden");
    }
    for &click in &[2usize, 0, 3, 3, 1] {
        dom.exec("t", &clicks[click]);
        assert_eq!(
            dom.ids_with_class("active-tab"),
            vec![format!("t-{}", click + 1)],
            "after clicking tab {}",
            click + 1
        );
        let unhidden: Vec<String> = (1..=4)
            .map(|i| format!("t-{i}-panel"))
            .filter(|panel| !dom.has_class(panel, "hidden"))
            .collect();
        assert_eq!(unhidden, vec![format!("t-{}-panel", click + 1)]);
    }
}

/// The mount chain of tabs with no explicit active slot activates tab 1.
#[test]
fn tabs_default_to_first_on_mount() {
    let html = Tabs::new("t").vertical(true).tab(Tab::new("a")).tab(Tab::new("b")).to_html();
    let mount = chain_from(&html, "data-on-mount");
    assert_eq!(mount.len(), 1);

    let mut dom = SimDom::new();
    for i in 1..=2 {
        dom.add(format!("t-{i}"));
        dom.add_with_classes(format!("t-{i}-panel"), "hidden");
    }
    dom.exec("t", &mount[0]);
    assert_eq!(dom.ids_with_class("active-tab"), vec!["t-1"]);
    assert!(!dom.has_class("t-1-panel", "hidden"));
}

/// Accordion menu mode closes every sibling when a section opens.
#[test]
fn accordion_menu_mode_is_exclusive() {
    let html = Accordion::new("m")
        .mode(AccordionMode::Menu)
        .item(AccordionItem::new("a"))
        .item(AccordionItem::new("b"))
        .item(AccordionItem::new("c"))
        .to_html();
    let clicks = chain_from(&html, "data-on-click");
    assert_eq!(clicks.len(), 3);

    let mut dom = SimDom::new();
    for i in 1..=3 {
        dom.add(format!("m-{i}"));
        dom.add_with_classes(format!("m-{i}-panel"), "hidden");
    }
    dom.exec("m-1", &clicks[0]);
    dom.exec("m-3", &clicks[2]);
    assert_eq!(dom.ids_with_class("active"), vec!["m-3"]);
    assert_eq!(dom.ids_with_class("hidden"), vec!["m-1-panel", "m-2-panel"]);
}
