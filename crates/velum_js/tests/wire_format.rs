use serde_json::json;
use velum_js::{Js, Op, SimDom, Transition};

#[test]
fn wire_form_is_an_array_of_tagged_pairs() {
    let js = Js::new()
        .add_class_to("#a", "open")
        .hide_transition("#b", Transition::ms(250).from("opacity-100").to("opacity-0"))
        .dispatch_detail("select", json!({ "page": 3 }));
    let wire: serde_json::Value = serde_json::from_str(&js.to_json().unwrap()).unwrap();
    assert_eq!(wire[0][0], "add_class");
    assert_eq!(wire[0][1]["to"], "#a");
    assert_eq!(wire[1][0], "hide");
    assert_eq!(wire[1][1]["transition"]["duration_ms"], 250);
    assert_eq!(wire[2][1]["detail"]["page"], 3);
}

#[test]
fn unknown_ops_are_rejected_on_parse() {
    assert!(Js::from_json(r#"[["explode",{}]]"#).is_err());
}

#[test]
fn concatenation_preserves_both_orders() {
    let a = Js::new().remove_class("x").remove_class("y");
    let b = Js::new().add_class("z");
    let names: Vec<&str> = a.then(b).ops().iter().map(Op::name).collect();
    assert_eq!(names, vec!["remove_class", "remove_class", "add_class"]);
}

#[test]
fn exclusive_marking_survives_any_starting_state() {
    let mut dom = SimDom::new();
    for i in 1..=5 {
        dom.add(format!("tab-{i}"));
    }
    // Pathological start: several children already marked.
    for i in [1, 3, 5] {
        dom.exec("x", &Js::new().add_class_to(format!("#tab-{i}"), "active"));
    }
    dom.exec("x", &Js::new().mark_exclusive("tab", 5, 4, "active"));
    assert_eq!(dom.ids_with_class("active"), vec!["tab-4"]);
}

#[test]
fn executing_a_parsed_chain_matches_the_original() {
    let js = Js::new().toggle_class_to("#m", "open").show_to("#p");
    let parsed = Js::from_json(&js.to_json().unwrap()).unwrap();
    let mut a = SimDom::new();
    a.add("m");
    a.add_hidden("p");
    let mut b = a.clone();
    a.exec("m", &js);
    b.exec("m", &parsed);
    assert_eq!(a.classes("m"), b.classes("m"));
    assert_eq!(a.is_visible("p"), b.is_visible("p"));
}
