use velum_core::{child_id, div, el, input, join_classes, span, text, Render};
use velum_js::Js;

struct Pill {
    label: String,
}

impl Render for Pill {
    fn render(&self) -> velum_core::Node {
        span().class("rounded-full px-2").text(&self.label).into_node()
    }
}

#[test]
fn render_trait_exposes_to_html() {
    let pill = Pill { label: "new".to_string() };
    assert_eq!(pill.to_html(), "<span class=\"rounded-full px-2\">new</span>");
}

#[test]
fn attribute_values_are_escaped() {
    let html = div().attr("title", "a \"quote\" & more").into_node().to_html();
    assert_eq!(html, "<div title=\"a &quot;quote&quot; &amp; more\"></div>");
}

#[test]
fn interaction_chains_embed_escaped_json() {
    let html = div()
        .id("menu")
        .on("click", &Js::new().toggle_class("open"))
        .into_node()
        .to_html();
    assert!(html.contains("data-on-click=\"[[&quot;toggle_class&quot;,{&quot;names&quot;:[&quot;open&quot;]}]]\""));
}

#[test]
fn derived_ids_compose_with_builders() {
    let children = (1..=3).map(|i| el("section").id(child_id("doc", i)));
    let html = div().children(children).into_node().to_html();
    assert!(html.contains("id=\"doc-1\""));
    assert!(html.contains("id=\"doc-3\""));
}

#[test]
fn class_join_skips_empty_resolver_output() {
    assert_eq!(join_classes(["a", "", "b", " ", "c"]), "a b c");
}

#[test]
fn nested_trees_serialize_depth_first() {
    let html = div()
        .child(span().text("a").child(text("b")))
        .child(input().attr("type", "text"))
        .into_node()
        .to_html();
    assert_eq!(html, "<div><span>ab</span><input type=\"text\"></div>");
}
