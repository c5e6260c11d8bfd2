//! Reference executor for interaction chains
//!
//! A minimal in-memory stand-in for the host DOM runtime: elements are ids
//! mapped to a class set and a visibility flag. Tests (and the gallery) use
//! it to execute exactly the chains that were serialized into markup, without
//! a browser.
//!
//! Semantics match the host contract: a selector that resolves to no element
//! is a silent no-op, and transitions are applied instantaneously (the final
//! state wins; `duration_ms` is cosmetic and never awaited).

use rustc_hash::{FxHashMap, FxHashSet};

use crate::{ClassArgs, Js, Op};

/// A dispatched application event recorded by the simulator.
#[derive(Clone, Debug, PartialEq)]
pub struct DispatchedEvent {
    /// Id of the element the event was dispatched from.
    pub target: String,
    pub event: String,
    pub detail: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default)]
struct ElementState {
    classes: FxHashSet<String>,
    hidden: bool,
}

/// In-memory element registry executing [`Js`] chains.
#[derive(Clone, Debug, Default)]
pub struct SimDom {
    elements: FxHashMap<String, ElementState>,
    events: Vec<DispatchedEvent>,
}

impl SimDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a visible element with no classes.
    pub fn add(&mut self, id: impl Into<String>) -> &mut Self {
        self.elements.entry(id.into()).or_default();
        self
    }

    /// Registers a hidden element (e.g. a collapsed panel).
    pub fn add_hidden(&mut self, id: impl Into<String>) -> &mut Self {
        let state = self.elements.entry(id.into()).or_default();
        state.hidden = true;
        self
    }

    /// Registers an element carrying the space-separated `classes`.
    pub fn add_with_classes(&mut self, id: impl Into<String>, classes: &str) -> &mut Self {
        let state = self.elements.entry(id.into()).or_default();
        state
            .classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|el| el.classes.contains(class))
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|el| !el.hidden)
    }

    /// Sorted class list of an element; empty when the element is unknown.
    pub fn classes(&self, id: &str) -> Vec<String> {
        let mut classes: Vec<String> = self
            .elements
            .get(id)
            .map(|el| el.classes.iter().cloned().collect())
            .unwrap_or_default();
        classes.sort_unstable();
        classes
    }

    /// Ids carrying `class`, sorted.
    pub fn ids_with_class(&self, class: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .elements
            .iter()
            .filter(|(_, el)| el.classes.contains(class))
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Application events dispatched so far, in execution order.
    pub fn dispatched(&self) -> &[DispatchedEvent] {
        &self.events
    }

    /// Executes `js` with `this` as the event's own element.
    pub fn exec(&mut self, this: &str, js: &Js) {
        for op in js.ops() {
            self.exec_op(this, op);
        }
    }

    /// Resolves a target selector to an element id. Only `#id` selectors (and
    /// the implicit self target) are supported; anything else no-ops.
    fn resolve(&self, this: &str, to: &Option<String>) -> Option<String> {
        let id = match to {
            None => this.to_string(),
            Some(sel) => match sel.strip_prefix('#') {
                Some(id) if !id.contains([' ', '.', '>']) => id.to_string(),
                _ => {
                    tracing::trace!(selector = %sel, "unsupported selector, skipping op");
                    return None;
                }
            },
        };
        if self.elements.contains_key(&id) {
            Some(id)
        } else {
            tracing::trace!(id = %id, "selector matched no element, skipping op");
            None
        }
    }

    fn class_targets(&mut self, this: &str, args: &ClassArgs) -> Option<&mut ElementState> {
        let id = self.resolve(this, &args.to)?;
        self.elements.get_mut(&id)
    }

    fn exec_op(&mut self, this: &str, op: &Op) {
        match op {
            Op::AddClass(args) => {
                let names = args.names.clone();
                if let Some(el) = self.class_targets(this, args) {
                    el.classes.extend(names);
                }
            }
            Op::RemoveClass(args) => {
                let names = args.names.clone();
                if let Some(el) = self.class_targets(this, args) {
                    for name in &names {
                        el.classes.remove(name);
                    }
                }
            }
            Op::ToggleClass(args) => {
                let names = args.names.clone();
                if let Some(el) = self.class_targets(this, args) {
                    for name in names {
                        if !el.classes.remove(&name) {
                            el.classes.insert(name);
                        }
                    }
                }
            }
            Op::Show(args) => {
                if let Some(id) = self.resolve(this, &args.to) {
                    if let Some(el) = self.elements.get_mut(&id) {
                        el.hidden = false;
                    }
                }
            }
            Op::Hide(args) => {
                if let Some(id) = self.resolve(this, &args.to) {
                    if let Some(el) = self.elements.get_mut(&id) {
                        el.hidden = true;
                    }
                }
            }
            Op::Dispatch(args) => {
                if let Some(id) = self.resolve(this, &args.to) {
                    self.events.push(DispatchedEvent {
                        target: id,
                        event: args.event.clone(),
                        detail: args.detail.clone(),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transition;

    #[test]
    fn test_toggle_round_trip() {
        let mut dom = SimDom::new();
        dom.add("menu");
        let js = Js::new().toggle_class_to("#menu", "show-dropdown");
        dom.exec("trigger", &js);
        assert!(dom.has_class("menu", "show-dropdown"));
        dom.exec("trigger", &js);
        assert!(!dom.has_class("menu", "show-dropdown"));
    }

    #[test]
    fn test_missing_target_is_a_no_op() {
        let mut dom = SimDom::new();
        dom.add("a");
        dom.exec("a", &Js::new().add_class_to("#nope", "x"));
        assert!(dom.ids_with_class("x").is_empty());
    }

    #[test]
    fn test_show_hide_ignore_transition_timing() {
        let mut dom = SimDom::new();
        dom.add_hidden("drawer");
        let t = Transition::ms(500).from("-translate-x-full").to("translate-x-0");
        dom.exec("btn", &Js::new().show_transition("#drawer", t.clone()));
        assert!(dom.is_visible("drawer"));
        dom.exec("btn", &Js::new().hide_transition("#drawer", t));
        assert!(!dom.is_visible("drawer"));
    }

    #[test]
    fn test_reissuing_a_chain_is_idempotent() {
        let mut dom = SimDom::new();
        dom.add("badge");
        let js = Js::new().add_class_to("#badge", "ring");
        dom.exec("badge", &js);
        let once = dom.classes("badge");
        dom.exec("badge", &js);
        assert_eq!(dom.classes("badge"), once);
    }
}
