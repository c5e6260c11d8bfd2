//! Velum client interaction commands
//!
//! Interactive behavior in Velum is expressed as data, not code: a component
//! attaches a [`Js`] chain to a DOM event, the chain is serialized into the
//! rendered markup, and the host runtime executes it when the event fires.
//! Every op manipulates CSS classes or visibility on an element addressed by
//! a selector; the "state" of a component is nothing more than the presence
//! or absence of marker classes on DOM nodes.
//!
//! Chains compose by concatenation and are idempotent to re-issue: executing
//! the same chain twice leaves the DOM in the same state as executing it once.
//!
//! # Example
//!
//! ```
//! use velum_js::{Js, Transition};
//!
//! let open = Js::new()
//!     .remove_class_to("#menu-backdrop", "hidden")
//!     .toggle_class_to("#menu", "show-dropdown")
//!     .show_transition(
//!         "#menu-panel",
//!         Transition::ms(300).from("opacity-0").to("opacity-100"),
//!     );
//!
//! let wire = open.to_json().unwrap();
//! assert!(wire.starts_with("[[\"remove_class\""));
//! ```

use serde::de::Error as DeError;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

pub mod sim;

pub use sim::SimDom;

/// Timed CSS transition descriptor for [`Js::show_transition`] and
/// [`Js::hide_transition`].
///
/// `during` is applied for the whole transition, `from` at the first frame,
/// `to` at the last. The duration is cosmetic: nothing awaits it (the host
/// removes the transition classes after `duration_ms` elapses).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub during: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub duration_ms: u32,
}

impl Transition {
    /// Transition lasting `duration_ms` milliseconds with no classes yet.
    pub fn ms(duration_ms: u32) -> Self {
        Self {
            during: None,
            from: None,
            to: None,
            duration_ms,
        }
    }

    /// Classes applied for the whole duration (e.g. `"transition-all ease-out"`).
    pub fn during(mut self, classes: impl Into<String>) -> Self {
        self.during = Some(classes.into());
        self
    }

    /// Classes applied at the first frame.
    pub fn from(mut self, classes: impl Into<String>) -> Self {
        self.from = Some(classes.into());
        self
    }

    /// Classes applied at the last frame.
    pub fn to(mut self, classes: impl Into<String>) -> Self {
        self.to = Some(classes.into());
        self
    }
}

/// Arguments for the class ops (`add_class`, `remove_class`, `toggle_class`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassArgs {
    /// Target selector; the event's own element when absent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to: Option<String>,
    pub names: Vec<String>,
}

/// Arguments for `show`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transition: Option<Transition>,
    /// CSS display value used when revealing; `"block"` when absent.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub display: Option<String>,
}

/// Arguments for `hide`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HideArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub transition: Option<Transition>,
}

/// Arguments for `dispatch` (custom application events such as `dismiss`,
/// `rating` or `select`, with an optional payload the host forwards as the
/// event detail).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchArgs {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to: Option<String>,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<serde_json::Value>,
}

/// A single command step. Pure data; executed by the host DOM runtime (or
/// [`sim::SimDom`] in tests).
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    AddClass(ClassArgs),
    RemoveClass(ClassArgs),
    ToggleClass(ClassArgs),
    Show(ShowArgs),
    Hide(HideArgs),
    Dispatch(DispatchArgs),
}

impl Op {
    /// Wire name of this op.
    pub fn name(&self) -> &'static str {
        match self {
            Op::AddClass(_) => "add_class",
            Op::RemoveClass(_) => "remove_class",
            Op::ToggleClass(_) => "toggle_class",
            Op::Show(_) => "show",
            Op::Hide(_) => "hide",
            Op::Dispatch(_) => "dispatch",
        }
    }
}

const OP_NAMES: &[&str] = &[
    "add_class",
    "remove_class",
    "toggle_class",
    "show",
    "hide",
    "dispatch",
];

// Wire shape: every op is a two-element tuple ["name", {args}].
impl Serialize for Op {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(self.name())?;
        match self {
            Op::AddClass(args) | Op::RemoveClass(args) | Op::ToggleClass(args) => {
                tuple.serialize_element(args)?;
            }
            Op::Show(args) => tuple.serialize_element(args)?,
            Op::Hide(args) => tuple.serialize_element(args)?,
            Op::Dispatch(args) => tuple.serialize_element(args)?,
        }
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Op {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (name, args): (String, serde_json::Value) = Deserialize::deserialize(deserializer)?;
        let op = match name.as_str() {
            "add_class" => Op::AddClass(serde_json::from_value(args).map_err(D::Error::custom)?),
            "remove_class" => {
                Op::RemoveClass(serde_json::from_value(args).map_err(D::Error::custom)?)
            }
            "toggle_class" => {
                Op::ToggleClass(serde_json::from_value(args).map_err(D::Error::custom)?)
            }
            "show" => Op::Show(serde_json::from_value(args).map_err(D::Error::custom)?),
            "hide" => Op::Hide(serde_json::from_value(args).map_err(D::Error::custom)?),
            "dispatch" => Op::Dispatch(serde_json::from_value(args).map_err(D::Error::custom)?),
            other => return Err(D::Error::unknown_variant(other, OP_NAMES)),
        };
        Ok(op)
    }
}

/// An ordered, appendable chain of interaction ops.
///
/// Constructed fresh per event binding, serialized once into the markup, and
/// executed by the host when the event fires. No server-side state is kept
/// about whether it ran.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Js {
    ops: SmallVec<[Op; 4]>,
}

fn split_names(names: &str) -> Vec<String> {
    names.split_whitespace().map(str::to_string).collect()
}

impl Js {
    /// Empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// The ops in execution order.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Appends all of `other`'s ops after this chain's. Composition is plain
    /// concatenation; there is no dedup or reordering.
    pub fn then(mut self, other: Js) -> Self {
        self.ops.extend(other.ops);
        self
    }

    fn push(mut self, op: Op) -> Self {
        tracing::trace!(op = op.name(), "append interaction op");
        self.ops.push(op);
        self
    }

    /// Adds the space-separated `names` to the event's own element.
    pub fn add_class(self, names: &str) -> Self {
        self.push(Op::AddClass(ClassArgs {
            to: None,
            names: split_names(names),
        }))
    }

    /// Adds the space-separated `names` to the element addressed by `to`.
    pub fn add_class_to(self, to: impl Into<String>, names: &str) -> Self {
        self.push(Op::AddClass(ClassArgs {
            to: Some(to.into()),
            names: split_names(names),
        }))
    }

    /// Removes the space-separated `names` from the event's own element.
    pub fn remove_class(self, names: &str) -> Self {
        self.push(Op::RemoveClass(ClassArgs {
            to: None,
            names: split_names(names),
        }))
    }

    /// Removes the space-separated `names` from the element addressed by `to`.
    pub fn remove_class_to(self, to: impl Into<String>, names: &str) -> Self {
        self.push(Op::RemoveClass(ClassArgs {
            to: Some(to.into()),
            names: split_names(names),
        }))
    }

    /// Toggles the space-separated `names` on the event's own element.
    pub fn toggle_class(self, names: &str) -> Self {
        self.push(Op::ToggleClass(ClassArgs {
            to: None,
            names: split_names(names),
        }))
    }

    /// Toggles the space-separated `names` on the element addressed by `to`.
    pub fn toggle_class_to(self, to: impl Into<String>, names: &str) -> Self {
        self.push(Op::ToggleClass(ClassArgs {
            to: Some(to.into()),
            names: split_names(names),
        }))
    }

    /// Reveals the event's own element.
    pub fn show(self) -> Self {
        self.push(Op::Show(ShowArgs::default()))
    }

    /// Reveals the element addressed by `to`.
    pub fn show_to(self, to: impl Into<String>) -> Self {
        self.push(Op::Show(ShowArgs {
            to: Some(to.into()),
            ..ShowArgs::default()
        }))
    }

    /// Reveals the element addressed by `to`, animated by `transition`.
    pub fn show_transition(self, to: impl Into<String>, transition: Transition) -> Self {
        self.push(Op::Show(ShowArgs {
            to: Some(to.into()),
            transition: Some(transition),
            display: None,
        }))
    }

    /// Reveals `to` using a non-default CSS display value (e.g. `"flex"`).
    pub fn show_display(self, to: impl Into<String>, display: impl Into<String>) -> Self {
        self.push(Op::Show(ShowArgs {
            to: Some(to.into()),
            transition: None,
            display: Some(display.into()),
        }))
    }

    /// Hides the event's own element.
    pub fn hide(self) -> Self {
        self.push(Op::Hide(HideArgs::default()))
    }

    /// Hides the element addressed by `to`.
    pub fn hide_to(self, to: impl Into<String>) -> Self {
        self.push(Op::Hide(HideArgs {
            to: Some(to.into()),
            transition: None,
        }))
    }

    /// Hides the element addressed by `to`, animated by `transition`.
    pub fn hide_transition(self, to: impl Into<String>, transition: Transition) -> Self {
        self.push(Op::Hide(HideArgs {
            to: Some(to.into()),
            transition: Some(transition),
        }))
    }

    /// Dispatches a custom application event from the event's own element.
    pub fn dispatch(self, event: impl Into<String>) -> Self {
        self.push(Op::Dispatch(DispatchArgs {
            to: None,
            event: event.into(),
            detail: None,
        }))
    }

    /// Dispatches a custom application event carrying a JSON payload.
    pub fn dispatch_detail(self, event: impl Into<String>, detail: serde_json::Value) -> Self {
        self.push(Op::Dispatch(DispatchArgs {
            to: None,
            event: event.into(),
            detail: Some(detail),
        }))
    }

    /// Dispatches a custom application event from the element addressed by `to`.
    pub fn dispatch_to(self, to: impl Into<String>, event: impl Into<String>) -> Self {
        self.push(Op::Dispatch(DispatchArgs {
            to: Some(to.into()),
            event: event.into(),
            detail: None,
        }))
    }

    /// Marks child `active` of `base`'s `1..=count` children as the only one
    /// carrying `marker`.
    ///
    /// Children are addressed as `#{base}-{i}` (1-based). The chain removes
    /// `marker` from every child first and only then adds it to the chosen
    /// one; the reverse order would leave two children marked if the chain is
    /// interrupted mid-flight, so callers must not reorder it.
    pub fn mark_exclusive(mut self, base: &str, count: usize, active: usize, marker: &str) -> Self {
        for i in 1..=count {
            self = self.remove_class_to(format!("#{base}-{i}"), marker);
        }
        self.add_class_to(format!("#{base}-{active}"), marker)
    }

    /// Wire form: a JSON array of `["op", {args}]` pairs.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a chain back from its wire form.
    pub fn from_json(wire: &str) -> serde_json::Result<Js> {
        serde_json::from_str(wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_op_wire_shape() {
        let js = Js::new().add_class_to("#panel-1", "active shadow");
        assert_eq!(
            js.to_json().unwrap(),
            r##"[["add_class",{"to":"#panel-1","names":["active","shadow"]}]]"##
        );
    }

    #[test]
    fn test_self_target_omits_to() {
        let js = Js::new().toggle_class("open");
        assert_eq!(js.to_json().unwrap(), r#"[["toggle_class",{"names":["open"]}]]"#);
    }

    #[test]
    fn test_then_concatenates_in_order() {
        let a = Js::new().remove_class("x");
        let b = Js::new().add_class("y");
        let ops: Vec<&str> = a.then(b).ops().iter().map(Op::name).collect();
        assert_eq!(ops, vec!["remove_class", "add_class"]);
    }

    #[test]
    fn test_round_trip() {
        let js = Js::new()
            .show_transition("#d", Transition::ms(300).from("opacity-0").to("opacity-100"))
            .hide_to("#e")
            .dispatch_detail("rating", serde_json::json!({"rating": 4}));
        let wire = js.to_json().unwrap();
        assert_eq!(Js::from_json(&wire).unwrap(), js);
    }

    #[test]
    fn test_mark_exclusive_resets_before_set() {
        let js = Js::new().mark_exclusive("tabs", 3, 2, "active-tab");
        let ops = js.ops();
        assert_eq!(ops.len(), 4);
        for (i, op) in ops.iter().take(3).enumerate() {
            match op {
                Op::RemoveClass(args) => {
                    assert_eq!(args.to.as_deref(), Some(format!("#tabs-{}", i + 1).as_str()));
                }
                other => panic!("expected remove_class, got {}", other.name()),
            }
        }
        match &ops[3] {
            Op::AddClass(args) => assert_eq!(args.to.as_deref(), Some("#tabs-2")),
            other => panic!("expected add_class, got {}", other.name()),
        }
    }
}
