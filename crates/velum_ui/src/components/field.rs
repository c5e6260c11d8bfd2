//! Shared form-field fragments
//!
//! Label, description and error-list blocks used by every field component.
//! Error lists are supplied by the caller's validation layer; Velum renders
//! them verbatim and never produces or interprets them.

use velum_core::{div, label, li, suffixed_id, ul, Node};

/// Label layout, chosen once per field render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelMode {
    /// Label block above the input.
    #[default]
    Outer,
    /// Label floats inside the input and shrinks on focus/content.
    Floating,
}

/// Label block above an input.
pub(crate) fn outer_label(for_id: &str, text: &str) -> Node {
    label()
        .attr("for", for_id)
        .class("block text-sm font-medium")
        .text(text)
        .into_node()
}

/// Muted helper line under an input.
pub(crate) fn description_block(text: &str) -> Node {
    div().class("text-xs opacity-70").text(text).into_node()
}

/// Caller-supplied validation errors, rendered at `{field_id}-errors`.
/// Empty lists render nothing.
pub(crate) fn error_block(field_id: &str, errors: &[String]) -> Node {
    if errors.is_empty() {
        return Node::empty();
    }
    ul().id(suffixed_id(field_id, "errors"))
        .class("mt-1 space-y-0.5 text-xs text-[#E73B3B] list-none")
        .children(errors.iter().map(|error| li().text(error.as_str())))
        .into_node()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_block_renders_each_error() {
        let html = error_block("email", &["is required".into(), "is too short".into()]).to_html();
        assert!(html.contains("id=\"email-errors\""));
        assert_eq!(html.matches("<li>").count(), 2);
    }

    #[test]
    fn test_empty_error_list_renders_nothing() {
        assert_eq!(error_block("email", &[]).to_html(), "");
    }

    #[test]
    fn test_outer_label_points_at_field() {
        let html = outer_label("email", "Email address").to_html();
        assert!(html.contains("for=\"email\""));
    }
}
