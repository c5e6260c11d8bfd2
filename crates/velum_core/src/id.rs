//! DOM id derivation
//!
//! Multiple instances of one component on a page must not collide on ids;
//! the caller supplies a unique `id` per instance and every child id is
//! derived from it. Derivation is deterministic, so re-rendering the same
//! slot order reproduces the same ids and interaction chains keep addressing
//! the right children.

/// Derived id for the `index`-th repeated child (1-based): `{base}-{index}`.
pub fn child_id(base: &str, index: usize) -> String {
    format!("{base}-{index}")
}

/// Derived id for a named part of a component: `{base}-{suffix}`.
pub fn suffixed_id(base: &str, suffix: &str) -> String {
    format!("{base}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_ids_are_one_based() {
        assert_eq!(child_id("faq", 1), "faq-1");
        assert_eq!(child_id("faq", 12), "faq-12");
    }

    #[test]
    fn test_suffixed_id() {
        assert_eq!(suffixed_id("cart-modal", "overlay"), "cart-modal-overlay");
    }
}
