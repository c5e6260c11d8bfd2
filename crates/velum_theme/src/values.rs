//! Canonical style value sets
//!
//! The closed literal vocabularies shared by every component table. A table
//! may cover a subset of a set (not every component has a `full` rounding),
//! but no table introduces values outside these sets.

/// Color names, in palette order.
pub const COLORS: &[&str] = &[
    "white",
    "primary",
    "secondary",
    "dark",
    "success",
    "warning",
    "danger",
    "info",
    "light",
    "misc",
    "dawn",
];

/// T-shirt sizes.
pub const SIZES: &[&str] = &[
    "extra_small",
    "small",
    "medium",
    "large",
    "extra_large",
];

/// Corner rounding steps.
pub const ROUNDED: &[&str] = &[
    "none",
    "extra_small",
    "small",
    "medium",
    "large",
    "extra_large",
    "full",
];

/// Border width steps.
pub const BORDERS: &[&str] = &[
    "none",
    "extra_small",
    "small",
    "medium",
    "large",
    "extra_large",
];

/// Padding steps.
pub const PADDINGS: &[&str] = &[
    "none",
    "extra_small",
    "small",
    "medium",
    "large",
    "extra_large",
];

/// Vertical/horizontal gap steps between repeated children.
pub const SPACES: &[&str] = &[
    "none",
    "extra_small",
    "small",
    "medium",
    "large",
    "extra_large",
];

/// Whether `value` belongs to the closed set.
pub fn is_known(set: &[&str], value: &str) -> bool {
    set.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_set() {
        assert_eq!(COLORS.len(), 11);
        assert!(is_known(COLORS, "danger"));
        assert!(!is_known(COLORS, "crimson"));
    }

    #[test]
    fn test_sets_have_no_duplicates() {
        for set in [COLORS, SIZES, ROUNDED, BORDERS, PADDINGS, SPACES] {
            let mut sorted: Vec<&str> = set.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), set.len());
        }
    }
}
