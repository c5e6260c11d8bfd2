//! Static variant lookup tables
//!
//! Tables are declared as `static` items holding a slice of literal entries;
//! the hash index is built lazily on first resolution and shared for the
//! process lifetime. Lookup is a single map probe with one fallback branch,
//! never a long match chain.

use std::borrow::Cow;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

/// One-dimensional style table: value → class fragment.
///
/// Resolution rules, in order:
/// 1. a known value returns its table fragment;
/// 2. an unknown string is returned unchanged (escape hatch for raw
///    utility classes);
/// 3. an absent value resolves to the dimension's default literal.
pub struct VariantTable {
    dimension: &'static str,
    default_value: &'static str,
    entries: &'static [(&'static str, &'static str)],
    index: OnceLock<FxHashMap<&'static str, &'static str>>,
}

impl VariantTable {
    pub const fn new(
        dimension: &'static str,
        default_value: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            dimension,
            default_value,
            entries,
            index: OnceLock::new(),
        }
    }

    fn index(&self) -> &FxHashMap<&'static str, &'static str> {
        self.index
            .get_or_init(|| self.entries.iter().copied().collect())
    }

    pub fn dimension(&self) -> &'static str {
        self.dimension
    }

    pub fn default_value(&self) -> &'static str {
        self.default_value
    }

    /// Declared values in table order.
    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(value, _)| *value)
    }

    /// Total resolution; see the type docs for the fallback rules.
    pub fn resolve(&self, value: Option<&str>) -> Cow<'static, str> {
        match value {
            Some(value) => match self.index().get(value) {
                Some(fragment) => Cow::Borrowed(*fragment),
                None => {
                    tracing::trace!(
                        dimension = self.dimension,
                        %value,
                        "unknown value, passing through"
                    );
                    Cow::Owned(value.to_string())
                }
            },
            None => self.resolve(Some(self.default_value)),
        }
    }
}

/// Two-dimensional style table: `(style variant, color)` → class fragment.
///
/// Every valid pair has its own literal entry; the values are designer-chosen
/// tokens with no formula relating them. An absent side is completed with the
/// default; a pair outside the table falls back to the default pair's entry
/// (there is no single string to echo, so pairs have no pass-through).
pub struct PairTable {
    dimension: &'static str,
    default_pair: (&'static str, &'static str),
    entries: &'static [(&'static str, &'static str, &'static str)],
    index: OnceLock<FxHashMap<&'static str, FxHashMap<&'static str, &'static str>>>,
}

impl PairTable {
    pub const fn new(
        dimension: &'static str,
        default_pair: (&'static str, &'static str),
        entries: &'static [(&'static str, &'static str, &'static str)],
    ) -> Self {
        Self {
            dimension,
            default_pair,
            entries,
            index: OnceLock::new(),
        }
    }

    fn index(&self) -> &FxHashMap<&'static str, FxHashMap<&'static str, &'static str>> {
        self.index.get_or_init(|| {
            let mut outer: FxHashMap<&'static str, FxHashMap<&'static str, &'static str>> =
                FxHashMap::default();
            for &(variant, color, fragment) in self.entries {
                outer.entry(variant).or_default().insert(color, fragment);
            }
            outer
        })
    }

    pub fn dimension(&self) -> &'static str {
        self.dimension
    }

    pub fn default_pair(&self) -> (&'static str, &'static str) {
        self.default_pair
    }

    /// Declared `(variant, color)` pairs in table order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(variant, color, _)| (*variant, *color))
    }

    /// Total resolution; see the type docs for the fallback rules.
    pub fn resolve(&self, variant: Option<&str>, color: Option<&str>) -> &'static str {
        let variant = variant.unwrap_or(self.default_pair.0);
        let color = color.unwrap_or(self.default_pair.1);
        if let Some(fragment) = self.index().get(variant).and_then(|row| row.get(color).copied()) {
            return fragment;
        }
        tracing::trace!(
            dimension = self.dimension,
            %variant,
            %color,
            "unknown pair, using default entry"
        );
        let (variant, color) = self.default_pair;
        self.index()
            .get(variant)
            .and_then(|row| row.get(color))
            .copied()
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SIZE: VariantTable = VariantTable::new(
        "size_class",
        "medium",
        &[
            ("small", "text-sm"),
            ("medium", "text-base"),
            ("large", "text-lg"),
        ],
    );

    static COLOR_VARIANT: PairTable = PairTable::new(
        "color_variant",
        ("default", "white"),
        &[
            ("default", "white", "bg-white text-[#3E3E3E]"),
            ("default", "primary", "bg-[#4363EC] text-white"),
            ("outline", "primary", "text-[#4363EC] border-[#4363EC]"),
        ],
    );

    #[test]
    fn test_known_value_returns_table_fragment() {
        assert_eq!(SIZE.resolve(Some("large")), "text-lg");
    }

    #[test]
    fn test_absent_value_forwards_to_default() {
        assert_eq!(SIZE.resolve(None), SIZE.resolve(Some("medium")));
    }

    #[test]
    fn test_unknown_value_passes_through() {
        assert_eq!(SIZE.resolve(Some("text-[11px]")), "text-[11px]");
    }

    #[test]
    fn test_pair_lookup() {
        assert_eq!(
            COLOR_VARIANT.resolve(Some("outline"), Some("primary")),
            "text-[#4363EC] border-[#4363EC]"
        );
    }

    #[test]
    fn test_pair_absent_sides_complete_with_defaults() {
        assert_eq!(
            COLOR_VARIANT.resolve(None, Some("primary")),
            "bg-[#4363EC] text-white"
        );
        assert_eq!(
            COLOR_VARIANT.resolve(None, None),
            "bg-white text-[#3E3E3E]"
        );
    }

    #[test]
    fn test_unknown_pair_uses_default_entry() {
        assert_eq!(
            COLOR_VARIANT.resolve(Some("shadow"), Some("mauve")),
            "bg-white text-[#3E3E3E]"
        );
    }
}
