use velum_theme::{palette, values, PairTable, ThemePreset, VariantTable};

static PADDING: VariantTable = VariantTable::new(
    "padding_size",
    "small",
    &[
        ("none", "p-0"),
        ("extra_small", "p-1"),
        ("small", "p-2"),
        ("medium", "p-3"),
        ("large", "p-4"),
        ("extra_large", "p-5"),
    ],
);

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "white"),
    &[
        ("default", "white", "bg-white"),
        ("default", "danger", "bg-[#FFE6E6]"),
        ("outline", "danger", "border-[#E73B3B]"),
    ],
);

#[test]
fn every_declared_value_resolves_to_its_fragment() {
    let expected = ["p-0", "p-1", "p-2", "p-3", "p-4", "p-5"];
    for (value, fragment) in PADDING.values().zip(expected) {
        assert_eq!(PADDING.resolve(Some(value)), fragment);
    }
}

#[test]
fn absent_value_equals_default_literal() {
    assert_eq!(PADDING.resolve(None), PADDING.resolve(Some("small")));
    assert_eq!(
        COLOR_VARIANT.resolve(None, None),
        COLOR_VARIANT.resolve(Some("default"), Some("white"))
    );
}

#[test]
fn arbitrary_strings_pass_through_unchanged() {
    for raw in ["p-[7px]", "px-2 py-8", "not-a-padding"] {
        assert_eq!(PADDING.resolve(Some(raw)), raw);
    }
}

#[test]
fn declared_table_values_stay_inside_canonical_sets() {
    for value in PADDING.values() {
        assert!(values::is_known(values::PADDINGS, value), "{value} not canonical");
    }
}

#[test]
fn unknown_pairs_fall_back_to_the_default_entry() {
    assert_eq!(COLOR_VARIANT.resolve(Some("shadow"), Some("danger")), "bg-white");
    assert_eq!(COLOR_VARIANT.resolve(Some("outline"), Some("teal")), "bg-white");
}

#[test]
fn palette_covers_every_canonical_color() {
    for color in values::COLORS {
        assert!(palette::entry(color).is_some(), "{color} missing from palette");
    }
}

#[test]
fn presets_parse_from_their_ids() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.id().parse::<ThemePreset>().as_ref(), Ok(preset));
    }
    assert!("nord".parse::<ThemePreset>().is_err());
}
