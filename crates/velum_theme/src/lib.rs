//! Velum styling tables
//!
//! Every style dimension in Velum (color, size, rounded, border, padding,
//! space, variant) is a closed set of literal string values mapped to fixed
//! CSS utility-class fragments. This crate provides the lookup machinery and
//! the shared vocabulary:
//!
//! - [`VariantTable`]: one-dimensional value → fragment lookup with a
//!   pass-through escape hatch and a per-dimension default
//! - [`PairTable`]: two-dimensional `(variant, color)` → fragment lookup
//! - [`values`]: the canonical value sets shared across components
//! - [`palette`]: the hex tokens the component tables are built from
//! - [`ThemePreset`]: the small configuration surface for the gallery
//!
//! Tables are fully static, defined at load time and never mutated.
//! Resolution is total: it never fails, whatever the caller passes.
//!
//! # Example
//!
//! ```
//! use velum_theme::VariantTable;
//!
//! static ROUNDED: VariantTable = VariantTable::new(
//!     "rounded_size",
//!     "small",
//!     &[("none", "rounded-none"), ("small", "rounded"), ("full", "rounded-full")],
//! );
//!
//! assert_eq!(ROUNDED.resolve(Some("full")), "rounded-full");
//! assert_eq!(ROUNDED.resolve(None), "rounded");
//! // Unknown strings pass through so callers can hand in raw utilities.
//! assert_eq!(ROUNDED.resolve(Some("rounded-[3px]")), "rounded-[3px]");
//! ```

pub mod palette;
pub mod presets;
pub mod tables;
pub mod values;

pub use presets::{ParsePresetError, ThemePreset};
pub use tables::{PairTable, VariantTable};
