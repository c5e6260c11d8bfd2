//! Velum component library
//!
//! Declarative server-rendered UI components. Each component maps a small set
//! of style attributes (variant, color, size, rounded, border, padding,
//! space) to fixed CSS utility-class strings through static lookup tables,
//! renders an HTML node tree, and wires minimal show/hide/toggle behavior as
//! serializable interaction chains.
//!
//! Styling resolution never fails: unknown string values pass through as raw
//! utility classes, absent values fall back to each dimension's default. The
//! caller-supplied `class` is always appended last so it can override.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = Accordion::new("faq")
//!     .color("primary")
//!     .item(AccordionItem::new("Shipping").description("3-5 business days"))
//!     .item(AccordionItem::new("Returns").open(true))
//!     .to_html();
//!
//! assert!(html.contains("id=\"faq-1\""));
//! assert!(html.contains("id=\"faq-2\""));
//! ```

mod macros;

pub mod components;
pub mod prelude;

pub use components::*;
