//! Table component for tabular data
//!
//! Header, body rows and footer are caller-supplied slots rendered in order;
//! body rows get derived ids `{id}-{n}` so host code can address them. All
//! styling is table-level: a color/variant pair, border, padding, rounding
//! and text size.
//!
//! # Example
//!
//! ```
//! use velum_ui::prelude::*;
//!
//! let html = Table::new("invoices")
//!     .header(["Number", "Amount"])
//!     .row(TableRow::new().cell(text("#1001")).cell(text("$250")))
//!     .row(TableRow::new().cell(text("#1002")).cell(text("$120")))
//!     .to_html();
//!
//! assert!(html.contains("id=\"invoices-2\""));
//! ```

use velum_core::{child_id, div, el, Node, Render};
use velum_theme::{PairTable, VariantTable};

use crate::macros::style_setters;

static COLOR_VARIANT: PairTable = PairTable::new(
    "color_variant",
    ("default", "white"),
    &[
        ("default", "white", "bg-white text-[#3E3E3E] [&_th]:bg-[#E8E8E8] [&_td]:border-[#DADADA]"),
        ("default", "primary", "bg-[#4363EC] text-white [&_th]:bg-[#2441C2] [&_td]:border-[#2441C2]"),
        ("default", "secondary", "bg-[#6B6E7C] text-white [&_th]:bg-[#60636F] [&_td]:border-[#60636F]"),
        ("default", "dark", "bg-[#1E1E1E] text-white [&_th]:bg-[#111111] [&_td]:border-[#050404]"),
        ("default", "success", "bg-[#ECFEF3] text-[#047857] [&_th]:bg-[#D4FDE4] [&_td]:border-[#6EE7B7]"),
        ("default", "warning", "bg-[#FFF8E6] text-[#FF8B08] [&_th]:bg-[#FFF1C2] [&_td]:border-[#FF8B08]"),
        ("default", "danger", "bg-[#FFE6E6] text-[#E73B3B] [&_th]:bg-[#FFCFCF] [&_td]:border-[#E73B3B]"),
        ("default", "info", "bg-[#E5F0FF] text-[#004FC4] [&_th]:bg-[#CCE1FF] [&_td]:border-[#004FC4]"),
        ("default", "light", "bg-[#E3E7F1] text-[#707483] [&_th]:bg-[#D4DAE8] [&_td]:border-[#707483]"),
        ("default", "misc", "bg-[#FFE6FF] text-[#52059C] [&_th]:bg-[#FFCCFF] [&_td]:border-[#52059C]"),
        ("default", "dawn", "bg-[#FFECDA] text-[#4D4137] [&_th]:bg-[#FFDFC1] [&_td]:border-[#4D4137]"),
        ("striped", "white", "bg-white text-[#3E3E3E] [&_tr:nth-child(odd)]:bg-[#F5F5F5] [&_td]:border-[#DADADA]"),
        ("striped", "primary", "bg-white text-[#3E3E3E] [&_tr:nth-child(odd)]:bg-[#E5F0FF] [&_td]:border-[#4363EC]"),
        ("striped", "secondary", "bg-white text-[#3E3E3E] [&_tr:nth-child(odd)]:bg-[#EDEEF1] [&_td]:border-[#6B6E7C]"),
        ("striped", "dark", "bg-white text-[#1E1E1E] [&_tr:nth-child(odd)]:bg-[#E8E8E8] [&_td]:border-[#1E1E1E]"),
        ("striped", "success", "bg-white text-[#047857] [&_tr:nth-child(odd)]:bg-[#ECFEF3] [&_td]:border-[#6EE7B7]"),
        ("striped", "warning", "bg-white text-[#FF8B08] [&_tr:nth-child(odd)]:bg-[#FFF8E6] [&_td]:border-[#FF8B08]"),
        ("striped", "danger", "bg-white text-[#E73B3B] [&_tr:nth-child(odd)]:bg-[#FFE6E6] [&_td]:border-[#E73B3B]"),
        ("striped", "info", "bg-white text-[#004FC4] [&_tr:nth-child(odd)]:bg-[#E5F0FF] [&_td]:border-[#004FC4]"),
        ("striped", "light", "bg-white text-[#707483] [&_tr:nth-child(odd)]:bg-[#E3E7F1] [&_td]:border-[#707483]"),
        ("striped", "misc", "bg-white text-[#52059C] [&_tr:nth-child(odd)]:bg-[#FFE6FF] [&_td]:border-[#52059C]"),
        ("striped", "dawn", "bg-white text-[#4D4137] [&_tr:nth-child(odd)]:bg-[#FFECDA] [&_td]:border-[#4D4137]"),
        ("hoverable", "white", "bg-white text-[#3E3E3E] [&_tbody_tr:hover]:bg-[#E8E8E8] [&_td]:border-[#DADADA]"),
        ("hoverable", "primary", "bg-white text-[#3E3E3E] [&_tbody_tr:hover]:bg-[#E5F0FF] [&_td]:border-[#4363EC]"),
        ("hoverable", "secondary", "bg-white text-[#3E3E3E] [&_tbody_tr:hover]:bg-[#EDEEF1] [&_td]:border-[#6B6E7C]"),
        ("hoverable", "dark", "bg-white text-[#1E1E1E] [&_tbody_tr:hover]:bg-[#E8E8E8] [&_td]:border-[#1E1E1E]"),
        ("hoverable", "success", "bg-white text-[#047857] [&_tbody_tr:hover]:bg-[#ECFEF3] [&_td]:border-[#6EE7B7]"),
        ("hoverable", "warning", "bg-white text-[#FF8B08] [&_tbody_tr:hover]:bg-[#FFF8E6] [&_td]:border-[#FF8B08]"),
        ("hoverable", "danger", "bg-white text-[#E73B3B] [&_tbody_tr:hover]:bg-[#FFE6E6] [&_td]:border-[#E73B3B]"),
        ("hoverable", "info", "bg-white text-[#004FC4] [&_tbody_tr:hover]:bg-[#E5F0FF] [&_td]:border-[#004FC4]"),
        ("hoverable", "light", "bg-white text-[#707483] [&_tbody_tr:hover]:bg-[#E3E7F1] [&_td]:border-[#707483]"),
        ("hoverable", "misc", "bg-white text-[#52059C] [&_tbody_tr:hover]:bg-[#FFE6FF] [&_td]:border-[#52059C]"),
        ("hoverable", "dawn", "bg-white text-[#4D4137] [&_tbody_tr:hover]:bg-[#FFECDA] [&_td]:border-[#4D4137]"),
    ],
);

static BORDER_CLASS: VariantTable = VariantTable::new(
    "border_class",
    "extra_small",
    &[
        ("none", "[&_td]:border-0"),
        ("extra_small", "[&_td]:border-b"),
        ("small", "[&_td]:border-b-2"),
        ("medium", "[&_td]:border-b-[3px]"),
        ("large", "[&_td]:border-b-4"),
        ("full", "[&_td]:border [&_th]:border"),
    ],
);

static PADDING_SIZE: VariantTable = VariantTable::new(
    "padding_size",
    "small",
    &[
        ("extra_small", "[&_td]:px-2 [&_td]:py-1 [&_th]:px-2 [&_th]:py-1.5"),
        ("small", "[&_td]:px-3 [&_td]:py-2 [&_th]:px-3 [&_th]:py-2.5"),
        ("medium", "[&_td]:px-4 [&_td]:py-2.5 [&_th]:px-4 [&_th]:py-3"),
        ("large", "[&_td]:px-5 [&_td]:py-3 [&_th]:px-5 [&_th]:py-3.5"),
        ("extra_large", "[&_td]:px-6 [&_td]:py-4 [&_th]:px-6 [&_th]:py-4"),
    ],
);

static ROUNDED_SIZE: VariantTable = VariantTable::new(
    "rounded_size",
    "none",
    &[
        ("none", ""),
        ("extra_small", "rounded-sm"),
        ("small", "rounded"),
        ("medium", "rounded-md"),
        ("large", "rounded-lg"),
        ("extra_large", "rounded-xl"),
    ],
);

static SIZE_CLASS: VariantTable = VariantTable::new(
    "size_class",
    "small",
    &[
        ("extra_small", "text-xs"),
        ("small", "text-sm"),
        ("medium", "text-base"),
        ("large", "text-lg"),
        ("extra_large", "text-xl"),
    ],
);

/// One body or footer row.
#[derive(Clone, Debug, Default)]
pub struct TableRow {
    cells: Vec<Node>,
    class: Option<String>,
}

impl TableRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, content: impl Into<Node>) -> Self {
        self.cells.push(content.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Table builder.
#[derive(Clone, Debug, Default)]
pub struct Table {
    id: String,
    variant: Option<String>,
    color: Option<String>,
    border: Option<String>,
    padding: Option<String>,
    rounded: Option<String>,
    size: Option<String>,
    class: Option<String>,
    fixed: bool,
    header: Vec<String>,
    rows: Vec<TableRow>,
    footer: Vec<TableRow>,
}

impl Table {
    /// `id` must be unique per page; body rows render at `{id}-{n}`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    style_setters! {
        /// Style variant: `default`, `striped` or `hoverable`.
        variant,
        color,
        /// Cell border width.
        border,
        /// Cell padding.
        padding,
        rounded,
        size,
        /// Free-form classes, appended after every resolved fragment.
        class,
    }

    /// Fixed column layout.
    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn header<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = cells.into_iter().map(Into::into).collect();
        self
    }

    pub fn row(mut self, row: TableRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn footer_row(mut self, row: TableRow) -> Self {
        self.footer.push(row);
        self
    }

    fn render_row(&self, row: &TableRow, id: Option<String>) -> Node {
        let mut tr = el("tr").class(row.class.as_deref().unwrap_or(""));
        if let Some(id) = id {
            tr = tr.id(id);
        }
        tr.children(row.cells.iter().map(|cell| el("td").child(cell.clone())))
            .into_node()
    }
}

impl Render for Table {
    fn render(&self) -> Node {
        let mut table = el("table")
            .id(&self.id)
            .class("w-full border-collapse text-start")
            .class(if self.fixed { "table-fixed" } else { "" })
            .class(COLOR_VARIANT.resolve(self.variant.as_deref(), self.color.as_deref()))
            .class(BORDER_CLASS.resolve(self.border.as_deref()))
            .class(PADDING_SIZE.resolve(self.padding.as_deref()))
            .class(SIZE_CLASS.resolve(self.size.as_deref()))
            .class(self.class.as_deref().unwrap_or(""));
        if !self.header.is_empty() {
            table = table.child(
                el("thead").child(
                    el("tr").children(
                        self.header
                            .iter()
                            .map(|cell| el("th").attr("scope", "col").class("text-start font-semibold").text(cell)),
                    ),
                ),
            );
        }
        table = table.child(
            el("tbody").children(
                self.rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| self.render_row(row, Some(child_id(&self.id, i + 1)))),
            ),
        );
        if !self.footer.is_empty() {
            table = table.child(
                el("tfoot")
                    .class("font-semibold")
                    .children(self.footer.iter().map(|row| self.render_row(row, None))),
            );
        }
        // Rounded corners need a clipping wrapper; the table itself can't clip.
        div()
            .class("w-full overflow-x-auto")
            .class(ROUNDED_SIZE.resolve(self.rounded.as_deref()))
            .child(table)
            .into_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::text;

    fn sample() -> Table {
        Table::new("inv")
            .header(["A", "B"])
            .row(TableRow::new().cell(text("1")).cell(text("2")))
            .row(TableRow::new().cell(text("3")).cell(text("4")))
    }

    #[test]
    fn test_body_rows_get_derived_ids() {
        let html = sample().to_html();
        assert!(html.contains("<tr id=\"inv-1\">"));
        assert!(html.contains("<tr id=\"inv-2\">"));
    }

    #[test]
    fn test_footer_rows_have_no_derived_ids() {
        let html = sample().footer_row(TableRow::new().cell(text("sum"))).to_html();
        assert!(!html.contains("id=\"inv-3\""));
        assert!(html.contains("<tfoot"));
    }

    #[test]
    fn test_striped_variant_resolves() {
        let html = sample().variant("striped").color("primary").to_html();
        assert!(html.contains("[&_tr:nth-child(odd)]:bg-[#E5F0FF]"));
    }

    #[test]
    fn test_fixed_layout_flag() {
        assert!(sample().fixed(true).to_html().contains("table-fixed"));
        assert!(!sample().to_html().contains("table-fixed"));
    }

    #[test]
    fn test_same_input_same_output() {
        assert_eq!(sample().to_html(), sample().to_html());
    }
}
