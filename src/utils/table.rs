//! Fixed-layout table rendering for terminal output.

use crate::core::columns::ColumnSpec;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Columns taken from a descriptor list.
    pub fn from_specs(specs: &[ColumnSpec]) -> Self {
        Self::new(
            specs
                .iter()
                .map(|s| Column {
                    header: s.header.to_string(),
                    width: s.width,
                })
                .collect(),
        )
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Effective width per column: the declared minimum, widened to fit
    /// the header and every cell.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| UnicodeWidthStr::width(cell.as_str()))
                    .chain([col.width, UnicodeWidthStr::width(col.header.as_str())])
                    .max()
                    .unwrap_or(col.width)
            })
            .collect()
    }

    pub fn render(&self, separator: &str) -> String {
        let widths = self.widths();
        let mut out = String::new();

        for (col, w) in self.columns.iter().zip(&widths) {
            push_padded(&mut out, &col.header, *w);
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 1).sum();
        let sep = if separator.is_empty() { "-" } else { separator };
        out.push_str(&sep.repeat(total.saturating_sub(1)));
        out.push('\n');

        for row in &self.rows {
            for (i, w) in widths.iter().enumerate() {
                push_padded(&mut out, row.get(i).map(String::as_str).unwrap_or(""), *w);
            }
            out.push('\n');
        }

        out
    }
}

fn push_padded(out: &mut String, s: &str, width: usize) {
    out.push_str(s);
    let pad = width.saturating_sub(UnicodeWidthStr::width(s)) + 1;
    out.push_str(&" ".repeat(pad));
}
