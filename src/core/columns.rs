//! Declarative column list for every tabular view of occurrences
//! (terminal table, XLSX export).

use crate::models::lookups::Lookups;
use crate::models::occurrence::Occurrence;

pub struct ColumnSpec {
    pub header: &'static str,
    /// Minimum display width in the terminal table.
    pub width: usize,
    pub value: fn(&Occurrence, &Lookups) -> String,
}

pub const OCCURRENCE_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec {
        header: "Deposit",
        width: 18,
        value: |o, l| l.deposit_name(o.deposit_id),
    },
    ColumnSpec {
        header: "Year",
        width: 6,
        value: |o, _| o.year.to_string(),
    },
    ColumnSpec {
        header: "Damage amount",
        width: 14,
        value: |o, _| format!("{:.2}", o.injured_amount),
    },
    ColumnSpec {
        header: "Emergency type",
        width: 16,
        value: |o, l| l.type_name(o.emergency_type_id),
    },
    ColumnSpec {
        header: "Comment",
        width: 20,
        value: |o, _| o.comment.clone(),
    },
];

pub fn headers() -> Vec<&'static str> {
    OCCURRENCE_COLUMNS.iter().map(|c| c.header).collect()
}

pub fn render_row(occ: &Occurrence, lookups: &Lookups) -> Vec<String> {
    OCCURRENCE_COLUMNS
        .iter()
        .map(|c| (c.value)(occ, lookups))
        .collect()
}
