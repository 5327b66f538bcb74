//! Chart series derived from the current occurrence list.
//!
//! One pass over the list feeds all three views:
//! - `bar`: per deposit, occurrence count per year on the shared `years` axis
//! - `pie`: per deposit, the number of years that have at least one occurrence
//! - `line`: per deposit, one `(year, injured_amount)` point per occurrence
//!
//! Series are ordered by deposit id.

use crate::models::lookups::Lookups;
use crate::models::occurrence::Occurrence;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarSeries {
    pub deposit_id: i64,
    pub name: String,
    /// Aligned with [`ChartData::years`]; zero where the deposit has no data.
    pub counts: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub deposit_id: i64,
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LinePoint {
    pub year: i32,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSeries {
    pub deposit_id: i64,
    pub name: String,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChartData {
    /// Sorted distinct years across the whole list.
    pub years: Vec<i32>,
    pub bar: Vec<BarSeries>,
    pub pie: Vec<PieSlice>,
    pub line: Vec<LineSeries>,
}

#[derive(Default)]
struct DepositBucket<'a> {
    by_year: BTreeMap<i32, u32>,
    rows: Vec<&'a Occurrence>,
}

impl ChartData {
    pub fn build(occurrences: &[Occurrence], lookups: &Lookups) -> Self {
        let mut buckets: BTreeMap<i64, DepositBucket> = BTreeMap::new();
        let mut years = BTreeSet::new();

        for occ in occurrences {
            let bucket = buckets.entry(occ.deposit_id).or_default();
            *bucket.by_year.entry(occ.year).or_insert(0) += 1;
            bucket.rows.push(occ);
            years.insert(occ.year);
        }

        let years: Vec<i32> = years.into_iter().collect();

        let mut bar = Vec::with_capacity(buckets.len());
        let mut pie = Vec::with_capacity(buckets.len());
        let mut line = Vec::with_capacity(buckets.len());

        for (deposit_id, mut bucket) in buckets {
            let name = lookups.deposit_name(deposit_id);

            bar.push(BarSeries {
                deposit_id,
                name: name.clone(),
                counts: years
                    .iter()
                    .map(|y| bucket.by_year.get(y).copied().unwrap_or(0))
                    .collect(),
            });

            // populated year buckets, not the raw occurrence count
            pie.push(PieSlice {
                deposit_id,
                name: name.clone(),
                value: bucket.by_year.len() as u32,
            });

            bucket.rows.sort_by_key(|o| (o.year, o.id));
            line.push(LineSeries {
                deposit_id,
                name,
                points: bucket
                    .rows
                    .iter()
                    .map(|o| LinePoint {
                        year: o.year,
                        amount: o.injured_amount,
                    })
                    .collect(),
            });
        }

        Self {
            years,
            bar,
            pie,
            line,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Bar value for one deposit and year; `None` when either is not on the chart.
    pub fn bar_count(&self, deposit_id: i64, year: i32) -> Option<u32> {
        let idx = self.years.binary_search(&year).ok()?;
        self.bar
            .iter()
            .find(|s| s.deposit_id == deposit_id)
            .map(|s| s.counts[idx])
    }

    pub fn pie_total(&self) -> u32 {
        self.pie.iter().map(|s| s.value).sum()
    }
}
