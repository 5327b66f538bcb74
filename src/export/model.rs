// src/export/model.rs

use crate::models::lookups::Lookups;
use crate::models::occurrence::Occurrence;
use serde::Serialize;

/// Flat occurrence row with resolved reference names, for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct OccurrenceExport {
    pub id: i64,
    pub deposit_id: i64,
    pub deposit: String,
    pub emergency_type_id: i64,
    pub emergency_type: String,
    pub year: i32,
    pub injured_amount: f64,
    pub comment: String,
}

impl OccurrenceExport {
    pub fn from_occurrence(occ: &Occurrence, lookups: &Lookups) -> Self {
        Self {
            id: occ.id,
            deposit_id: occ.deposit_id,
            deposit: lookups.deposit_name(occ.deposit_id),
            emergency_type_id: occ.emergency_type_id,
            emergency_type: lookups.type_name(occ.emergency_type_id),
            year: occ.year,
            injured_amount: occ.injured_amount,
            comment: occ.comment.clone(),
        }
    }
}
