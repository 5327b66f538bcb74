use serde::Serialize;

/// One recorded incident at a deposit.
///
/// `injured_amount` is a monetary damage figure, not a casualty count.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Occurrence {
    pub id: i64,
    pub deposit_id: i64,
    pub emergency_type_id: i64,
    pub year: i32,
    pub injured_amount: f64,
    pub comment: String,
}

/// A validated occurrence ready to be written; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOccurrence {
    pub deposit_id: i64,
    pub emergency_type_id: i64,
    pub year: i32,
    pub injured_amount: f64,
    pub comment: String,
}

impl NewOccurrence {
    /// True when `occ` carries exactly these fields (ignoring its id).
    pub fn matches(&self, occ: &Occurrence) -> bool {
        self.deposit_id == occ.deposit_id
            && self.emergency_type_id == occ.emergency_type_id
            && self.year == occ.year
            && self.injured_amount == occ.injured_amount
            && self.comment == occ.comment
    }
}

/// Raw values collected by the add form, before validation.
///
/// Year and amount arrive as text, exactly as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct OccurrenceDraft {
    pub deposit_id: i64,
    pub emergency_type_id: i64,
    pub year: String,
    pub injured_amount: String,
    pub comment: String,
}
