use serde::Serialize;

/// Filter state supplied by the shell when listing occurrences.
///
/// `None` on either dimension means "no filter". At the shell boundary the
/// id `0` is the unselected state; [`OccurrenceFilter::from_ids`] maps it to `None`.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct OccurrenceFilter {
    pub deposit_id: Option<i64>,
    pub emergency_type_id: Option<i64>,
}

impl OccurrenceFilter {
    /// No constraint on either dimension.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_deposit(deposit_id: i64) -> Self {
        Self::from_ids(Some(deposit_id), None)
    }

    pub fn by_type(emergency_type_id: i64) -> Self {
        Self::from_ids(None, Some(emergency_type_id))
    }

    /// Build a filter from raw shell values, treating `0` as "any".
    pub fn from_ids(deposit_id: Option<i64>, emergency_type_id: Option<i64>) -> Self {
        Self {
            deposit_id: deposit_id.filter(|id| *id != 0),
            emergency_type_id: emergency_type_id.filter(|id| *id != 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deposit_id.is_none() && self.emergency_type_id.is_none()
    }
}
