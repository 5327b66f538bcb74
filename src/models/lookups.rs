use crate::models::deposit::Deposit;
use crate::models::emergency_type::EmergencyType;
use std::collections::BTreeMap;

/// id → record mappings for the reference tables.
#[derive(Debug, Clone, Default)]
pub struct Lookups {
    pub deposits: BTreeMap<i64, Deposit>,
    pub emergency_types: BTreeMap<i64, EmergencyType>,
}

impl Lookups {
    pub fn new(deposits: Vec<Deposit>, emergency_types: Vec<EmergencyType>) -> Self {
        Self {
            deposits: deposits.into_iter().map(|d| (d.id, d)).collect(),
            emergency_types: emergency_types.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Deposit name, or `#<id>` when the id is unknown.
    pub fn deposit_name(&self, id: i64) -> String {
        self.deposits
            .get(&id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    }

    /// Emergency type name, or `#<id>` when the id is unknown.
    pub fn type_name(&self, id: i64) -> String {
        self.emergency_types
            .get(&id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    }
}
