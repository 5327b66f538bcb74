use serde::Serialize;

/// Category tag of an occurrence (fire, flooding, collapse, ...).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmergencyType {
    pub id: i64,
    pub name: String,
}
