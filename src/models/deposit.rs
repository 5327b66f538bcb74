use serde::Serialize;

/// A mining site. Reference data: seeded once, then only read.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Deposit {
    pub id: i64,
    pub name: String,
}
