pub mod deposit;
pub mod emergency_type;
pub mod filter;
pub mod lookups;
pub mod occurrence;
