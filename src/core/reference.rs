use crate::core::validate::reference_name;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_deposit, insert_emergency_type};
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Seeding of the read-only reference tables.
pub struct ReferenceLogic;

impl ReferenceLogic {
    pub fn add_deposit(pool: &mut DbPool, raw_name: &str) -> AppResult<i64> {
        let name = reference_name(raw_name, "deposit")?;
        let id = insert_deposit(&pool.conn, &name)?;
        audit(pool, "add_deposit", id, &name);
        Ok(id)
    }

    pub fn add_emergency_type(pool: &mut DbPool, raw_name: &str) -> AppResult<i64> {
        let name = reference_name(raw_name, "emergency type")?;
        let id = insert_emergency_type(&pool.conn, &name)?;
        audit(pool, "add_type", id, &name);
        Ok(id)
    }
}

fn audit(pool: &DbPool, operation: &str, id: i64, name: &str) {
    if let Err(e) = ttlog(&pool.conn, operation, &format!("#{id}"), name) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
