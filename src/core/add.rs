use crate::core::validate::validate_draft;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{deposit_exists, emergency_type_exists, insert_occurrence};
use crate::errors::{AppError, AppResult};
use crate::models::occurrence::{NewOccurrence, OccurrenceDraft};
use crate::ui::messages::warning;

pub struct AddLogic;

impl AddLogic {
    /// Validate a draft from the add form and insert it.
    /// Returns the id assigned by the store.
    pub fn apply(pool: &mut DbPool, draft: &OccurrenceDraft) -> AppResult<i64> {
        let occ = validate_draft(draft)?;
        Self::insert_validated(pool, &occ)
    }

    /// Insert an already validated occurrence after checking that the
    /// referenced deposit and emergency type exist.
    pub fn insert_validated(pool: &mut DbPool, occ: &NewOccurrence) -> AppResult<i64> {
        if !deposit_exists(&pool.conn, occ.deposit_id)? {
            return Err(AppError::ConstraintViolation(format!(
                "deposit {} does not exist",
                occ.deposit_id
            )));
        }
        if !emergency_type_exists(&pool.conn, occ.emergency_type_id)? {
            return Err(AppError::ConstraintViolation(format!(
                "emergency type {} does not exist",
                occ.emergency_type_id
            )));
        }

        let id = insert_occurrence(&pool.conn, occ)?;

        if let Err(e) = ttlog(
            &pool.conn,
            "add",
            &format!("occurrence #{id}"),
            &format!(
                "deposit={} type={} year={} amount={:.2}",
                occ.deposit_id, occ.emergency_type_id, occ.year, occ.injured_amount
            ),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(id)
    }
}
