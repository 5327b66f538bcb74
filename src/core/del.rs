use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::delete_occurrence;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one occurrence by id.
    ///
    /// Idempotent: an unknown id leaves the store untouched and returns `false`.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<bool> {
        let removed = delete_occurrence(&pool.conn, id)? > 0;

        if removed
            && let Err(e) = ttlog(
                &pool.conn,
                "del",
                &format!("occurrence #{id}"),
                "Occurrence deleted",
            )
        {
            warning(format!("Failed to write internal log: {e}"));
        }

        Ok(removed)
    }
}
