use crate::errors::{AppError, AppResult, is_constraint_error};
use crate::models::deposit::Deposit;
use crate::models::emergency_type::EmergencyType;
use crate::models::filter::OccurrenceFilter;
use crate::models::occurrence::{NewOccurrence, Occurrence};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn list_deposits(conn: &Connection) -> AppResult<Vec<Deposit>> {
    let mut stmt = conn.prepare("SELECT id, name FROM deposits ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Deposit {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn list_emergency_types(conn: &Connection) -> AppResult<Vec<EmergencyType>> {
    let mut stmt = conn.prepare("SELECT id, name FROM emergency_types ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(EmergencyType {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Occurrences matching both active filter dimensions,
/// latest year first, newest record first within a year.
pub fn list_occurrences(conn: &Connection, filter: &OccurrenceFilter) -> AppResult<Vec<Occurrence>> {
    let mut stmt = conn.prepare(
        "SELECT id, deposit_id, emergency_type_id, year, injured_amount, comment
         FROM occurrences
         WHERE (?1 IS NULL OR deposit_id = ?1)
           AND (?2 IS NULL OR emergency_type_id = ?2)
         ORDER BY year DESC, id DESC",
    )?;

    let rows = stmt.query_map(
        params![filter.deposit_id, filter.emergency_type_id],
        map_occurrence,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_occurrence(row: &Row) -> Result<Occurrence> {
    Ok(Occurrence {
        id: row.get("id")?,
        deposit_id: row.get("deposit_id")?,
        emergency_type_id: row.get("emergency_type_id")?,
        year: row.get("year")?,
        injured_amount: row.get("injured_amount")?,
        comment: row.get("comment")?,
    })
}

pub fn deposit_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT id FROM deposits WHERE id = ?1", [id], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}

pub fn emergency_type_exists(conn: &Connection, id: i64) -> AppResult<bool> {
    let found: Option<i64> = conn
        .query_row("SELECT id FROM emergency_types WHERE id = ?1", [id], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(found.is_some())
}

/// Insert a validated occurrence and return the id assigned by SQLite.
pub fn insert_occurrence(conn: &Connection, occ: &NewOccurrence) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO occurrences (deposit_id, emergency_type_id, year, injured_amount, comment)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            occ.deposit_id,
            occ.emergency_type_id,
            occ.year,
            occ.injured_amount,
            occ.comment,
        ],
    )
    .map_err(|e| {
        if is_constraint_error(&e) {
            AppError::ConstraintViolation(format!(
                "occurrence references deposit {} / emergency type {}: {e}",
                occ.deposit_id, occ.emergency_type_id
            ))
        } else {
            AppError::Db(e)
        }
    })?;

    Ok(conn.last_insert_rowid())
}

/// Delete by id. Returns the number of removed rows (0 when the id is unknown).
pub fn delete_occurrence(conn: &Connection, id: i64) -> AppResult<usize> {
    let removed = conn.execute("DELETE FROM occurrences WHERE id = ?1", [id])?;
    Ok(removed)
}

pub fn insert_deposit(conn: &Connection, name: &str) -> AppResult<i64> {
    insert_reference(conn, "deposits", "deposit", name)
}

pub fn insert_emergency_type(conn: &Connection, name: &str) -> AppResult<i64> {
    insert_reference(conn, "emergency_types", "emergency type", name)
}

fn insert_reference(conn: &Connection, table: &str, label: &str, name: &str) -> AppResult<i64> {
    conn.execute(&format!("INSERT INTO {table} (name) VALUES (?1)"), [name])
        .map_err(|e| {
            if is_constraint_error(&e) {
                AppError::ConstraintViolation(format!("{label} '{name}' already exists"))
            } else {
                AppError::Db(e)
            }
        })?;
    Ok(conn.last_insert_rowid())
}

pub fn count_occurrences(conn: &Connection) -> AppResult<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM occurrences", [], |row| row.get(0))?;
    Ok(count)
}
