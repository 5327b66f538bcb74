use crate::core::validate::{current_year, parse_amount, parse_year};
use crate::db::log::ttlog;
use crate::db::queries::{deposit_exists, emergency_type_exists};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::PathBuf;

const LEGACY_IMPORT: &str = "20260301_0001_import_legacy_tables";
const OCCURRENCE_INDEXES: &str = "20260301_0002_occurrence_indexes";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the deposit, emergency type and occurrence tables.
fn create_domain_tables(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS deposits (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS emergency_types (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            name  TEXT NOT NULL UNIQUE
        );

        CREATE TABLE IF NOT EXISTS occurrences (
            id                 INTEGER PRIMARY KEY AUTOINCREMENT,
            deposit_id         INTEGER NOT NULL REFERENCES deposits(id),
            emergency_type_id  INTEGER NOT NULL REFERENCES emergency_types(id),
            year               INTEGER NOT NULL,
            injured_amount     REAL NOT NULL DEFAULT 0,
            comment            TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    ttlog(conn, "migration_applied", version, message)
}

/// The desktop-era schema: `mestorozdenie`, `emergency_type`,
/// `emergency_occurrence(mestorozdenie_id, ...)`.
fn is_legacy_schema(conn: &Connection) -> AppResult<bool> {
    if !table_exists(conn, "emergency_occurrence")? {
        return Ok(false);
    }
    table_has_column(conn, "emergency_occurrence", "mestorozdenie_id")
}

fn database_path(conn: &Connection) -> String {
    conn.query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default()
}

fn backup_before_migration(db_path: &str) -> AppResult<PathBuf> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_legacy_import.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = std::path::Path::new(db_path)
        .parent()
        .map(|p| p.join(&backup_name))
        .unwrap_or_else(|| PathBuf::from(&backup_name));

    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| AppError::Migration(format!("Backup failed (start_file): {e}")))?;

    let db_content = fs::read(db_path)?;
    zip.write_all(&db_content)?;

    zip.finish()
        .map_err(|e| AppError::Migration(format!("Backup failed (finish): {e}")))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(backup_path)
}

/// A legacy occurrence that could not be carried over.
struct SkippedRow {
    id: i64,
    reason: String,
}

/// Text form of a loosely typed legacy cell; `None` for NULL.
fn legacy_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Text(s) => Some(s),
        Value::Blob(b) => Some(String::from_utf8_lossy(&b).into_owned()),
    }
}

/// Year and amount of one legacy row, parsed with the same rules as the add form.
/// A NULL amount is the column default (0).
fn parse_legacy_fields(
    year: Option<String>,
    amount: Option<String>,
    current: i32,
) -> AppResult<(i32, f64)> {
    let year = year.ok_or_else(|| AppError::Validation("year is missing".to_string()))?;
    let year = parse_year(&year, current)?;
    let amount = match amount {
        Some(raw) => parse_amount(&raw)?,
        None => 0.0,
    };
    Ok((year, amount))
}

/// Copy reference rows, then every occurrence that parses and points at
/// existing reference rows. Runs in one transaction; nothing is kept on error.
fn copy_legacy_rows(conn: &Connection) -> AppResult<(usize, Vec<SkippedRow>)> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        r#"
        INSERT INTO deposits (id, name)
        SELECT id, name FROM mestorozdenie;

        INSERT INTO emergency_types (id, name)
        SELECT id, name FROM emergency_type;
        "#,
    )?;

    let legacy = {
        let mut stmt = tx.prepare(
            "SELECT id, mestorozdenie_id, emergency_type_id, year, injured_amount, comment
             FROM emergency_occurrence
             ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, Option<i64>>(1)?,
                row.get::<_, Option<i64>>(2)?,
                row.get::<_, Value>(3)?,
                row.get::<_, Value>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        out
    };

    let current = current_year();
    let mut imported = 0;
    let mut skipped = Vec::new();

    for (id, deposit_id, type_id, year, amount, comment) in legacy {
        let deposit_id = match deposit_id {
            Some(d) if deposit_exists(&tx, d)? => d,
            other => {
                skipped.push(SkippedRow {
                    id,
                    reason: format!("unknown deposit {other:?}"),
                });
                continue;
            }
        };
        let type_id = match type_id {
            Some(t) if emergency_type_exists(&tx, t)? => t,
            other => {
                skipped.push(SkippedRow {
                    id,
                    reason: format!("unknown emergency type {other:?}"),
                });
                continue;
            }
        };

        let (year, amount) =
            match parse_legacy_fields(legacy_text(year), legacy_text(amount), current) {
                Ok(fields) => fields,
                Err(e) => {
                    skipped.push(SkippedRow {
                        id,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

        tx.execute(
            "INSERT INTO occurrences (id, deposit_id, emergency_type_id, year, injured_amount, comment)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                id,
                deposit_id,
                type_id,
                year,
                amount,
                comment.unwrap_or_default().trim()
            ],
        )?;
        imported += 1;
    }

    let violations: i64 =
        tx.query_row("SELECT COUNT(*) FROM pragma_foreign_key_check", [], |row| {
            row.get(0)
        })?;
    if violations > 0 {
        return Err(AppError::Migration(format!(
            "{violations} dangling reference(s) after legacy import"
        )));
    }

    for row in &skipped {
        ttlog(
            &tx,
            "migration_skipped",
            &format!("legacy occurrence #{}", row.id),
            &row.reason,
        )?;
    }

    tx.execute_batch(
        r#"
        DROP TABLE emergency_occurrence;
        DROP TABLE mestorozdenie;
        DROP TABLE emergency_type;
        "#,
    )?;

    tx.commit()?;
    Ok((imported, skipped))
}

/// Move rows from the legacy tables into the modern ones, keeping ids,
/// then drop the legacy tables. Rows that do not parse or reference a
/// missing deposit / type are skipped and recorded in the audit log.
fn import_legacy_tables(conn: &Connection) -> AppResult<()> {
    for table in ["mestorozdenie", "emergency_type"] {
        if !table_exists(conn, table)? {
            return Err(AppError::Migration(format!(
                "legacy schema is incomplete: table '{table}' is missing"
            )));
        }
    }

    warning("Legacy schema detected: importing deposits, types and occurrences...");

    // foreign_keys can only be switched outside a transaction
    conn.execute_batch("PRAGMA foreign_keys=OFF;")?;
    let result = copy_legacy_rows(conn);
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    let (imported, skipped) =
        result.map_err(|e| AppError::Migration(format!("legacy import failed: {e}")))?;

    for row in &skipped {
        warning(format!(
            "Legacy occurrence #{} skipped: {}",
            row.id, row.reason
        ));
    }

    mark_applied(
        conn,
        LEGACY_IMPORT,
        &format!(
            "Imported legacy tables: {imported} occurrence(s), {} skipped",
            skipped.len()
        ),
    )?;
    success(format!("Migration applied: {LEGACY_IMPORT}"));
    Ok(())
}

fn ensure_occurrence_indexes(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_occurrences_deposit ON occurrences(deposit_id);
        CREATE INDEX IF NOT EXISTS idx_occurrences_type ON occurrences(emergency_type_id);
        CREATE INDEX IF NOT EXISTS idx_occurrences_year ON occurrences(year);
        "#,
    )?;

    if !migration_applied(conn, OCCURRENCE_INDEXES)? {
        mark_applied(
            conn,
            OCCURRENCE_INDEXES,
            "Added deposit/type/year indexes to occurrences",
        )?;
    }
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Idempotent; invoked by `init` and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Modern tables (no-op when present)
    create_domain_tables(conn)?;

    // 3) Legacy desktop schema → safety backup, then import
    if is_legacy_schema(conn)? {
        let db_path = database_path(conn);
        if db_path.is_empty() {
            warning("Could not determine DB path, backup skipped.");
        } else {
            backup_before_migration(&db_path)?;
        }
        import_legacy_tables(conn)?;
    }

    // 4) Indexes
    ensure_occurrence_indexes(conn)?;

    Ok(())
}
