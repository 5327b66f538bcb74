use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    for (label, table) in [
        ("Deposits", "deposits"),
        ("Emergency types", "emergency_types"),
        ("Occurrences", "occurrences"),
    ] {
        let count: i64 =
            pool.conn
                .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        println!("{}• {}:{} {}{}{}", CYAN, label, RESET, GREEN, count, RESET);
    }

    //
    // 3) YEAR RANGE
    //
    let (first, last): (Option<i32>, Option<i32>) =
        pool.conn
            .query_row("SELECT MIN(year), MAX(year) FROM occurrences", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?;

    let fmt_year = |y: Option<i32>| {
        y.map(|v| v.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Year range:{}", CYAN, RESET);
    println!("    from: {}", fmt_year(first));
    println!("    to:   {}", fmt_year(last));

    //
    // 4) TOTAL DAMAGE
    //
    let total: Option<f64> = pool.conn.query_row(
        "SELECT SUM(injured_amount) FROM occurrences",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Total damage:{} {:.2}",
        CYAN,
        RESET,
        total.unwrap_or(0.0)
    );

    println!();
    Ok(())
}
