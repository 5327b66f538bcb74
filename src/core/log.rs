use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    let re = ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour per audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "add_deposit" | "add_type" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "migration_skipped" => Colour::Yellow,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);

                let colored = if target.is_empty() {
                    color_for_operation(&operation).paint(operation.as_str()).to_string()
                } else {
                    format!(
                        "{} ({target})",
                        color_for_operation(&operation).paint(operation.as_str())
                    )
                };

                (id, date, colored, message)
            })
            .collect();

        let id_w = rows.iter().map(|r| r.0.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|r| UnicodeWidthStr::width(strip_ansi(&r.2).as_str()))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, colored, message) in rows {
            let visible_w = UnicodeWidthStr::width(strip_ansi(&colored).as_str());
            let padding = " ".repeat(op_w.saturating_sub(visible_w));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id, date, colored, padding, message
            );
        }

        Ok(())
    }
}
