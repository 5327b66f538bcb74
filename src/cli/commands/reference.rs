use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reference::ReferenceLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{list_deposits, list_emergency_types};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

/// `deposits` and `types`: list the reference table, or seed one row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open_existing(&cfg.database)?;

    let rows: Vec<(i64, String)> = match cmd {
        Commands::Deposits { add: Some(name) } => {
            let id = ReferenceLogic::add_deposit(&mut pool, name)?;
            success(format!("Deposit #{id} added: {}", name.trim()));
            return Ok(());
        }
        Commands::Types { add: Some(name) } => {
            let id = ReferenceLogic::add_emergency_type(&mut pool, name)?;
            success(format!("Emergency type #{id} added: {}", name.trim()));
            return Ok(());
        }
        Commands::Deposits { add: None } => list_deposits(&pool.conn)?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect(),
        Commands::Types { add: None } => list_emergency_types(&pool.conn)?
            .into_iter()
            .map(|t| (t.id, t.name))
            .collect(),
        _ => return Ok(()),
    };

    if rows.is_empty() {
        info("Nothing recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column {
            header: "ID".to_string(),
            width: 4,
        },
        Column {
            header: "Name".to_string(),
            width: 20,
        },
    ]);
    for (id, name) in rows {
        table.add_row(vec![id.to_string(), name]);
    }
    print!("{}", table.render(&cfg.separator_char));

    Ok(())
}
