use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::columns::OCCURRENCE_COLUMNS;
use crate::core::presentation::PresentationState;
use crate::errors::AppResult;
use crate::models::filter::OccurrenceFilter;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        deposit,
        emergency_type,
    } = cmd
    {
        let filter = OccurrenceFilter::from_ids(*deposit, *emergency_type);
        let state = PresentationState::load_with_filter(&cfg.database, filter)?;

        println!("{}", describe_filter(&state));

        if state.occurrences().is_empty() {
            info(empty_message(&state));
            return Ok(());
        }

        let mut table = Table::from_specs(OCCURRENCE_COLUMNS);
        // id first so `del <ID>` can be used on what is shown
        table.columns.insert(
            0,
            Column {
                header: "ID".to_string(),
                width: 4,
            },
        );
        for (occ, row) in state.occurrences().iter().zip(state.table_rows()) {
            let mut cells = Vec::with_capacity(row.len() + 1);
            cells.push(occ.id.to_string());
            cells.extend(row);
            table.add_row(cells);
        }

        print!("{}", table.render(&cfg.separator_char));
        println!("{} occurrence(s)", state.occurrences().len());
    }
    Ok(())
}

/// "Deposit: <name|all> | Type: <name|all>"
pub(crate) fn describe_filter(state: &PresentationState) -> String {
    let filter = state.filter();
    let lookups = state.lookups();

    let deposit = filter
        .deposit_id
        .map(|id| lookups.deposit_name(id))
        .unwrap_or_else(|| "all deposits".to_string());
    let kind = filter
        .emergency_type_id
        .map(|id| lookups.type_name(id))
        .unwrap_or_else(|| "all types".to_string());

    format!("Deposit: {deposit} | Type: {kind}")
}

/// Message for an empty list: nothing recorded at all, or nothing matching.
pub(crate) fn empty_message(state: &PresentationState) -> &'static str {
    if state.filter().is_empty() {
        "No occurrences recorded yet."
    } else {
        "No occurrences match the selected filter."
    }
}
