use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presentation::PresentationState;
use crate::errors::AppResult;
use crate::models::occurrence::OccurrenceDraft;
use crate::ui::messages::success;

/// Record a new occurrence from the add form values.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        deposit,
        emergency_type,
        year,
        amount,
        comment,
    } = cmd
    {
        let draft = OccurrenceDraft {
            deposit_id: *deposit,
            emergency_type_id: *emergency_type,
            year: year.clone(),
            injured_amount: amount.clone(),
            comment: comment.clone(),
        };

        let mut state = PresentationState::load(&cfg.database)?;
        let id = state.add(&draft)?;

        success(format!(
            "Occurrence #{} added: {} / {} ({} occurrence(s) recorded)",
            id,
            state.lookups().deposit_name(*deposit),
            state.lookups().type_name(*emergency_type),
            state.occurrences().len()
        ));
    }

    Ok(())
}
