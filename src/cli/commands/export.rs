use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presentation::PresentationState;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::filter::OccurrenceFilter;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        deposit,
        emergency_type,
        force,
    } = cmd
    {
        let filter = OccurrenceFilter::from_ids(*deposit, *emergency_type);
        let state = PresentationState::load_with_filter(&cfg.database, filter)?;
        ExportLogic::export(&state, *format, file, *force)?;
    }
    Ok(())
}
