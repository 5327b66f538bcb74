use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::presentation::PresentationState;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if cfg.confirm_delete
            && !*yes
            && !ask_confirmation(&format!(
                "Delete occurrence #{id}? This action is irreversible."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut state = PresentationState::load(&cfg.database)?;

        if state.remove(*id)? {
            success(format!(
                "Occurrence #{} has been deleted ({} remaining).",
                id,
                state.occurrences().len()
            ));
        } else {
            info(format!("No occurrence with id {id}; nothing deleted."));
        }
    }

    Ok(())
}
