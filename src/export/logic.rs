// src/export/logic.rs

use crate::core::presentation::PresentationState;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::OccurrenceExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the occurrence list currently held by `state` (its active
    /// filter applies) to `file`.
    ///
    /// Returns the number of exported rows; an empty list writes nothing.
    pub fn export(
        state: &PresentationState,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let occurrences = state.occurrences();
        if occurrences.is_empty() {
            warning("No occurrences match the selected filter; nothing exported.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&flatten(state), path)?,
            ExportFormat::Json => export_json(&flatten(state), path)?,
            ExportFormat::Xlsx => export_xlsx(occurrences, state.lookups(), path)?,
        }

        Ok(occurrences.len())
    }
}

fn flatten(state: &PresentationState) -> Vec<OccurrenceExport> {
    state
        .occurrences()
        .iter()
        .map(|o| OccurrenceExport::from_occurrence(o, state.lookups()))
        .collect()
}
