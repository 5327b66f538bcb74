//! State held by the shell between user actions.
//!
//! Every action opens its own short-lived session and rebuilds the cached
//! lookups, list and chart series wholesale from the store.

use crate::core::add::AddLogic;
use crate::core::charts::ChartData;
use crate::core::columns::render_row;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::{list_deposits, list_emergency_types, list_occurrences};
use crate::errors::{AppError, AppResult};
use crate::models::filter::OccurrenceFilter;
use crate::models::lookups::Lookups;
use crate::models::occurrence::{Occurrence, OccurrenceDraft};

pub struct PresentationState {
    db_path: String,
    lookups: Lookups,
    filter: OccurrenceFilter,
    occurrences: Vec<Occurrence>,
    charts: ChartData,
}

impl PresentationState {
    /// Initial load: reference mappings, then the unfiltered list.
    pub fn load(db_path: &str) -> AppResult<Self> {
        Self::load_with_filter(db_path, OccurrenceFilter::all())
    }

    pub fn load_with_filter(db_path: &str, filter: OccurrenceFilter) -> AppResult<Self> {
        let lookups = {
            let pool = DbPool::open_existing(db_path)?;
            let types = list_emergency_types(&pool.conn)?;
            let deposits = list_deposits(&pool.conn)?;
            Lookups::new(deposits, types)
        };

        let mut state = Self {
            db_path: db_path.to_string(),
            lookups,
            filter,
            occurrences: Vec::new(),
            charts: ChartData::default(),
        };
        state.reload()?;
        Ok(state)
    }

    /// Re-query the occurrence list for the current filter and recompute charts.
    pub fn reload(&mut self) -> AppResult<()> {
        let pool = DbPool::open_existing(&self.db_path)?;
        self.occurrences = list_occurrences(&pool.conn, &self.filter)?;
        self.charts = ChartData::build(&self.occurrences, &self.lookups);
        Ok(())
    }

    /// Re-read the reference tables as well as the occurrence list.
    pub fn reload_all(&mut self) -> AppResult<()> {
        {
            let pool = DbPool::open_existing(&self.db_path)?;
            let types = list_emergency_types(&pool.conn)?;
            let deposits = list_deposits(&pool.conn)?;
            self.lookups = Lookups::new(deposits, types);
        }
        self.reload()
    }

    pub fn set_filter(&mut self, filter: OccurrenceFilter) -> AppResult<()> {
        self.filter = filter;
        self.reload()
    }

    /// Add flow: validate, insert, reload. Returns the new id.
    pub fn add(&mut self, draft: &OccurrenceDraft) -> AppResult<i64> {
        let id = {
            let mut pool = DbPool::open_existing(&self.db_path)?;
            AddLogic::apply(&mut pool, draft)?
        };
        self.reload()?;
        Ok(id)
    }

    /// Delete by id, then reload. `false` when nothing matched.
    pub fn remove(&mut self, id: i64) -> AppResult<bool> {
        let removed = {
            let mut pool = DbPool::open_existing(&self.db_path)?;
            DeleteLogic::apply(&mut pool, id)?
        };
        self.reload()?;
        Ok(removed)
    }

    /// Delete the record shown at `row` in the current list.
    pub fn remove_selected(&mut self, row: usize) -> AppResult<bool> {
        let id = self
            .selected(row)
            .map(|o| o.id)
            .ok_or_else(|| AppError::NotFound(format!("no occurrence at row {row}")))?;
        self.remove(id)
    }

    pub fn selected(&self, row: usize) -> Option<&Occurrence> {
        self.occurrences.get(row)
    }

    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    pub fn filter(&self) -> OccurrenceFilter {
        self.filter
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn charts(&self) -> &ChartData {
        &self.charts
    }

    /// Current list rendered through the column descriptors.
    pub fn table_rows(&self) -> Vec<Vec<String>> {
        self.occurrences
            .iter()
            .map(|o| render_row(o, &self.lookups))
            .collect()
    }
}
