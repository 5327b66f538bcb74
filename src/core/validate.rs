//! Input rules applied before any write reaches the store.
//!
//! - year: integer in `MIN_YEAR..=current year`
//! - injured amount: decimal (`.` or `,` separator, inner spaces ignored),
//!   finite, not negative
//! - deposit / emergency type ids: positive (`0` means "unselected")
//! - reference names: non-empty after trimming

use crate::errors::{AppError, AppResult};
use crate::models::occurrence::{NewOccurrence, OccurrenceDraft};
use chrono::Datelike;

pub const MIN_YEAR: i32 = 1900;

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn parse_year(raw: &str, current_year: i32) -> AppResult<i32> {
    let trimmed = raw.trim();
    let year: i32 = trimmed
        .parse()
        .map_err(|_| AppError::Validation(format!("year '{trimmed}' is not an integer")))?;

    if !(MIN_YEAR..=current_year).contains(&year) {
        return Err(AppError::Validation(format!(
            "year {year} is outside {MIN_YEAR}..={current_year}"
        )));
    }
    Ok(year)
}

pub fn parse_amount(raw: &str) -> AppResult<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(AppError::Validation("damage amount is empty".to_string()));
    }

    let normalized = if compact.contains('.') {
        compact.clone()
    } else {
        compact.replacen(',', ".", 1)
    };

    let amount: f64 = normalized
        .parse()
        .map_err(|_| AppError::Validation(format!("damage amount '{compact}' is not a number")))?;

    if !amount.is_finite() {
        return Err(AppError::Validation(format!(
            "damage amount '{compact}' is not a finite number"
        )));
    }
    if amount < 0.0 {
        return Err(AppError::Validation(format!(
            "damage amount {amount} is negative"
        )));
    }
    // "-0" parses to negative zero
    Ok(if amount == 0.0 { 0.0 } else { amount })
}

fn positive_id(id: i64, label: &str) -> AppResult<i64> {
    if id <= 0 {
        return Err(AppError::Validation(format!("{label} must be selected")));
    }
    Ok(id)
}

/// Check a draft against the rules, using `current_year` as the upper bound.
pub fn validate_draft_at(draft: &OccurrenceDraft, current_year: i32) -> AppResult<NewOccurrence> {
    Ok(NewOccurrence {
        deposit_id: positive_id(draft.deposit_id, "deposit")?,
        emergency_type_id: positive_id(draft.emergency_type_id, "emergency type")?,
        year: parse_year(&draft.year, current_year)?,
        injured_amount: parse_amount(&draft.injured_amount)?,
        comment: draft.comment.trim().to_string(),
    })
}

pub fn validate_draft(draft: &OccurrenceDraft) -> AppResult<NewOccurrence> {
    validate_draft_at(draft, current_year())
}

pub fn reference_name(raw: &str, label: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation(format!("{label} name is empty")));
    }
    Ok(name.to_string())
}
