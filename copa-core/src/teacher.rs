//! Form validation for the teacher area.

use crate::model::TeamDraft;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no shirt numbers given")]
    NoNumbers,
    #[error("invalid shirt number: {0}")]
    InvalidNumber(String),
    #[error("shirt number {0} repeated")]
    DuplicateNumber(u32),
    #[error("a reason is required")]
    EmptyReason,
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Highest shirt number accepted by the league.
pub const MAX_SHIRT_NUMBER: u32 = 99;

/// Parse a comma-separated list of shirt numbers, keeping the input order.
///
/// # Errors
///
/// Rejects empty input, entries outside `1..=99`, non-numeric entries and repeats.
pub fn parse_shirt_numbers(input: &str) -> Result<Vec<u32>, FormError> {
    let mut numbers = Vec::new();
    for raw in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let number: u32 = raw
            .parse()
            .ok()
            .filter(|n| (1..=MAX_SHIRT_NUMBER).contains(n))
            .ok_or_else(|| FormError::InvalidNumber(raw.to_string()))?;
        if numbers.contains(&number) {
            return Err(FormError::DuplicateNumber(number));
        }
        numbers.push(number);
    }
    if numbers.is_empty() {
        return Err(FormError::NoNumbers);
    }
    Ok(numbers)
}

/// Trimmed appeal reason.
///
/// # Errors
///
/// Returns [`FormError::EmptyReason`] for blank input.
pub fn appeal_reason(input: &str) -> Result<String, FormError> {
    let reason = input.trim();
    if reason.is_empty() {
        Err(FormError::EmptyReason)
    } else {
        Ok(reason.to_string())
    }
}

/// Build a team draft from raw form values.
///
/// # Errors
///
/// Names the first missing or unparseable field.
pub fn team_draft(name: &str, school_id: &str, competition_id: &str) -> Result<TeamDraft, FormError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FormError::MissingField("nome"));
    }
    let school_id = school_id
        .trim()
        .parse()
        .map_err(|_| FormError::MissingField("escola"))?;
    let competition_id = competition_id
        .trim()
        .parse()
        .map_err(|_| FormError::MissingField("competicao"))?;
    Ok(TeamDraft {
        name: name.to_string(),
        school_id,
        competition_id,
    })
}
