//! Input validation for league scheduling.
//!
//! Checks structural integrity of the league inputs before any search
//! runs. Detects:
//! - Team sets too small to form a fixture
//! - Duplicate team IDs
//! - Date sequences shorter than the fixture list
//! - Representations of the wrong length or naming unknown teams
//!
//! All checks collect every problem found instead of stopping at the first.

use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fmt;

use crate::models::{Fixture, Team};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than two teams: no fixture can be formed.
    TooFewTeams,
    /// Two teams share the same ID.
    DuplicateId,
    /// Fewer date slots than fixtures.
    InsufficientDates,
    /// A representation does not hold one fixture per slot.
    LengthMismatch,
    /// A fixture references a team outside the league.
    UnknownTeam,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Number of fixtures in a double round-robin over `team_count` teams.
#[inline]
pub fn fixture_count(team_count: usize) -> usize {
    team_count * team_count.saturating_sub(1)
}

/// Validates the inputs of a league scheduling problem.
///
/// Checks:
/// 1. At least two teams
/// 2. No duplicate team IDs
/// 3. At least one date per fixture
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_league(teams: &[Team], dates: &[NaiveDateTime]) -> ValidationResult {
    let mut errors = Vec::new();

    if teams.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewTeams,
            format!("A league needs at least 2 teams, got {}", teams.len()),
        ));
    }

    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {team}"),
            ));
        }
    }

    let needed = fixture_count(seen.len());
    if dates.len() < needed {
        errors.push(ValidationError::new(
            ValidationErrorKind::InsufficientDates,
            format!("{needed} fixtures need {needed} dates, got {}", dates.len()),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a fixture sequence against the league it should schedule.
///
/// Checks:
/// 1. Length equals `expected_len`
/// 2. Every home and away team belongs to `teams`
pub fn validate_representation(
    fixtures: &[Fixture],
    teams: &HashSet<&Team>,
    expected_len: usize,
) -> ValidationResult {
    let mut errors = Vec::new();

    if fixtures.len() != expected_len {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Representation holds {} fixtures, expected {expected_len}",
                fixtures.len()
            ),
        ));
    }

    let mut unknown: Vec<&Team> = fixtures
        .iter()
        .flat_map(|f| [f.home(), f.away()])
        .filter(|t| !teams.contains(t))
        .collect();
    unknown.sort();
    unknown.dedup();
    for team in unknown {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownTeam,
            format!("Fixture references unknown team '{team}'"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
