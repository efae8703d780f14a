//! Error types.
//!
//! Every failure the engine reports is a broken precondition at one of its
//! boundaries: problem construction, individual construction, crossover
//! dispatch, selection, or configuration. Nothing is recovered mid-run.

use thiserror::Error;

use crate::models::Team;
use crate::validation::ValidationError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LeagueError>;

/// Errors reported by the league scheduling engine.
#[derive(Debug, Error)]
pub enum LeagueError {
    /// Input failed one or more validation checks.
    #[error("invalid input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// A fixture where a team would play itself.
    #[error("team '{0}' cannot play itself")]
    SelfFixture(Team),

    /// Crossover parents must have equal length.
    #[error("crossover parents differ in length ({left} vs {right})")]
    ParentLengthMismatch { left: usize, right: usize },

    /// Selection from a population with no individuals.
    #[error("cannot select from an empty population")]
    EmptyPopulation,

    /// Tournament larger than the population (or empty).
    #[error("tournament of size {size} cannot be drawn from {population} individuals")]
    TournamentSize { size: usize, population: usize },

    /// Fitness values that cannot serve as sampling weights.
    #[error("fitness-proportionate selection is undefined: {0}")]
    DegenerateFitness(String),

    /// Evolution parameters out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for LeagueError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}
