//! GA-based league schedule optimization.
//!
//! A candidate schedule is a permutation of the season's fixtures laid over
//! a fixed calendar of game slots: the fixture at position i is played on
//! slot i. The GA searches over fixture orders.
//!
//! # Encoding
//!
//! - **Representation**: sequence of `T * (T - 1)` fixtures (double
//!   round-robin). Reordering the sequence reassigns dates.
//! - **Fitness**: hard-constraint penalties plus soft rewards for classic
//!   fixtures, see [`fitness`].
//!
//! # Submodules
//!
//! - [`fitness`]: Schedule scoring and its itemised breakdown
//! - [`crossover`], [`mutation`], [`selection`]: Operator families
//! - [`operators`]: Runtime-selectable operator strategies
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Kendall et al. (2010), "Scheduling in sports: An annotated bibliography"

mod config;
pub mod crossover;
pub mod fitness;
mod individual;
pub mod mutation;
pub mod operators;
mod population;
mod problem;
mod runner;
mod sampling;
pub mod selection;

pub use config::EvolutionConfig;
pub use fitness::{FitnessBreakdown, FitnessRules};
pub use individual::{fittest, Individual};
pub use operators::{CrossoverType, GeneticOperators, MutationType, SelectionType};
pub use population::{EvolutionResult, Population, PopulationState};
pub use problem::{FixtureOrder, LeagueProblem};
pub use runner::EvolutionRunner;
