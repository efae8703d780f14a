//! Sports league scheduling by genetic search.
//!
//! Searches for a double round-robin season (who plays whom, at whose
//! ground, on which date) that satisfies scheduling constraints, using a
//! genetic algorithm over permutations of fixtures.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Team`, `Fixture`, `ScheduledFixture`, calendar helpers
//! - **`validation`**: Input integrity checks (team counts, duplicate IDs, date coverage)
//! - **`ga`**: Fitness, operators, population and evolution runner
//! - **`error`**: `LeagueError` and the crate `Result` alias
//!
//! # Quick start
//!
//! ```
//! use chrono::{Duration, NaiveDate};
//! use u_league::ga::{EvolutionConfig, EvolutionRunner, LeagueProblem};
//! use u_league::models::teams;
//!
//! let kickoff = NaiveDate::from_ymd_opt(2024, 8, 10).unwrap().and_hms_opt(20, 0, 0).unwrap();
//! let dates = (0..12).map(|i| kickoff + Duration::days(3 * i)).collect();
//! let problem = LeagueProblem::new(teams(["Sporting", "Benfica", "Porto", "Braga"]), dates)?;
//!
//! let config = EvolutionConfig::default().with_generations(20).with_seed(42);
//! let result = EvolutionRunner::run(&problem, &config)?;
//! for slot in result.best.schedule() {
//!     println!("{} {}", slot.date, slot.fixture);
//! }
//! # Ok::<(), u_league::LeagueError>(())
//! ```
//!
//! # Architecture
//!
//! The engine consumes a fixed team list and date sequence and emits the
//! best individual, a per-generation fitness trace and the final
//! population. Experiment drivers, report generation and persistence live
//! outside this crate.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

pub mod error;
pub mod ga;
pub mod models;
pub mod validation;

pub use error::{LeagueError, Result};
