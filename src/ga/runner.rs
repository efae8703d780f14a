//! Evolution runner.
//!
//! Owns the random source of one run. A seeded configuration reproduces
//! the same run; without a seed the generator is seeded from OS entropy.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::config::EvolutionConfig;
use super::individual::{fittest, Individual};
use super::population::{EvolutionResult, Population};
use super::problem::LeagueProblem;
use crate::error::Result;

/// Executes evolution runs over a [`LeagueProblem`].
///
/// Runs share nothing but the read-only problem, so independent runs can
/// execute on separate threads.
///
/// # Example
/// ```
/// use chrono::{Duration, NaiveDate};
/// use u_league::ga::{EvolutionConfig, EvolutionRunner, LeagueProblem};
/// use u_league::models::teams;
///
/// let start = NaiveDate::from_ymd_opt(2024, 8, 10).unwrap().and_hms_opt(20, 0, 0).unwrap();
/// let dates = (0..12).map(|i| start + Duration::days(4 * i)).collect();
/// let problem = LeagueProblem::new(teams(["A", "B", "C", "D"]), dates).unwrap();
///
/// let config = EvolutionConfig::default()
///     .with_population_size(10)
///     .with_generations(5)
///     .with_seed(42);
/// let result = EvolutionRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.trace.len(), 5);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs with a generator built from `config.seed`.
    pub fn run(problem: &LeagueProblem, config: &EvolutionConfig) -> Result<EvolutionResult> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs with a caller-supplied generator; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        problem: &LeagueProblem,
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Result<EvolutionResult> {
        config.validate()?;
        info!(
            teams = problem.teams().len(),
            fixtures = problem.fixture_count(),
            population_size = config.population_size,
            generations = config.generations,
            operators = %config.operators,
            "starting evolution"
        );

        let population = Population::random(problem, config, rng)?;
        let initial_best = fittest(population.individuals()).map(Individual::fitness);
        let result = population.evolve(config, rng)?;

        info!(
            initial_best = ?initial_best,
            best_fitness = result.best_fitness,
            feasible = problem.evaluate(result.best.fixtures()).is_feasible(),
            "evolution finished"
        );
        Ok(result)
    }
}
