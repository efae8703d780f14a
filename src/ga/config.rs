//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds every parameter of one GA run.

use serde::{Deserialize, Serialize};

use super::operators::{CrossoverType, GeneticOperators, MutationType, SelectionType};
use super::problem::FixtureOrder;
use crate::error::{LeagueError, Result};

/// Configuration for one evolution run.
///
/// # Defaults
///
/// ```
/// use u_league::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 200);
/// assert!(config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_league::ga::EvolutionConfig;
/// use u_league::ga::operators::{CrossoverType, SelectionType};
///
/// let config = EvolutionConfig::default()
///     .with_population_size(20)
///     .with_generations(50)
///     .with_selection(SelectionType::Rank)
///     .with_crossover(CrossoverType::Cycle)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Number of individuals per generation.
    pub population_size: usize,

    /// Number of generations; the run has no other stopping rule.
    pub generations: usize,

    /// Probability of recombining a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the parents' fixtures are copied.
    pub crossover_rate: f64,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether the best individual is carried into the next generation.
    pub elitism: bool,

    /// Selection, crossover and mutation strategies.
    pub operators: GeneticOperators,

    /// How the initial population's fixture orders are generated.
    pub fixture_order: FixtureOrder,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 200,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            elitism: true,
            operators: GeneticOperators::default(),
            fixture_order: FixtureOrder::default(),
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Replaces all three operator strategies.
    pub fn with_operators(mut self, operators: GeneticOperators) -> Self {
        self.operators = operators;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: SelectionType) -> Self {
        self.operators.selection = selection;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: CrossoverType) -> Self {
        self.operators.crossover = crossover;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, mutation: MutationType) -> Self {
        self.operators.mutation = mutation;
        self
    }

    /// Sets how the initial population is generated.
    pub fn with_fixture_order(mut self, order: FixtureOrder) -> Self {
        self.fixture_order = order;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Rates set through the builder are always in range; deserialized
    /// ones may not be.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(LeagueError::Config(
                "population_size must be at least 1".into(),
            ));
        }
        if self.generations == 0 {
            return Err(LeagueError::Config("generations must be at least 1".into()));
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(LeagueError::Config(format!(
                    "{name} must be within [0, 1], got {rate}"
                )));
            }
        }
        if let SelectionType::Tournament(k) = self.operators.selection {
            if k == 0 || k > self.population_size {
                return Err(LeagueError::Config(format!(
                    "tournament size {k} must be within 1..={}",
                    self.population_size
                )));
            }
        }
        Ok(())
    }
}
