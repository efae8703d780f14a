//! Population and the generational evolution loop.
//!
//! # Generation step
//!
//! 1. Elitism: the current best is cloned into the next generation
//!    (its fitness is not re-evaluated)
//! 2. Until the next generation is full: select two parents, recombine
//!    them with probability `crossover_rate` (otherwise copy their
//!    fixtures), mutate each offspring with probability `mutation_rate`,
//!    and wrap each representation into a freshly evaluated individual.
//!    When a single slot remains, the second offspring is discarded.
//! 3. The next generation replaces the current one
//! 4. The generation's maximum fitness is appended to the trace and the
//!    running best is updated
//!
//! # State machine
//!
//! ```text
//! Initialized → (InProgress → GenerationComplete)* → Terminated
//! ```

use rand::Rng;
use tracing::debug;

use super::config::EvolutionConfig;
use super::individual::{fittest, Individual};
use super::operators::GeneticOperators;
use super::problem::LeagueProblem;
use crate::error::{LeagueError, Result};

/// Lifecycle of a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationState {
    /// Initial generation built, no evolution yet.
    Initialized,
    /// Generation `generation` (1-based) is being built.
    InProgress { generation: usize },
    /// Generation `generation` (1-based) replaced its predecessor.
    GenerationComplete { generation: usize },
    /// The run is over.
    Terminated,
}

/// A fixed-size generation of individuals over one league problem.
///
/// The population borrows its problem, so teams and dates are shared by
/// every individual instead of copied.
#[derive(Debug, Clone)]
pub struct Population<'a> {
    problem: &'a LeagueProblem,
    individuals: Vec<Individual>,
    size: usize,
    elitism: bool,
    state: PopulationState,
    trace: Vec<i64>,
    /// Running best over evolved generations; the initial one does not count.
    best: Option<Individual>,
}

/// Outcome of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// Best fitness over the evolved generations, equal to the trace maximum.
    pub best_fitness: i64,
    /// Individual holding `best_fitness` (the first one found).
    pub best: Individual,
    /// Maximum fitness of each generation, one entry per generation.
    pub trace: Vec<i64>,
    /// Final generation.
    pub population: Vec<Individual>,
}

impl<'a> Population<'a> {
    /// Builds the initial generation from `config` (size, elitism and
    /// fixture order).
    pub fn random<R: Rng>(
        problem: &'a LeagueProblem,
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let individuals = (0..config.population_size)
            .map(|_| problem.random_individual(config.fixture_order, rng))
            .collect();
        Self::from_individuals(problem, individuals, config.elitism)
    }

    /// Wraps an explicit initial generation; its length becomes the size.
    pub fn from_individuals(
        problem: &'a LeagueProblem,
        individuals: Vec<Individual>,
        elitism: bool,
    ) -> Result<Self> {
        if individuals.is_empty() {
            return Err(LeagueError::EmptyPopulation);
        }
        Ok(Self {
            problem,
            size: individuals.len(),
            individuals,
            elitism,
            state: PopulationState::Initialized,
            trace: Vec::new(),
            best: None,
        })
    }

    /// Current generation.
    #[inline]
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Number of individuals per generation.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the best individual survives each generation.
    #[inline]
    pub fn elitism(&self) -> bool {
        self.elitism
    }

    /// Lifecycle state.
    #[inline]
    pub fn state(&self) -> PopulationState {
        self.state
    }

    /// Per-generation maximum fitness so far.
    #[inline]
    pub fn trace(&self) -> &[i64] {
        &self.trace
    }

    /// Best individual of the evolved generations, `None` before the first.
    #[inline]
    pub fn best(&self) -> Option<&Individual> {
        self.best.as_ref()
    }

    /// Number of completed generations.
    #[inline]
    pub fn generation(&self) -> usize {
        self.trace.len()
    }

    /// Builds the next generation and replaces the current one.
    ///
    /// Returns the new generation's maximum fitness. On error the
    /// individuals, trace, running best and state are left as they were.
    pub fn next_generation<R: Rng>(
        &mut self,
        operators: &GeneticOperators,
        crossover_rate: f64,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Result<i64> {
        let previous = self.state;
        let generation = self.generation() + 1;
        self.state = PopulationState::InProgress { generation };

        let next = match self.breed(operators, crossover_rate, mutation_rate, rng) {
            Ok(next) => next,
            Err(e) => {
                self.state = previous;
                return Err(e);
            }
        };
        self.individuals = next;

        let Some(generation_best) = fittest(&self.individuals) else {
            self.state = previous;
            return Err(LeagueError::EmptyPopulation);
        };
        let max = generation_best.fitness();
        let improved = match &self.best {
            Some(best) => max > best.fitness(),
            None => true,
        };
        if improved {
            self.best = Some(generation_best.clone());
        }
        self.trace.push(max);
        self.state = PopulationState::GenerationComplete { generation };

        debug!(generation, generation_best = max, "generation complete");
        Ok(max)
    }

    fn breed<R: Rng>(
        &self,
        operators: &GeneticOperators,
        crossover_rate: f64,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Result<Vec<Individual>> {
        let mut next = Vec::with_capacity(self.size);
        if self.elitism {
            if let Some(elite) = fittest(&self.individuals) {
                next.push(elite.clone());
            }
        }

        while next.len() < self.size {
            let parent1 = operators.select(&self.individuals, rng)?;
            let parent2 = operators.select(&self.individuals, rng)?;

            let (child1, child2) = if rng.random::<f64>() < crossover_rate {
                operators.crossover(parent1.fixtures(), parent2.fixtures(), rng)?
            } else {
                (parent1.fixtures().to_vec(), parent2.fixtures().to_vec())
            };

            for child in [child1, child2] {
                if next.len() == self.size {
                    break;
                }
                let child = if rng.random::<f64>() < mutation_rate {
                    operators.mutate(child, rng)
                } else {
                    child
                };
                next.push(self.problem.individual(child)?);
            }
        }
        Ok(next)
    }

    /// Runs `config.generations` generations and terminates.
    ///
    /// Only the generation count, rates and operators are read from
    /// `config`; size and elitism are the population's own. The
    /// configuration is validated against this population's size.
    pub fn evolve<R: Rng>(
        mut self,
        config: &EvolutionConfig,
        rng: &mut R,
    ) -> Result<EvolutionResult> {
        EvolutionConfig {
            population_size: self.size,
            elitism: self.elitism,
            ..config.clone()
        }
        .validate()?;

        for _ in 0..config.generations {
            self.next_generation(
                &config.operators,
                config.crossover_rate,
                config.mutation_rate,
                rng,
            )?;
        }
        self.state = PopulationState::Terminated;
        self.into_result()
    }

    fn into_result(self) -> Result<EvolutionResult> {
        let best = self.best.ok_or(LeagueError::EmptyPopulation)?;
        Ok(EvolutionResult {
            best_fitness: best.fitness(),
            best,
            trace: self.trace,
            population: self.individuals,
        })
    }
}
