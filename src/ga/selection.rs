//! Parent selection.
//!
//! Each operator returns one individual of a non-empty population, favouring
//! higher fitness. Individuals are borrowed; the evolution loop clones the
//! fixtures it needs.
//!
//! | Operator | Probability of picking individual `i` |
//! |----------|---------------------------------------|
//! | [`fitness_proportionate`] | `w_i / Σw`, `w` = fitness (shifted if needed) |
//! | [`rank_selection`] | `r_i / Σr`, `r` = N for the best down to 1 |
//! | [`tournament_selection`] | fittest of `k` distinct uniform draws |
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::trace;

use super::individual::{fittest, Individual};
use crate::error::{LeagueError, Result};

/// Roulette-wheel selection.
///
/// Fitness values are used as weights when all are positive. Otherwise
/// every weight is shifted by `1 - min_fitness`, so the weakest individual
/// keeps weight 1 and the order of preference is unchanged.
pub fn fitness_proportionate<'a, R: Rng>(
    population: &'a [Individual],
    rng: &mut R,
) -> Result<&'a Individual> {
    let min = population
        .iter()
        .map(Individual::fitness)
        .min()
        .ok_or(LeagueError::EmptyPopulation)?;

    let shift = if min > 0 { 0.0 } else { 1.0 - min as f64 };
    if shift > 0.0 {
        trace!(min_fitness = min, shift, "shifting roulette weights");
    }

    population
        .choose_weighted(rng, |ind| ind.fitness() as f64 + shift)
        .map_err(|e| LeagueError::DegenerateFitness(e.to_string()))
}

/// Linear rank selection.
///
/// Individuals are sorted by descending fitness; the best gets weight N,
/// the worst weight 1. Equal fitness keeps population order.
pub fn rank_selection<'a, R: Rng>(
    population: &'a [Individual],
    rng: &mut R,
) -> Result<&'a Individual> {
    if population.is_empty() {
        return Err(LeagueError::EmptyPopulation);
    }

    let mut ranked: Vec<&Individual> = population.iter().collect();
    ranked.sort_by_key(|ind| std::cmp::Reverse(ind.fitness()));

    let n = ranked.len();
    let weighted: Vec<(usize, &Individual)> = ranked
        .into_iter()
        .enumerate()
        .map(|(rank, ind)| (n - rank, ind))
        .collect();

    weighted
        .choose_weighted(rng, |entry| entry.0)
        .map(|entry| entry.1)
        .map_err(|e| LeagueError::DegenerateFitness(e.to_string()))
}

/// Tournament selection.
///
/// Draws `size` distinct individuals uniformly and returns the fittest
/// (the first drawn wins ties). Size 1 is uniform random selection; size N
/// always returns the population's best.
pub fn tournament_selection<'a, R: Rng>(
    population: &'a [Individual],
    size: usize,
    rng: &mut R,
) -> Result<&'a Individual> {
    if population.is_empty() {
        return Err(LeagueError::EmptyPopulation);
    }
    if size == 0 || size > population.len() {
        return Err(LeagueError::TournamentSize {
            size,
            population: population.len(),
        });
    }

    fittest(population.choose_multiple(rng, size)).ok_or(LeagueError::EmptyPopulation)
}
