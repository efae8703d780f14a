//! Configurable genetic operators for league scheduling.
//!
//! Provides runtime-selectable selection, crossover and mutation
//! strategies via [`GeneticOperators`]. All three families are closed
//! enumerations that (de)serialize, so an experiment driver can sweep
//! operator combinations from configuration.
//!
//! # Usage
//!
//! ```
//! use u_league::ga::operators::{CrossoverType, GeneticOperators, MutationType, SelectionType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.selection, SelectionType::Tournament(3));
//! assert_eq!(ops.crossover, CrossoverType::Order);
//! assert_eq!(ops.mutation, MutationType::Swap);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use super::crossover::{
    cycle_crossover, geometric_crossover, modified_order_crossover, order_crossover,
    pmx_crossover, position_based_crossover, single_point_crossover, subtour_crossover,
    two_point_crossover, uniform_crossover,
};
use super::individual::Individual;
use super::mutation::{
    displacement_mutation, insertion_mutation, inversion_mutation, scramble_mutation,
    swap_mutation,
};
use super::selection::{fitness_proportionate, rank_selection, tournament_selection};
use crate::error::{LeagueError, Result};
use crate::models::Fixture;

/// Default tournament size.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// Parent selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionType {
    /// Roulette wheel over (shifted) fitness.
    FitnessProportionate,
    /// Linear rank weights.
    Rank,
    /// Fittest of `k` distinct uniform draws.
    Tournament(usize),
}

impl Default for SelectionType {
    fn default() -> Self {
        Self::Tournament(DEFAULT_TOURNAMENT_SIZE)
    }
}

/// Crossover strategy for fixture orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverType {
    /// Swap tails after one cut.
    SinglePoint,
    /// Swap one segment.
    TwoPoint,
    /// Cycle crossover (Oliver et al., 1987).
    Cycle,
    /// Partially matched crossover (Goldberg & Lingle, 1985).
    PartiallyMatched,
    /// Per-position coin picks the donor of child1.
    Geometric,
    /// Per-position coin swaps the pair.
    Uniform,
    /// Order crossover (Davis, 1985).
    #[default]
    Order,
    /// OX with independent, possibly coinciding bounds.
    Subtour,
    /// OX with a circular segment.
    ModifiedOrder,
    /// Segment from the other parent, front-filled from the own parent.
    PositionBased,
}

impl CrossoverType {
    /// Every crossover strategy, in declaration order.
    pub const ALL: [CrossoverType; 10] = [
        Self::SinglePoint,
        Self::TwoPoint,
        Self::Cycle,
        Self::PartiallyMatched,
        Self::Geometric,
        Self::Uniform,
        Self::Order,
        Self::Subtour,
        Self::ModifiedOrder,
        Self::PositionBased,
    ];

    /// Whether offspring are always reorderings of the parents' multiset.
    pub fn is_permutation_preserving(self) -> bool {
        !matches!(
            self,
            Self::SinglePoint | Self::TwoPoint | Self::Geometric | Self::Uniform
        )
    }
}

/// Mutation strategy for fixture orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationType {
    /// Exchange two positions.
    #[default]
    Swap,
    /// Move one fixture backwards.
    Insertion,
    /// Reverse a segment.
    Inversion,
    /// Shuffle a segment.
    Scramble,
    /// Move a block elsewhere.
    Displacement,
}

impl MutationType {
    /// Every mutation strategy, in declaration order.
    pub const ALL: [MutationType; 5] = [
        Self::Swap,
        Self::Insertion,
        Self::Inversion,
        Self::Scramble,
        Self::Displacement,
    ];
}

impl fmt::Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FitnessProportionate => f.write_str("fitness-proportionate"),
            Self::Rank => f.write_str("rank"),
            Self::Tournament(k) => write!(f, "tournament({k})"),
        }
    }
}

impl fmt::Display for CrossoverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SinglePoint => "single-point",
            Self::TwoPoint => "two-point",
            Self::Cycle => "cycle",
            Self::PartiallyMatched => "pmx",
            Self::Geometric => "geo",
            Self::Uniform => "uniform",
            Self::Order => "order",
            Self::Subtour => "subtour",
            Self::ModifiedOrder => "modified-order",
            Self::PositionBased => "position-based",
        };
        f.write_str(name)
    }
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Swap => "swap",
            Self::Insertion => "insertion",
            Self::Inversion => "inversion",
            Self::Scramble => "scramble",
            Self::Displacement => "displacement",
        };
        f.write_str(name)
    }
}

/// Runtime-selectable genetic operators for the league GA.
///
/// Wraps strategy selection so a driver can switch operators via
/// configuration without changing the problem definition.
///
/// # Example
///
/// ```
/// use u_league::ga::operators::{CrossoverType, GeneticOperators, MutationType, SelectionType};
///
/// let ops = GeneticOperators {
///     selection: SelectionType::Rank,
///     crossover: CrossoverType::PartiallyMatched,
///     mutation: MutationType::Inversion,
/// };
/// assert_eq!(ops.to_string(), "rank/pmx/inversion");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticOperators {
    /// Parent selection strategy.
    pub selection: SelectionType,
    /// Crossover strategy.
    pub crossover: CrossoverType,
    /// Mutation strategy.
    pub mutation: MutationType,
}

impl fmt::Display for GeneticOperators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.selection, self.crossover, self.mutation)
    }
}

impl GeneticOperators {
    /// Selects one parent using the configured strategy.
    pub fn select<'a, R: Rng>(
        &self,
        population: &'a [Individual],
        rng: &mut R,
    ) -> Result<&'a Individual> {
        match self.selection {
            SelectionType::FitnessProportionate => fitness_proportionate(population, rng),
            SelectionType::Rank => rank_selection(population, rng),
            SelectionType::Tournament(k) => tournament_selection(population, k, rng),
        }
    }

    /// Performs crossover using the configured strategy.
    ///
    /// Parents of different lengths are rejected.
    pub fn crossover<R: Rng>(
        &self,
        parent1: &[Fixture],
        parent2: &[Fixture],
        rng: &mut R,
    ) -> Result<(Vec<Fixture>, Vec<Fixture>)> {
        if parent1.len() != parent2.len() {
            return Err(LeagueError::ParentLengthMismatch {
                left: parent1.len(),
                right: parent2.len(),
            });
        }
        trace!(crossover = %self.crossover, "crossover");
        let offspring = match self.crossover {
            CrossoverType::SinglePoint => single_point_crossover(parent1, parent2, rng),
            CrossoverType::TwoPoint => two_point_crossover(parent1, parent2, rng),
            CrossoverType::Cycle => cycle_crossover(parent1, parent2),
            CrossoverType::PartiallyMatched => pmx_crossover(parent1, parent2, rng),
            CrossoverType::Geometric => geometric_crossover(parent1, parent2, rng),
            CrossoverType::Uniform => uniform_crossover(parent1, parent2, rng),
            CrossoverType::Order => order_crossover(parent1, parent2, rng),
            CrossoverType::Subtour => subtour_crossover(parent1, parent2, rng),
            CrossoverType::ModifiedOrder => modified_order_crossover(parent1, parent2, rng),
            CrossoverType::PositionBased => position_based_crossover(parent1, parent2, rng),
        };
        Ok(offspring)
    }

    /// Performs mutation using the configured strategy.
    pub fn mutate<R: Rng>(&self, fixtures: Vec<Fixture>, rng: &mut R) -> Vec<Fixture> {
        trace!(mutation = %self.mutation, "mutation");
        match self.mutation {
            MutationType::Swap => swap_mutation(fixtures, rng),
            MutationType::Insertion => insertion_mutation(fixtures, rng),
            MutationType::Inversion => inversion_mutation(fixtures, rng),
            MutationType::Scramble => scramble_mutation(fixtures, rng),
            MutationType::Displacement => displacement_mutation(fixtures, rng),
        }
    }
}
