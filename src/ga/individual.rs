//! Candidate schedule.
//!
//! An individual is one fixture order with its positional date assignment
//! and its fitness. Fitness is computed once, when the individual is built
//! by [`LeagueProblem`](super::LeagueProblem); there is no way to change the
//! fixtures of an existing individual, so the cached fitness always
//! matches its content.

use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::models::{Fixture, ScheduledFixture};

/// One candidate season schedule.
///
/// Higher fitness = better schedule (maximization convention).
#[derive(Debug, Clone)]
pub struct Individual {
    fixtures: Vec<Fixture>,
    /// Game slots shared by every individual of a problem. Position i of
    /// `fixtures` is played on `dates[i]`.
    dates: Arc<[NaiveDateTime]>,
    fitness: i64,
}

impl Individual {
    pub(crate) fn evaluated(
        fixtures: Vec<Fixture>,
        dates: Arc<[NaiveDateTime]>,
        fitness: i64,
    ) -> Self {
        Self {
            fixtures,
            dates,
            fitness,
        }
    }

    /// Fixture order.
    #[inline]
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    /// Fitness (higher is better).
    #[inline]
    pub fn fitness(&self) -> i64 {
        self.fitness
    }

    /// Number of fixtures.
    #[inline]
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    /// Whether the individual holds no fixture.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }

    /// Date of the fixture at `position`.
    pub fn date_of(&self, position: usize) -> Option<NaiveDateTime> {
        if position < self.fixtures.len() {
            self.dates.get(position).copied()
        } else {
            None
        }
    }

    /// Fixture → date pairs, in representation order.
    pub fn date_assignment(&self) -> impl Iterator<Item = (&Fixture, NaiveDateTime)> + '_ {
        self.fixtures.iter().zip(self.dates.iter().copied())
    }

    /// Concrete schedule for rendering or export.
    pub fn schedule(&self) -> Vec<ScheduledFixture> {
        self.date_assignment()
            .enumerate()
            .map(|(round, (fixture, date))| ScheduledFixture::new(round, fixture.clone(), date))
            .collect()
    }
}

/// The fittest individual; the first one wins ties.
pub fn fittest<'a, I>(individuals: I) -> Option<&'a Individual>
where
    I: IntoIterator<Item = &'a Individual>,
{
    individuals
        .into_iter()
        .reduce(|best, ind| if ind.fitness > best.fitness { ind } else { best })
}

#[cfg(test)]
pub(crate) fn with_fitness(fitness: i64) -> Individual {
    Individual::evaluated(Vec::new(), Arc::from(Vec::new()), fitness)
}
