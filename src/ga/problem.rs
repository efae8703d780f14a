//! League scheduling GA problem definition.
//!
//! Bridges the domain inputs (teams, game slots, fitness rules) to the GA.
//! [`LeagueProblem`] is the only factory of [`Individual`]s: every
//! representation passes its validation and is evaluated on the way in.

use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use super::fitness::{FitnessBreakdown, FitnessRules};
use super::individual::Individual;
use crate::error::Result;
use crate::models::{double_round_robin, Fixture, Team};
use crate::validation::{fixture_count, validate_league, validate_representation};

/// How initial fixture orders are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureOrder {
    /// Canonical nested order (home team, then away team, input order).
    /// Every generated individual is identical.
    Canonical,
    /// Uniformly random order of the full fixture set.
    #[default]
    Shuffled,
}

/// GA problem definition for league scheduling.
///
/// Immutable once built; a single problem can back any number of
/// independent runs, including concurrent ones.
///
/// # Example
/// ```
/// use chrono::{Duration, NaiveDate};
/// use u_league::ga::{FixtureOrder, LeagueProblem};
/// use u_league::models::teams;
///
/// let start = NaiveDate::from_ymd_opt(2024, 8, 10).unwrap().and_hms_opt(20, 0, 0).unwrap();
/// let dates = (0..12).map(|i| start + Duration::days(3 * i)).collect();
/// let problem = LeagueProblem::new(teams(["A", "B", "C", "D"]), dates).unwrap();
///
/// let mut rng = rand::rng();
/// let individual = problem.random_individual(FixtureOrder::Shuffled, &mut rng);
/// assert_eq!(individual.len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct LeagueProblem {
    teams: Vec<Team>,
    dates: Arc<[NaiveDateTime]>,
    rules: FitnessRules,
}

impl LeagueProblem {
    /// Creates a problem with the default fitness rules.
    ///
    /// Fails when there are fewer than two teams, duplicate teams, or fewer
    /// dates than fixtures.
    pub fn new(teams: Vec<Team>, dates: Vec<NaiveDateTime>) -> Result<Self> {
        validate_league(&teams, &dates)?;
        Ok(Self {
            teams,
            dates: Arc::from(dates),
            rules: FitnessRules::default(),
        })
    }

    /// Replaces the fitness rules.
    pub fn with_rules(mut self, rules: FitnessRules) -> Self {
        self.rules = rules;
        self
    }

    /// Participating teams.
    #[inline]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Game slots, consumed positionally.
    #[inline]
    pub fn dates(&self) -> &[NaiveDateTime] {
        &self.dates
    }

    /// Fitness rules.
    #[inline]
    pub fn rules(&self) -> &FitnessRules {
        &self.rules
    }

    /// Fixtures per individual: `T * (T - 1)`.
    #[inline]
    pub fn fixture_count(&self) -> usize {
        fixture_count(self.teams.len())
    }

    /// Generates a full fixture list in the requested order.
    pub fn fixtures<R: Rng>(&self, order: FixtureOrder, rng: &mut R) -> Vec<Fixture> {
        let mut fixtures = double_round_robin(&self.teams);
        if order == FixtureOrder::Shuffled {
            fixtures.shuffle(rng);
        }
        fixtures
    }

    /// Creates an individual from a generated fixture list.
    pub fn random_individual<R: Rng>(&self, order: FixtureOrder, rng: &mut R) -> Individual {
        let fixtures = self.fixtures(order, rng);
        self.wrap(fixtures)
    }

    /// Creates an individual from an explicit representation.
    ///
    /// The representation must hold exactly [`fixture_count`](Self::fixture_count)
    /// fixtures between teams of this league. Duplicate or missing pairings
    /// are allowed; the fitness penalizes them.
    pub fn individual(&self, fixtures: Vec<Fixture>) -> Result<Individual> {
        let known: HashSet<&Team> = self.teams.iter().collect();
        validate_representation(&fixtures, &known, self.fixture_count())?;
        Ok(self.wrap(fixtures))
    }

    /// Itemised fitness of a representation.
    pub fn evaluate(&self, fixtures: &[Fixture]) -> FitnessBreakdown {
        self.rules.evaluate(&self.teams, fixtures, &self.dates)
    }

    fn wrap(&self, fixtures: Vec<Fixture>) -> Individual {
        let fitness = self.evaluate(&fixtures).total();
        Individual::evaluated(fixtures, Arc::clone(&self.dates), fitness)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::LeagueError;
    use crate::models::teams;
    use crate::validation::ValidationErrorKind;
    use chrono::{Duration, NaiveDate};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Two slots per weekend (Saturday and Sunday evening), `n` slots.
    pub(crate) fn weekend_slots(n: usize) -> Vec<NaiveDateTime> {
        let first_saturday = NaiveDate::from_ymd_opt(2024, 8, 10)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap();
        (0..n as i64)
            .map(|i| first_saturday + Duration::weeks(i / 2) + Duration::days(i % 2))
            .collect()
    }

    pub(crate) fn four_team_problem() -> LeagueProblem {
        LeagueProblem::new(
            teams(["Sporting", "Benfica", "Porto", "Braga"]),
            weekend_slots(12),
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_inputs() {
        let err = LeagueProblem::new(teams(["Solo"]), weekend_slots(4)).unwrap_err();
        match err {
            LeagueError::Validation(errors) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::TooFewTeams)
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(LeagueProblem::new(teams(["A", "B", "C"]), weekend_slots(5)).is_err());
    }

    #[test]
    fn test_generated_individuals_are_double_round_robin() {
        let problem = four_team_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        for order in [FixtureOrder::Canonical, FixtureOrder::Shuffled] {
            for _ in 0..20 {
                let ind = problem.random_individual(order, &mut rng);
                assert_eq!(ind.len(), 12);
                let unique: HashSet<&Fixture> = ind.fixtures().iter().collect();
                assert_eq!(unique.len(), 12);
                for home in problem.teams() {
                    for away in problem.teams() {
                        if home != away {
                            let f = Fixture::new(home.clone(), away.clone()).unwrap();
                            assert!(unique.contains(&f));
                        }
                    }
                }
                assert_eq!(problem.evaluate(ind.fixtures()).pairings, 0);
            }
        }
    }

    #[test]
    fn test_canonical_order_is_stable() {
        let problem = four_team_problem();
        let mut rng = SmallRng::seed_from_u64(1);
        let a = problem.random_individual(FixtureOrder::Canonical, &mut rng);
        let b = problem.random_individual(FixtureOrder::Canonical, &mut rng);
        assert_eq!(a.fixtures(), b.fixtures());
        assert_eq!(a.fitness(), b.fitness());
    }

    #[test]
    fn test_individual_fitness_matches_evaluation() {
        let problem = four_team_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let fixtures = problem.fixtures(FixtureOrder::Shuffled, &mut rng);
        let expected = problem.evaluate(&fixtures).total();
        let ind = problem.individual(fixtures.clone()).unwrap();
        assert_eq!(ind.fitness(), expected);
        // same content, same fitness
        assert_eq!(problem.individual(fixtures).unwrap().fitness(), expected);
    }

    #[test]
    fn test_individual_rejects_wrong_length() {
        let problem = four_team_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut fixtures = problem.fixtures(FixtureOrder::Shuffled, &mut rng);
        fixtures.truncate(11);
        assert!(matches!(
            problem.individual(fixtures),
            Err(LeagueError::Validation(_))
        ));
    }

    #[test]
    fn test_individual_rejects_unknown_team() {
        let problem = four_team_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut fixtures = problem.fixtures(FixtureOrder::Canonical, &mut rng);
        fixtures[0] = Fixture::new("Sporting", "Boavista").unwrap();
        let err = problem.individual(fixtures).unwrap_err();
        assert!(err.to_string().contains("Boavista"));
    }

    #[test]
    fn test_individual_accepts_duplicates_with_penalty() {
        let problem = four_team_problem();
        let mut rng = SmallRng::seed_from_u64(42);
        let mut fixtures = problem.fixtures(FixtureOrder::Canonical, &mut rng);
        // Sporting-Benfica three times, Sporting-Porto once
        fixtures[1] = fixtures[0].clone();
        let ind = problem.individual(fixtures).unwrap();
        assert_eq!(problem.evaluate(ind.fixtures()).pairings, -20);
    }

    #[test]
    fn test_custom_rules() {
        let problem = four_team_problem().with_rules(FitnessRules::new());
        assert!(problem.rules().classics.is_empty());
        let mut rng = SmallRng::seed_from_u64(42);
        let ind = problem.random_individual(FixtureOrder::Shuffled, &mut rng);
        let b = problem.evaluate(ind.fixtures());
        assert_eq!(b.prime_time, 0);
        assert_eq!(b.classic_spacing, 0);
        assert_eq!(b.weekday_balance, 5);
    }

    #[test]
    fn test_fixture_order_serde() {
        let json = serde_json::to_string(&FixtureOrder::Shuffled).unwrap();
        assert_eq!(json, "\"shuffled\"");
        let back: FixtureOrder = serde_json::from_str("\"canonical\"").unwrap();
        assert_eq!(back, FixtureOrder::Canonical);
    }
}
