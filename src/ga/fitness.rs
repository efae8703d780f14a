//! Schedule fitness evaluation.
//!
//! Scores a fixture order laid over the game-slot calendar. Higher is
//! better. Evaluation is a pure function of the fixtures, their
//! positional dates, and the [`FitnessRules`].
//!
//! # Hard constraints (penalties)
//!
//! | Constraint | Penalty |
//! |------------|---------|
//! | Unordered pairing not met exactly twice | 10 per pairing |
//! | Third or later consecutive away fixture | 10 per occurrence |
//! | Consecutive fixtures of a team < 2 days apart | 10 per occurrence |
//!
//! "Consecutive" always refers to a team's own fixtures in representation
//! order, not to calendar order.
//!
//! # Soft constraints (classic fixtures only)
//!
//! | Constraint | Contribution |
//! |------------|--------------|
//! | Classic on the prime weekday | +1, otherwise -1 |
//! | Prime / other weekday balance per team, summed as `D` | `min(5, 5 - D)` |
//! | Gap to the next classic in representation order | +2 if > 8 days, +1 if 7..=8 days |

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{days_between, double_round_robin, is_weekday, teams, Fixture, Team};

/// Penalty for each violated hard constraint.
pub const HARD_PENALTY: i64 = 10;
/// Reward for a classic on the prime weekday (and penalty otherwise).
pub const PRIME_TIME_REWARD: i64 = 1;
/// Upper bound of the weekday-balance contribution.
pub const BALANCE_CAP: i64 = 5;
/// Reward when classics are separated by more than a week and a day.
pub const SPACED_CLASSICS_REWARD: i64 = 2;
/// Reward when classics are separated by about a week.
pub const WEEK_APART_REWARD: i64 = 1;

const MAX_AWAY_STREAK: usize = 2;
const MIN_REST_DAYS: i64 = 2;
const SPACED_CLASSICS_DAYS: i64 = 8;
const WEEK_APART_DAYS: i64 = 7;

/// Teams whose mutual fixtures are classics by default.
pub const DEFAULT_CLASSIC_TEAMS: [&str; 3] = ["Sporting", "Benfica", "Porto"];

/// Configurable inputs of the soft constraints.
///
/// The penalty and reward magnitudes are fixed; only which fixtures are
/// classics and which weekday is prime time can be changed. Missing fields
/// fall back to [`FitnessRules::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessRules {
    /// High-profile fixtures subject to the soft constraints.
    pub classics: HashSet<Fixture>,
    /// Weekday classics should be played on (default: Saturday).
    pub prime_weekday: Weekday,
}

impl Default for FitnessRules {
    fn default() -> Self {
        Self::new().with_classic_teams(&teams(DEFAULT_CLASSIC_TEAMS))
    }
}

impl FitnessRules {
    /// Rules without any classic fixture, prime time on Saturday.
    pub fn new() -> Self {
        Self {
            classics: HashSet::new(),
            prime_weekday: Weekday::Sat,
        }
    }

    /// Marks every fixture between two of `teams` (both directions) as classic.
    pub fn with_classic_teams(mut self, teams: &[Team]) -> Self {
        self.classics.extend(double_round_robin(teams));
        self
    }

    /// Adds explicit classic fixtures.
    pub fn with_classics(mut self, classics: impl IntoIterator<Item = Fixture>) -> Self {
        self.classics.extend(classics);
        self
    }

    /// Sets the prime-time weekday.
    pub fn with_prime_weekday(mut self, weekday: Weekday) -> Self {
        self.prime_weekday = weekday;
        self
    }

    /// Whether `fixture` is a classic.
    #[inline]
    pub fn is_classic(&self, fixture: &Fixture) -> bool {
        self.classics.contains(fixture)
    }

    /// Scores `fixtures` played on `dates` (position i on `dates[i]`).
    ///
    /// `dates` must hold at least one slot per fixture; surplus slots are
    /// ignored.
    pub fn evaluate(
        &self,
        teams: &[Team],
        fixtures: &[Fixture],
        dates: &[NaiveDateTime],
    ) -> FitnessBreakdown {
        debug_assert!(dates.len() >= fixtures.len());

        let slots: Vec<(&Fixture, NaiveDateTime)> =
            fixtures.iter().zip(dates.iter().copied()).collect();
        let by_team = team_fixtures(teams, &slots);

        FitnessBreakdown {
            pairings: pairing_penalty(teams, fixtures),
            away_streaks: away_streak_penalty(&by_team, &slots),
            rest_days: rest_penalty(&by_team, &slots),
            prime_time: self.prime_time_score(&slots),
            weekday_balance: self.weekday_balance_score(&slots),
            classic_spacing: self.classic_spacing_score(&slots),
        }
    }

    /// Total fitness of `fixtures` played on `dates`.
    #[inline]
    pub fn score(&self, teams: &[Team], fixtures: &[Fixture], dates: &[NaiveDateTime]) -> i64 {
        self.evaluate(teams, fixtures, dates).total()
    }

    fn prime_time_score(&self, slots: &[(&Fixture, NaiveDateTime)]) -> i64 {
        slots
            .iter()
            .filter(|(f, _)| self.is_classic(f))
            .map(|&(_, date)| {
                if is_weekday(date, self.prime_weekday) {
                    PRIME_TIME_REWARD
                } else {
                    -PRIME_TIME_REWARD
                }
            })
            .sum()
    }

    fn weekday_balance_score(&self, slots: &[(&Fixture, NaiveDateTime)]) -> i64 {
        // (prime, other) per team
        let mut counts: HashMap<&Team, (i64, i64)> = HashMap::new();
        for &(fixture, date) in slots.iter().filter(|(f, _)| self.is_classic(f)) {
            let prime = is_weekday(date, self.prime_weekday);
            for team in [fixture.home(), fixture.away()] {
                let entry = counts.entry(team).or_default();
                if prime {
                    entry.0 += 1;
                } else {
                    entry.1 += 1;
                }
            }
        }
        let difference: i64 = counts.values().map(|(p, o)| (p - o).abs()).sum();
        BALANCE_CAP.min(BALANCE_CAP - difference)
    }

    fn classic_spacing_score(&self, slots: &[(&Fixture, NaiveDateTime)]) -> i64 {
        let classic_dates: Vec<NaiveDateTime> = slots
            .iter()
            .filter(|(f, _)| self.is_classic(f))
            .map(|&(_, date)| date)
            .collect();

        classic_dates
            .windows(2)
            .map(|w| match days_between(w[0], w[1]) {
                d if d > SPACED_CLASSICS_DAYS => SPACED_CLASSICS_REWARD,
                d if d >= WEEK_APART_DAYS => WEEK_APART_REWARD,
                _ => 0,
            })
            .sum()
    }
}

/// Itemised fitness. Every field is a signed contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitnessBreakdown {
    /// Unordered pairings not met exactly twice.
    pub pairings: i64,
    /// Excess consecutive away fixtures.
    pub away_streaks: i64,
    /// Fixtures of a team less than two days apart.
    pub rest_days: i64,
    /// Classics on / off the prime weekday.
    pub prime_time: i64,
    /// Prime versus other weekday balance of classics.
    pub weekday_balance: i64,
    /// Spacing between successive classics.
    pub classic_spacing: i64,
}

impl FitnessBreakdown {
    /// Sum of hard-constraint penalties (zero or negative).
    pub fn hard(&self) -> i64 {
        self.pairings + self.away_streaks + self.rest_days
    }

    /// Sum of soft-constraint contributions.
    pub fn soft(&self) -> i64 {
        self.prime_time + self.weekday_balance + self.classic_spacing
    }

    /// The fitness value.
    pub fn total(&self) -> i64 {
        self.hard() + self.soft()
    }

    /// Whether no hard constraint is violated.
    pub fn is_feasible(&self) -> bool {
        self.hard() == 0
    }
}

/// Slot indices of each team's fixtures, in representation order.
fn team_fixtures<'a>(
    teams: &'a [Team],
    slots: &[(&'a Fixture, NaiveDateTime)],
) -> HashMap<&'a Team, Vec<usize>> {
    let mut by_team: HashMap<&Team, Vec<usize>> =
        teams.iter().map(|t| (t, Vec::new())).collect();
    for (idx, (fixture, _)) in slots.iter().enumerate() {
        by_team.entry(fixture.home()).or_default().push(idx);
        by_team.entry(fixture.away()).or_default().push(idx);
    }
    by_team
}

fn pairing_penalty(teams: &[Team], fixtures: &[Fixture]) -> i64 {
    let mut counts: HashMap<(&Team, &Team), usize> = HashMap::new();
    for (i, a) in teams.iter().enumerate() {
        for b in &teams[i + 1..] {
            let key = if a <= b { (a, b) } else { (b, a) };
            counts.insert(key, 0);
        }
    }
    for fixture in fixtures {
        *counts.entry(fixture.pairing()).or_insert(0) += 1;
    }
    let unmet = counts.values().filter(|&&c| c != 2).count() as i64;
    -HARD_PENALTY * unmet
}

fn away_streak_penalty(
    by_team: &HashMap<&Team, Vec<usize>>,
    slots: &[(&Fixture, NaiveDateTime)],
) -> i64 {
    let mut violations = 0i64;
    for (&team, indices) in by_team {
        let mut streak = 0usize;
        for &idx in indices {
            if slots[idx].0.is_away_for(team) {
                streak += 1;
                if streak > MAX_AWAY_STREAK {
                    violations += 1;
                }
            } else {
                streak = 0;
            }
        }
    }
    -HARD_PENALTY * violations
}

fn rest_penalty(
    by_team: &HashMap<&Team, Vec<usize>>,
    slots: &[(&Fixture, NaiveDateTime)],
) -> i64 {
    let violations = by_team
        .values()
        .flat_map(|indices| indices.windows(2))
        .filter(|w| days_between(slots[w[0]].1, slots[w[1]].1).abs() < MIN_REST_DAYS)
        .count() as i64;
    -HARD_PENALTY * violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    /// Saturday of week `w` of the season, 20:00.
    fn sat(w: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, 10)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
            + Duration::weeks(w)
    }

    fn sun(w: i64) -> NaiveDateTime {
        sat(w) + Duration::days(1)
    }

    fn fx(home: &str, away: &str) -> Fixture {
        Fixture::new(home, away).unwrap()
    }

    /// One slot per week, alternating Saturday and Sunday.
    fn weekly(n: usize) -> Vec<NaiveDateTime> {
        (0..n as i64)
            .map(|i| if i % 2 == 0 { sat(i) } else { sun(i) })
            .collect()
    }

    #[test]
    fn test_default_classics() {
        let rules = FitnessRules::default();
        assert_eq!(rules.classics.len(), 6);
        assert!(rules.is_classic(&fx("Sporting", "Benfica")));
        assert!(rules.is_classic(&fx("Benfica", "Porto")));
        assert!(!rules.is_classic(&fx("Braga", "Porto")));
        assert_eq!(rules.prime_weekday, Weekday::Sat);
    }

    #[test]
    fn test_valid_round_robin_has_no_pairing_penalty() {
        let league = teams(["A", "B", "C"]);
        let fixtures = double_round_robin(&league);
        let b = FitnessRules::new().evaluate(&league, &fixtures, &weekly(6));
        assert_eq!(b.pairings, 0);
    }

    #[test]
    fn test_pairing_penalty() {
        let league = teams(["A", "B", "C"]);
        let fixtures = double_round_robin(&league);
        let rules = FitnessRules::new();
        let dates = weekly(6);
        let valid = rules.evaluate(&league, &fixtures, &dates);

        // A-B three times, A-C once
        let mut broken = fixtures.clone();
        let pos = broken.iter().position(|f| *f == fx("C", "A")).unwrap();
        broken[pos] = fx("A", "B");
        let invalid = rules.evaluate(&league, &broken, &dates);

        assert_eq!(invalid.pairings, -20);
        assert!(invalid.pairings <= valid.pairings - HARD_PENALTY);
    }

    #[test]
    fn test_missing_pairing_is_penalized() {
        let league = teams(["A", "B", "C"]);
        let fixtures = vec![fx("A", "B"), fx("B", "A")];
        let b = FitnessRules::new().evaluate(&league, &fixtures, &weekly(2));
        // A-C and B-C never meet
        assert_eq!(b.pairings, -20);
    }

    #[test]
    fn test_away_streak_penalty() {
        let league = teams(["A", "B", "C", "D", "E"]);
        let fixtures = vec![fx("B", "A"), fx("C", "A"), fx("D", "A"), fx("E", "A")];
        let b = FitnessRules::new().evaluate(&league, &fixtures, &weekly(4));
        // A's third and fourth straight away fixtures
        assert_eq!(b.away_streaks, -20);
    }

    #[test]
    fn test_home_fixture_resets_streak() {
        let league = teams(["A", "B", "C", "D"]);
        let fixtures = vec![fx("B", "A"), fx("C", "A"), fx("A", "D"), fx("D", "A")];
        let b = FitnessRules::new().evaluate(&league, &fixtures, &weekly(4));
        assert_eq!(b.away_streaks, 0);
    }

    #[test]
    fn test_rest_penalty() {
        let league = teams(["A", "B", "C"]);
        let fixtures = vec![fx("A", "B"), fx("B", "C")];
        let dates = vec![sat(0), sun(0)];
        let b = FitnessRules::new().evaluate(&league, &fixtures, &dates);
        // only B plays on consecutive days
        assert_eq!(b.rest_days, -10);

        let spaced = FitnessRules::new().evaluate(&league, &fixtures, &[sat(0), sat(1)]);
        assert_eq!(spaced.rest_days, 0);
    }

    #[test]
    fn test_rest_uses_representation_order() {
        let league = teams(["A", "B", "C"]);
        // A plays slot 0 and slot 2; slot dates are out of calendar order
        let fixtures = vec![fx("A", "B"), fx("B", "C"), fx("C", "A")];
        let dates = vec![sat(1), sat(0), sun(1)];
        let b = FitnessRules::new().evaluate(&league, &fixtures, &dates);
        // A: sat(1)->sun(1) 1 day; B: sat(1)->sat(0) 7 days; C: sat(0)->sun(1) 8 days
        assert_eq!(b.rest_days, -10);
    }

    #[test]
    fn test_classics_split_across_weekend() {
        let league = teams(["Sporting", "Benfica"]);
        let fixtures = vec![fx("Sporting", "Benfica"), fx("Benfica", "Sporting")];
        let dates = vec![sat(0), sun(1)];
        let b = FitnessRules::default().evaluate(&league, &fixtures, &dates);

        assert_eq!(b.hard(), 0);
        assert_eq!(b.prime_time, 0);
        assert_eq!(b.weekday_balance, 5);
        // eight days apart
        assert_eq!(b.classic_spacing, 1);
        assert_eq!(b.total(), 6);
        assert!(b.is_feasible());
    }

    #[test]
    fn test_classics_both_on_prime_time() {
        let league = teams(["Sporting", "Benfica"]);
        let fixtures = vec![fx("Sporting", "Benfica"), fx("Benfica", "Sporting")];
        let dates = vec![sat(0), sat(2)];
        let b = FitnessRules::default().evaluate(&league, &fixtures, &dates);

        assert_eq!(b.prime_time, 2);
        // each team: 2 prime, 0 other
        assert_eq!(b.weekday_balance, 1);
        assert_eq!(b.classic_spacing, 2);
        assert_eq!(b.total(), 5);
    }

    #[test]
    fn test_classic_spacing_considers_next_classic_only() {
        let league = teams(["Sporting", "Benfica", "Porto", "Braga"]);
        let fixtures = vec![
            fx("Sporting", "Benfica"),
            fx("Braga", "Porto"),
            fx("Porto", "Sporting"),
            fx("Benfica", "Porto"),
        ];
        let dates = vec![sat(0), sat(1), sun(0), sat(3)];
        let b = FitnessRules::default().evaluate(&league, &fixtures, &dates);
        // classics at sat(0), sun(0), sat(3): 1 day (0), then 20 days (+2)
        assert_eq!(b.classic_spacing, 2);
    }

    #[test]
    fn test_weekday_balance_goes_negative() {
        let league = teams(["Sporting", "Benfica", "Porto"]);
        let fixtures = double_round_robin(&league);
        let dates: Vec<_> = (0..6).map(|w| sun(w * 2)).collect();
        let b = FitnessRules::default().evaluate(&league, &fixtures, &dates);
        assert_eq!(b.prime_time, -6);
        // every team: 0 prime, 4 other
        assert_eq!(b.weekday_balance, 5 - 12);
    }

    #[test]
    fn test_custom_prime_weekday() {
        let league = teams(["X", "Y"]);
        let rules = FitnessRules::new()
            .with_classics([fx("X", "Y")])
            .with_prime_weekday(Weekday::Sun);
        let b = rules.evaluate(&league, &[fx("X", "Y"), fx("Y", "X")], &[sun(0), sat(2)]);
        assert_eq!(b.prime_time, 1);
    }

    #[test]
    fn test_classic_spacing_boundaries() {
        let league = teams(["Sporting", "Benfica"]);
        let fixtures = vec![fx("Sporting", "Benfica"), fx("Benfica", "Sporting")];
        let rules = FitnessRules::default();

        // exactly a week
        let week = rules.evaluate(&league, &fixtures, &[sat(0), sat(1)]);
        assert_eq!(week.classic_spacing, WEEK_APART_REWARD);

        // nine days
        let nine = rules.evaluate(&league, &fixtures, &[sat(0), sun(1) + Duration::days(1)]);
        assert_eq!(nine.classic_spacing, SPACED_CLASSICS_REWARD);

        // six days
        let six = rules.evaluate(&league, &fixtures, &[sat(0), sat(1) - Duration::days(1)]);
        assert_eq!(six.classic_spacing, 0);
    }

    #[test]
    fn test_rules_serde() {
        let rules = FitnessRules::new()
            .with_classics([fx("X", "Y")])
            .with_prime_weekday(Weekday::Sun);
        let json = serde_json::to_string(&rules).unwrap();
        let back: FitnessRules = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rules);

        let custom: FitnessRules = serde_json::from_str(
            r#"{"classics": [{"home": "Braga", "away": "Porto"}], "prime_weekday": "Sun"}"#,
        )
        .unwrap();
        assert!(custom.is_classic(&fx("Braga", "Porto")));
        assert!(!custom.is_classic(&fx("Porto", "Braga")));
        assert_eq!(custom.prime_weekday, Weekday::Sun);

        let defaults: FitnessRules = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, FitnessRules::default());

        let bad = r#"{"classics": [{"home": "Porto", "away": "Porto"}]}"#;
        assert!(serde_json::from_str::<FitnessRules>(bad).is_err());
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let league = teams(["Sporting", "Benfica", "Porto", "Braga"]);
        let fixtures = double_round_robin(&league);
        let dates = weekly(fixtures.len());
        let rules = FitnessRules::default();
        let first = rules.score(&league, &fixtures, &dates);
        for _ in 0..10 {
            assert_eq!(rules.score(&league, &fixtures, &dates), first);
        }
    }

    #[test]
    fn test_surplus_dates_ignored() {
        let league = teams(["A", "B"]);
        let fixtures = vec![fx("A", "B"), fx("B", "A")];
        let rules = FitnessRules::new();
        assert_eq!(
            rules.score(&league, &fixtures, &weekly(2)),
            rules.score(&league, &fixtures, &weekly(10))
        );
    }
}
