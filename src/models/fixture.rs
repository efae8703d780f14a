//! Fixture model and double round-robin generation.
//!
//! A fixture is an ordered (home, away) pair of distinct teams. A double
//! round-robin season contains every ordered pair exactly once, so each
//! unordered pair meets twice: once at each ground.
//!
//! # Reference
//! de Werra (1981), "Scheduling in Sports"

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Team;
use crate::error::{LeagueError, Result};

/// One match: `home` hosts `away`.
///
/// Invariant: `home != away`. The fields are private so the invariant
/// can only be established through [`Fixture::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFixture")]
pub struct Fixture {
    home: Team,
    away: Team,
}

/// Unchecked wire form; deserialization goes through [`Fixture::new`].
#[derive(Deserialize)]
struct RawFixture {
    home: Team,
    away: Team,
}

impl TryFrom<RawFixture> for Fixture {
    type Error = LeagueError;

    fn try_from(raw: RawFixture) -> Result<Self> {
        Self::new(raw.home, raw.away)
    }
}

impl Fixture {
    /// Creates a fixture, rejecting a team playing itself.
    pub fn new(home: impl Into<Team>, away: impl Into<Team>) -> Result<Self> {
        let home = home.into();
        let away = away.into();
        if home == away {
            return Err(LeagueError::SelfFixture(home));
        }
        Ok(Self { home, away })
    }

    /// Hosting team.
    #[inline]
    pub fn home(&self) -> &Team {
        &self.home
    }

    /// Visiting team.
    #[inline]
    pub fn away(&self) -> &Team {
        &self.away
    }

    /// Whether `team` plays in this fixture.
    #[inline]
    pub fn involves(&self, team: &Team) -> bool {
        &self.home == team || &self.away == team
    }

    /// Whether `team` is the visiting side.
    #[inline]
    pub fn is_away_for(&self, team: &Team) -> bool {
        &self.away == team
    }

    /// The fixture with home and away exchanged.
    pub fn reversed(&self) -> Self {
        Self {
            home: self.away.clone(),
            away: self.home.clone(),
        }
    }

    /// Order-independent key: both directions of a pairing share it.
    pub fn pairing(&self) -> (&Team, &Team) {
        if self.home <= self.away {
            (&self.home, &self.away)
        } else {
            (&self.away, &self.home)
        }
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// Every ordered pair of distinct teams, in canonical order.
///
/// Home teams follow the input order; for each home team the away teams
/// follow the input order as well. Yields `n * (n - 1)` fixtures for `n`
/// distinct teams; duplicate entries in `teams` yield duplicate fixtures.
pub fn double_round_robin(teams: &[Team]) -> Vec<Fixture> {
    let mut fixtures = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1));
    for home in teams {
        for away in teams {
            if home != away {
                fixtures.push(Fixture {
                    home: home.clone(),
                    away: away.clone(),
                });
            }
        }
    }
    fixtures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::teams;
    use std::collections::HashSet;

    #[test]
    fn test_self_fixture_rejected() {
        let err = Fixture::new("Porto", "Porto").unwrap_err();
        assert!(matches!(err, LeagueError::SelfFixture(ref t) if t.id() == "Porto"));
    }

    #[test]
    fn test_fixture_accessors() {
        let f = Fixture::new("Sporting", "Benfica").unwrap();
        assert_eq!(f.home().id(), "Sporting");
        assert_eq!(f.away().id(), "Benfica");
        assert!(f.involves(&Team::new("Benfica")));
        assert!(!f.involves(&Team::new("Porto")));
        assert!(f.is_away_for(&Team::new("Benfica")));
        assert!(!f.is_away_for(&Team::new("Sporting")));
        assert_eq!(f.to_string(), "Sporting vs Benfica");
    }

    #[test]
    fn test_pairing_is_symmetric() {
        let f = Fixture::new("B", "A").unwrap();
        assert_eq!(f.pairing(), f.reversed().pairing());
        assert_eq!(f.pairing().0.id(), "A");
    }

    #[test]
    fn test_deserialize_checks_invariant() {
        let f: Fixture = serde_json::from_str(r#"{"home":"Porto","away":"Braga"}"#).unwrap();
        assert_eq!(f, Fixture::new("Porto", "Braga").unwrap());

        let err = serde_json::from_str::<Fixture>(r#"{"home":"Porto","away":"Porto"}"#);
        assert!(err.unwrap_err().to_string().contains("cannot play itself"));
    }

    #[test]
    fn test_double_round_robin_size() {
        for n in 2..7 {
            let ids: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
            let fixtures = double_round_robin(&teams(ids));
            assert_eq!(fixtures.len(), n * (n - 1));
            let unique: HashSet<&Fixture> = fixtures.iter().collect();
            assert_eq!(unique.len(), fixtures.len());
        }
    }

    #[test]
    fn test_double_round_robin_order() {
        let fixtures = double_round_robin(&teams(["A", "B", "C"]));
        let pairs: Vec<(&str, &str)> = fixtures
            .iter()
            .map(|f| (f.home().id(), f.away().id()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("A", "B"),
                ("A", "C"),
                ("B", "A"),
                ("B", "C"),
                ("C", "A"),
                ("C", "B"),
            ]
        );
    }
}
