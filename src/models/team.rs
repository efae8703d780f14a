//! Team identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque team identifier.
///
/// The set of teams taking part in a league is fixed and supplied by the
/// caller; the engine only compares teams for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    /// Creates a team from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The team identifier.
    #[inline]
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Team {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Team {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Builds a team list from string identifiers.
pub fn teams<I, S>(ids: I) -> Vec<Team>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(Team::new).collect()
}
