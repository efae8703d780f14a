//! Concrete schedule view.
//!
//! A schedule is the fixture order of an individual laid over the
//! calendar of game slots. This view is what callers render or export.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::Fixture;

/// A fixture together with the slot it is played in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledFixture {
    /// Slot index (position in the fixture order).
    pub round: usize,
    /// The match.
    pub fixture: Fixture,
    /// Kick-off.
    pub date: NaiveDateTime,
}

impl ScheduledFixture {
    /// Creates a scheduled fixture.
    pub fn new(round: usize, fixture: Fixture, date: NaiveDateTime) -> Self {
        Self {
            round,
            fixture,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_serialize_scheduled_fixture() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 10)
            .unwrap()
            .and_hms_opt(20, 30, 0)
            .unwrap();
        let sf = ScheduledFixture::new(0, Fixture::new("Porto", "Benfica").unwrap(), date);
        let json = serde_json::to_value(&sf).unwrap();
        assert_eq!(json["round"], 0);
        assert_eq!(json["fixture"]["home"], "Porto");
        assert_eq!(json["fixture"]["away"], "Benfica");
        assert_eq!(json["date"], "2024-08-10T20:30:00");
    }
}
