//! League domain models.
//!
//! Provides the data types the search engine works with. The engine is
//! indifferent to the sport; it only knows teams, fixtures and slots.
//!
//! # Domain Mappings
//!
//! | u-league | Football | Basketball | Esports |
//! |----------|----------|------------|---------|
//! | Team | Club | Franchise | Roster |
//! | Fixture | Match | Game | Series |
//! | Slot date | Matchday kick-off | Tip-off | Broadcast slot |

mod calendar;
mod fixture;
mod schedule;
mod team;

pub use calendar::{days_between, is_weekday};
pub use fixture::{double_round_robin, Fixture};
pub use schedule::ScheduledFixture;
pub use team::{teams, Team};
