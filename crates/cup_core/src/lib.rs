//! Cup tournament engine for a fantasy mini-league
//!
//! This crate provides:
//! - Round-robin schedule generation (circle method, seeded shuffles)
//! - Match evaluation with the three-point winning margin
//! - Standings with the cup tiebreaker cascade
//! - A per-cup view combining standings and annotated weekly fixtures
//!
//! Everything here is a pure function of its inputs. Reading score tables,
//! stored schedules and deadlines is left to the caller.
//!
//! # Usage
//!
//! ```
//! use cup_core::{build_cup_view, Cup, ScheduleGenerator, ScoreTable, Team, WeeklyScore};
//!
//! let teams: Vec<Team> = (1..=8).map(|i| Team::new(format!("Team {i}"))).collect();
//! let schedule = ScheduleGenerator::default().generate(&teams, 42).unwrap();
//! let cup = Cup::from_generated(1, schedule).unwrap();
//!
//! let mut scores = ScoreTable::new();
//! for team in &teams {
//!     scores.insert(team.clone(), 1, WeeklyScore::new(60, 0));
//! }
//!
//! let view = build_cup_view(1, cup.schedule(), &scores).unwrap();
//! assert_eq!(view.standings.len(), 8);
//! ```

mod cup;
mod engine;
mod error;
mod evaluate;
mod schedule;
mod standings;
mod types;

pub use cup::*;
pub use engine::*;
pub use error::*;
pub use evaluate::*;
pub use schedule::*;
pub use standings::*;
pub use types::*;
