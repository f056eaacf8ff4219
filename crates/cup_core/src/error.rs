//! Errors returned by the cup engine

use thiserror::Error;

use crate::types::Team;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CupError {
    #[error("cannot build a round robin for {teams} teams over {rounds} rounds")]
    InvalidTeamCount { teams: usize, rounds: u32 },

    #[error("team {0} appears more than once")]
    DuplicateTeam(Team),

    #[error("schedule invariant violated: {0}")]
    InvariantViolation(String),

    #[error("no score data for team {0}")]
    MissingData(Team),

    #[error("fixture in week {week} pairs {team} with itself")]
    SelfMatch { week: u32, team: Team },

    #[error("cup number {0} is out of range")]
    InvalidCupNumber(u32),

    #[error("week {week} cannot be moved forward by {offset}")]
    WeekOutOfRange { week: u32, offset: u32 },

    #[error("fixture in week {week} is outside cup {cup} (weeks {start}-{end})")]
    FixtureOutsideCup {
        cup: u32,
        week: u32,
        start: u32,
        end: u32,
    },
}

pub type Result<T> = std::result::Result<T, CupError>;
