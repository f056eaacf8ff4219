//! Match evaluation with the cup's winning margin

use serde::{Deserialize, Serialize};

use crate::types::{Fixture, Team, WeeklyScore};

/// A side must outscore the other by at least this many points to win
pub const WIN_MARGIN: i64 = 3;

/// Cup points for a win
pub const WIN_POINTS: u32 = 3;

/// Cup points for a draw
pub const DRAW_POINTS: u32 = 1;

/// Cup points for a loss
pub const LOSS_POINTS: u32 = 0;

/// Side of a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// Outcome of comparing two weekly scores, before team names are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Win(Side),
    Draw,
}

impl Verdict {
    /// Cup points awarded as `(side A, side B)`
    pub fn cup_points(&self) -> (u32, u32) {
        match self {
            Verdict::Win(Side::A) => (WIN_POINTS, LOSS_POINTS),
            Verdict::Win(Side::B) => (LOSS_POINTS, WIN_POINTS),
            Verdict::Draw => (DRAW_POINTS, DRAW_POINTS),
        }
    }
}

/// Classify a match between two weekly scores.
///
/// Only points count: hits are a tiebreaker for the table, never for the match.
/// Anything closer than [`WIN_MARGIN`] is a draw, whichever side is ahead.
pub fn evaluate_match(score_a: WeeklyScore, score_b: WeeklyScore) -> Verdict {
    let diff = score_a.points as i64 - score_b.points as i64;
    if diff >= WIN_MARGIN {
        Verdict::Win(Side::A)
    } else if diff <= -WIN_MARGIN {
        Verdict::Win(Side::B)
    } else {
        Verdict::Draw
    }
}

/// Outcome of a played fixture, with the winning team named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Team),
    Draw,
}

/// A played fixture with both scores and its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture: Fixture,
    pub score_a: WeeklyScore,
    pub score_b: WeeklyScore,
    pub outcome: Outcome,
}

impl MatchResult {
    /// Evaluate a fixture whose two scores are known.
    pub fn evaluate(fixture: Fixture, score_a: WeeklyScore, score_b: WeeklyScore) -> Self {
        let outcome = match evaluate_match(score_a, score_b) {
            Verdict::Win(Side::A) => Outcome::Win(fixture.team_a.clone()),
            Verdict::Win(Side::B) => Outcome::Win(fixture.team_b.clone()),
            Verdict::Draw => Outcome::Draw,
        };
        Self {
            fixture,
            score_a,
            score_b,
            outcome,
        }
    }

    pub fn winner(&self) -> Option<&Team> {
        match &self.outcome {
            Outcome::Win(team) => Some(team),
            Outcome::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }

    /// Score of `team` in this fixture, if it took part
    pub fn score_of(&self, team: &Team) -> Option<WeeklyScore> {
        if &self.fixture.team_a == team {
            Some(self.score_a)
        } else if &self.fixture.team_b == team {
            Some(self.score_b)
        } else {
            None
        }
    }

    /// Opponent's score from `team`'s point of view
    pub fn opponent_score_of(&self, team: &Team) -> Option<WeeklyScore> {
        if &self.fixture.team_a == team {
            Some(self.score_b)
        } else if &self.fixture.team_b == team {
            Some(self.score_a)
        } else {
            None
        }
    }

    /// Cup points earned by `team` in this fixture
    pub fn cup_points_for(&self, team: &Team) -> Option<u32> {
        if !self.fixture.involves(team) {
            return None;
        }
        Some(match &self.outcome {
            Outcome::Win(winner) if winner == team => WIN_POINTS,
            Outcome::Win(_) => LOSS_POINTS,
            Outcome::Draw => DRAW_POINTS,
        })
    }
}

#[cfg(test)]
#[path = "evaluate_tests.rs"]
mod evaluate_tests;
