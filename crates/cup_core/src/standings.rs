//! Cup table with the tiebreaker cascade
//!
//! Rows are ordered by cup points. Ties are broken, in turn, by:
//! 1. head-to-head, only when exactly two teams are level (winner first; if
//!    their meeting was drawn, whoever scored more in it)
//! 2. fewest hits over the tournament
//! 3. best point differential
//!
//! Anything still level keeps the order the teams were supplied in. Three or
//! more teams on the same total skip head-to-head entirely.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use crate::evaluate::{MatchResult, Outcome, DRAW_POINTS, WIN_POINTS};
use crate::types::Team;

/// One line of the cup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: Team,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub cup_points: u32,
    /// Fantasy points scored in played fixtures
    pub points_for: u64,
    /// Fantasy points conceded in played fixtures
    pub points_against: u64,
    /// Transfer hits taken in played fixtures
    pub total_hits: u32,
    pub point_differential: i64,
}

impl StandingsRow {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            cup_points: 0,
            points_for: 0,
            points_against: 0,
            total_hits: 0,
            point_differential: 0,
        }
    }

    fn record(&mut self, result: &MatchResult) {
        let (Some(own), Some(opponent)) = (
            result.score_of(&self.team),
            result.opponent_score_of(&self.team),
        ) else {
            return;
        };

        self.played += 1;
        self.points_for += own.points as u64;
        self.points_against += opponent.points as u64;
        self.total_hits += own.hits;
        self.point_differential += own.points as i64 - opponent.points as i64;

        match &result.outcome {
            Outcome::Win(winner) if winner == &self.team => {
                self.wins += 1;
                self.cup_points += WIN_POINTS;
            }
            Outcome::Win(_) => self.losses += 1,
            Outcome::Draw => {
                self.draws += 1;
                self.cup_points += DRAW_POINTS;
            }
        }
    }
}

// Compare functions, each sorting the better row first.

fn compare_cup_points(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.cup_points.cmp(&a.cup_points)
}

fn compare_hits(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    a.total_hits.cmp(&b.total_hits)
}

fn compare_point_differential(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.point_differential.cmp(&a.point_differential)
}

fn compare_head_to_head(a: &StandingsRow, b: &StandingsRow, results: &[MatchResult]) -> Ordering {
    let Some(meeting) = results
        .iter()
        .find(|r| r.fixture.is_between(&a.team, &b.team))
    else {
        return Ordering::Equal;
    };

    match &meeting.outcome {
        Outcome::Win(winner) if winner == &a.team => Ordering::Less,
        Outcome::Win(_) => Ordering::Greater,
        Outcome::Draw => {
            let a_points = meeting.score_of(&a.team).map_or(0, |s| s.points);
            let b_points = meeting.score_of(&b.team).map_or(0, |s| s.points);
            b_points.cmp(&a_points)
        }
    }
}

fn compare_fallback(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    compare_hits(a, b).then_with(|| compare_point_differential(a, b))
}

/// Order a run of rows that share the same cup points.
fn break_tie(group: &mut [StandingsRow], results: &[MatchResult]) {
    match group.len() {
        0 | 1 => {}
        2 => {
            let order = compare_head_to_head(&group[0], &group[1], results)
                .then_with(|| compare_fallback(&group[0], &group[1]));
            if order == Ordering::Greater {
                group.swap(0, 1);
            }
        }
        _ => group.sort_by(compare_fallback),
    }
}

/// Build the ranked table for `teams` from every played fixture.
///
/// `teams` fixes the residual order for rows that stay level on every
/// criterion. Results naming a team outside `teams` are ignored.
pub fn rank(teams: &[Team], results: &[MatchResult]) -> Vec<StandingsRow> {
    let mut rows: Vec<StandingsRow> = teams.iter().cloned().map(StandingsRow::new).collect();
    let index: HashMap<Team, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.clone(), i))
        .collect();

    for result in results {
        for team in [&result.fixture.team_a, &result.fixture.team_b] {
            if let Some(&i) = index.get(team) {
                rows[i].record(result);
            }
        }
    }

    rows.sort_by(compare_cup_points);

    let mut start = 0;
    while start < rows.len() {
        let points = rows[start].cup_points;
        let end = rows[start..]
            .iter()
            .position(|row| row.cup_points != points)
            .map_or(rows.len(), |offset| start + offset);
        if end - start > 1 {
            debug!(points, tied = end - start, "breaking tie");
        }
        break_tie(&mut rows[start..end], results);
        start = end;
    }

    rows
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
