//! Composition of schedule, scores and standings into a cup view

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::cup::{Cup, CupWeeks};
use crate::error::{CupError, Result};
use crate::evaluate::{MatchResult, Outcome};
use crate::standings::{rank, StandingsRow};
use crate::types::{Cutoff, Fixture, Schedule, ScoreTable, Team, WeeklyScore};

/// State of one fixture in the weekly view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureStatus {
    Played {
        points_a: u32,
        points_b: u32,
        outcome: Outcome,
    },
    NotYetPlayed,
}

impl fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureStatus::Played {
                points_a,
                points_b,
                outcome: Outcome::Win(team),
            } => write!(f, "{points_a}-{points_b} (Win {team})"),
            FixtureStatus::Played {
                points_a,
                points_b,
                outcome: Outcome::Draw,
            } => write!(f, "{points_a}-{points_b} (Draw)"),
            FixtureStatus::NotYetPlayed => f.write_str("Not yet played"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureView {
    pub team_a: Team,
    pub team_b: Team,
    pub status: FixtureStatus,
    /// Human-readable form of `status`
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekView {
    pub week: u32,
    pub is_current: bool,
    pub fixtures: Vec<FixtureView>,
}

/// Everything needed to show one cup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupView {
    pub cup: CupWeeks,
    pub cutoff: Option<Cutoff>,
    pub standings: Vec<StandingsRow>,
    /// Newest week first
    pub weeks: Vec<WeekView>,
}

/// Stateless driver for standings and cup views.
///
/// With a [`Cutoff`] set, fixtures in weeks that have not started are treated
/// as unplayed even when scores exist for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct CupEngine {
    cutoff: Option<Cutoff>,
}

impl CupEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cutoff(mut self, cutoff: Cutoff) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn cutoff(&self) -> Option<Cutoff> {
        self.cutoff
    }

    /// Both scores of a fixture, or `None` if it is unplayed.
    pub fn fixture_scores(
        &self,
        fixture: &Fixture,
        scores: &ScoreTable,
    ) -> Option<(WeeklyScore, WeeklyScore)> {
        if let Some(cutoff) = self.cutoff {
            if !cutoff.has_started(fixture.week) {
                return None;
            }
        }
        let a = scores.score(&fixture.team_a, fixture.week)?;
        let b = scores.score(&fixture.team_b, fixture.week)?;
        if a.is_sentinel() || b.is_sentinel() {
            return None;
        }
        Some((a, b))
    }

    /// Evaluate every played fixture of `schedule`, in schedule order.
    pub fn match_results(
        &self,
        schedule: &Schedule,
        scores: &ScoreTable,
    ) -> Result<Vec<MatchResult>> {
        check_teams_present(schedule, scores)?;

        let mut results = Vec::new();
        for fixture in schedule.fixtures() {
            match self.fixture_scores(fixture, scores) {
                Some((a, b)) => results.push(MatchResult::evaluate(fixture.clone(), a, b)),
                None => debug!(
                    week = fixture.week,
                    team_a = %fixture.team_a,
                    team_b = %fixture.team_b,
                    "fixture not played yet"
                ),
            }
        }
        Ok(results)
    }

    pub fn compute_standings(
        &self,
        schedule: &Schedule,
        scores: &ScoreTable,
    ) -> Result<Vec<StandingsRow>> {
        let results = self.match_results(schedule, scores)?;
        Ok(rank(&schedule.teams(), &results))
    }

    /// Standings plus the annotated weekly fixtures for `cup`.
    pub fn view(&self, cup: &Cup, scores: &ScoreTable) -> Result<CupView> {
        let schedule = cup.schedule();
        let standings = self.compute_standings(schedule, scores)?;

        let weeks = cup
            .weeks()
            .weeks()
            .rev()
            .filter(|&week| self.cutoff.map_or(true, |c| week <= c.current_week))
            .map(|week| self.week_view(schedule, scores, week))
            .collect();

        Ok(CupView {
            cup: *cup.weeks(),
            cutoff: self.cutoff,
            standings,
            weeks,
        })
    }

    pub fn build_cup_view(
        &self,
        cup_number: u32,
        schedule: &Schedule,
        scores: &ScoreTable,
    ) -> Result<CupView> {
        let cup = Cup::new(cup_number, schedule.clone())?;
        self.view(&cup, scores)
    }

    fn week_view(&self, schedule: &Schedule, scores: &ScoreTable, week: u32) -> WeekView {
        let fixtures = schedule
            .fixtures()
            .filter(|f| f.week == week)
            .map(|fixture| {
                let status = match self.fixture_scores(fixture, scores) {
                    Some((a, b)) => {
                        let result = MatchResult::evaluate(fixture.clone(), a, b);
                        FixtureStatus::Played {
                            points_a: a.points,
                            points_b: b.points,
                            outcome: result.outcome,
                        }
                    }
                    None => FixtureStatus::NotYetPlayed,
                };
                FixtureView {
                    team_a: fixture.team_a.clone(),
                    team_b: fixture.team_b.clone(),
                    summary: status.to_string(),
                    status,
                }
            })
            .collect();

        WeekView {
            week,
            is_current: self.cutoff.is_some_and(|c| c.current_week == week),
            fixtures,
        }
    }
}

fn check_teams_present(schedule: &Schedule, scores: &ScoreTable) -> Result<()> {
    match schedule.teams().into_iter().find(|t| !scores.contains_team(t)) {
        Some(team) => Err(CupError::MissingData(team)),
        None => Ok(()),
    }
}

/// Standings for a stored schedule with no week cutoff.
pub fn compute_standings(schedule: &Schedule, scores: &ScoreTable) -> Result<Vec<StandingsRow>> {
    CupEngine::new().compute_standings(schedule, scores)
}

/// Cup view for a stored schedule with no week cutoff.
pub fn build_cup_view(cup_number: u32, schedule: &Schedule, scores: &ScoreTable) -> Result<CupView> {
    CupEngine::new().build_cup_view(cup_number, schedule, scores)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
