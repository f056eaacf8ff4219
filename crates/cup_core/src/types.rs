//! Value types shared by the scheduler, evaluator and standings

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use crate::error::{CupError, Result};

/// Canonical team identifier, unique within a tournament
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Team {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Team {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One team's result for one gameweek
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyScore {
    /// Fantasy points scored in the week
    pub points: u32,
    /// Transfer penalties taken in the week
    pub hits: u32,
}

impl WeeklyScore {
    pub fn new(points: u32, hits: u32) -> Self {
        Self { points, hits }
    }

    /// `0:0` is what the data source writes for a week with no data.
    pub fn is_sentinel(&self) -> bool {
        self.points == 0 && self.hits == 0
    }
}

/// A single pairing in a given week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub week: u32,
    pub team_a: Team,
    pub team_b: Team,
}

impl Fixture {
    pub fn new(week: u32, team_a: impl Into<Team>, team_b: impl Into<Team>) -> Self {
        Self {
            week,
            team_a: team_a.into(),
            team_b: team_b.into(),
        }
    }

    pub fn involves(&self, team: &Team) -> bool {
        &self.team_a == team || &self.team_b == team
    }

    /// True when this fixture is between exactly these two teams, in either order.
    pub fn is_between(&self, a: &Team, b: &Team) -> bool {
        (&self.team_a == a && &self.team_b == b) || (&self.team_a == b && &self.team_b == a)
    }
}

/// All fixtures of one week, plus the team sitting out if the count is odd
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub week: u32,
    pub fixtures: Vec<Fixture>,
    pub bye: Option<Team>,
}

/// Ordered rounds of a tournament
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    rounds: Vec<Round>,
}

impl Schedule {
    pub(crate) fn from_rounds(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    /// Group flat `(week, team_a, team_b)` rows, as stored by the caller, into rounds.
    pub fn from_fixtures(fixtures: impl IntoIterator<Item = Fixture>) -> Result<Self> {
        let mut by_week: BTreeMap<u32, Vec<Fixture>> = BTreeMap::new();
        for fixture in fixtures {
            if fixture.team_a == fixture.team_b {
                return Err(CupError::SelfMatch {
                    week: fixture.week,
                    team: fixture.team_a,
                });
            }
            by_week.entry(fixture.week).or_default().push(fixture);
        }

        let rounds = by_week
            .into_iter()
            .map(|(week, fixtures)| Round {
                week,
                fixtures,
                bye: None,
            })
            .collect();
        Ok(Self { rounds })
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.rounds.iter().flat_map(|round| round.fixtures.iter())
    }

    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.rounds.iter().map(|round| round.week)
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.iter().all(|round| round.fixtures.is_empty())
    }

    /// Every team in the schedule, in order of first appearance.
    pub fn teams(&self) -> Vec<Team> {
        let mut seen = HashSet::new();
        let mut teams = Vec::new();
        for round in &self.rounds {
            let playing = round
                .fixtures
                .iter()
                .flat_map(|f| [&f.team_a, &f.team_b])
                .chain(round.bye.iter());
            for team in playing {
                if seen.insert(team.clone()) {
                    teams.push(team.clone());
                }
            }
        }
        teams
    }

    /// Same pairings with every week moved forward by `offset`.
    pub fn shifted(&self, offset: u32) -> Result<Self> {
        let shift = |week: u32| {
            week.checked_add(offset)
                .ok_or(CupError::WeekOutOfRange { week, offset })
        };
        let mut rounds = Vec::with_capacity(self.rounds.len());
        for round in &self.rounds {
            let fixtures = round
                .fixtures
                .iter()
                .map(|f| {
                    Ok(Fixture {
                        week: shift(f.week)?,
                        ..f.clone()
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rounds.push(Round {
                week: shift(round.week)?,
                fixtures,
                bye: round.bye.clone(),
            });
        }
        Ok(Self { rounds })
    }
}

/// Ordered mapping of team -> week -> score, as handed over by the data layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    order: Vec<Team>,
    weeks: HashMap<Team, BTreeMap<u32, WeeklyScore>>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team row, even if it has no weekly values yet.
    pub fn add_team(&mut self, team: Team) {
        if !self.weeks.contains_key(&team) {
            self.order.push(team.clone());
            self.weeks.insert(team, BTreeMap::new());
        }
    }

    /// Set (or overwrite) one team's score for a week.
    pub fn insert(&mut self, team: Team, week: u32, score: WeeklyScore) {
        self.add_team(team.clone());
        if let Some(row) = self.weeks.get_mut(&team) {
            row.insert(week, score);
        }
    }

    pub fn contains_team(&self, team: &Team) -> bool {
        self.weeks.contains_key(team)
    }

    pub fn score(&self, team: &Team, week: u32) -> Option<WeeklyScore> {
        self.weeks.get(team).and_then(|row| row.get(&week)).copied()
    }

    pub fn team_weeks(&self, team: &Team) -> Option<&BTreeMap<u32, WeeklyScore>> {
        self.weeks.get(team)
    }

    /// Teams in insertion order.
    pub fn teams(&self) -> &[Team] {
        &self.order
    }
}

/// Which gameweeks have started, from the deadline calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cutoff {
    pub current_week: u32,
    pub deadline_passed: bool,
}

impl Cutoff {
    pub fn new(current_week: u32, deadline_passed: bool) -> Self {
        Self {
            current_week,
            deadline_passed,
        }
    }

    /// Past weeks have started; the current one only once its deadline is gone.
    pub fn has_started(&self, week: u32) -> bool {
        week < self.current_week || (week == self.current_week && self.deadline_passed)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
