//! Round-robin schedule generation and validation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

use crate::error::{CupError, Result};
use crate::types::{Fixture, Round, Schedule, Team};

/// Number of gameweeks in every cup
pub const ROUND_LENGTH: u32 = 7;

/// Generator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Rounds (weeks) the schedule must cover
    pub rounds: u32,
    /// Pad an odd team list with a bye slot instead of rejecting it
    pub allow_bye: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            rounds: ROUND_LENGTH,
            allow_bye: true,
        }
    }
}

/// Builds round-robin schedules with the circle method
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: ScheduleConfig,
}

impl ScheduleGenerator {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Shuffle the teams with `seed`, then build and validate a schedule.
    ///
    /// Weeks are numbered `1..=rounds`; use [`Schedule::shifted`] to place the
    /// schedule on a cup's week range.
    pub fn generate(&self, teams: &[Team], seed: u64) -> Result<Schedule> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with(teams, &mut rng)
    }

    /// Independent schedules, one per cup, drawn from a single seeded RNG.
    pub fn generate_many(&self, teams: &[Team], count: u32, seed: u64) -> Result<Vec<Schedule>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (1..=count)
            .map(|cup| {
                let schedule = self.generate_with(teams, &mut rng)?;
                debug!(cup, "generated independent schedule");
                Ok(schedule)
            })
            .collect()
    }

    /// Build a schedule keeping the given order: `teams[0]` is the fixed slot.
    pub fn generate_ordered(&self, teams: &[Team]) -> Result<Schedule> {
        check_distinct(teams)?;

        let mut slots: Vec<Option<&Team>> = teams.iter().map(Some).collect();
        if slots.len() % 2 == 1 && self.config.allow_bye {
            slots.push(None);
        }

        let n = slots.len();
        if teams.len() < 2 || n % 2 == 1 || (n - 1) as u32 != self.config.rounds {
            return Err(CupError::InvalidTeamCount {
                teams: teams.len(),
                rounds: self.config.rounds,
            });
        }

        let fixed = slots[0];
        let mut rotating = slots[1..].to_vec();
        let last = rotating.len() - 1;
        let mut rounds = Vec::with_capacity(n - 1);

        for week in 1..=self.config.rounds {
            let mut pairs = Vec::with_capacity(n / 2);
            pairs.push((fixed, rotating[last]));
            for i in 1..n / 2 {
                pairs.push((rotating[i - 1], rotating[last - i]));
            }

            let mut fixtures = Vec::with_capacity(n / 2);
            let mut bye = None;
            for pair in pairs {
                match pair {
                    (Some(a), Some(b)) => fixtures.push(Fixture::new(week, a.clone(), b.clone())),
                    (Some(team), None) | (None, Some(team)) => bye = Some(team.clone()),
                    (None, None) => {}
                }
            }

            rounds.push(Round {
                week,
                fixtures,
                bye,
            });
            rotating.rotate_left(1);
        }

        let schedule = Schedule::from_rounds(rounds);
        validate_round_robin(&schedule, teams)?;

        info!(
            teams = teams.len(),
            rounds = self.config.rounds,
            fixtures = schedule.fixtures().count(),
            "generated round-robin schedule"
        );
        Ok(schedule)
    }

    fn generate_with(&self, teams: &[Team], rng: &mut StdRng) -> Result<Schedule> {
        let mut order = teams.to_vec();
        order.shuffle(rng);
        self.generate_ordered(&order)
    }
}

fn check_distinct(teams: &[Team]) -> Result<()> {
    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team) {
            return Err(CupError::DuplicateTeam(team.clone()));
        }
    }
    Ok(())
}

/// Check that `schedule` is a single round robin over `teams`.
///
/// Every unordered pair must meet exactly once, no team may play twice in a
/// week, and no fixture may name a team outside `teams` or a team twice.
pub fn validate_round_robin(schedule: &Schedule, teams: &[Team]) -> Result<()> {
    let known: HashSet<&Team> = teams.iter().collect();
    let mut meetings: BTreeMap<(&Team, &Team), u32> = BTreeMap::new();

    for round in schedule.rounds() {
        let mut busy = HashSet::new();
        for fixture in &round.fixtures {
            let (a, b) = (&fixture.team_a, &fixture.team_b);
            if a == b {
                return Err(CupError::InvariantViolation(format!(
                    "{a} is paired with itself in week {}",
                    round.week
                )));
            }
            for team in [a, b] {
                if !known.contains(team) {
                    return Err(CupError::InvariantViolation(format!(
                        "unknown team {team} in week {}",
                        round.week
                    )));
                }
                if !busy.insert(team) {
                    return Err(CupError::InvariantViolation(format!(
                        "{team} plays more than once in week {}",
                        round.week
                    )));
                }
            }
            let key = if a < b { (a, b) } else { (b, a) };
            *meetings.entry(key).or_insert(0) += 1;
        }
    }

    for (i, a) in teams.iter().enumerate() {
        for b in &teams[i + 1..] {
            let key = if a < b { (a, b) } else { (b, a) };
            let count = meetings.get(&key).copied().unwrap_or(0);
            if count != 1 {
                return Err(CupError::InvariantViolation(format!(
                    "{a} and {b} meet {count} times, expected once"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
