//! Reading and writing the league's CSV and text files
//!
//! `weeks.csv` stores one row per team and one column per gameweek, each cell
//! holding `points:hits`. Cells are parsed here, once, into [`WeeklyScore`] so
//! the engine never sees raw strings.

use anyhow::{bail, Context, Result};
use cup_core::{Fixture, Schedule, ScoreTable, Team, WeeklyScore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// One stored fixture row of `tournament_<n>.csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ScheduleRow {
    #[serde(rename = "Week")]
    week: u32,
    #[serde(rename = "Team1")]
    team1: String,
    #[serde(rename = "Team2")]
    team2: String,
}

/// File holding the stored schedule of cup `cup`
pub fn schedule_path(dir: &Path, cup: u32) -> PathBuf {
    dir.join(format!("tournament_{cup}.csv"))
}

/// Read team names, one per non-blank line
pub fn read_teams(path: &Path) -> Result<Vec<Team>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read teams file: {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Team::from)
        .collect())
}

/// Parse a `points:hits` cell. A bare number means no hits, an empty cell no data.
pub fn parse_score_cell(cell: &str) -> Result<Option<WeeklyScore>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }

    let (points, hits) = match cell.split_once(':') {
        Some((points, hits)) => (points.trim(), hits.trim()),
        None => (cell, "0"),
    };
    let points = points
        .parse::<u32>()
        .with_context(|| format!("Invalid points in cell '{cell}'"))?;
    let hits = hits
        .parse::<u32>()
        .with_context(|| format!("Invalid hits in cell '{cell}'"))?;
    Ok(Some(WeeklyScore::new(points, hits)))
}

/// Read the weekly score table. The first column is the team, the rest are weeks.
pub fn read_weeks(path: &Path) -> Result<ScoreTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open weeks file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header of {}", path.display()))?
        .clone();
    let weeks: Vec<u32> = headers
        .iter()
        .skip(1)
        .map(|header| {
            header
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Week column '{header}' is not a number"))
        })
        .collect::<Result<_>>()?;

    let mut table = ScoreTable::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Bad row {} in {}", line + 2, path.display()))?;
        let Some(name) = record.get(0).map(str::trim).filter(|name| !name.is_empty()) else {
            continue;
        };
        let team = Team::from(name);
        table.add_team(team.clone());

        for (cell, &week) in record.iter().skip(1).zip(&weeks) {
            let score = parse_score_cell(cell)
                .with_context(|| format!("Team '{name}', week {week}"))?;
            if let Some(score) = score {
                table.insert(team.clone(), week, score);
            }
        }
    }

    info!(
        teams = table.teams().len(),
        weeks = weeks.len(),
        "loaded weekly scores"
    );
    Ok(table)
}

/// Read a stored `Week,Team1,Team2` schedule
pub fn read_schedule(path: &Path) -> Result<Schedule> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open schedule: {}", path.display()))?;

    let mut fixtures = Vec::new();
    for row in reader.deserialize::<ScheduleRow>() {
        let row = row.with_context(|| format!("Bad fixture row in {}", path.display()))?;
        fixtures.push(Fixture::new(row.week, row.team1, row.team2));
    }
    if fixtures.is_empty() {
        bail!("Schedule {} has no fixtures", path.display());
    }

    Schedule::from_fixtures(fixtures)
        .with_context(|| format!("Invalid schedule: {}", path.display()))
}

/// Write a schedule as `Week,Team1,Team2` rows. Byes are not stored.
pub fn write_schedule(path: &Path, schedule: &Schedule) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create schedule: {}", path.display()))?;
    for fixture in schedule.fixtures() {
        writer
            .serialize(ScheduleRow {
                week: fixture.week,
                team1: fixture.team_a.to_string(),
                team2: fixture.team_b.to_string(),
            })
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
