//! Merging live gameweek scores into the stored table
//!
//! Live entries come from the league site with display names that may not
//! match the canonical ones exactly, so names are reconciled loosely here
//! before anything reaches the engine.

use anyhow::{Context, Result};
use cup_core::{ScoreTable, Team, WeeklyScore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// One team's live score as published for the running gameweek
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveEntry {
    pub team_name: String,
    #[serde(default)]
    pub live_points: u32,
    #[serde(default)]
    pub hits: u32,
}

/// Which canonical teams took a live value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    pub matched: Vec<Team>,
    pub unmatched_entries: Vec<String>,
}

/// Case-insensitive match where either name contains the other
pub fn names_match(canonical: &str, live: &str) -> bool {
    let canonical = canonical.to_lowercase();
    let live = live.to_lowercase();
    canonical.contains(&live) || live.contains(&canonical)
}

/// Load live entries from a JSON array
pub fn read_live(path: &Path) -> Result<Vec<LiveEntry>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read live scores: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse live scores: {}", path.display()))
}

/// Overwrite `week` for every table team that has a matching live entry.
///
/// Each team takes the first entry with exactly its name (ignoring case), or
/// failing that the first entry whose name matches loosely. Entries that match
/// no team are reported and otherwise ignored.
pub fn merge_live(table: &mut ScoreTable, entries: &[LiveEntry], week: u32) -> MergeReport {
    let mut report = MergeReport::default();
    let mut used = vec![false; entries.len()];

    for team in table.teams().to_vec() {
        let canonical = team.name().to_lowercase();
        let exact = entries
            .iter()
            .position(|entry| entry.team_name.to_lowercase() == canonical);
        let Some(i) = exact.or_else(|| {
            entries
                .iter()
                .position(|entry| names_match(team.name(), &entry.team_name))
        }) else {
            continue;
        };
        let entry = &entries[i];
        debug!(team = %team, live = %entry.team_name, points = entry.live_points, "merged live score");
        table.insert(team.clone(), week, WeeklyScore::new(entry.live_points, entry.hits));
        used[i] = true;
        report.matched.push(team);
    }

    for (entry, used) in entries.iter().zip(used) {
        if !used {
            warn!(live = %entry.team_name, "live entry matches no team");
            report.unmatched_entries.push(entry.team_name.clone());
        }
    }
    report
}

#[cfg(test)]
#[path = "live_tests.rs"]
mod live_tests;
