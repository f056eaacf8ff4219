//! Current gameweek detection from the deadline calendar

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDateTime;
use cup_core::Cutoff;
use std::path::Path;
use tracing::warn;

/// Timestamp format used in the deadlines file, e.g. `2025-08-30, 17:00`
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d, %H:%M";

/// One line of the deadlines file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    pub week: u32,
    /// `None` when the timestamp could not be parsed
    pub at: Option<NaiveDateTime>,
}

impl Deadline {
    /// An unreadable timestamp counts as already passed.
    pub fn has_passed(&self, now: NaiveDateTime) -> bool {
        self.at.map_or(true, |at| now >= at)
    }

    pub fn cutoff(&self, now: NaiveDateTime) -> Cutoff {
        Cutoff::new(self.week, self.has_passed(now))
    }
}

/// Parse a `<week>: <YYYY-MM-DD>, <HH:MM>` line
pub fn parse_deadline_line(line: &str) -> Result<Deadline> {
    let (week, when) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("Deadline line '{line}' has no week separator"))?;
    let week = week
        .trim()
        .parse::<u32>()
        .with_context(|| format!("Invalid week in deadline line '{line}'"))?;

    let at = match NaiveDateTime::parse_from_str(when.trim(), DEADLINE_FORMAT) {
        Ok(at) => Some(at),
        Err(err) => {
            warn!(week, %err, "unparseable deadline, treating it as passed");
            None
        }
    };
    Ok(Deadline { week, at })
}

/// The latest deadline listed in the file: its last non-blank line.
pub fn read_latest_deadline(path: &Path) -> Result<Deadline> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read deadlines: {}", path.display()))?;
    let line = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .ok_or_else(|| anyhow!("Deadlines file {} is empty", path.display()))?;
    parse_deadline_line(line)
}

/// Cutoff for `now`, falling back to week 1 with its deadline passed when the
/// calendar cannot be read.
pub fn current_cutoff(path: &Path, now: NaiveDateTime) -> Cutoff {
    match read_latest_deadline(path) {
        Ok(deadline) => deadline.cutoff(now),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "falling back to week 1");
            Cutoff::new(1, true)
        }
    }
}

#[cfg(test)]
#[path = "deadline_tests.rs"]
mod deadline_tests;
