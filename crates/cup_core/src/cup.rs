//! Cup numbering and week ranges

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{CupError, Result};
use crate::schedule::ROUND_LENGTH;
use crate::types::Schedule;

/// Week range covered by a cup: cup `n` runs weeks `(n-1)*7+1 ..= n*7`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupWeeks {
    pub number: u32,
    pub start_week: u32,
    pub end_week: u32,
}

impl CupWeeks {
    pub fn new(number: u32) -> Result<Self> {
        let end_week = number
            .checked_mul(ROUND_LENGTH)
            .filter(|_| number > 0)
            .ok_or(CupError::InvalidCupNumber(number))?;
        Ok(Self {
            number,
            start_week: end_week - ROUND_LENGTH + 1,
            end_week,
        })
    }

    pub fn weeks(&self) -> RangeInclusive<u32> {
        self.start_week..=self.end_week
    }

    pub fn contains(&self, week: u32) -> bool {
        self.weeks().contains(&week)
    }
}

/// A numbered cup and the schedule it is played on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cup {
    weeks: CupWeeks,
    schedule: Schedule,
}

impl Cup {
    /// Wrap a stored schedule whose weeks are already absolute gameweeks.
    pub fn new(number: u32, schedule: Schedule) -> Result<Self> {
        let weeks = CupWeeks::new(number)?;
        if let Some(fixture) = schedule.fixtures().find(|f| !weeks.contains(f.week)) {
            return Err(CupError::FixtureOutsideCup {
                cup: number,
                week: fixture.week,
                start: weeks.start_week,
                end: weeks.end_week,
            });
        }
        Ok(Self { weeks, schedule })
    }

    /// Place a freshly generated schedule (weeks `1..=7`) on cup `number`'s weeks.
    pub fn from_generated(number: u32, schedule: Schedule) -> Result<Self> {
        let weeks = CupWeeks::new(number)?;
        Self::new(number, schedule.shifted(weeks.start_week - 1)?)
    }

    pub fn number(&self) -> u32 {
        self.weeks.number
    }

    pub fn weeks(&self) -> &CupWeeks {
        &self.weeks
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

#[cfg(test)]
#[path = "cup_tests.rs"]
mod cup_tests;
