//! Data plumbing around the cup engine
//!
//! This crate provides:
//! - League configuration from `league.toml`
//! - Reading `weeks.csv`, `teams.txt` and `tournament_<n>.csv`
//! - Current week and deadline detection from `deadlines.txt`
//! - Merging live scores into the current week
//! - Plain-text reports
//!
//! # Usage
//!
//! ```bash
//! # Generate five cup schedules from teams.txt
//! cargo run -p cup_runner -- generate --cups 5 --seed 2025
//!
//! # Show cup 2 with live scores merged in
//! cargo run -p cup_runner -- view 2 --live live.json
//! ```

mod config;
mod deadline;
mod live;
mod report;
mod storage;

pub use config::*;
pub use deadline::*;
pub use live::*;
pub use report::*;
pub use storage::*;
