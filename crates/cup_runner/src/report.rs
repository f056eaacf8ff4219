//! Plain-text cup reports

use cup_core::{CupView, StandingsRow};

/// Standings table with one line per team
pub fn standings_report(rows: &[StandingsRow]) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>5} {:>5} {:>4}\n",
        "#", "Team", "P", "W", "D", "L", "Diff", "Hits", "Pts"
    ));
    report.push_str(&"-".repeat(64));
    report.push('\n');

    for (i, row) in rows.iter().enumerate() {
        report.push_str(&format!(
            "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>+5} {:>5} {:>4}\n",
            i + 1,
            row.team.name(),
            row.played,
            row.wins,
            row.draws,
            row.losses,
            row.point_differential,
            row.total_hits,
            row.cup_points
        ));
    }

    report
}

/// Full cup report: header, standings, then results newest week first
pub fn cup_report(league: &str, view: &CupView) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "=== {}: Cup {} (weeks {}-{}) ===\n",
        league, view.cup.number, view.cup.start_week, view.cup.end_week
    ));
    if let Some(cutoff) = view.cutoff {
        let state = if cutoff.deadline_passed {
            "deadline passed"
        } else {
            "before deadline"
        };
        report.push_str(&format!("Current week: {} ({})\n", cutoff.current_week, state));
    }
    report.push('\n');

    report.push_str(&standings_report(&view.standings));

    for week in &view.weeks {
        report.push('\n');
        let marker = if week.is_current { " (current)" } else { "" };
        report.push_str(&format!("Week {}{}\n", week.week, marker));
        if week.fixtures.is_empty() {
            report.push_str("  no fixtures\n");
        }
        for fixture in &week.fixtures {
            report.push_str(&format!(
                "  {:<24} vs {:<24} {}\n",
                fixture.team_a.name(),
                fixture.team_b.name(),
                fixture.summary
            ));
        }
    }

    report
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
