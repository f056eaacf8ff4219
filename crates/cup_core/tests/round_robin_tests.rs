//! Property tests for round-robin generation
//!
//! For every valid team count the generated schedule must:
//! - contain each unordered pair exactly once
//! - give each team at most one fixture per week
//! - give each team exactly one bye when the count is odd

use cup_core::{validate_round_robin, ScheduleConfig, ScheduleGenerator, Team};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("T{i:02}"))).collect()
}

/// Generator whose round count matches `n` teams (padding odd counts with a bye)
fn generator_for(n: usize) -> ScheduleGenerator {
    let slots = n + n % 2;
    ScheduleGenerator::new(ScheduleConfig {
        rounds: (slots - 1) as u32,
        allow_bye: true,
    })
}

// =============================================================================
// Pair coverage
// =============================================================================

proptest! {
    #[test]
    fn every_pair_meets_exactly_once(n in 2usize..=24, seed in any::<u64>()) {
        let list = teams(n);
        let schedule = generator_for(n).generate(&list, seed).unwrap();

        let mut meetings: HashMap<(String, String), u32> = HashMap::new();
        for fixture in schedule.fixtures() {
            let (a, b) = (fixture.team_a.to_string(), fixture.team_b.to_string());
            let key = if a < b { (a, b) } else { (b, a) };
            *meetings.entry(key).or_insert(0) += 1;
        }

        prop_assert_eq!(meetings.len(), n * (n - 1) / 2);
        prop_assert!(meetings.values().all(|&count| count == 1));
        prop_assert!(validate_round_robin(&schedule, &list).is_ok());
    }

    #[test]
    fn nobody_plays_twice_in_a_week(n in 2usize..=24, seed in any::<u64>()) {
        let schedule = generator_for(n).generate(&teams(n), seed).unwrap();

        for round in schedule.rounds() {
            let mut busy = HashSet::new();
            for fixture in &round.fixtures {
                prop_assert!(busy.insert(fixture.team_a.clone()));
                prop_assert!(busy.insert(fixture.team_b.clone()));
            }
            if let Some(bye) = &round.bye {
                prop_assert!(!busy.contains(bye));
            }
        }
    }
}

// =============================================================================
// Byes
// =============================================================================

proptest! {
    #[test]
    fn odd_counts_give_each_team_one_bye(half in 1usize..=11, seed in any::<u64>()) {
        let n = half * 2 + 1;
        let schedule = generator_for(n).generate(&teams(n), seed).unwrap();

        let byes: Vec<&Team> = schedule.rounds().iter().filter_map(|r| r.bye.as_ref()).collect();
        let unique: HashSet<&Team> = byes.iter().copied().collect();
        prop_assert_eq!(byes.len(), n);
        prop_assert_eq!(unique.len(), n);
    }
}

#[test]
fn test_default_cup_needs_eight_teams() {
    let generator = ScheduleGenerator::default();
    assert!(generator.generate(&teams(8), 5).is_ok());
    assert!(generator.generate(&teams(7), 5).is_ok());
    assert!(generator.generate(&teams(9), 5).is_err());
    assert!(generator.generate(&teams(4), 5).is_err());
}
