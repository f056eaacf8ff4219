use super::*;

fn teams(n: usize) -> Vec<Team> {
    (1..=n).map(|i| Team::new(format!("Team {i}"))).collect()
}

#[test]
fn test_eight_teams_fill_seven_weeks() {
    let schedule = ScheduleGenerator::default().generate(&teams(8), 7).unwrap();

    assert_eq!(schedule.rounds().len(), 7);
    for (i, round) in schedule.rounds().iter().enumerate() {
        assert_eq!(round.week, i as u32 + 1);
        assert_eq!(round.fixtures.len(), 4);
        assert!(round.bye.is_none());
    }
    assert_eq!(schedule.fixtures().count(), 28);
}

#[test]
fn test_ordered_generation_keeps_first_team_fixed() {
    let list = teams(8);
    let schedule = ScheduleGenerator::default().generate_ordered(&list).unwrap();

    // The fixed slot leads every round and meets the rotating slots in turn
    let first_opponents: Vec<&Team> = schedule
        .rounds()
        .iter()
        .map(|round| {
            let fixture = &round.fixtures[0];
            assert_eq!(fixture.team_a, list[0]);
            &fixture.team_b
        })
        .collect();
    assert_eq!(first_opponents[0], &list[7]);
    assert_eq!(first_opponents[1], &list[1]);
}

#[test]
fn test_odd_count_gets_one_bye_per_week() {
    let list = teams(7);
    let schedule = ScheduleGenerator::default().generate(&list, 3).unwrap();

    assert_eq!(schedule.rounds().len(), 7);
    let mut byes = HashSet::new();
    for round in schedule.rounds() {
        assert_eq!(round.fixtures.len(), 3);
        let bye = round.bye.clone().expect("every week has a bye");
        assert!(round.fixtures.iter().all(|f| !f.involves(&bye)));
        byes.insert(bye);
    }
    // Each team sits out exactly once
    assert_eq!(byes.len(), 7);
}

#[test]
fn test_odd_count_without_bye_is_rejected() {
    let generator = ScheduleGenerator::new(ScheduleConfig {
        rounds: 7,
        allow_bye: false,
    });
    let err = generator.generate(&teams(7), 1).unwrap_err();
    assert_eq!(err, CupError::InvalidTeamCount { teams: 7, rounds: 7 });
}

#[test]
fn test_team_count_must_match_round_length() {
    let generator = ScheduleGenerator::default();
    assert_eq!(
        generator.generate(&teams(6), 1).unwrap_err(),
        CupError::InvalidTeamCount { teams: 6, rounds: 7 }
    );
    assert_eq!(
        generator.generate(&teams(10), 1).unwrap_err(),
        CupError::InvalidTeamCount { teams: 10, rounds: 7 }
    );
    assert_eq!(
        generator.generate(&teams(1), 1).unwrap_err(),
        CupError::InvalidTeamCount { teams: 1, rounds: 7 }
    );
}

#[test]
fn test_custom_round_count() {
    let generator = ScheduleGenerator::new(ScheduleConfig {
        rounds: 5,
        allow_bye: true,
    });
    assert_eq!(generator.config().rounds, 5);
    let schedule = generator.generate(&teams(6), 11).unwrap();
    assert_eq!(schedule.rounds().len(), 5);
    assert_eq!(schedule.fixtures().count(), 15);
}

#[test]
fn test_duplicate_team_is_rejected() {
    let mut list = teams(7);
    list.push(list[2].clone());
    let err = ScheduleGenerator::default().generate(&list, 1).unwrap_err();
    assert_eq!(err, CupError::DuplicateTeam(Team::from("Team 3")));
}

#[test]
fn test_same_seed_same_schedule() {
    let generator = ScheduleGenerator::default();
    let first = generator.generate(&teams(8), 99).unwrap();
    let second = generator.generate(&teams(8), 99).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_generate_many_validates_each_cup() {
    let list = teams(8);
    let schedules = ScheduleGenerator::default().generate_many(&list, 5, 2024).unwrap();

    assert_eq!(schedules.len(), 5);
    for schedule in &schedules {
        validate_round_robin(schedule, &list).unwrap();
    }
}

#[test]
fn test_validate_rejects_repeated_pair() {
    let list: Vec<Team> = ["A", "B", "C", "D"].into_iter().map(Team::from).collect();
    let schedule = Schedule::from_fixtures(vec![
        Fixture::new(1, "A", "B"),
        Fixture::new(1, "C", "D"),
        Fixture::new(2, "A", "B"),
        Fixture::new(2, "C", "D"),
        Fixture::new(3, "A", "D"),
        Fixture::new(3, "B", "C"),
    ])
    .unwrap();

    let err = validate_round_robin(&schedule, &list).unwrap_err();
    assert!(matches!(err, CupError::InvariantViolation(_)));
}

#[test]
fn test_validate_rejects_double_booking() {
    let list: Vec<Team> = ["A", "B", "C"].into_iter().map(Team::from).collect();
    let schedule = Schedule::from_fixtures(vec![
        Fixture::new(1, "A", "B"),
        Fixture::new(1, "A", "C"),
        Fixture::new(2, "B", "C"),
    ])
    .unwrap();

    let err = validate_round_robin(&schedule, &list).unwrap_err();
    assert_eq!(
        err,
        CupError::InvariantViolation("A plays more than once in week 1".to_string())
    );
}

#[test]
fn test_validate_rejects_unknown_team() {
    let list: Vec<Team> = ["A", "B"].into_iter().map(Team::from).collect();
    let schedule = Schedule::from_fixtures(vec![Fixture::new(1, "A", "Z")]).unwrap();

    assert!(validate_round_robin(&schedule, &list).is_err());
}
