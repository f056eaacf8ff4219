use super::*;

#[test]
fn test_from_fixtures_groups_by_week() {
    let schedule = Schedule::from_fixtures(vec![
        Fixture::new(2, "C", "D"),
        Fixture::new(1, "A", "B"),
        Fixture::new(2, "A", "B"),
        Fixture::new(1, "C", "D"),
    ])
    .unwrap();

    let weeks: Vec<u32> = schedule.weeks().collect();
    assert_eq!(weeks, vec![1, 2]);
    assert_eq!(schedule.rounds()[1].fixtures[0], Fixture::new(2, "C", "D"));
    assert_eq!(schedule.fixtures().count(), 4);
}

#[test]
fn test_from_fixtures_rejects_self_match() {
    let err = Schedule::from_fixtures(vec![Fixture::new(3, "A", "A")]).unwrap_err();
    assert_eq!(
        err,
        CupError::SelfMatch {
            week: 3,
            team: Team::from("A")
        }
    );
}

#[test]
fn test_teams_in_first_appearance_order() {
    let schedule = Schedule::from_fixtures(vec![
        Fixture::new(1, "B", "A"),
        Fixture::new(1, "D", "C"),
        Fixture::new(2, "A", "C"),
    ])
    .unwrap();

    let names: Vec<String> = schedule.teams().iter().map(|t| t.to_string()).collect();
    assert_eq!(names, vec!["B", "A", "D", "C"]);
}

#[test]
fn test_shifted_moves_rounds_and_fixtures() {
    let schedule = Schedule::from_fixtures(vec![Fixture::new(1, "A", "B")]).unwrap();
    let shifted = schedule.shifted(14).unwrap();

    assert_eq!(shifted.rounds()[0].week, 15);
    assert_eq!(shifted.rounds()[0].fixtures[0].week, 15);
}

#[test]
fn test_shifted_past_last_week_is_an_error() {
    let schedule = Schedule::from_fixtures(vec![Fixture::new(3, "A", "B")]).unwrap();
    assert_eq!(
        schedule.shifted(u32::MAX - 1).unwrap_err(),
        CupError::WeekOutOfRange {
            week: 3,
            offset: u32::MAX - 1
        }
    );
}

#[test]
fn test_empty_schedule() {
    assert!(Schedule::default().is_empty());
    let schedule = Schedule::from_fixtures(vec![Fixture::new(1, "A", "B")]).unwrap();
    assert!(!schedule.is_empty());
}

#[test]
fn test_score_table_keeps_insertion_order() {
    let mut table = ScoreTable::new();
    table.insert(Team::from("Zeta"), 1, WeeklyScore::new(50, 0));
    table.add_team(Team::from("Alpha"));
    table.insert(Team::from("Zeta"), 2, WeeklyScore::new(61, 4));

    assert_eq!(table.teams(), &[Team::from("Zeta"), Team::from("Alpha")]);
    assert_eq!(
        table.score(&Team::from("Zeta"), 2),
        Some(WeeklyScore::new(61, 4))
    );
    assert!(table.contains_team(&Team::from("Alpha")));
    assert_eq!(table.score(&Team::from("Alpha"), 1), None);

    let zeta: Vec<u32> = table
        .team_weeks(&Team::from("Zeta"))
        .unwrap()
        .keys()
        .copied()
        .collect();
    assert_eq!(zeta, vec![1, 2]);
    assert!(table.team_weeks(&Team::from("Alpha")).unwrap().is_empty());
    assert!(table.team_weeks(&Team::from("Omega")).is_none());
}

#[test]
fn test_sentinel_score() {
    assert!(WeeklyScore::new(0, 0).is_sentinel());
    assert!(!WeeklyScore::new(0, 4).is_sentinel());
    assert!(!WeeklyScore::new(12, 0).is_sentinel());
}

#[test]
fn test_cutoff_has_started() {
    let before_deadline = Cutoff::new(5, false);
    assert!(before_deadline.has_started(4));
    assert!(!before_deadline.has_started(5));
    assert!(!before_deadline.has_started(6));

    let after_deadline = Cutoff::new(5, true);
    assert!(after_deadline.has_started(5));
    assert!(!after_deadline.has_started(6));
}
