use super::*;

fn score(points: u32) -> WeeklyScore {
    WeeklyScore::new(points, 0)
}

#[test]
fn test_clear_win_for_a() {
    let verdict = evaluate_match(score(70), score(60));
    assert_eq!(verdict, Verdict::Win(Side::A));
    assert_eq!(verdict.cup_points(), (3, 0));
}

#[test]
fn test_margin_of_two_is_a_draw() {
    let verdict = evaluate_match(score(70), score(68));
    assert_eq!(verdict, Verdict::Draw);
    assert_eq!(verdict.cup_points(), (1, 1));
}

#[test]
fn test_margin_of_exactly_three_wins() {
    assert_eq!(evaluate_match(score(70), score(67)), Verdict::Win(Side::A));
    assert_eq!(evaluate_match(score(67), score(70)), Verdict::Win(Side::B));
}

#[test]
fn test_b_side_win_awards_b() {
    let verdict = evaluate_match(score(41), score(58));
    assert_eq!(verdict, Verdict::Win(Side::B));
    assert_eq!(verdict.cup_points(), (0, 3));
}

#[test]
fn test_hits_do_not_change_the_outcome() {
    let verdict = evaluate_match(WeeklyScore::new(70, 12), WeeklyScore::new(69, 0));
    assert_eq!(verdict, Verdict::Draw);
}

#[test]
fn test_match_result_names_the_winner() {
    let fixture = Fixture::new(4, "Alpha", "Beta");
    let result = MatchResult::evaluate(fixture, score(52), score(66));

    assert_eq!(result.winner(), Some(&Team::from("Beta")));
    assert_eq!(result.cup_points_for(&Team::from("Beta")), Some(3));
    assert_eq!(result.cup_points_for(&Team::from("Alpha")), Some(0));
    assert_eq!(result.cup_points_for(&Team::from("Gamma")), None);
    assert_eq!(result.score_of(&Team::from("Beta")), Some(score(66)));
    assert_eq!(result.opponent_score_of(&Team::from("Beta")), Some(score(52)));
}

#[test]
fn test_drawn_result() {
    let result = MatchResult::evaluate(Fixture::new(1, "Alpha", "Beta"), score(60), score(61));

    assert!(result.is_draw());
    assert_eq!(result.winner(), None);
    assert_eq!(result.cup_points_for(&Team::from("Alpha")), Some(1));
    assert_eq!(result.cup_points_for(&Team::from("Beta")), Some(1));
}
