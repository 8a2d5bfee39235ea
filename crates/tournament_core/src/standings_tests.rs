use super::*;

fn teams(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_win_and_loss() {
    let table = Standings::new(&teams(&["Arsenal", "Chelsea"]));
    let fixture = Fixture::new("Arsenal", "Chelsea");

    let table = table.apply_result(&fixture, 3, 1).unwrap();
    let home = table.get("Arsenal").unwrap();
    let away = table.get("Chelsea").unwrap();

    assert_eq!((home.played, home.won, home.lost), (1, 1, 0));
    assert_eq!((home.goals_for, home.goals_against, home.goal_difference), (3, 1, 2));
    assert_eq!(home.points, WIN_POINTS);

    assert_eq!((away.played, away.won, away.lost), (1, 0, 1));
    assert_eq!(away.goal_difference, -2);
    assert_eq!(away.points, 0);
}

#[test]
fn test_draw_gives_both_a_point() {
    let table = Standings::new(&teams(&["Everton", "Fulham"]));
    let table = table
        .apply_result(&Fixture::new("Everton", "Fulham"), 2, 2)
        .unwrap();

    for team in ["Everton", "Fulham"] {
        let s = table.get(team).unwrap();
        assert_eq!(s.drawn, 1);
        assert_eq!(s.points, DRAW_POINTS);
        assert_eq!(s.goal_difference, 0);
    }
}

#[test]
fn test_apply_result_is_pure() {
    let before = Standings::new(&teams(&["Leeds", "Burnley"]));
    let after = before
        .apply_result(&Fixture::new("Leeds", "Burnley"), 1, 0)
        .unwrap();

    assert_eq!(before.get("Leeds").unwrap().played, 0);
    assert_eq!(after.get("Leeds").unwrap().played, 1);
}

#[test]
fn test_unknown_team_is_rejected() {
    let table = Standings::new(&teams(&["Leeds", "Burnley"]));
    let err = table
        .apply_result(&Fixture::new("Leeds", "Wolves"), 1, 0)
        .unwrap_err();
    assert_eq!(err, TournamentError::UnknownTeam("Wolves".into()));
}

#[test]
fn test_rank_by_points_then_goal_difference_then_goals_for() {
    let mut table = Standings::new(&teams(&["A", "B", "C", "D"]));
    // A: 3 pts, GD +1, GF 1
    table = table.apply_result(&Fixture::new("A", "D"), 1, 0).unwrap();
    // B: 3 pts, GD +1, GF 3
    table = table.apply_result(&Fixture::new("B", "C"), 3, 2).unwrap();
    // C: 0 pts, D: 0 pts; C has GF 2, D has GF 0

    let order: Vec<_> = table.rank().into_iter().map(|(t, _)| t).collect();
    assert_eq!(order, vec!["B", "A", "C", "D"]);
}

#[test]
fn test_rank_is_stable_for_full_ties() {
    let mut table = Standings::new(&teams(&["Zeta", "Alpha", "Mid", "Omega"]));
    table = table.apply_result(&Fixture::new("Zeta", "Alpha"), 1, 1).unwrap();
    table = table.apply_result(&Fixture::new("Mid", "Omega"), 1, 1).unwrap();

    let order: Vec<_> = table.rank().into_iter().map(|(t, _)| t).collect();
    assert_eq!(order, vec!["Zeta", "Alpha", "Mid", "Omega"]);
}

#[test]
fn test_points_identity_holds_over_many_results() {
    let names = teams(&["A", "B", "C"]);
    let mut table = Standings::new(&names);
    let results = [("A", "B", 2, 0), ("B", "C", 1, 1), ("C", "A", 0, 4), ("A", "B", 0, 0)];
    for (t1, t2, s1, s2) in results {
        table = table.apply_result(&Fixture::new(t1, t2), s1, s2).unwrap();
    }

    for (_, s) in table.entries() {
        assert_eq!(s.points, WIN_POINTS * s.won + DRAW_POINTS * s.drawn);
        assert_eq!(s.goal_difference, s.goals_for as i64 - s.goals_against as i64);
        assert_eq!(s.played, s.won + s.drawn + s.lost);
    }
}

#[test]
fn test_maximum_scores_accumulate_without_overflow() {
    let table = Standings::new(&teams(&["A", "B", "C"]))
        .apply_result(&Fixture::new("A", "B"), u32::MAX, 0)
        .unwrap()
        .apply_result(&Fixture::new("A", "C"), 1, 0)
        .unwrap();

    let a = table.get("A").unwrap();
    assert_eq!(a.goals_for, u64::from(u32::MAX) + 1);
    assert_eq!(a.goal_difference, i64::from(u32::MAX) + 1);
    assert_eq!(a.points, 2 * WIN_POINTS);
    assert_eq!(table.get("B").unwrap().goals_against, u64::from(u32::MAX));
    assert_eq!(table.rank()[0].0, "A");
}
