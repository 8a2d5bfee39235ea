use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament_core::{start, Format, KnockoutState, StartOptions};

fn teams(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_roster_listing_uses_indices() {
    let mut roster = Roster::new();
    assert_eq!(render_roster(&roster), "No teams yet.\n");

    roster.add("inter").unwrap();
    roster.add("milan").unwrap();
    let text = render_roster(&roster);
    assert!(text.starts_with("Teams (2):"));
    assert!(text.contains("  0. Inter"));
    assert!(text.contains("  1. Milan"));
}

#[test]
fn test_standings_table_lists_every_team() {
    let mut rng = StdRng::seed_from_u64(1);
    let state = start(
        Format::RoundRobin,
        &teams(&["Alpha", "Beta", "Gamma"]),
        &StartOptions::default(),
        &mut rng,
    )
    .unwrap();
    let pending = state.current_match().unwrap();
    let state = state
        .submit_result(pending.index, 2, 0, None, &mut rng)
        .unwrap();

    let text = render_standings(&state.standings());
    assert!(text.starts_with("=== League ==="));
    for team in ["Alpha", "Beta", "Gamma"] {
        assert!(text.contains(team));
    }
    assert!(text.contains("+2"));
}

#[test]
fn test_bracket_marks_next_match_and_champion() {
    let state = TournamentState::Knockout(KnockoutState::seeded(&teams(&["A", "B"])).unwrap());
    let text = render_bracket(&state.bracket_view());
    assert!(text.contains("=== Final ==="));
    assert!(text.contains("<- next"));
    assert!(text.contains("  1. A "));
    assert!(!text.contains("  0. "));

    let mut rng = StdRng::seed_from_u64(0);
    let state = state.submit_result(0, 1, 1, Some("B"), &mut rng).unwrap();
    let text = render_bracket(&state.bracket_view());
    assert!(text.contains("-> B (pens)"));
    assert!(text.contains("=== Champion ===\n  B\n"));
}

#[test]
fn test_status_lines() {
    let state = TournamentState::Knockout(KnockoutState::seeded(&teams(&["A", "B"])).unwrap());
    let text = render_status(&state);
    assert!(text.starts_with("Final match 1: A vs B"));
    assert!(text.contains("--penalty"));

    let mut rng = StdRng::seed_from_u64(0);
    let state = state.submit_result(0, 3, 0, None, &mut rng).unwrap();
    assert_eq!(
        render_status(&state),
        "knockout tournament complete. Champion: A\n"
    );
}
