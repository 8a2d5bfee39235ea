//! Plain-text rendering of rosters, tables and brackets

use tournament_core::{
    MatchStatus, PendingMatch, Roster, RoundView, StandingsTable, TournamentState,
};

/// Numbered roster listing; the numbers are the indices `remove` expects.
pub fn render_roster(roster: &Roster) -> String {
    if roster.is_empty() {
        return "No teams yet.\n".to_string();
    }
    let mut out = format!("Teams ({}):\n", roster.len());
    for (i, team) in roster.teams().iter().enumerate() {
        out.push_str(&format!("{:>3}. {}\n", i, team));
    }
    out
}

pub fn render_standings(tables: &[StandingsTable]) -> String {
    let mut out = String::new();
    for table in tables {
        let status = if table.complete { " (final)" } else { "" };
        out.push_str(&format!("=== {}{} ===\n", table.name, status));
        out.push_str(&format!(
            "{:<3} {:<25} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}\n",
            "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
        ));
        out.push_str(&"-".repeat(66));
        out.push('\n');
        for (pos, (team, s)) in table.rows.iter().enumerate() {
            out.push_str(&format!(
                "{:<3} {:<25} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}\n",
                pos + 1,
                team,
                s.played,
                s.won,
                s.drawn,
                s.lost,
                s.goals_for,
                s.goals_against,
                s.goal_difference,
                s.points
            ));
        }
        out.push('\n');
    }
    out
}

/// Bracket listing. Matches are numbered from 1, as `--match` expects.
pub fn render_bracket(rounds: &[RoundView]) -> String {
    let mut out = String::new();
    for round in rounds {
        out.push_str(&format!("=== {} ===\n", round.name));
        if round.name == "Champion" {
            if let Some(winner) = round.matches.first().and_then(|m| m.winner.as_deref()) {
                out.push_str(&format!("  {}\n", winner));
            }
            continue;
        }
        for (i, m) in round.matches.iter().enumerate() {
            let line = match (m.status, m.score) {
                (MatchStatus::Completed, Some((s1, s2))) => {
                    let pens = if m.on_penalties { " (pens)" } else { "" };
                    let winner = m
                        .winner
                        .as_deref()
                        .map(|w| format!("  -> {}{}", w, pens))
                        .unwrap_or_default();
                    format!(
                        "{:<25} {:>2}-{:<2} {:<25}{}",
                        m.fixture.team1, s1, s2, m.fixture.team2, winner
                    )
                }
                (MatchStatus::Current, _) => format!(
                    "{:<25}  vs   {:<25}  <- next",
                    m.fixture.team1, m.fixture.team2
                ),
                _ => format!("{:<25}  vs   {:<25}", m.fixture.team1, m.fixture.team2),
            };
            out.push_str(&format!("{:>3}. {}\n", i + 1, line));
        }
        out.push('\n');
    }
    out
}

pub fn render_pending(pending: &PendingMatch) -> String {
    let mut out = format!(
        "{} match {}: {} vs {}\n",
        pending.label,
        pending.index + 1,
        pending.fixture.team1,
        pending.fixture.team2
    );
    if pending.elimination {
        out.push_str("A draw must be settled with --penalty <team>.\n");
    }
    out
}

/// One-paragraph summary of where the tournament stands.
pub fn render_status(state: &TournamentState) -> String {
    if let Some(champion) = state.champion().filter(|_| state.is_complete()) {
        return format!("{} tournament complete. Champion: {}\n", state.format(), champion);
    }
    match state.current_match() {
        Some(pending) => render_pending(&pending),
        None => format!("{} tournament has no pending match.\n", state.format()),
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
