use super::*;
use crate::error::ErrorKind;

#[test]
fn test_normalize_title_cases_each_word() {
    assert_eq!(normalize_team_name("  real madrid "), "Real Madrid");
    assert_eq!(normalize_team_name("AC MILAN"), "Ac Milan");
    assert_eq!(normalize_team_name("o'neil utd"), "O'Neil Utd");
    assert_eq!(normalize_team_name("schalke 04"), "Schalke 04");
}

#[test]
fn test_add_stores_normalized_name() {
    let mut roster = Roster::new();
    let stored = roster.add("ajax amsterdam").unwrap().to_string();
    assert_eq!(stored, "Ajax Amsterdam");
    assert_eq!(roster.teams(), &["Ajax Amsterdam".to_string()]);
}

#[test]
fn test_add_rejects_duplicates_after_normalizing() {
    let mut roster = Roster::new();
    roster.add("Celtic").unwrap();
    let err = roster.add("  CELTIC").unwrap_err();
    assert_eq!(err, TournamentError::DuplicateTeam("Celtic".into()));
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(roster.len(), 1);
}

#[test]
fn test_add_length_limit() {
    let mut roster = Roster::new();
    let at_limit = "a".repeat(MAX_TEAM_NAME_LEN);
    assert!(roster.add(&at_limit).is_ok());

    let too_long = "b".repeat(MAX_TEAM_NAME_LEN + 1);
    assert!(matches!(
        roster.add(&too_long),
        Err(TournamentError::TeamNameTooLong { max: MAX_TEAM_NAME_LEN, .. })
    ));
}

#[test]
fn test_add_rejects_blank_name() {
    let mut roster = Roster::new();
    assert_eq!(roster.add("   "), Err(TournamentError::EmptyTeamName));
    assert!(roster.is_empty());
}

#[test]
fn test_remove_by_index() {
    let mut roster = Roster::new();
    for name in ["Lazio", "Roma", "Napoli"] {
        roster.add(name).unwrap();
    }
    assert_eq!(roster.remove(1).unwrap(), "Roma");
    assert_eq!(roster.teams(), &["Lazio".to_string(), "Napoli".to_string()]);

    assert_eq!(
        roster.remove(2),
        Err(TournamentError::TeamIndexOutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn test_clear() {
    let mut roster = Roster::new();
    roster.add("Porto").unwrap();
    roster.clear();
    assert!(roster.is_empty());
}
