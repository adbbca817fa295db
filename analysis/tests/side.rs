use analysis::side::{self, RoundWinner};
use analysis::{Config, InvalidInput, Team};
use common::match_stats::{RoundOutcome, WinMethod};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn round(number: u32, winner: &str) -> RoundOutcome {
    RoundOutcome {
        round_number: number,
        winner: winner.to_owned(),
        win_method: WinMethod::Elimination,
        first_kill: None,
        clutch: None,
        plant: None,
        defuse: None,
    }
}

#[test]
fn first_half_credits_starting_side() {
    let config = Config::default();

    for r in 1..=12 {
        assert_eq!(Ok(Team::A), side::resolve_winning_team(r, "CT", "CT", &config), "Round {}", r);
        assert_eq!(Ok(Team::B), side::resolve_winning_team(r, "T", "CT", &config), "Round {}", r);
        assert_eq!(Ok(Team::A), side::resolve_winning_team(r, "T", "T", &config), "Round {}", r);
    }
}

#[test]
fn second_half_flips_attribution() {
    let config = Config::default();

    for r in 13..=30 {
        assert_eq!(Ok(Team::B), side::resolve_winning_team(r, "CT", "CT", &config), "Round {}", r);
        assert_eq!(Ok(Team::A), side::resolve_winning_team(r, "T", "CT", &config), "Round {}", r);
    }
}

#[test]
fn configurable_half_length() {
    let config = Config {
        half_length: 15,
        ..Config::default()
    };

    assert_eq!(Ok(Team::A), side::resolve_winning_team(15, "CT", "CT", &config));
    assert_eq!(Ok(Team::B), side::resolve_winning_team(16, "CT", "CT", &config));
}

#[test]
fn round_zero_is_invalid() {
    let config = Config::default();

    assert_eq!(
        Err(InvalidInput::ZeroRound),
        side::resolve_winning_team(0, "CT", "CT", &config)
    );
}

#[test]
#[traced_test]
fn missing_winner_label() {
    let config = Config::default();

    let result = side::resolve_round_winners(&[round(1, "CT"), round(2, "")], "T", &config);

    assert_eq!(
        Err(InvalidInput::UnknownSide {
            round: 2,
            label: String::new(),
        }),
        result
    );
    assert!(logs_contain("Unknown side label"));
}

#[test]
fn resolves_whole_timeline() {
    let config = Config::default();

    let rounds: Vec<_> = (1..=14)
        .map(|r| round(r, if r % 2 == 0 { "T" } else { "CT" }))
        .collect();

    let winners = side::resolve_round_winners(&rounds, "CT", &config).unwrap();

    assert_eq!(14, winners.len());
    assert_eq!(RoundWinner { round: 1, team: Team::A }, winners[0]);
    assert_eq!(RoundWinner { round: 12, team: Team::B }, winners[11]);
    assert_eq!(RoundWinner { round: 13, team: Team::B }, winners[12]);
    assert_eq!(RoundWinner { round: 14, team: Team::A }, winners[13]);
}

#[test]
fn empty_timeline() {
    let winners = side::resolve_round_winners(&[], "CT", &Config::default()).unwrap();

    assert!(winners.is_empty());
}

#[test]
#[traced_test]
fn start_side_checked_without_rounds() {
    let result = side::resolve_round_winners(&[], "spectator", &Config::default());

    assert_eq!(
        Err(InvalidInput::UnknownStartSide {
            label: "spectator".to_owned(),
        }),
        result
    );
    assert!(logs_contain("Unknown starting side"));
}
