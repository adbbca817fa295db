//! Attribution of round wins to teams.
//!
//! The timeline records which *side* won a round. Teams swap sides after
//! `half_length` rounds, so the same side label credits team A in the first
//! half and team B afterwards.

use common::Side;

use crate::{Config, InvalidInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RoundWinner {
    pub round: u32,
    pub team: Team,
}

/// The side team A plays in the given round.
///
/// Only the first swap is modelled, overtime halves keep the second-half
/// sides.
pub fn team_a_side(round_number: u32, team_a_start: Side, config: &Config) -> Side {
    if round_number <= config.half_length {
        team_a_start
    } else {
        team_a_start.opposite()
    }
}

pub fn winning_team(
    round_number: u32,
    winner: Side,
    team_a_start: Side,
    config: &Config,
) -> Result<Team, InvalidInput> {
    if round_number == 0 {
        return Err(InvalidInput::ZeroRound);
    }

    if winner == team_a_side(round_number, team_a_start, config) {
        Ok(Team::A)
    } else {
        Ok(Team::B)
    }
}

/// Same as [`winning_team`] but works on the wire labels (`CT`/`T`).
pub fn resolve_winning_team(
    round_number: u32,
    winner_label: &str,
    team_a_start_label: &str,
    config: &Config,
) -> Result<Team, InvalidInput> {
    let winner = parse_side(round_number, winner_label)?;
    let start = parse_side(round_number, team_a_start_label)?;

    winning_team(round_number, winner, start, config)
}

pub(crate) fn parse_side(round: u32, label: &str) -> Result<Side, InvalidInput> {
    Side::from_label(label).ok_or_else(|| {
        tracing::warn!(round, label, "Unknown side label");

        InvalidInput::UnknownSide {
            round,
            label: label.to_owned(),
        }
    })
}

/// Resolves the winning team of every round in timeline order.
#[tracing::instrument(skip_all, fields(rounds = rounds.len()))]
pub fn resolve_round_winners(
    rounds: &[common::match_stats::RoundOutcome],
    team_a_start_label: &str,
    config: &Config,
) -> Result<Vec<RoundWinner>, InvalidInput> {
    let start = Side::from_label(team_a_start_label).ok_or_else(|| {
        tracing::warn!(label = team_a_start_label, "Unknown starting side");

        InvalidInput::UnknownStartSide {
            label: team_a_start_label.to_owned(),
        }
    })?;

    rounds
        .iter()
        .map(|round| {
            let winner = parse_side(round.round_number, &round.winner)?;
            let team = winning_team(round.round_number, winner, start, config)?;

            Ok(RoundWinner {
                round: round.round_number,
                team,
            })
        })
        .collect()
}
