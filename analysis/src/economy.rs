//! Buy-type outcome badges and the "won on an eco" narrative counts.

use common::match_stats::{BuyType, EconomyRound, RoundOutcome};

use crate::side::{RoundWinner, Team};
use crate::{Config, InvalidInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum BuySeverity {
    /// A round won on an eco or force buy
    Upset,
    Win,
    Loss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BuyOutcome {
    pub label: &'static str,
    pub severity: BuySeverity,
}

pub fn classify_buy_outcome(buy_type: BuyType, won: bool) -> Option<BuyOutcome> {
    let outcome = match (buy_type, won) {
        (BuyType::Unspecified, _) => return None,
        (_, false) => BuyOutcome {
            label: "Lost",
            severity: BuySeverity::Loss,
        },
        (BuyType::Eco, true) => BuyOutcome {
            label: "Eco Win!",
            severity: BuySeverity::Upset,
        },
        (BuyType::Force, true) => BuyOutcome {
            label: "Force Win!",
            severity: BuySeverity::Upset,
        },
        (BuyType::Full | BuyType::Pistol, true) => BuyOutcome {
            label: "Won",
            severity: BuySeverity::Win,
        },
    };

    Some(outcome)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct TeamEconomyWins {
    pub eco_wins: u32,
    pub force_wins: u32,
}

impl TeamEconomyWins {
    fn record(&mut self, buy_type: BuyType) {
        match buy_type {
            BuyType::Eco => self.eco_wins += 1,
            BuyType::Force => self.force_wins += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct EconomyWins {
    pub team_a: TeamEconomyWins,
    pub team_b: TeamEconomyWins,
}

impl EconomyWins {
    /// Nothing worth a narrative happened.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RoundBuyOutcomes {
    pub round: u32,
    pub team_a: Option<BuyOutcome>,
    pub team_b: Option<BuyOutcome>,
}

fn winners_by_round(winners: Vec<RoundWinner>) -> std::collections::HashMap<u32, Team> {
    winners.into_iter().map(|w| (w.round, w.team)).collect()
}

#[tracing::instrument(skip_all, fields(economy_rounds = economy.len()))]
pub fn summarize_economy_wins(
    economy: &[EconomyRound],
    rounds: &[RoundOutcome],
    team_a_start_label: &str,
    config: &Config,
) -> Result<EconomyWins, InvalidInput> {
    let winners = winners_by_round(crate::side::resolve_round_winners(
        rounds,
        team_a_start_label,
        config,
    )?);

    let mut wins = EconomyWins::default();
    for round in economy {
        match winners.get(&round.round_number) {
            Some(Team::A) => wins.team_a.record(round.team_a_buy_type),
            Some(Team::B) => wins.team_b.record(round.team_b_buy_type),
            None => {
                tracing::debug!(round = round.round_number, "No outcome for economy round");
            }
        }
    }

    Ok(wins)
}

/// Badges for both teams of every economy round that has a known winner.
pub fn round_buy_outcomes(
    economy: &[EconomyRound],
    rounds: &[RoundOutcome],
    team_a_start_label: &str,
    config: &Config,
) -> Result<Vec<RoundBuyOutcomes>, InvalidInput> {
    let winners = winners_by_round(crate::side::resolve_round_winners(
        rounds,
        team_a_start_label,
        config,
    )?);

    Ok(economy
        .iter()
        .filter_map(|round| {
            let winner = *winners.get(&round.round_number)?;

            Some(RoundBuyOutcomes {
                round: round.round_number,
                team_a: classify_buy_outcome(round.team_a_buy_type, winner == Team::A),
                team_b: classify_buy_outcome(round.team_b_buy_type, winner == Team::B),
            })
        })
        .collect())
}
