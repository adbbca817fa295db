use common::match_stats::RoundOutcome;
use common::Player;

use crate::{Config, InvalidInput, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RunningScore {
    pub round: u32,
    pub team_a: u32,
    pub team_b: u32,
}

/// Cumulative score after every round of the timeline.
pub fn score_progression(
    rounds: &[RoundOutcome],
    team_a_start_label: &str,
    config: &Config,
) -> Result<Vec<RunningScore>, InvalidInput> {
    let winners = crate::side::resolve_round_winners(rounds, team_a_start_label, config)?;

    let mut team_a = 0;
    let mut team_b = 0;
    Ok(winners
        .into_iter()
        .map(|w| {
            match w.team {
                Team::A => team_a += 1,
                Team::B => team_b += 1,
            };

            RunningScore {
                round: w.round,
                team_a,
                team_b,
            }
        })
        .collect())
}

pub fn find_round(rounds: &[RoundOutcome], round_number: u32) -> Option<&RoundOutcome> {
    rounds.iter().find(|r| r.round_number == round_number)
}

/// Name of the player with the given steam id, or the id itself if the
/// player is not known.
pub fn display_name<'a>(steam_id: &'a str, players: &'a [Player]) -> &'a str {
    players
        .iter()
        .find(|p| p.steam_id == steam_id)
        .map(|p| p.name.as_str())
        .unwrap_or(steam_id)
}
