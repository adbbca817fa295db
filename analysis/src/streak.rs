use crate::side::{RoundWinner, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Streak {
    pub team: Team,
    pub start_round: u32,
    pub end_round: u32,
    pub length: u32,
}

/// Iterator over the maximal runs of consecutive wins by the same team.
pub struct Runs<'a> {
    winners: core::iter::Peekable<core::slice::Iter<'a, RoundWinner>>,
}

pub fn runs(winners: &[RoundWinner]) -> Runs<'_> {
    Runs {
        winners: winners.iter().peekable(),
    }
}

impl Iterator for Runs<'_> {
    type Item = Streak;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.winners.next()?;

        let mut run = Streak {
            team: first.team,
            start_round: first.round,
            end_round: first.round,
            length: 1,
        };
        while let Some(next) = self.winners.next_if(|w| w.team == run.team) {
            run.end_round = next.round;
            run.length += 1;
        }

        Some(run)
    }
}

/// All runs of at least `min_length` rounds, in round order.
pub fn find_streaks(winners: &[RoundWinner], min_length: u32) -> Vec<Streak> {
    runs(winners)
        .filter(|run| {
            let keep = run.length >= min_length;
            if keep {
                tracing::trace!(?run, "Found streak");
            }
            keep
        })
        .collect()
}

/// The single longest run, the first one wins ties.
pub fn longest_run(winners: &[RoundWinner]) -> Option<Streak> {
    runs(winners).fold(None, |best: Option<Streak>, run| match best {
        Some(b) if b.length >= run.length => Some(b),
        _ => Some(run),
    })
}
