//! Sorting, team split and standouts for the match scoreboard.

use common::match_stats::PlayerStats;
use common::Side;

use crate::InvalidInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum SortKey {
    Kills,
    Deaths,
    Assists,
    Adr,
    Kast,
    HsPercent,
    Rating,
}

pub mod orderings {
    use common::match_stats::PlayerStats;

    use super::SortKey;

    /// Ascending comparison of a single stat.
    #[derive(Debug, Clone, Copy)]
    pub struct Ordering {
        pub key: SortKey,
        pub sort_fn: fn(p1: &PlayerStats, p2: &PlayerStats) -> core::cmp::Ordering,
    }

    pub const KILLS: Ordering = Ordering {
        key: SortKey::Kills,
        sort_fn: |p1, p2| p1.kills.cmp(&p2.kills),
    };

    pub const DEATHS: Ordering = Ordering {
        key: SortKey::Deaths,
        sort_fn: |p1, p2| p1.deaths.cmp(&p2.deaths),
    };

    pub const ASSISTS: Ordering = Ordering {
        key: SortKey::Assists,
        sort_fn: |p1, p2| p1.assists.cmp(&p2.assists),
    };

    pub const ADR: Ordering = Ordering {
        key: SortKey::Adr,
        sort_fn: |p1, p2| p1.adr.total_cmp(&p2.adr),
    };

    pub const KAST: Ordering = Ordering {
        key: SortKey::Kast,
        sort_fn: |p1, p2| p1.kast.total_cmp(&p2.kast),
    };

    pub const HS_PERCENT: Ordering = Ordering {
        key: SortKey::HsPercent,
        sort_fn: |p1, p2| p1.hs_pct.total_cmp(&p2.hs_pct),
    };

    pub const RATING: Ordering = Ordering {
        key: SortKey::Rating,
        sort_fn: |p1, p2| p1.rating.total_cmp(&p2.rating),
    };
}

impl SortKey {
    pub fn ordering(&self) -> orderings::Ordering {
        match self {
            Self::Kills => orderings::KILLS,
            Self::Deaths => orderings::DEATHS,
            Self::Assists => orderings::ASSISTS,
            Self::Adr => orderings::ADR,
            Self::Kast => orderings::KAST,
            Self::HsPercent => orderings::HS_PERCENT,
            Self::Rating => orderings::RATING,
        }
    }
}

/// The column the scoreboard is currently sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Rating,
            ascending: false,
        }
    }
}

impl SortState {
    /// Clicking the active column flips the direction, any other column
    /// becomes active sorted descending.
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self {
                key,
                ascending: !self.ascending,
            }
        } else {
            Self {
                key,
                ascending: false,
            }
        }
    }
}

/// Stable sort, equal stats keep their input order in both directions.
pub fn rank_players<'p>(
    players: &'p [PlayerStats],
    key: SortKey,
    ascending: bool,
) -> Vec<&'p PlayerStats> {
    let sort_fn = key.ordering().sort_fn;

    let mut ranked: Vec<&PlayerStats> = players.iter().collect();
    if ascending {
        ranked.sort_by(|p1, p2| sort_fn(p1, p2));
    } else {
        ranked.sort_by(|p1, p2| sort_fn(p2, p1));
    }

    ranked
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct TeamSplit<'p> {
    pub team_a: Vec<&'p PlayerStats>,
    pub team_b: Vec<&'p PlayerStats>,
}

/// Splits players into the `CT` (team A) and `T` (team B) listings, keeping
/// their relative order. Players with any other team label are left out.
pub fn split_by_team<'p, I>(players: I) -> TeamSplit<'p>
where
    I: IntoIterator<Item = &'p PlayerStats>,
{
    let mut split = TeamSplit::default();
    for player in players {
        match Side::from_label(&player.team) {
            Some(Side::CounterTerrorist) => split.team_a.push(player),
            Some(Side::Terrorist) => split.team_b.push(player),
            None => {
                tracing::debug!(player = %player.steam_id, team = %player.team, "Player without a known team");
            }
        }
    }

    split
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct TeamAverages {
    pub adr: f64,
    pub kast: f64,
    pub hs_percent: f64,
    pub rating: f64,
}

/// Mean of the float stats, `None` for an empty team.
pub fn team_averages(players: &[&PlayerStats]) -> Result<Option<TeamAverages>, InvalidInput> {
    if players.is_empty() {
        return Ok(None);
    }

    let mut sum = TeamAverages {
        adr: 0.0,
        kast: 0.0,
        hs_percent: 0.0,
        rating: 0.0,
    };
    for player in players {
        let stats = [player.adr, player.kast, player.hs_pct, player.rating];
        if stats.iter().any(|s| !s.is_finite()) {
            tracing::warn!(player = %player.steam_id, "Non finite stat");
            return Err(InvalidInput::NonFiniteStat {
                player: player.steam_id.clone(),
            });
        }

        sum.adr += player.adr;
        sum.kast += player.kast;
        sum.hs_percent += player.hs_pct;
        sum.rating += player.rating;
    }

    let n = players.len() as f64;
    Ok(Some(TeamAverages {
        adr: sum.adr / n,
        kast: sum.kast / n,
        hs_percent: sum.hs_percent / n,
        rating: sum.rating / n,
    }))
}

/// First player with the highest value according to `sort_fn`.
fn first_max<'p>(
    players: &[&'p PlayerStats],
    sort_fn: impl Fn(&PlayerStats, &PlayerStats) -> core::cmp::Ordering,
) -> Option<&'p PlayerStats> {
    players.iter().copied().fold(None, |best, player| match best {
        Some(b) if sort_fn(player, b) != core::cmp::Ordering::Greater => Some(b),
        _ => Some(player),
    })
}

/// The highest rated player of the whole match, the earliest one on ties.
pub fn identify_mvp(players: &[PlayerStats]) -> Option<&str> {
    let all: Vec<&PlayerStats> = players.iter().collect();

    first_max(&all, orderings::RATING.sort_fn).map(|p| p.steam_id.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum StandoutKind {
    Mvp,
    TopRated,
    TopFragger,
}

impl StandoutKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mvp => "MVP",
            Self::TopRated => "Top Rated",
            Self::TopFragger => "Top Fragger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Standout {
    pub player_id: String,
    pub kind: StandoutKind,
}

/// Up to two standouts for a team: its top rated player and, if someone
/// else leads the team in kills minus deaths, that player. Tying the top
/// rated player's kills minus deaths is not a lead.
pub fn identify_standouts(team: &[&PlayerStats], mvp: Option<&str>) -> Vec<Standout> {
    let top_rated = match first_max(team, orderings::RATING.sort_fn) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let kind = if mvp == Some(top_rated.steam_id.as_str()) {
        StandoutKind::Mvp
    } else {
        StandoutKind::TopRated
    };
    let mut standouts = vec![Standout {
        player_id: top_rated.steam_id.clone(),
        kind,
    }];

    let top_fragger = first_max(team, |p1, p2| p1.kill_death_diff().cmp(&p2.kill_death_diff()));
    if let Some(fragger) =
        top_fragger.filter(|f| f.kill_death_diff() > top_rated.kill_death_diff())
    {
        standouts.push(Standout {
            player_id: fragger.steam_id.clone(),
            kind: StandoutKind::TopFragger,
        });
    }

    standouts
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TeamStandouts {
    pub team_a: Vec<Standout>,
    pub team_b: Vec<Standout>,
}

pub fn match_standouts(players: &[PlayerStats]) -> TeamStandouts {
    let mvp = identify_mvp(players);
    let split = split_by_team(players);

    TeamStandouts {
        team_a: identify_standouts(&split.team_a, mvp),
        team_b: identify_standouts(&split.team_b, mvp),
    }
}
