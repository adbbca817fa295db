//! Kill positions projected onto the map canvas, and the kill filters.
//!
//! Only the planar axes of a position are used. Each axis is scaled on its
//! own, so the map's aspect ratio is not preserved.

use common::match_stats::KillPosition;

use crate::{Config, InvalidInput};

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Used when there is nothing to bound.
    pub const UNIT: Self = Self {
        min_x: 0.0,
        max_x: 1.0,
        min_y: 0.0,
        max_y: 1.0,
    };

    fn is_valid(&self) -> bool {
        let width = self.max_x - self.min_x;
        let height = self.max_y - self.min_y;

        width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0
    }

    /// Maps a world position linearly into `[margin, size - margin]` on both
    /// axes.
    pub fn normalize(&self, x: f64, y: f64, canvas: &Canvas) -> Result<Point, InvalidInput> {
        if !x.is_finite() || !y.is_finite() {
            return Err(InvalidInput::NonFinitePoint { x, y });
        }
        if !self.is_valid() {
            return Err(InvalidInput::DegenerateBounds);
        }

        let span = canvas.size - 2.0 * canvas.margin;

        Ok(Point {
            x: (x - self.min_x) / (self.max_x - self.min_x) * span + canvas.margin,
            y: (y - self.min_y) / (self.max_y - self.min_y) * span + canvas.margin,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub size: f64,
    pub margin: f64,
}

impl Canvas {
    pub const DEFAULT_MARGIN: f64 = 20.0;

    pub fn new(size: f64) -> Self {
        Self {
            size,
            margin: Self::DEFAULT_MARGIN,
        }
    }

    pub fn with_margin(self, margin: f64) -> Self {
        Self { margin, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

fn check_finite(kill: &KillPosition) -> Result<(), InvalidInput> {
    if kill.attacker_pos.is_finite() && kill.victim_pos.is_finite() {
        Ok(())
    } else {
        tracing::warn!(round = kill.round_number, "Kill with non finite position");
        Err(InvalidInput::NonFiniteCoordinate {
            round: kill.round_number,
        })
    }
}

/// Padding added on both ends of an axis. A single-valued axis gets one
/// unit.
fn padding(min: f64, max: f64, fraction: f64) -> f64 {
    if max == min {
        1.0
    } else {
        (max - min) * fraction
    }
}

/// Bounding box over attacker and victim positions of all kills, padded by
/// `config.bounds_padding` of the range on every side.
#[tracing::instrument(skip_all, fields(kills = kills.len()))]
pub fn compute_bounds(kills: &[KillPosition], config: &Config) -> Result<Bounds, InvalidInput> {
    if !config.bounds_padding.is_finite() || config.bounds_padding < 0.0 {
        tracing::warn!(padding = config.bounds_padding, "Invalid bounds padding");
        return Err(InvalidInput::InvalidPadding {
            padding: config.bounds_padding,
        });
    }

    if kills.is_empty() {
        return Ok(Bounds::UNIT);
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for kill in kills {
        check_finite(kill)?;

        for pos in [&kill.attacker_pos, &kill.victim_pos] {
            min_x = min_x.min(pos.x);
            max_x = max_x.max(pos.x);
            min_y = min_y.min(pos.y);
            max_y = max_y.max(pos.y);
        }
    }

    let pad_x = padding(min_x, max_x, config.bounds_padding);
    let pad_y = padding(min_y, max_y, config.bounds_padding);

    let bounds = Bounds {
        min_x: min_x - pad_x,
        max_x: max_x + pad_x,
        min_y: min_y - pad_y,
        max_y: max_y + pad_y,
    };
    if !bounds.is_valid() {
        tracing::warn!(?bounds, "Kill positions span more than a finite range");
        return Err(InvalidInput::DegenerateBounds);
    }

    Ok(bounds)
}

/// Selection of kills to show. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KillFilter {
    pub round: Option<u32>,
    /// Matches the attacker or the victim
    pub player_id: Option<String>,
    pub weapon: Option<String>,
}

impl KillFilter {
    /// Builds a filter from select boxes where `0` and the empty string
    /// stand for "all".
    pub fn from_selection(round: u32, player_id: &str, weapon: &str) -> Self {
        Self {
            round: (round > 0).then_some(round),
            player_id: (!player_id.is_empty()).then(|| player_id.to_owned()),
            weapon: (!weapon.is_empty()).then(|| weapon.to_owned()),
        }
    }

    pub fn matches(&self, kill: &KillPosition) -> bool {
        if let Some(round) = self.round {
            if kill.round_number != round {
                return false;
            }
        }

        if let Some(player) = self.player_id.as_deref() {
            if kill.attacker_steam_id != player && kill.victim_steam_id != player {
                return false;
            }
        }

        if let Some(weapon) = self.weapon.as_deref() {
            if kill.weapon != weapon {
                return false;
            }
        }

        true
    }
}

pub fn filter_kills<'k>(kills: &'k [KillPosition], filter: &KillFilter) -> Vec<&'k KillPosition> {
    kills.iter().filter(|k| filter.matches(k)).collect()
}

/// Weapon names in lexicographic order, without duplicates.
pub fn distinct_weapons(kills: &[KillPosition]) -> Vec<&str> {
    kills
        .iter()
        .map(|k| k.weapon.as_str())
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct KillMarker<'k> {
    pub kill: &'k KillPosition,
    pub attacker: Point,
    pub victim: Point,
}

/// Canvas positions of the filtered kills. The bounds always cover every
/// kill so the map does not rescale while filtering.
#[tracing::instrument(skip_all, fields(kills = kills.len()))]
pub fn kill_markers<'k>(
    kills: &'k [KillPosition],
    filter: &KillFilter,
    canvas: &Canvas,
    config: &Config,
) -> Result<Vec<KillMarker<'k>>, InvalidInput> {
    let bounds = compute_bounds(kills, config)?;

    let markers = filter_kills(kills, filter)
        .into_iter()
        .map(|kill| {
            Ok(KillMarker {
                kill,
                attacker: bounds.normalize(kill.attacker_pos.x, kill.attacker_pos.y, canvas)?,
                victim: bounds.normalize(kill.victim_pos.x, kill.victim_pos.y, canvas)?,
            })
        })
        .collect::<Result<Vec<_>, InvalidInput>>()?;

    tracing::debug!(shown = markers.len(), "Projected kills");

    Ok(markers)
}
