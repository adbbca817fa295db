//! Derived facts about a list of matches and about a single match.

use common::match_stats::RoundOutcome;
use common::Match;

use crate::streak::Streak;
use crate::{Config, InvalidInput, Team};

/// Facts over a set of matches. Only meaningful when `count > 0`, the empty
/// summary carries empty strings and zeroes.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct MatchesSummary {
    pub count: usize,
    pub most_played_map: String,
    pub most_played_map_count: usize,
    pub avg_duration_seconds: u32,
    pub most_recent_timestamp: String,
}

#[tracing::instrument(skip_all, fields(matches = matches.len()))]
pub fn summarize_matches(matches: &[Match]) -> MatchesSummary {
    if matches.is_empty() {
        return MatchesSummary::default();
    }

    // Counts in order of first appearance so ties go to the map seen first
    let mut map_counts: Vec<(&str, usize)> = Vec::new();
    let mut map_index = std::collections::HashMap::<&str, usize>::new();
    let mut total_duration: u64 = 0;
    let mut most_recent: Option<&str> = None;

    for m in matches {
        let idx = *map_index.entry(m.map_name.as_str()).or_insert_with(|| {
            map_counts.push((m.map_name.as_str(), 0));
            map_counts.len() - 1
        });
        map_counts[idx].1 += 1;

        total_duration += u64::from(m.duration_seconds);

        most_recent = match most_recent {
            Some(current) if !is_more_recent(&m.date, current) => Some(current),
            _ => Some(m.date.as_str()),
        };
    }

    let mut most_played_map = "";
    let mut most_played_map_count = 0;
    for (map, count) in map_counts {
        if count > most_played_map_count {
            most_played_map = map;
            most_played_map_count = count;
        }
    }

    let avg_duration_seconds = (total_duration as f64 / matches.len() as f64).round() as u32;

    MatchesSummary {
        count: matches.len(),
        most_played_map: most_played_map.to_owned(),
        most_played_map_count,
        avg_duration_seconds,
        most_recent_timestamp: most_recent.unwrap_or_default().to_owned(),
    }
}

/// Ordering key for upload times. Unparsable timestamps rank below every
/// parsed one and only compare as text among themselves.
fn recency_key(timestamp: &str) -> (Option<chrono::DateTime<chrono::FixedOffset>>, &str) {
    (chrono::DateTime::parse_from_rfc3339(timestamp).ok(), timestamp)
}

fn is_more_recent(candidate: &str, current: &str) -> bool {
    recency_key(candidate) > recency_key(current)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct HalftimeScore {
    pub team_a_wins: u32,
    pub team_b_wins: u32,
}

/// Score after the first half. Rounds past `half_length` are ignored.
pub fn halftime_score(
    rounds: &[RoundOutcome],
    team_a_start_label: &str,
    config: &Config,
) -> Result<HalftimeScore, InvalidInput> {
    let first_half: Vec<_> = rounds
        .iter()
        .filter(|r| r.round_number <= config.half_length)
        .cloned()
        .collect();

    let winners = crate::side::resolve_round_winners(&first_half, team_a_start_label, config)?;

    let mut score = HalftimeScore::default();
    for winner in winners {
        match winner.team {
            Team::A => score.team_a_wins += 1,
            Team::B => score.team_b_wins += 1,
        }
    }

    Ok(score)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ResultSeverity {
    Overtime,
    Draw,
    Decisive,
    Comfortable,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ResultClass {
    pub label: &'static str,
    pub severity: ResultSeverity,
}

pub fn is_overtime(score_a: u32, score_b: u32, config: &Config) -> bool {
    score_a + score_b > config.overtime_threshold
}

/// Classifies a final score. Overtime is checked before the margin.
pub fn classify_result(score_a: u32, score_b: u32, config: &Config) -> ResultClass {
    let (label, severity) = if is_overtime(score_a, score_b, config) {
        ("Overtime", ResultSeverity::Overtime)
    } else {
        match score_a.abs_diff(score_b) {
            0 => ("Draw", ResultSeverity::Draw),
            diff if diff >= 8 => ("Decisive Win", ResultSeverity::Decisive),
            diff if diff >= 4 => ("Comfortable Win", ResultSeverity::Comfortable),
            _ => ("Close Match", ResultSeverity::Close),
        }
    };

    ResultClass { label, severity }
}

pub fn longest_streak(
    rounds: &[RoundOutcome],
    team_a_start_label: &str,
    config: &Config,
) -> Result<Option<Streak>, InvalidInput> {
    let winners = crate::side::resolve_round_winners(rounds, team_a_start_label, config)?;

    Ok(crate::streak::longest_run(&winners))
}

/// Win streaks of at least `config.min_streak_length` rounds, in round order.
pub fn match_streaks(
    rounds: &[RoundOutcome],
    team_a_start_label: &str,
    config: &Config,
) -> Result<Vec<Streak>, InvalidInput> {
    let winners = crate::side::resolve_round_winners(rounds, team_a_start_label, config)?;

    Ok(crate::streak::find_streaks(&winners, config.min_streak_length))
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchFacts {
    pub halftime: HalftimeScore,
    pub overtime: bool,
    pub result: ResultClass,
    pub longest_streak: Option<Streak>,
}

/// Everything the match header shows, derived from the match and its
/// round timeline.
#[tracing::instrument(skip_all, fields(match_id = %m.id))]
pub fn summarize_match(
    m: &Match,
    rounds: &[RoundOutcome],
    config: &Config,
) -> Result<MatchFacts, InvalidInput> {
    Ok(MatchFacts {
        halftime: halftime_score(rounds, &m.team_a_started_as, config)?,
        overtime: is_overtime(m.team_a_score, m.team_b_score, config),
        result: classify_result(m.team_a_score, m.team_b_score, config),
        longest_streak: longest_streak(rounds, &m.team_a_started_as, config)?,
    })
}

/// `m:ss`
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Short relative label for an upload time, `None` if the timestamp is not
/// RFC 3339.
pub fn relative_date(
    timestamp: &str,
    now: chrono::DateTime<chrono::FixedOffset>,
) -> Option<String> {
    let date = chrono::DateTime::parse_from_rfc3339(timestamp).ok()?;
    let days = now.signed_duration_since(date).num_days();

    let label = match days {
        d if d <= 0 => "Today".to_owned(),
        1 => "Yesterday".to_owned(),
        2..=6 => format!("{} days ago", days),
        _ => date.format("%b %-d").to_string(),
    };

    Some(label)
}
