/// Match format constants used by the derivations.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rounds per half, sides swap after this many rounds
    pub half_length: u32,
    pub min_streak_length: u32,
    /// A match with more total rounds than this went to overtime
    pub overtime_threshold: u32,
    /// Fraction of each axis range added on both ends of kill bounds
    pub bounds_padding: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            half_length: 12,
            min_streak_length: 4,
            overtime_threshold: 30,
            bounds_padding: 0.05,
        }
    }
}
