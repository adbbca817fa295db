pub mod match_stats;

/// A single uploaded match as listed by the match service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub map_name: String,
    /// RFC 3339 timestamp
    pub date: String,
    pub duration_seconds: u32,
    pub team_a_name: String,
    pub team_b_name: String,
    pub team_a_score: u32,
    pub team_b_score: u32,
    #[serde(default)]
    pub team_a_started_as: String,
    #[serde(default)]
    pub demo_file_hash: String,
}

impl Match {
    pub fn total_rounds(&self) -> u32 {
        self.team_a_score + self.team_b_score
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub steam_id: String,
    pub name: String,
    pub team: String,
}

/// The two sides of a round, labelled `CT` and `T` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    #[serde(rename = "CT")]
    CounterTerrorist,
    #[serde(rename = "T")]
    Terrorist,
}

impl Side {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "CT" => Some(Self::CounterTerrorist),
            "T" => Some(Self::Terrorist),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CounterTerrorist => "CT",
            Self::Terrorist => "T",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Self::CounterTerrorist => Self::Terrorist,
            Self::Terrorist => Self::CounterTerrorist,
        }
    }
}
