#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub steam_id: String,
    pub name: String,
    pub team: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub adr: f64,
    pub kast: f64,
    pub hs_pct: f64,
    pub rating: f64,
    #[serde(default)]
    pub flash_assists: u32,
    #[serde(default)]
    pub utility_damage: u32,
}

impl PlayerStats {
    pub fn kill_death_diff(&self) -> i64 {
        i64::from(self.kills) - i64::from(self.deaths)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum BuyType {
    #[default]
    Unspecified,
    Eco,
    Force,
    Full,
    Pistol,
}

pub static BUY_TYPES: phf::Map<&'static str, BuyType> = phf::phf_map! {
    "BUY_TYPE_UNSPECIFIED" => BuyType::Unspecified,
    "BUY_TYPE_ECO" => BuyType::Eco,
    "BUY_TYPE_FORCE" => BuyType::Force,
    "BUY_TYPE_FULL" => BuyType::Full,
    "BUY_TYPE_PISTOL" => BuyType::Pistol,
};

impl BuyType {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "BUY_TYPE_UNSPECIFIED",
            Self::Eco => "BUY_TYPE_ECO",
            Self::Force => "BUY_TYPE_FORCE",
            Self::Full => "BUY_TYPE_FULL",
            Self::Pistol => "BUY_TYPE_PISTOL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unspecified => "",
            Self::Eco => "Eco",
            Self::Force => "Force",
            Self::Full => "Full",
            Self::Pistol => "Pistol",
        }
    }
}

impl From<String> for BuyType {
    fn from(value: String) -> Self {
        BUY_TYPES
            .get(value.as_str())
            .copied()
            .unwrap_or(BuyType::Unspecified)
    }
}

impl From<BuyType> for &'static str {
    fn from(value: BuyType) -> Self {
        value.wire_name()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomyRound {
    pub round_number: u32,
    #[serde(default)]
    pub team_a_spend: u32,
    #[serde(default)]
    pub team_b_spend: u32,
    #[serde(default)]
    pub team_a_equipment_value: u32,
    #[serde(default)]
    pub team_b_equipment_value: u32,
    #[serde(default)]
    pub team_a_buy_type: BuyType,
    #[serde(default)]
    pub team_b_buy_type: BuyType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum WinMethod {
    #[default]
    Unspecified,
    Elimination,
    BombExploded,
    BombDefused,
    TimeExpired,
}

pub static WIN_METHODS: phf::Map<&'static str, WinMethod> = phf::phf_map! {
    "WIN_METHOD_UNSPECIFIED" => WinMethod::Unspecified,
    "WIN_METHOD_ELIMINATION" => WinMethod::Elimination,
    "WIN_METHOD_BOMB_EXPLODED" => WinMethod::BombExploded,
    "WIN_METHOD_BOMB_DEFUSED" => WinMethod::BombDefused,
    "WIN_METHOD_TIME_EXPIRED" => WinMethod::TimeExpired,
};

impl WinMethod {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "WIN_METHOD_UNSPECIFIED",
            Self::Elimination => "WIN_METHOD_ELIMINATION",
            Self::BombExploded => "WIN_METHOD_BOMB_EXPLODED",
            Self::BombDefused => "WIN_METHOD_BOMB_DEFUSED",
            Self::TimeExpired => "WIN_METHOD_TIME_EXPIRED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unspecified => "Unknown",
            Self::Elimination => "Elimination",
            Self::BombExploded => "Bomb Exploded",
            Self::BombDefused => "Bomb Defused",
            Self::TimeExpired => "Time Expired",
        }
    }
}

impl From<String> for WinMethod {
    fn from(value: String) -> Self {
        WIN_METHODS
            .get(value.as_str())
            .copied()
            .unwrap_or(WinMethod::Unspecified)
    }
}

impl From<WinMethod> for &'static str {
    fn from(value: WinMethod) -> Self {
        value.wire_name()
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirstKill {
    pub attacker_steam_id: String,
    pub victim_steam_id: String,
    pub weapon: String,
    pub round_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClutchInfo {
    pub player_steam_id: String,
    pub opponents_alive: u32,
    pub won: bool,
}

impl ClutchInfo {
    /// `1v3` style label
    pub fn label(&self) -> String {
        format!("1v{}", self.opponents_alive)
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlantEvent {
    pub planter_steam_id: String,
    pub site: String,
    pub round_time: f64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DefuseEvent {
    pub defuser_steam_id: String,
    pub round_time: f64,
}

/// One entry of the round timeline. The winner is the side label (`CT`/`T`)
/// that won the round, not the team.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundOutcome {
    pub round_number: u32,
    #[serde(default)]
    pub winner: String,
    #[serde(default)]
    pub win_method: WinMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_kill: Option<FirstKill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clutch: Option<ClutchInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plant: Option<PlantEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defuse: Option<DefuseEvent>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Only the planar axes are checked, `z` is never displayed.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillPosition {
    pub round_number: u32,
    pub attacker_steam_id: String,
    pub victim_steam_id: String,
    pub attacker_pos: Position,
    pub victim_pos: Position,
    pub weapon: String,
    #[serde(default)]
    pub is_headshot: bool,
}
