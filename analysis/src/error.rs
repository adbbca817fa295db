#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("round numbers start at 1, got 0")]
    ZeroRound,
    #[error("round {round}: unknown side label {label:?}")]
    UnknownSide { round: u32, label: String },
    #[error("unknown starting side {label:?}")]
    UnknownStartSide { label: String },
    #[error("round {round}: kill position is not finite")]
    NonFiniteCoordinate { round: u32 },
    #[error("position ({x}, {y}) is not finite")]
    NonFinitePoint { x: f64, y: f64 },
    #[error("bounds have an empty or non finite span")]
    DegenerateBounds,
    #[error("bounds padding must be a finite non-negative fraction, got {padding}")]
    InvalidPadding { padding: f64 },
    #[error("player {player}: stat is not finite")]
    NonFiniteStat { player: String },
}
