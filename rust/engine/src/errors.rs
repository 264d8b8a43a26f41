use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid rank symbol: {symbol:?}")]
    InvalidRank { symbol: String },
    #[error("Invalid suit symbol: {symbol:?}")]
    InvalidSuit { symbol: String },
    #[error("Invalid war face-down count: {value} (must be non-negative)")]
    InvalidConfig { value: i64 },
}
