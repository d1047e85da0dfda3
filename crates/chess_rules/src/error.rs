//! Error types.
//!
//! The public move API answers with plain booleans; [`MoveError`] is the
//! reason behind a `false`, available through `Game::validate` and
//! `Game::try_move` for callers that want to tell the user why.

use thiserror::Error;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameOver,
    #[error("coordinate is off the board")]
    OutOfBounds,
    #[error("no piece on the start square")]
    EmptySquare,
    #[error("it is not that piece's turn")]
    WrongTurn,
    #[error("start and end squares are the same")]
    NullMove,
    #[error("destination holds a piece of the same color")]
    OwnPieceCapture,
    #[error("the piece cannot move that way")]
    IllegalPattern,
    #[error("the move would leave the king in check")]
    LeavesKingInCheck,
}

/// Failure to load a [`RulesConfig`](crate::RulesConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
