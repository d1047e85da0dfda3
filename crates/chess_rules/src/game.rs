//! The game object callers hold: one owned position plus game-over state,
//! mutated only through [`Game::make_move`] and [`Game::reset`].
//!
//! Coordinates come in as `(row, col)` pairs; anything off the board is
//! simply "no piece there" and every rejected move is a plain `false`.
//! [`Game::validate`] and [`Game::try_move`] give the reason instead.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::attacks::is_check;
use crate::board::{CastlingRights, Position};
use crate::config::RulesConfig;
use crate::error::MoveError;
use crate::execute::{MoveRecord, execute};
use crate::legality::{TurnPolicy, check_move};
use crate::status::{GameStatus, classify, legal_destinations, legal_moves};
use crate::types::*;

/// Who won a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl From<Color> for Winner {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    winner: Option<Winner>,
    /// Half-moves since the last pawn move or capture. Informational only.
    halfmove_clock: u32,
    history: Vec<MoveRecord>,
    config: RulesConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_position_with_config(Position::startpos(), config)
    }

    /// Start from a custom position. The side to move is classified right away,
    /// so a position that is already mate or stalemate starts finished.
    pub fn from_position(position: Position) -> Self {
        Self::from_position_with_config(position, RulesConfig::default())
    }

    pub fn from_position_with_config(position: Position, config: RulesConfig) -> Self {
        let mut game = Game {
            position,
            winner: None,
            halfmove_clock: 0,
            history: Vec::new(),
            config,
        };
        for c in [Color::White, Color::Black] {
            if game.position.board.king_sq(c).is_none() {
                warn!(color = %c, "position has no king, that side counts as in check");
            }
        }
        game.update_result();
        game
    }

    /// Back to the standard starting position, white to move. Config is kept.
    pub fn reset(&mut self) {
        self.position = Position::startpos();
        self.winner = None;
        self.halfmove_clock = 0;
        self.history.clear();
    }

    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        self.position.piece_at(row, col)
    }

    /// Check a move without playing it, reporting why it is illegal.
    pub fn validate(
        &self,
        from: (i8, i8),
        to: (i8, i8),
        turn: TurnPolicy,
    ) -> Result<(), MoveError> {
        if turn == TurnPolicy::Enforce && self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let from = Square::try_from(from).map_err(|_| MoveError::EmptySquare)?;
        let to = Square::try_from(to)?;
        check_move(&self.position, from, to, turn).map(|_| ())
    }

    /// Is `from -> to` legal for the side to move. Never mutates the game.
    pub fn is_valid_move(&self, from: (i8, i8), to: (i8, i8)) -> bool {
        self.is_valid_move_with(from, to, TurnPolicy::Enforce)
    }

    /// Like [`Game::is_valid_move`], but `TurnPolicy::Ignore` also answers for
    /// the side not on move.
    pub fn is_valid_move_with(&self, from: (i8, i8), to: (i8, i8), turn: TurnPolicy) -> bool {
        self.validate(from, to, turn).is_ok()
    }

    /// Play a move, promoting to the configured default piece.
    /// Returns false and leaves the game untouched if the move is illegal.
    pub fn make_move(&mut self, from: (i8, i8), to: (i8, i8)) -> bool {
        self.make_move_with_promotion(from, to, self.config.default_promotion)
    }

    pub fn make_move_with_promotion(
        &mut self,
        from: (i8, i8),
        to: (i8, i8),
        promotion: Promotion,
    ) -> bool {
        self.try_move(from, to, promotion).is_ok()
    }

    /// Play a move and return its record, or the reason it was rejected.
    pub fn try_move(
        &mut self,
        from: (i8, i8),
        to: (i8, i8),
        promotion: Promotion,
    ) -> Result<MoveRecord, MoveError> {
        if let Err(e) = self.validate(from, to, TurnPolicy::Enforce) {
            trace!(?from, ?to, error = %e, "move rejected");
            return Err(e);
        }
        let from = Square::try_from(from)?;
        let to = Square::try_from(to)?;
        let record = execute(&mut self.position, from, to, promotion)?;
        debug!(
            from = %record.from,
            to = %record.to,
            piece = ?record.piece.kind,
            color = %record.piece.color,
            kind = ?record.kind,
            "move played"
        );

        self.halfmove_clock = if record.resets_halfmove_clock() {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.config.record_history {
            self.history.push(record);
        }
        self.update_result();
        Ok(record)
    }

    fn update_result(&mut self) {
        let mover = self.position.side_to_move;
        self.winner = match classify(&self.position, mover) {
            GameStatus::Checkmate => Some(Winner::from(mover.other())),
            GameStatus::Stalemate => Some(Winner::Draw),
            GameStatus::Check | GameStatus::InProgress => None,
        };
        if let Some(winner) = self.winner {
            info!(?winner, "game over");
        }
    }

    pub fn is_in_check(&self, c: Color) -> bool {
        is_check(&self.position.board, c)
    }

    /// Status for the side to move. Recomputed on each call.
    pub fn status(&self) -> GameStatus {
        classify(&self.position, self.position.side_to_move)
    }

    pub fn turn(&self) -> Color {
        self.position.side_to_move
    }
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
    pub fn castling_rights(&self) -> CastlingRights {
        self.position.castling
    }
    pub fn en_passant_target(&self) -> Option<Square> {
        self.position.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
    pub fn position(&self) -> &Position {
        &self.position
    }
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_game_over() {
            return Vec::new();
        }
        legal_moves(&self.position, self.position.side_to_move)
    }

    /// Where the side to move's piece on `(row, col)` can go, for highlighting.
    pub fn legal_destinations(&self, row: i8, col: i8) -> Vec<Square> {
        match Square::new(row, col) {
            Some(from)
                if !self.is_game_over()
                    && self
                        .piece_at(row, col)
                        .is_some_and(|pc| pc.color == self.turn()) =>
            {
                legal_destinations(&self.position, from)
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
