//! Legal move enumeration and game-end classification.
//!
//! Brute force: every square owned by the color against every destination,
//! each run through the full legality check. At most 64x64 candidates, which is
//! plenty fast for a human-paced game but not meant for search.

use serde::{Deserialize, Serialize};

use crate::attacks::is_check;
use crate::board::Position;
use crate::legality::{TurnPolicy, check_move_with};
use crate::types::*;

/// State of the game from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    InProgress,
    /// In progress, with the side to move in check. Display-only.
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

fn candidates(pos: &Position, c: Color) -> impl Iterator<Item = Move> + '_ {
    pos.board
        .pieces()
        .filter(move |(_, pc)| pc.color == c)
        .flat_map(|(from, _)| Square::all().map(move |to| Move::new(from, to)))
}

/// Does `c` have at least one legal move. Stops at the first one found.
pub fn has_legal_moves(pos: &Position, c: Color) -> bool {
    let mut scratch = pos.board;
    candidates(pos, c)
        .any(|mv| check_move_with(pos, &mut scratch, mv.from, mv.to, TurnPolicy::Ignore).is_ok())
}

/// Every legal move for `c`, regardless of whose turn it is.
pub fn legal_moves(pos: &Position, c: Color) -> Vec<Move> {
    let mut scratch = pos.board;
    candidates(pos, c)
        .filter(|mv| check_move_with(pos, &mut scratch, mv.from, mv.to, TurnPolicy::Ignore).is_ok())
        .collect()
}

/// Squares the piece on `from` may legally move to.
pub fn legal_destinations(pos: &Position, from: Square) -> Vec<Square> {
    let mut scratch = pos.board;
    Square::all()
        .filter(|&to| check_move_with(pos, &mut scratch, from, to, TurnPolicy::Ignore).is_ok())
        .collect()
}

pub fn is_checkmate(pos: &Position, c: Color) -> bool {
    is_check(&pos.board, c) && !has_legal_moves(pos, c)
}

pub fn is_stalemate(pos: &Position, c: Color) -> bool {
    !is_check(&pos.board, c) && !has_legal_moves(pos, c)
}

/// Classify the position for `c`, evaluating check and mobility once each.
pub fn classify(pos: &Position, c: Color) -> GameStatus {
    let in_check = is_check(&pos.board, c);
    match (in_check, has_legal_moves(pos, c)) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
