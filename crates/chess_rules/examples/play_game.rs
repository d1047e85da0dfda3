//! Plays a short scripted game and logs what the rules engine decides.
//!
//! Usage:
//!   RUST_LOG=chess_rules=debug cargo run --example play_game -p chess_rules -- [rules.toml]

use std::env;
use std::path::Path;

use chess_rules::{Game, RulesConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// (from, to) pairs as (row, col); row 0 is black's back rank.
const SCRIPT: &[((i8, i8), (i8, i8))] = &[
    ((6, 4), (4, 4)), // e4
    ((1, 4), (3, 4)), // e5
    ((7, 5), (4, 2)), // Bc4
    ((0, 1), (2, 2)), // Nc6
    ((7, 3), (3, 7)), // Qh5
    ((0, 4), (2, 4)), // illegal king jump, rejected
    ((0, 6), (2, 5)), // Nf6??
    ((3, 7), (1, 5)), // Qxf7#
    ((1, 0), (2, 0)), // rejected, game over
];

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match env::args().nth(1) {
        Some(path) => match RulesConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        None => RulesConfig::default(),
    };

    let mut game = Game::with_config(config);
    for &(from, to) in SCRIPT {
        let promotion = game.config().default_promotion;
        match game.try_move(from, to, promotion) {
            Ok(rec) => info!(
                "{} {:?} {} -> {}, status {:?}",
                rec.piece.color,
                rec.piece.kind,
                rec.from,
                rec.to,
                game.status()
            ),
            Err(e) => warn!(?from, ?to, "rejected: {e}"),
        }
    }
    info!(winner = ?game.winner(), moves = game.history().len(), "finished");
}
