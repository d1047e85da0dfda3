//! Standard chess rules engine.
//!
//! Decides whether a move is legal, plays it (castling, en passant and
//! promotion included) and classifies the result as ongoing, check,
//! checkmate or stalemate. Rendering, input handling and persistence are
//! left to the caller, which talks to the engine through [`Game`].
//!
//! ```
//! use chess_rules::{Game, Winner};
//!
//! let mut game = Game::new();
//! assert!(game.make_move((6, 5), (5, 5)));
//! assert!(game.make_move((1, 4), (3, 4)));
//! assert!(game.make_move((6, 6), (4, 6)));
//! assert!(game.make_move((0, 3), (4, 7)));
//! assert_eq!(game.winner(), Some(Winner::Black));
//! ```

pub mod attacks;
pub mod board;
pub mod config;
pub mod error;
pub mod execute;
pub mod game;
pub mod geometry;
pub mod legality;
pub mod perft;
pub mod status;
pub mod types;

pub use attacks::{attackers_of, is_check, is_square_attacked};
pub use board::*;
pub use config::RulesConfig;
pub use error::{ConfigError, MoveError};
pub use execute::{MoveKind, MoveRecord};
pub use game::{Game, Winner};
pub use geometry::is_geometry_valid;
pub use legality::{TurnPolicy, check_move, is_legal};
pub use perft::perft;
pub use status::*;
pub use types::*;
