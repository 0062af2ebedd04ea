//! N×N tic-tac-toe engine for two or three parties
//!
//! A game is played on a square board of size 3 to 10. Parties take turns
//! in roster order; the first to fill a whole row, column or main
//! diagonal wins. Each party is either driven from outside (a human at the
//! menu) or by the engine.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Grid, cells and the shared party roster
//! - [`rules`]: Legal moves, move application and win detection
//! - [`eval`]: Line-counting heuristic
//! - [`search`]: Full-depth alpha-beta minimax
//! - [`engine`]: Strategy façade (alpha-beta, random, nearest center)
//! - [`game`]: Validated setup and the turn loop
//! - [`config`], [`cli`], [`ui`]: Configuration and the two front ends
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Party, Pos, Strategy};
//! use tictactoe::game::{Game, Outcome};
//!
//! let mut game = Game::new(
//!     3,
//!     &[Party::human('X'), Party::ai('O')],
//!     AIEngine::new(Strategy::AlphaBeta),
//! )
//! .unwrap();
//!
//! assert_eq!(game.play(Pos::new(1, 1)), Ok(Outcome::InProgress));
//! let (result, _) = game.play_ai().unwrap();
//! println!("AI plays at {}", result.best_move);
//! ```

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Party, PartyId, Pos, Position, Role};
pub use engine::{AIEngine, MoveResult, Strategy};
pub use error::{ConfigError, GameError, MenuError};
