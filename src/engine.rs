//! AI engine: one entry point for every move-selection strategy
//!
//! The outer game loop only ever calls [`AIEngine::get_move`]. Which
//! strategy answers is chosen once, when the engine is built:
//!
//! 1. **AlphaBeta**: full-depth alpha-beta search (see [`crate::search`])
//! 2. **Random**: uniform choice among the legal moves
//! 3. **NearestCenter**: the legal cell closest to the board center
//!
//! Whatever goes wrong inside a strategy, the caller sees a single error:
//! [`GameError::NoPossibleMove`].
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Party, Pos, Position};
//! use tictactoe::engine::{AIEngine, Strategy};
//! use tictactoe::rules::play;
//!
//! let mut position = Position::with_roster(3, vec![Party::human('H'), Party::ai('R')]);
//! play(&mut position, Pos::new(0, 0)).unwrap();
//! play(&mut position, Pos::new(2, 2)).unwrap();
//! play(&mut position, Pos::new(0, 1)).unwrap();
//!
//! let mut engine = AIEngine::new(Strategy::AlphaBeta);
//! let result = engine.get_move_with_stats(&position).unwrap();
//! assert_eq!(result.best_move, Pos::new(0, 2));
//! println!("Time: {}ms, nodes: {}", result.time_ms, result.nodes);
//! ```

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::{Pos, Position};
use crate::error::GameError;
use crate::rules::legal_moves;
use crate::search::Searcher;

/// Move-selection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Full-depth alpha-beta search
    #[default]
    AlphaBeta,
    /// Uniform random legal move
    Random,
    /// Legal move with the smallest Manhattan distance to the center
    NearestCenter,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::AlphaBeta => "Alpha-Beta",
            Strategy::Random => "Random",
            Strategy::NearestCenter => "Nearest Center",
        };
        f.write_str(name)
    }
}

/// Result of a move request with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Backed-up search score; only the alpha-beta strategy produces one
    pub score: Option<i64>,
    /// Strategy that produced the move
    pub strategy: Strategy,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched (1 for the non-searching strategies)
    pub nodes: u64,
}

/// Main AI engine.
pub struct AIEngine {
    strategy: Strategy,
    searcher: Searcher,
    rng: StdRng,
}

impl AIEngine {
    /// Create an engine for the given strategy.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            searcher: Searcher::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an engine with a fixed random seed, for reproducible games.
    #[must_use]
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self {
            strategy,
            searcher: Searcher::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Get the move for the party to play.
    ///
    /// Use `get_move_with_stats` if you need search statistics.
    pub fn get_move(&mut self, position: &Position) -> Result<Pos, GameError> {
        self.get_move_with_stats(position).map(|result| result.best_move)
    }

    /// Get the move together with timing and search statistics.
    pub fn get_move_with_stats(&mut self, position: &Position) -> Result<MoveResult, GameError> {
        let start = Instant::now();

        let outcome = match self.strategy {
            Strategy::AlphaBeta => self
                .searcher
                .search(position)
                .map(|r| (r.best_move, Some(r.score), r.nodes)),
            Strategy::Random => self.random_move(position).map(|pos| (pos, None, 1)),
            Strategy::NearestCenter => nearest_center_move(position).map(|pos| (pos, None, 1)),
        };

        let (best_move, score, nodes) = outcome.map_err(|e| {
            warn!(strategy = %self.strategy, error = %e, "strategy found no move");
            GameError::NoPossibleMove
        })?;

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(
            strategy = %self.strategy,
            row = best_move.row,
            col = best_move.col,
            time_ms,
            nodes,
            "move selected"
        );

        Ok(MoveResult {
            best_move,
            score,
            strategy: self.strategy,
            time_ms,
            nodes,
        })
    }

    fn random_move(&mut self, position: &Position) -> Result<Pos, GameError> {
        let moves = legal_moves(position);
        if moves.is_empty() {
            return Err(GameError::NoPossibleMove);
        }
        let idx = self.rng.random_range(0..moves.len());
        Ok(moves[idx])
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

/// Legal move closest to `(n/2, n/2)` by Manhattan distance.
///
/// Equal distances resolve to the first cell in row-major order.
fn nearest_center_move(position: &Position) -> Result<Pos, GameError> {
    let c = (position.size() / 2) as u8;
    let center = Pos::new(c, c);
    legal_moves(position)
        .into_iter()
        .min_by_key(|pos| pos.manhattan(center))
        .ok_or(GameError::NoPossibleMove)
}
