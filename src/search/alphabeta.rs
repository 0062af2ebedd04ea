//! Full-depth alpha-beta search
//!
//! The search never stops on depth: every branch is followed to a terminal
//! position and scored with [`terminal_score`]. Parties controlled by the
//! search maximize, every other party minimizes.
//!
//! # Move choice
//!
//! Candidates are tried in row-major order. On every iteration the node's
//! result is first overwritten provisionally with the candidate's score and
//! the move its subtree reported (or the candidate itself when the subtree
//! reported none). Only a strict improvement of alpha (or beta) replaces
//! that with the candidate. The move returned is therefore the one left by
//! the last candidate examined unless that candidate improved the bound.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Party, Pos, Position};
//! use tictactoe::rules::play;
//! use tictactoe::search::Searcher;
//!
//! let mut position = Position::with_roster(3, vec![Party::human('H'), Party::ai('R')]);
//! play(&mut position, Pos::new(0, 0)).unwrap();
//! play(&mut position, Pos::new(2, 2)).unwrap();
//! play(&mut position, Pos::new(1, 0)).unwrap();
//!
//! let result = Searcher::new().search(&position).unwrap();
//! assert_eq!(result.best_move, Pos::new(2, 0));
//! ```

use tracing::{debug, trace, warn};

use crate::board::{PartyId, Pos, Position, Role};
use crate::error::GameError;
use crate::eval::terminal_score;
use crate::rules::{is_terminal, legal_moves, place};

/// Search statistics for diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Loops left early because alpha >= beta
    pub cutoffs: u64,
    /// Terminal positions scored
    pub terminal_nodes: u64,
    /// Deepest ply reached below the root
    pub max_depth: u32,
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Pos,
    /// Score backed up to the root
    pub score: i64,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
    /// True when the recursion produced no move and the first legal move was
    /// returned instead. This signals a search bug, never a finished game.
    pub fallback: bool,
}

/// Value backed up from one node
#[derive(Debug, Clone, Copy)]
struct Node {
    score: i64,
    best_move: Option<Pos>,
}

/// Alpha-beta searcher.
///
/// Child positions are recycled through a free list so each node copies the
/// grid into storage that already exists instead of allocating.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
    pool: Vec<Position>,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the move for the party to play in `position`.
    ///
    /// Fails with [`GameError::NoPossibleMove`] when the position is
    /// already terminal or has no parties. `position` is not modified.
    pub fn search(&mut self, position: &Position) -> Result<SearchResult, GameError> {
        self.nodes = 0;
        self.stats = SearchStats::default();

        if position.roster().is_empty() || is_terminal(position) {
            return Err(GameError::NoPossibleMove);
        }

        let root = self
            .alpha_beta(position, i64::MIN, i64::MAX, 0)
            .map_err(|_| GameError::NoPossibleMove)?;

        let (best_move, fallback) = match root.best_move {
            Some(pos) => (pos, false),
            None => {
                warn!("alpha-beta returned no move on a non-terminal position, using first legal move");
                let first = legal_moves(position)
                    .first()
                    .copied()
                    .ok_or(GameError::NoPossibleMove)?;
                (first, true)
            }
        };

        debug!(
            row = best_move.row,
            col = best_move.col,
            score = root.score,
            nodes = self.nodes,
            cutoffs = self.stats.cutoffs,
            "search finished"
        );

        Ok(SearchResult {
            best_move,
            score: root.score,
            nodes: self.nodes,
            stats: self.stats.clone(),
            fallback,
        })
    }

    fn alpha_beta(
        &mut self,
        position: &Position,
        alpha: i64,
        beta: i64,
        depth: u32,
    ) -> Result<Node, GameError> {
        self.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let (id, party) = position.current_party()?;

        if is_terminal(position) {
            self.stats.terminal_nodes += 1;
            return Ok(Node {
                score: terminal_score(position, &party),
                best_move: None,
            });
        }

        match party.role {
            Role::Search => self.maximize(position, id, alpha, beta, depth),
            Role::External => self.minimize(position, id, alpha, beta, depth),
        }
    }

    fn maximize(
        &mut self,
        position: &Position,
        id: PartyId,
        mut alpha: i64,
        beta: i64,
        depth: u32,
    ) -> Result<Node, GameError> {
        let mut best = Node {
            score: i64::MIN,
            best_move: None,
        };

        for pos in legal_moves(position) {
            let result = self.child_score(position, pos, id, alpha, beta, depth)?;

            best = Node {
                score: result.score,
                best_move: Some(result.best_move.unwrap_or(pos)),
            };

            if result.score > alpha {
                alpha = result.score;
                best = Node {
                    score: alpha,
                    best_move: Some(pos),
                };
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }

    fn minimize(
        &mut self,
        position: &Position,
        id: PartyId,
        alpha: i64,
        mut beta: i64,
        depth: u32,
    ) -> Result<Node, GameError> {
        let mut best = Node {
            score: i64::MAX,
            best_move: None,
        };

        for pos in legal_moves(position) {
            let result = self.child_score(position, pos, id, alpha, beta, depth)?;

            best = Node {
                score: result.score,
                best_move: Some(result.best_move.unwrap_or(pos)),
            };

            if result.score < beta {
                beta = result.score;
                best = Node {
                    score: beta,
                    best_move: Some(pos),
                };
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }

    /// Play `pos` for `id` on a private copy of `position` and search it.
    fn child_score(
        &mut self,
        position: &Position,
        pos: Pos,
        id: PartyId,
        alpha: i64,
        beta: i64,
        depth: u32,
    ) -> Result<Node, GameError> {
        let mut child = match self.pool.pop() {
            Some(mut recycled) => {
                recycled.clone_from(position);
                recycled
            }
            None => position.clone(),
        };

        let placed = place(&mut child, pos, id);
        debug_assert!(placed, "legal_moves produced an occupied cell");
        child.advance_turn();

        let result = self.alpha_beta(&child, alpha, beta, depth + 1);
        self.pool.push(child);

        if depth == 0 {
            if let Ok(node) = &result {
                trace!(row = pos.row, col = pos.col, score = node.score, "root candidate");
            }
        }
        result
    }
}

/// Convenience wrapper: search `position` with a fresh [`Searcher`].
pub fn best_move(position: &Position) -> Result<Pos, GameError> {
    Searcher::new().search(position).map(|result| result.best_move)
}
