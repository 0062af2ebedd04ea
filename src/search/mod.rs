//! Search module for the tic-tac-toe AI
//!
//! Contains the full-depth alpha-beta minimax used by the
//! [`Strategy::AlphaBeta`](crate::engine::Strategy::AlphaBeta) strategy.

pub mod alphabeta;

pub use alphabeta::{best_move, SearchResult, SearchStats, Searcher};
