//! Evaluation module for tic-tac-toe positions
//!
//! Scores are computed per party from lines that only one party has
//! marked so far. The search uses them at terminal positions.

pub mod heuristic;

pub use heuristic::{evaluate, terminal_score, Scores, LINE_BASE};
