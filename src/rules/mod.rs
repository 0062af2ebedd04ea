//! Game rules for N×N tic-tac-toe
//!
//! This module implements the rule set:
//! - Legal move generation and mark placement
//! - Win conditions (full row, column, main or anti-diagonal)
//! - Terminal-state detection

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{is_legal, is_on_board, legal_moves, place, play};
pub use win::{is_terminal, is_winning_move, winner, winning_line};
