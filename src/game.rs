//! Game setup and turn loop shared by the text menu and the GUI
//!
//! A [`Game`] owns the position, the AI engine and the move history. Both
//! front ends drive it the same way: ask for the current party, feed it a
//! move (typed in, clicked, or computed by the engine) and look at the
//! returned [`Outcome`].

use std::fmt::Write as _;

use tracing::info;

use crate::board::{
    Party, PartyId, Pos, Position, MAX_BOARD_SIZE, MAX_PARTIES, MIN_BOARD_SIZE, MIN_PARTIES,
};
use crate::config::AppConfig;
use crate::engine::{AIEngine, MoveResult, Strategy};
use crate::error::GameError;
use crate::rules::{legal_moves, play, winning_line};

/// Result of the last accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(PartyId),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Create an empty position after checking the board size.
pub fn new_game(size: usize) -> Result<Position, GameError> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(GameError::InvalidBoardSize(size));
    }
    Ok(Position::new(size))
}

/// Add a party to a game that has not started yet.
pub fn add_player(position: &mut Position, party: Party) -> Result<PartyId, GameError> {
    if position.roster().len() >= MAX_PARTIES {
        return Err(GameError::InvalidPartyCount(position.roster().len() + 1));
    }
    if position.party_by_mark(party.mark).is_some() {
        return Err(GameError::DuplicateMark(party.mark));
    }
    position.add_party(party)
}

/// One game in progress
pub struct Game {
    position: Position,
    engine: AIEngine,
    history: Vec<Pos>,
    outcome: Outcome,
}

impl Game {
    /// Validated game with the given roster.
    pub fn new(size: usize, parties: &[Party], engine: AIEngine) -> Result<Self, GameError> {
        let mut position = new_game(size)?;
        for &party in parties {
            add_player(&mut position, party)?;
        }
        if position.roster().len() < MIN_PARTIES {
            return Err(GameError::InvalidPartyCount(position.roster().len()));
        }
        info!(size, parties = parties.len(), strategy = %engine.strategy(), "new game");
        Ok(Self {
            position,
            engine,
            history: Vec::new(),
            outcome: Outcome::InProgress,
        })
    }

    /// Game with the configured board, roster and strategy.
    pub fn from_config(config: &AppConfig) -> Result<Self, GameError> {
        Self::new(
            config.board_size,
            &config.players,
            AIEngine::new(config.strategy),
        )
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn history(&self) -> &[Pos] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().copied()
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.engine.strategy()
    }

    /// Party to move.
    pub fn current_party(&self) -> Result<(PartyId, Party), GameError> {
        self.position.current_party()
    }

    /// Winner together with the completed line, if any
    pub fn winning_line(&self) -> Option<(PartyId, Vec<Pos>)> {
        winning_line(&self.position)
    }

    /// Play `pos` for the party to move.
    pub fn play(&mut self, pos: Pos) -> Result<Outcome, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::NoPossibleMove);
        }
        let (id, party) = self.position.current_party()?;
        let won = play(&mut self.position, pos)?;
        self.history.push(pos);

        self.outcome = if won {
            Outcome::Won(id)
        } else if legal_moves(&self.position).is_empty() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };

        info!(
            party = %party,
            row = pos.row,
            col = pos.col,
            turn = self.position.turn(),
            outcome = ?self.outcome,
            "move played"
        );
        Ok(self.outcome)
    }

    /// Let the engine pick and play the move for the party to move.
    pub fn play_ai(&mut self) -> Result<(MoveResult, Outcome), GameError> {
        if self.outcome.is_over() {
            return Err(GameError::NoPossibleMove);
        }
        let result = self.engine.get_move_with_stats(&self.position)?;
        let outcome = self.play(result.best_move)?;
        Ok((result, outcome))
    }

    /// Take back the last `count` moves by replaying the rest.
    pub fn undo(&mut self, count: usize) {
        let keep = self.history.len().saturating_sub(count);
        let moves: Vec<Pos> = self.history.drain(..keep).collect();
        let roster = self.position.roster().to_vec();

        self.position = Position::with_roster(self.position.size(), roster);
        self.history.clear();
        self.outcome = Outcome::InProgress;
        for pos in moves {
            // Every move in the history was accepted once, on the same board
            if self.play(pos).is_err() {
                break;
            }
        }
    }

    /// Start over with the same board and roster.
    pub fn reset(&mut self) {
        self.undo(self.history.len());
    }
}

/// Text rendering of the grid, with row and column indices.
///
/// ```text
///     0   1   2
///   ============
/// 0 | X |   |   |
///   ------------
/// ```
pub fn render_board(position: &Position) -> String {
    let n = position.size();
    let board = position.board();
    let mut out = String::from("  ");

    for i in 0..n {
        let _ = write!(out, "  {i} ");
    }
    out.push_str("\n  ");
    out.push_str(&"====".repeat(n));

    for r in 0..n {
        let _ = write!(out, "\n{r} |");
        for c in 0..n {
            let mark = board
                .get(Pos::new(r as u8, c as u8))
                .and_then(|id| position.party(id))
                .map_or(' ', |p| p.mark);
            let _ = write!(out, " {mark} |");
        }
        out.push_str("\n  ");
        if r + 1 < n {
            out.push_str(&"----".repeat(n));
        }
    }
    out.push_str(&"====".repeat(n));
    out.push('\n');
    out
}
