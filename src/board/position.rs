//! Game position: grid, turn counter and the shared party roster

use std::sync::Arc;

use super::{Board, Party, PartyId};
use crate::error::GameError;

/// Full state of one game.
///
/// The roster is shared by every clone of a position; it can only be
/// extended while the turn counter is still zero.
#[derive(Debug, PartialEq, Eq)]
pub struct Position {
    board: Board,
    turn: u32,
    roster: Arc<Vec<Party>>,
}

impl Position {
    /// Empty position without parties. Size bounds are checked by
    /// `game::new_game`, not here.
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            turn: 0,
            roster: Arc::new(Vec::new()),
        }
    }

    pub fn with_roster(size: usize, parties: Vec<Party>) -> Self {
        Self {
            board: Board::new(size),
            turn: 0,
            roster: Arc::new(parties),
        }
    }

    /// Append a party to the roster.
    pub fn add_party(&mut self, party: Party) -> Result<PartyId, GameError> {
        if self.turn > 0 {
            return Err(GameError::RosterFrozen);
        }
        let id = PartyId(self.roster.len() as u8);
        Arc::make_mut(&mut self.roster).push(party);
        Ok(id)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable grid access for the rules engine
    #[inline]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Move the turn counter forward by one accepted move
    #[inline]
    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }

    #[inline]
    pub fn roster(&self) -> &[Party] {
        &self.roster
    }

    #[inline]
    pub fn party(&self, id: PartyId) -> Option<&Party> {
        self.roster.get(id.index())
    }

    /// Party whose turn it is: `roster[turn mod len]`
    pub fn current_party(&self) -> Result<(PartyId, Party), GameError> {
        if self.roster.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        let idx = self.turn as usize % self.roster.len();
        Ok((PartyId(idx as u8), self.roster[idx]))
    }

    /// Look up a party by its display mark
    pub fn party_by_mark(&self, mark: char) -> Option<PartyId> {
        self.roster
            .iter()
            .position(|p| p.mark == mark)
            .map(|idx| PartyId(idx as u8))
    }
}

impl Clone for Position {
    fn clone(&self) -> Self {
        Self {
            board: self.board.clone(),
            turn: self.turn,
            roster: Arc::clone(&self.roster),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.board.clone_from(&source.board);
        self.turn = source.turn;
        if !Arc::ptr_eq(&self.roster, &source.roster) {
            self.roster = Arc::clone(&source.roster);
        }
    }
}
