//! Win condition checking
//!
//! A party wins by owning every cell of a row, a column, the main diagonal
//! or the anti-diagonal. A move can only complete a diagonal it lies on.

use crate::board::{PartyId, Pos, Position};

use super::moves::legal_moves;

/// Does `party` own the whole row, column or diagonal through `pos`?
pub fn is_winning_move(position: &Position, pos: Pos, party: PartyId) -> bool {
    let board = position.board();
    let n = position.size() as u8;
    let owns = |p: Pos| board.get(p) == Some(party);

    let row = (0..n).all(|c| owns(Pos::new(pos.row, c)));
    let col = (0..n).all(|r| owns(Pos::new(r, pos.col)));
    let diagonal = pos.row == pos.col && (0..n).all(|i| owns(Pos::new(i, i)));
    let anti_diagonal = pos.row as usize + pos.col as usize + 1 == n as usize
        && (0..n).all(|i| owns(Pos::new(i, n - 1 - i)));

    row || col || diagonal || anti_diagonal
}

/// True iff no legal move remains or some line is complete.
///
/// No last move is stored in the position, so every occupied cell is
/// tested as if it had just been played.
pub fn is_terminal(position: &Position) -> bool {
    if legal_moves(position).is_empty() {
        return true;
    }
    winner(position).is_some()
}

/// Owner of a completed line, if any
pub fn winner(position: &Position) -> Option<PartyId> {
    position
        .board()
        .occupied()
        .find(|&(pos, party)| is_winning_move(position, pos, party))
        .map(|(_, party)| party)
}

/// First completed line and its owner.
///
/// Lines are tried in board order: rows, columns, main diagonal,
/// anti-diagonal.
pub fn winning_line(position: &Position) -> Option<(PartyId, Vec<Pos>)> {
    let board = position.board();
    board.lines().into_iter().find_map(|line| {
        let owner = board.get(line[0])?;
        line.iter()
            .all(|&p| board.get(p) == Some(owner))
            .then_some((owner, line))
    })
}
