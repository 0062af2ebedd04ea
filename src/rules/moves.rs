//! Move legality, placement and enumeration

use tracing::trace;

use crate::board::{PartyId, Pos, Position};
use crate::error::GameError;

use super::win::is_winning_move;

/// True iff the cell lies inside the grid
#[inline]
pub fn is_on_board(position: &Position, pos: Pos) -> bool {
    position.board().contains(pos)
}

/// True iff the cell is on the board and empty
#[inline]
pub fn is_legal(position: &Position, pos: Pos) -> bool {
    is_on_board(position, pos) && position.board().is_empty(pos)
}

/// Mark an empty cell for `party`.
///
/// Returns false and leaves the position untouched if the cell is not
/// legal. The turn counter is not advanced.
pub fn place(position: &mut Position, pos: Pos, party: PartyId) -> bool {
    if !is_legal(position, pos) {
        return false;
    }
    position.board_mut().set(pos, party);
    true
}

/// All empty cells, row-major (row ascending, then column ascending).
///
/// The order decides which move the search prefers among equal scores.
pub fn legal_moves(position: &Position) -> Vec<Pos> {
    let n = position.size() as u8;
    let board = position.board();
    let mut moves = Vec::with_capacity(position.size() * position.size());
    for row in 0..n {
        for col in 0..n {
            let pos = Pos::new(row, col);
            if board.is_empty(pos) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// Play one accepted move for the party whose turn it is.
///
/// Places the mark, advances the turn once, and reports whether the move
/// completed a line.
pub fn play(position: &mut Position, pos: Pos) -> Result<bool, GameError> {
    let (id, _) = position.current_party()?;
    if !place(position, pos, id) {
        return Err(GameError::IllegalMove {
            row: pos.row as i32,
            col: pos.col as i32,
        });
    }
    position.advance_turn();
    let won = is_winning_move(position, pos, id);
    trace!(row = pos.row, col = pos.col, party = id.0, won, "move played");
    Ok(won)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Party, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

    fn two_player(size: usize) -> Position {
        Position::with_roster(size, vec![Party::human('X'), Party::ai('O')])
    }

    #[test]
    fn test_valid_cells_for_board() {
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            let position = two_player(size);
            for r in 0..size as u8 {
                for c in 0..size as u8 {
                    assert!(is_on_board(&position, Pos::new(r, c)));
                }
            }
        }
    }

    #[test]
    fn test_invalid_cells_for_board() {
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            let position = two_player(size);
            assert!(!is_on_board(&position, Pos::new(0, size as u8)));
            assert!(!is_on_board(&position, Pos::new(size as u8, 0)));
            assert!(!is_legal(&position, Pos::new(size as u8, size as u8)));
        }
    }

    #[test]
    fn test_cell_unavailable_after_place() {
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            let mut position = two_player(size);
            for (count, pos) in legal_moves(&position.clone()).into_iter().enumerate() {
                assert!(is_legal(&position, pos));
                assert!(place(&mut position, pos, PartyId(0)));
                assert!(!is_legal(&position, pos));
                assert_eq!(position.board().occupied_count(), count + 1);
            }
            assert!(legal_moves(&position).is_empty());
        }
    }

    #[test]
    fn test_place_rejects_occupied_and_off_board() {
        let mut position = two_player(3);
        assert!(place(&mut position, Pos::new(1, 1), PartyId(0)));
        assert!(!place(&mut position, Pos::new(1, 1), PartyId(1)));
        assert_eq!(position.board().get(Pos::new(1, 1)), Some(PartyId(0)));
        assert!(!place(&mut position, Pos::new(0, 3), PartyId(1)));
        assert_eq!(position.board().occupied_count(), 1);
        // place never touches the turn counter
        assert_eq!(position.turn(), 0);
    }

    #[test]
    fn test_legal_moves_row_major() {
        let mut position = two_player(3);
        place(&mut position, Pos::new(0, 1), PartyId(0));
        place(&mut position, Pos::new(2, 0), PartyId(1));

        let moves = legal_moves(&position);
        assert_eq!(
            moves,
            vec![
                Pos::new(0, 0),
                Pos::new(0, 2),
                Pos::new(1, 0),
                Pos::new(1, 1),
                Pos::new(1, 2),
                Pos::new(2, 1),
                Pos::new(2, 2),
            ]
        );
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_legal_moves_idempotent() {
        let mut position = two_player(4);
        play(&mut position, Pos::new(2, 3)).unwrap();
        play(&mut position, Pos::new(0, 0)).unwrap();
        assert_eq!(legal_moves(&position), legal_moves(&position));
    }

    #[test]
    fn test_play_advances_turn_and_rotates() {
        let mut position = two_player(3);
        assert_eq!(play(&mut position, Pos::new(0, 0)), Ok(false));
        assert_eq!(position.turn(), 1);
        assert_eq!(position.board().get(Pos::new(0, 0)), Some(PartyId(0)));

        assert_eq!(play(&mut position, Pos::new(1, 1)), Ok(false));
        assert_eq!(position.board().get(Pos::new(1, 1)), Some(PartyId(1)));
        assert_eq!(position.turn(), 2);
    }

    #[test]
    fn test_play_illegal_move() {
        let mut position = two_player(3);
        play(&mut position, Pos::new(0, 0)).unwrap();
        assert_eq!(
            play(&mut position, Pos::new(0, 0)),
            Err(GameError::IllegalMove { row: 0, col: 0 })
        );
        assert_eq!(
            play(&mut position, Pos::new(5, 1)),
            Err(GameError::IllegalMove { row: 5, col: 1 })
        );
        assert_eq!(position.turn(), 1);
    }

    #[test]
    fn test_play_reports_win() {
        let mut position = two_player(3);
        for (pos, expected) in [
            (Pos::new(0, 0), false),
            (Pos::new(1, 0), false),
            (Pos::new(0, 1), false),
            (Pos::new(1, 1), false),
            (Pos::new(0, 2), true),
        ] {
            assert_eq!(play(&mut position, pos), Ok(expected));
        }
    }

    #[test]
    fn test_play_without_parties() {
        let mut position = Position::new(3);
        assert_eq!(play(&mut position, Pos::new(0, 0)), Err(GameError::EmptyRoster));
    }
}
