//! Line-counting heuristic
//!
//! Every row, column and the two diagonals are inspected once. A line
//! whose occupied cells all belong to one party adds `LINE_BASE^k` to that
//! party's score, `k` being the number of its marks in the line. Mixed or
//! empty lines add nothing.
//!
//! Scores of externally controlled parties are negated afterwards, so the
//! search can alternate max/min on role alone. With three parties this
//! pools every external party into one opponent; their individual
//! incentives are not modelled.

use std::collections::BTreeMap;

use crate::board::{Party, PartyId, Position, Role};

/// Weight base for single-owner lines
pub const LINE_BASE: i64 = 10;

/// Per-party scores, keyed by roster index
pub type Scores = BTreeMap<PartyId, i64>;

/// Evaluate the whole board.
///
/// Only parties owning at least one single-owner line get an entry.
#[must_use]
pub fn evaluate(position: &Position) -> Scores {
    let board = position.board();
    let mut scores = Scores::new();

    for line in board.lines() {
        let mut owner = None;
        let mut count = 0u32;
        let mut mixed = false;

        for &pos in &line {
            let Some(party) = board.get(pos) else {
                continue;
            };
            match owner {
                None => owner = Some(party),
                Some(o) if o != party => {
                    mixed = true;
                    break;
                }
                Some(_) => {}
            }
            count += 1;
        }

        if mixed {
            continue;
        }
        if let Some(party) = owner {
            *scores.entry(party).or_insert(0) += LINE_BASE.pow(count);
        }
    }

    for (party, score) in scores.iter_mut() {
        if position.party(*party).map(|p| p.role) != Some(Role::Search) {
            *score = -*score;
        }
    }

    scores
}

/// Score of a finished position for the search.
///
/// `to_move` is the party whose turn it would be. An external party is
/// assumed to pick the best of all recorded scores, the search party the
/// worst. An empty score table scores 0.
#[must_use]
pub fn terminal_score(position: &Position, to_move: &Party) -> i64 {
    let scores = evaluate(position);
    let values = scores.values().copied();
    let best = match to_move.role {
        Role::External => values.max(),
        Role::Search => values.min(),
    };
    best.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::place;

    fn setup(parties: Vec<Party>, marks: &[(u8, u8, u8)]) -> Position {
        let mut position = Position::with_roster(3, parties);
        for &(r, c, p) in marks {
            assert!(place(&mut position, Pos::new(r, c), PartyId(p)));
        }
        position
    }

    #[test]
    fn test_empty_board_has_no_scores() {
        let position = setup(vec![Party::human('H'), Party::ai('R')], &[]);
        assert!(evaluate(&position).is_empty());
        assert_eq!(terminal_score(&position, &Party::ai('R')), 0);
        assert_eq!(terminal_score(&position, &Party::human('H')), 0);
    }

    #[test]
    fn test_single_mark_counts_every_line_through_it() {
        // Center: row, column, both diagonals
        let position = setup(vec![Party::human('H'), Party::ai('R')], &[(1, 1, 1)]);
        assert_eq!(evaluate(&position)[&PartyId(1)], 4 * LINE_BASE);

        // Corner: row, column, main diagonal
        let position = setup(vec![Party::human('H'), Party::ai('R')], &[(0, 0, 1)]);
        assert_eq!(evaluate(&position)[&PartyId(1)], 3 * LINE_BASE);
    }

    #[test]
    fn test_external_scores_are_negated() {
        let position = setup(vec![Party::human('H'), Party::ai('R')], &[(0, 1, 0)]);
        // row 0 and column 1
        assert_eq!(evaluate(&position)[&PartyId(0)], -20);
    }

    #[test]
    fn test_longer_runs_dominate() {
        let position = setup(
            vec![Party::human('H'), Party::ai('R')],
            &[(0, 0, 0), (1, 0, 0), (2, 2, 1)],
        );
        let scores = evaluate(&position);
        // H: column 0 (100), row 0 (10), row 1 (10); main diagonal is mixed
        assert_eq!(scores[&PartyId(0)], -120);
        // R: row 2 (10), column 2 (10); main diagonal is mixed
        assert_eq!(scores[&PartyId(1)], 20);
    }

    #[test]
    fn test_mixed_lines_score_nothing() {
        let position = setup(
            vec![Party::human('H'), Party::ai('R')],
            &[(0, 0, 0), (0, 1, 1), (0, 2, 0)],
        );
        let scores = evaluate(&position);
        // row 0 is mixed; H keeps columns 0 and 2, both diagonals
        assert_eq!(scores[&PartyId(0)], -40);
        assert_eq!(scores[&PartyId(1)], 10);
    }

    #[test]
    fn test_terminal_score_selection() {
        let position = setup(
            vec![Party::human('H'), Party::ai('R')],
            &[(0, 0, 0), (0, 1, 0), (0, 2, 0), (1, 1, 1), (2, 1, 1)],
        );
        let scores = evaluate(&position);
        let max = *scores.values().max().unwrap();
        let min = *scores.values().min().unwrap();
        assert_eq!(terminal_score(&position, &Party::human('H')), max);
        assert_eq!(terminal_score(&position, &Party::ai('R')), min);
        assert!(min < 0 && max > 0);
    }

    #[test]
    fn test_three_parties_pool_externals() {
        let position = setup(
            vec![Party::human('H'), Party::human('J'), Party::ai('R')],
            &[(0, 0, 0), (2, 0, 1), (1, 1, 2)],
        );
        let scores = evaluate(&position);
        assert!(scores[&PartyId(0)] < 0);
        assert!(scores[&PartyId(1)] < 0);
        assert!(scores[&PartyId(2)] > 0);
    }
}
