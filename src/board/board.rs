//! Square grid of optional party marks

use super::{PartyId, Pos};

/// N×N grid. Cells hold the id of the party that owns them.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Option<PartyId>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Owner of a cell. Off-board cells read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<PartyId> {
        if self.contains(pos) {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[pos.to_index(self.size)].is_none()
    }

    /// Write a mark without any rule checks.
    /// Use `rules::place` or `rules::play` for game moves.
    #[inline]
    pub fn set(&mut self, pos: Pos, party: PartyId) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = Some(party);
    }

    /// Clear a cell
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = pos.to_index(self.size);
        self.cells[idx] = None;
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Occupied cells with their owners, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, PartyId)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|party| (Pos::from_index(idx, size), party)))
    }

    /// Every line that can win: rows, columns, main diagonal, anti-diagonal
    pub fn lines(&self) -> Vec<Vec<Pos>> {
        let n = self.size as u8;
        let mut lines = Vec::with_capacity(2 * self.size + 2);
        for r in 0..n {
            lines.push((0..n).map(|c| Pos::new(r, c)).collect());
        }
        for c in 0..n {
            lines.push((0..n).map(|r| Pos::new(r, c)).collect());
        }
        lines.push((0..n).map(|i| Pos::new(i, i)).collect());
        lines.push((0..n).map(|i| Pos::new(i, n - 1 - i)).collect());
        lines
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            size: self.size,
            cells: self.cells.clone(),
        }
    }

    /// Reuses the existing cell storage. The search relies on this to
    /// recycle child positions instead of allocating one per node.
    fn clone_from(&mut self, source: &Self) {
        self.size = source.size;
        self.cells.clone_from(&source.cells);
    }
}
