//! Bounded-memory storage for the DP tables.
//!
//! Without traceback only the most recent rows of the matrices are ever read. Q and T need the
//! current and the previous row, which [`RollingRows`] keeps in one flat buffer of two rows whose
//! roles are exchanged at every new row. S only needs the cell left of the current one, so
//! [`GapRow`] is a single row reused from left to right.

use super::score::ScoreSet;

pub(crate) struct RollingRows {
    cells: Vec<ScoreSet>,
    width: usize,

    /// Physical row (0 or 1) holding the current DP row
    current: usize,
}

impl RollingRows {
    pub fn new(width: usize, max_states: Option<usize>) -> Self {
        let cells = (0..2 * width)
            .map(|_| ScoreSet::with_max_states(max_states))
            .collect();

        Self {
            cells,
            width,
            current: 0,
        }
    }

    #[inline]
    fn row(&self, physical: usize) -> &[ScoreSet] {
        &self.cells[physical * self.width..(physical + 1) * self.width]
    }

    pub fn current(&self) -> &[ScoreSet] {
        self.row(self.current)
    }

    pub fn current_mut(&mut self) -> &mut [ScoreSet] {
        let start = self.current * self.width;
        &mut self.cells[start..start + self.width]
    }

    pub fn previous(&self) -> &[ScoreSet] {
        self.row(self.current ^ 1)
    }

    /// Previous row for reading together with the current row for writing.
    pub fn split_mut(&mut self) -> (&[ScoreSet], &mut [ScoreSet]) {
        let (first, second) = self.cells.split_at_mut(self.width);

        if self.current == 0 {
            (&*second, first)
        } else {
            (&*first, second)
        }
    }

    /// Start a new DP row: the current row becomes the previous one and the old previous row,
    /// which must have been cleared, becomes current.
    pub fn advance(&mut self) {
        debug_assert!(self.previous().iter().all(ScoreSet::is_empty));
        self.current ^= 1;
    }

    /// Empty all cells of the previous row once it is no longer needed.
    pub fn clear_previous(&mut self) {
        let start = (self.current ^ 1) * self.width;
        self.cells[start..start + self.width]
            .iter_mut()
            .for_each(ScoreSet::clear);
    }
}

pub(crate) struct GapRow {
    cells: Vec<ScoreSet>,
}

impl GapRow {
    pub fn new(width: usize, max_states: Option<usize>) -> Self {
        Self {
            cells: (0..width)
                .map(|_| ScoreSet::with_max_states(max_states))
                .collect(),
        }
    }

    pub fn cells(&self) -> &[ScoreSet] {
        &self.cells
    }

    /// The cell left of column `col` for reading, and the cell at `col` for writing.
    pub fn left_and_cell_mut(&mut self, col: usize) -> (&ScoreSet, &mut ScoreSet) {
        let (left, right) = self.cells.split_at_mut(col);
        (&left[col - 1], &mut right[0])
    }

    /// Empty columns `from..`, keeping the boundary columns before it.
    pub fn clear_from(&mut self, from: usize) {
        self.cells[from..].iter_mut().for_each(ScoreSet::clear);
    }
}

#[cfg(test)]
mod tests {
    use crate::aligner::score::Score;

    use super::{GapRow, RollingRows};

    #[test]
    fn test_rolling_rows() {
        let mut rows = RollingRows::new(3, None);
        assert_eq!(rows.current().len(), 3);
        assert_eq!(rows.previous().len(), 3);

        rows.current_mut()[2].insert(Score::new(1, 2)).unwrap();

        rows.advance();
        assert!(rows.current().iter().all(|c| c.is_empty()));
        assert_eq!(rows.previous()[2].as_slice(), &[Score::new(1, 2)]);

        {
            let (prev, curr) = rows.split_mut();
            let carried = prev[2].as_slice()[0].add_gaps(1);
            curr[1].insert(carried).unwrap();
        }

        rows.clear_previous();
        assert!(rows.previous().iter().all(|c| c.is_empty()));
        assert_eq!(rows.current()[1].as_slice(), &[Score::new(1, 3)]);

        rows.advance();
        assert_eq!(rows.previous()[1].as_slice(), &[Score::new(1, 3)]);
        assert!(rows.current().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_gap_row() {
        let mut row = GapRow::new(4, Some(8));
        row.left_and_cell_mut(1).1.insert(Score::new(0, 1)).unwrap();

        let (left, cell) = row.left_and_cell_mut(2);
        assert_eq!(left.as_slice(), &[Score::new(0, 1)]);
        cell.insert(Score::new(0, 2)).unwrap();

        row.clear_from(2);
        assert_eq!(row.cells()[1].len(), 1);
        assert!(row.cells()[2].is_empty());
        assert!(row.cells()[3].is_empty());
    }
}
