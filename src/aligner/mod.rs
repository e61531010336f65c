//! Exact Pareto fronts of (matches, gaps) for global alignment of two sequences.
//!
//! The DP keeps three tables of [`ScoreSet`]s: Q for alignments ending in a match or mismatch
//! column (or any column, as Q also absorbs S and T), S for alignments ending with a symbol of
//! the second sequence against a gap, and T for alignments ending with a symbol of the first
//! sequence against a gap. No traceback is stored, so only the last rows are kept in memory.

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::ParetoError;

pub mod config;
pub mod score;
pub(crate) mod merge;
pub(crate) mod tables;

pub use config::{AlignerConfig, GapModel, DEFAULT_MAX_STATES};
pub use score::{Score, ScoreSet};

use merge::{merge_gap, merge_q};
use tables::{GapRow, RollingRows};

/// The cells of the DP tables for one completed row.
pub struct RowView<'a> {
    pub row: usize,
    pub q: &'a [ScoreSet],
    pub s: &'a [ScoreSet],
    pub t: &'a [ScoreSet],
}

/// DP engine for one pair of sequences.
///
/// All table rows are allocated up front for the full problem size, and released when the
/// engine is dropped.
pub struct ParetoDp<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    gap_model: GapModel,

    q: RollingRows,
    s: GapRow,
    t: RollingRows,

    /// Last completed row
    row: usize,
}

impl<'a> ParetoDp<'a> {
    pub fn new(seq1: &'a [u8], seq2: &'a [u8], config: AlignerConfig) -> Result<Self, ParetoError> {
        // Scores never exceed the number of consumed symbols
        seq1.len()
            .checked_add(seq2.len())
            .and_then(|total| u32::try_from(total).ok())
            .ok_or(ParetoError::SequenceTooLong(seq1.len().max(seq2.len())))?;

        let width = seq2.len() + 1;
        let mut dp = Self {
            seq1,
            seq2,
            gap_model: config.gap_model,
            q: RollingRows::new(width, config.max_states),
            s: GapRow::new(width, config.max_states),
            t: RollingRows::new(width, config.max_states),
            row: 0,
        };

        dp.init_base_cases()?;

        Ok(dp)
    }

    fn init_base_cases(&mut self) -> Result<(), ParetoError> {
        let q0 = self.q.current_mut();
        q0[0].insert(Score::new(0, 0))?;

        for (j, cell) in q0.iter_mut().enumerate().skip(1) {
            cell.insert(Score::new(0, self.gap_model.all_gap_cost(j as u32)))?;
        }

        // T in row 0 and S in column 0 stay empty: no alignment reaches them.
        Ok(())
    }

    pub fn fill(&mut self) -> Result<(), ParetoError> {
        self.fill_with(|_| ())
    }

    /// Fill the tables row by row, calling `on_row` with the DP rows after the base row and
    /// after each completed row.
    pub fn fill_with<F>(&mut self, mut on_row: F) -> Result<(), ParetoError>
    where
        F: FnMut(RowView<'_>),
    {
        if self.row == 0 {
            on_row(self.row_view());
        }

        let (seq1, seq2) = (self.seq1, self.seq2);
        let gap_model = self.gap_model;

        while self.row < seq1.len() {
            let i = self.row + 1;
            self.q.advance();
            self.t.advance();

            let (q_prev, q_curr) = self.q.split_mut();
            let (t_prev, t_curr) = self.t.split_mut();

            q_curr[0].insert(Score::new(0, gap_model.all_gap_cost(i as u32)))?;

            let symbol = seq1[i - 1];
            for j in 1..=seq2.len() {
                let (s_left, s_cell) = self.s.left_and_cell_mut(j);
                merge_gap(s_cell, s_left, &q_curr[j - 1], gap_model)?;
                merge_gap(&mut t_curr[j], &t_prev[j], &q_prev[j], gap_model)?;
                merge_q(&mut q_curr[j], s_cell, &t_curr[j], &q_prev[j - 1], symbol == seq2[j - 1])?;
            }

            debug!(row = i, last_cell_states = q_curr[seq2.len()].len(), "Row done");
            self.row = i;
            on_row(self.row_view());

            self.q.clear_previous();
            self.t.clear_previous();
            self.s.clear_from(1);
        }

        Ok(())
    }

    fn row_view(&self) -> RowView<'_> {
        RowView {
            row: self.row,
            q: self.q.current(),
            s: self.s.cells(),
            t: self.t.current(),
        }
    }

    /// Whether all rows have been computed.
    pub fn is_complete(&self) -> bool {
        self.row == self.seq1.len()
    }

    /// Non-dominated scores of the last Q cell of the last completed row. After [`Self::fill`]
    /// this is the Pareto front of the global alignment.
    pub fn front(&self) -> &ScoreSet {
        &self.q.current()[self.seq2.len()]
    }
}

/// The Pareto front of a global alignment, ordered by increasing number of matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParetoFront {
    pairs: Vec<Score>,
}

impl ParetoFront {
    pub fn pairs(&self) -> &[Score] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, score: &Score) -> bool {
        self.pairs.binary_search(score).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Score> {
        self.pairs.iter()
    }
}

impl From<&ScoreSet> for ParetoFront {
    fn from(set: &ScoreSet) -> Self {
        Self {
            pairs: set.iter().copied().sorted_unstable().collect(),
        }
    }
}

impl Display for ParetoFront {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for score in &self.pairs {
            writeln!(f, "{score}")?;
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ParetoAligner {
    config: AlignerConfig,
}

impl ParetoAligner {
    pub fn new(config: AlignerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn align<S1, S2>(&self, seq1: S1, seq2: S2) -> Result<ParetoFront, ParetoError>
    where
        S1: AsRef<[u8]>,
        S2: AsRef<[u8]>,
    {
        self.align_u8(seq1.as_ref(), seq2.as_ref())
    }

    fn align_u8(&self, seq1: &[u8], seq2: &[u8]) -> Result<ParetoFront, ParetoError> {
        info!(
            len1 = seq1.len(),
            len2 = seq2.len(),
            gap_model = ?self.config.gap_model,
            "Computing Pareto front"
        );

        let mut dp = ParetoDp::new(seq1, seq2, self.config)?;
        dp.fill()?;

        let front = ParetoFront::from(dp.front());
        info!("Done. {} non-dominated scores", front.len());

        Ok(front)
    }
}
