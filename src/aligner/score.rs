//! Score pairs and the non-dominated sets stored in each DP cell.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::errors::ParetoError;

/// Number of matches (maximized) and number of gaps (minimized) of an alignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Score {
    matches: u32,
    gaps: u32,
}

impl Score {
    pub fn new(matches: u32, gaps: u32) -> Self {
        Self { matches, gaps }
    }

    #[inline]
    pub fn matches(&self) -> u32 {
        self.matches
    }

    #[inline]
    pub fn gaps(&self) -> u32 {
        self.gaps
    }

    /// True if `self` is at least as good as `other` in both objectives and strictly better
    /// in one. Equal scores do not dominate each other.
    #[inline]
    pub fn dominates(&self, other: &Score) -> bool {
        self.matches >= other.matches
            && self.gaps <= other.gaps
            && (self.matches > other.matches || self.gaps < other.gaps)
    }

    #[inline]
    pub(crate) fn add_gaps(self, gaps: u32) -> Self {
        Self { matches: self.matches, gaps: self.gaps + gaps }
    }

    #[inline]
    pub(crate) fn add_matches(self, matches: u32) -> Self {
        Self { matches: self.matches + matches, gaps: self.gaps }
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.matches, self.gaps)
    }
}

/// The non-dominated scores of one DP cell.
///
/// No member dominates another and no score is stored twice. An empty set marks a cell that
/// no alignment reaches, which is how the boundary cells of S and T are represented.
///
/// The set optionally has an upper bound on the number of states. Inserting a score that
/// would exceed it fails with [`ParetoError::CapacityExceeded`].
#[derive(Clone, Debug, Default)]
pub struct ScoreSet {
    scores: SmallVec<[Score; 4]>,
    max_states: Option<usize>,
}

impl ScoreSet {
    /// An unbounded, empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_states(max_states: Option<usize>) -> Self {
        Self {
            scores: SmallVec::new(),
            max_states,
        }
    }

    /// Insert a score unless an existing member equals or dominates it. Members dominated by
    /// the new score are removed.
    ///
    /// Returns whether the score was added.
    pub fn insert(&mut self, score: Score) -> Result<bool, ParetoError> {
        if self.scores.iter().any(|s| *s == score || s.dominates(&score)) {
            return Ok(false);
        }

        self.scores.retain(|s| !score.dominates(s));

        if let Some(capacity) = self.max_states {
            if self.scores.len() >= capacity {
                trace!(capacity, %score, "score set full");
                return Err(ParetoError::CapacityExceeded { capacity });
            }
        }

        self.scores.push(score);
        Ok(true)
    }

    /// Remove all scores, keeping the allocated storage for reuse.
    pub fn clear(&mut self) {
        self.scores.clear();
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn max_states(&self) -> Option<usize> {
        self.max_states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Score> {
        self.scores.iter()
    }

    pub fn as_slice(&self) -> &[Score] {
        &self.scores
    }
}

impl<'a> IntoIterator for &'a ScoreSet {
    type Item = &'a Score;
    type IntoIter = std::slice::Iter<'a, Score>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}
