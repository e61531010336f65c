use serde::{Deserialize, Serialize};

/// Per-cell state bound used when nothing else is configured.
pub const DEFAULT_MAX_STATES: usize = 3000;

/// How gap columns are counted in the gap objective.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapModel {
    /// Every gap column counts as one gap
    #[default]
    Column,

    /// A maximal run of consecutive gap columns in the same sequence counts as one gap
    Run,
}

impl GapModel {
    /// Gaps added when an alignment that already ends in a gap in the same sequence is extended
    /// by another gap column.
    #[inline]
    pub fn extend_cost(&self) -> u32 {
        match self {
            Self::Column => 1,
            Self::Run => 0,
        }
    }

    /// Gaps added when a new gap is started after a match/mismatch or a gap in the other sequence.
    #[inline]
    pub fn open_cost(&self) -> u32 {
        1
    }

    /// Score of aligning a prefix of `len` symbols entirely against gaps.
    #[inline]
    pub fn all_gap_cost(&self, len: u32) -> u32 {
        match self {
            Self::Column => len,
            Self::Run => u32::from(len > 0),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignerConfig {
    pub gap_model: GapModel,

    /// Maximum number of non-dominated states per DP cell. `None` lets each cell grow as needed.
    pub max_states: Option<usize>,
}

impl AlignerConfig {
    pub fn new(gap_model: GapModel, max_states: Option<usize>) -> Self {
        Self { gap_model, max_states }
    }
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            gap_model: GapModel::Column,
            max_states: Some(DEFAULT_MAX_STATES),
        }
    }
}
