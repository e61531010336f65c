//! Pareto merges that fill one DP cell from its predecessors.

use crate::errors::ParetoError;

use super::config::GapModel;
use super::score::ScoreSet;

/// Insert every score of `source` into `target` with `gaps` additional gaps.
#[inline]
fn add_with_gaps(target: &mut ScoreSet, source: &ScoreSet, gaps: u32) -> Result<(), ParetoError> {
    for score in source {
        target.insert(score.add_gaps(gaps))?;
    }

    Ok(())
}

/// Fill a gap cell (S or T) from the same-kind gap cell one step back, whose gap is extended,
/// and the Q cell one step back, from which a new gap is opened.
pub(crate) fn merge_gap(
    target: &mut ScoreSet,
    gap_pred: &ScoreSet,
    q_pred: &ScoreSet,
    gap_model: GapModel,
) -> Result<(), ParetoError> {
    add_with_gaps(target, gap_pred, gap_model.extend_cost())?;
    add_with_gaps(target, q_pred, gap_model.open_cost())
}

/// Fill a Q cell with the non-dominated union of the S and T cells at the same position and the
/// diagonal predecessor advanced by a match or mismatch column.
pub(crate) fn merge_q(
    target: &mut ScoreSet,
    s: &ScoreSet,
    t: &ScoreSet,
    diag: &ScoreSet,
    is_match: bool,
) -> Result<(), ParetoError> {
    for score in s.iter().chain(t) {
        target.insert(*score)?;
    }

    let bonus = u32::from(is_match);
    for score in diag {
        target.insert(score.add_matches(bonus))?;
    }

    Ok(())
}
