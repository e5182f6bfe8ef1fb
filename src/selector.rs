//! The move-selection policy.
//!
//! Input is the ranked candidate list scraped from the analysis board,
//! best line first, with evaluations already normalized to the mover's
//! perspective. Selection is a pure function of its inputs apart from
//! the one intentional source of randomness in the final step, which
//! keeps play from looking mechanical.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::AutopilotError;
use crate::types::{CandidateMove, SelectionPolicy};

/// Pick one move from a ranked candidate list.
///
/// The policy, in order:
/// 1. `play_best_only` short-circuits to the top line.
/// 2. Lines evaluated at or above the policy floor form the eligible
///    set; if none qualify, the top line is played as the forced
///    fallback.
/// 3. The earliest ranked eligible capture wins outright.
/// 4. Otherwise a uniformly random eligible line is played.
///
/// Candidates must be non-empty and ordered by non-increasing
/// evaluation; violations are rejected rather than repaired.
pub fn select(
    candidates: &[CandidateMove],
    policy: &SelectionPolicy,
) -> Result<CandidateMove, AutopilotError> {
    select_with(candidates, policy, &mut rand::thread_rng())
}

/// Like [`select`], with the randomness source supplied by the caller.
pub fn select_with<R: Rng + ?Sized>(
    candidates: &[CandidateMove],
    policy: &SelectionPolicy,
    rng: &mut R,
) -> Result<CandidateMove, AutopilotError> {
    validate(candidates, policy)?;

    let best = candidates[0];
    if policy.play_best_only {
        return Ok(best);
    }

    let eligible: Vec<CandidateMove> = candidates
        .iter()
        .copied()
        .filter(|c| c.evaluation >= policy.minimum_eval)
        .collect();

    // no acceptable alternative, must play the top engine choice
    if eligible.is_empty() {
        return Ok(best);
    }

    // if we can capture, capture
    if let Some(capture) = eligible.iter().find(|c| c.is_capture) {
        return Ok(*capture);
    }

    Ok(eligible.choose(rng).copied().unwrap_or(best))
}

fn validate(
    candidates: &[CandidateMove],
    policy: &SelectionPolicy,
) -> Result<(), AutopilotError> {
    if candidates.is_empty() {
        return Err(AutopilotError::NoCandidates);
    }
    if policy.minimum_eval.is_nan() {
        return Err(AutopilotError::InvalidThreshold);
    }
    for (rank, candidate) in candidates.iter().enumerate() {
        if candidate.evaluation.is_nan() {
            return Err(AutopilotError::NonNumericEvaluation(rank));
        }
        if rank > 0 && candidates[rank - 1].evaluation < candidate.evaluation {
            return Err(AutopilotError::UnsortedCandidates(rank));
        }
    }
    Ok(())
}
