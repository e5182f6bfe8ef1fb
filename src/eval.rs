//! Parsing of scraped evaluation text into comparable scores.
//!
//! Analysis boards report either a positional score like `"0.3"` or
//! `"-1.2"`, or a forced mate like `"#2"` / `"#-3"`, always from
//! White's perspective. Selection wants one numeric scale, so mate
//! announcements are collapsed to a large-magnitude sentinel that
//! dominates any realistic positional score, and scores are flipped
//! when Black is the side deciding.

use shakmaty::Color;

use crate::error::AutopilotError;

/// Multiplier applied to the mate distance. The exact value is
/// arbitrary as long as it dwarfs ordinary evaluations, which stay
/// within single digits.
pub const MATE_SCORE: f64 = 1000.0;

/// Parse evaluation text as reported by the analysis board, from
/// White's perspective. `"#2"` becomes `2000.0`, `"#-3"` becomes
/// `-3000.0`, plain numbers pass through.
///
/// Mate text must be `#` followed by a non-zero integer distance;
/// anything looser is rejected rather than guessed at.
pub fn parse(text: &str) -> Result<f64, AutopilotError> {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix('#') {
        let distance: i32 = rest
            .parse()
            .map_err(|_| AutopilotError::InvalidEvaluation(text.to_string()))?;
        // mate in zero is not a score the board can report
        if distance == 0 {
            return Err(AutopilotError::InvalidEvaluation(text.to_string()));
        }
        return Ok(f64::from(distance) * MATE_SCORE);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AutopilotError::InvalidEvaluation(text.to_string()))?;
    // "NaN" and "inf" parse as f64 but are not scores
    if !value.is_finite() {
        return Err(AutopilotError::InvalidEvaluation(text.to_string()));
    }

    Ok(value)
}

/// Normalize a White-perspective score to the side making the
/// decision, so positive always means good for the mover.
pub fn for_mover(white_eval: f64, mover: Color) -> f64 {
    match mover {
        Color::White => white_eval,
        Color::Black => -white_eval,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_scores_pass_through() {
        assert_eq!(parse("0.3").unwrap(), 0.3);
        assert_eq!(parse("+0.3").unwrap(), 0.3);
        assert_eq!(parse("-1.2").unwrap(), -1.2);
        assert_eq!(parse(" 0.0 ").unwrap(), 0.0);
    }

    #[test]
    fn mate_scores_are_scaled() {
        assert_eq!(parse("#2").unwrap(), 2000.0);
        assert_eq!(parse("#-3").unwrap(), -3000.0);
        assert_eq!(parse("#1").unwrap(), MATE_SCORE);
    }

    #[test]
    fn mate_dominates_any_positional_score() {
        assert!(parse("#1").unwrap() > parse("9.9").unwrap());
        assert!(parse("#-1").unwrap() < parse("-9.9").unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        for bad in ["", "#", "eval", "1.2.3", "NaN", "inf"] {
            assert!(
                matches!(parse(bad), Err(AutopilotError::InvalidEvaluation(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn mate_distance_must_be_a_prefixed_nonzero_integer() {
        for bad in ["2#", "##2", "#2#3", "#2.5", "#0", "#-0"] {
            assert!(
                matches!(parse(bad), Err(AutopilotError::InvalidEvaluation(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn black_perspective_flips_sign() {
        assert_eq!(for_mover(0.5, Color::White), 0.5);
        assert_eq!(for_mover(0.5, Color::Black), -0.5);
        assert_eq!(for_mover(-2000.0, Color::Black), 2000.0);
    }
}
