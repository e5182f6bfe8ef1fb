use std::io::Read;

use serde::{Deserialize, Serialize};
use shakmaty::uci::UciMove;

use crate::error::AutopilotError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateMove {
    pub uci: UciMove,
    /// Score from the mover's perspective (positive = good for the side
    /// to move), mate lines collapsed to the sentinel from [`crate::eval`]
    pub evaluation: f64,
    pub is_capture: bool,
}

/// Knobs controlling how a move is picked from the candidate list,
/// typically loaded from the bot's JSON options file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Always play the top ranked line, bypassing every other rule.
    pub play_best_only: bool,
    /// Lines evaluated below this are excluded from capture/random
    /// selection. Ignored when `play_best_only` is set.
    pub minimum_eval: f64,
}

impl SelectionPolicy {
    pub fn best_only() -> Self {
        Self {
            play_best_only: true,
            minimum_eval: 0.0,
        }
    }

    pub fn with_floor(minimum_eval: f64) -> Self {
        Self {
            play_best_only: false,
            minimum_eval,
        }
    }

    /// Load a policy from a JSON options file.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, AutopilotError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_json_round_trip() {
        let policy = SelectionPolicy::with_floor(-0.4);
        let json = serde_json::to_string(&policy).unwrap();
        let back: SelectionPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }

    #[test]
    fn policy_from_options_file() {
        let options = br#"{ "play_best_only": false, "minimum_eval": 0.0 }"#;
        let policy = SelectionPolicy::from_json_reader(&options[..]).unwrap();
        assert!(!policy.play_best_only);
        assert_eq!(policy.minimum_eval, 0.0);
    }

    #[test]
    fn malformed_options_are_rejected() {
        let options = br#"{ "play_best_only": "yes" }"#;
        let err = SelectionPolicy::from_json_reader(&options[..]).unwrap_err();
        assert!(matches!(err, AutopilotError::InvalidOptions(_)));
    }
}
