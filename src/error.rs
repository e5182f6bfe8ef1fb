//! Error types for the autopilot core.
//!
//! This crate uses `thiserror` to provide a convenient enumeration of
//! errors that may occur while selecting a move or tracking a game. The
//! variants wrap underlying errors from chess parsing and legality
//! checks, giving the caller a single error type to handle. A wrong or
//! fabricated move choice is worse than a loud failure, so nothing here
//! is recovered silently.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutopilotError {
    /// Selection was attempted over an empty candidate list.
    #[error("no candidate moves to choose from")]
    NoCandidates,

    /// The candidate list was not ordered best-to-worst. The caller is
    /// expected to hand over lines in the ranking reported by the
    /// analysis source; selection rejects bad input instead of
    /// re-sorting it.
    #[error("candidates not sorted best-to-worst (first violation at rank {0})")]
    UnsortedCandidates(usize),

    /// The policy's evaluation floor is not a number.
    #[error("selection threshold is not a number")]
    InvalidThreshold,

    /// A candidate carried a NaN evaluation.
    #[error("candidate at rank {0} has a non-numeric evaluation")]
    NonNumericEvaluation(usize),

    /// Scraped evaluation text that could not be read as a score.
    #[error("unreadable evaluation text: {0:?}")]
    InvalidEvaluation(String),

    /// A move was requested while it is the opponent's turn.
    #[error("not our turn to move")]
    WrongTurn,

    /// The provided FEN string could not be parsed.
    #[error("Invalid FEN: {0}")]
    InvalidFen(#[from] shakmaty::fen::ParseFenError),

    /// A parsed position is invalid from the perspective of `shakmaty`.
    #[error("Invalid Chess Position: {0}")]
    InvalidPosition(#[from] shakmaty::PositionError<shakmaty::Chess>),

    /// Move text that is not syntactically valid UCI.
    #[error("Invalid UCI move: {0}")]
    InvalidUci(#[from] shakmaty::uci::ParseUciMoveError),

    /// A syntactically valid UCI move that is illegal in the current
    /// position.
    #[error("Illegal UCI move: {0}")]
    IllegalUci(#[from] shakmaty::uci::IllegalUciMoveError),

    /// Move text that is not syntactically valid SAN.
    #[error("Invalid SAN: {0}")]
    InvalidSan(#[from] shakmaty::san::ParseSanError),

    /// A syntactically valid SAN move that does not resolve to a legal
    /// move in the current position.
    #[error("Illegal SAN move: {0}")]
    IllegalSan(#[from] shakmaty::san::SanError),

    /// The options file could not be deserialized.
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
