//! Move-selection core for a browser chess autopilot.
//!
//!
//! This crate holds the decision logic of a bot that plays online games
//! by reading engine lines off an analysis board: given the top ranked
//! candidate moves and their evaluations, it picks exactly one move to
//! play. The policy is deliberately simple so play stays human-looking:
//! either always take the engine's first choice, or filter lines by an
//! evaluation floor, grab a capture when one is acceptable, and fall
//! back to a uniformly random acceptable line otherwise.
//!
//! The principal entry points are [`select`] (the pure policy) and
//! [`Game`], which tracks the live position, converts scraped analysis
//! lines into perspective-normalized [`CandidateMove`]s, and guards
//! against moving on the opponent's turn. All chess rules are delegated
//! to `shakmaty`; nothing here validates board legality beyond what the
//! rules library provides.
//!
//! The library re-exports `shakmaty` to make position construction easy.

mod error;
pub mod eval;
mod game;
mod selector;
mod types;

/// Error type produced by library operations.
pub use error::AutopilotError;

/// Live position tracking and candidate construction.
pub use game::Game;

/// The move-selection policy functions.
pub use selector::{select, select_with};

/// Data shapes consumed and produced by selection.
pub use types::{CandidateMove, SelectionPolicy};

/// Re-export of `shakmaty` for convenience when building positions.
pub use shakmaty;
