//! Live game tracking for the autopilot.
//!
//! [`Game`] mirrors the position on the game site move by move and
//! bridges between the two webpages the bot straddles: the opponent's
//! moves arrive as SAN scraped off the move list, while the analysis
//! board hands back UCI lines with White-perspective evaluations.

use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, Move, Position, Setup, fen::Fen};

use crate::error::AutopilotError;
use crate::types::{CandidateMove, SelectionPolicy};
use crate::{eval, selector};

pub struct Game {
    position: Chess,
    my_color: Color,
}

impl Game {
    /// Start tracking from the initial position.
    pub fn new(my_color: Color) -> Self {
        Self {
            position: Chess::default(),
            my_color,
        }
    }

    /// Start tracking from an arbitrary position.
    pub fn from_fen(fen: &str, my_color: Color) -> Result<Self, AutopilotError> {
        let fen: Fen = fen.parse()?;
        let setup: Setup = fen.into();
        let position: Chess = setup.position(CastlingMode::Standard)?;

        Ok(Self { position, my_color })
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    pub fn my_color(&self) -> Color {
        self.my_color
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn is_my_turn(&self) -> bool {
        self.turn() == self.my_color
    }

    /// Turn scraped analysis lines into candidates for selection.
    ///
    /// `lines` are `(uci, evaluation text)` pairs in the ranking
    /// reported by the analysis board, best first. Evaluations come in
    /// from White's perspective and leave normalized to the side to
    /// move; the capture flag is derived against the current position.
    pub fn candidates(
        &self,
        lines: &[(&str, &str)],
    ) -> Result<Vec<CandidateMove>, AutopilotError> {
        let mover = self.turn();
        let mut candidates = Vec::with_capacity(lines.len());

        for (uci_text, eval_text) in lines {
            let uci: UciMove = uci_text.parse()?;
            let m: Move = uci.to_move(&self.position)?;

            candidates.push(CandidateMove {
                uci,
                evaluation: eval::for_mover(eval::parse(eval_text)?, mover),
                is_capture: m.is_capture(),
            });
        }

        Ok(candidates)
    }

    /// Pick the move to play this turn from scraped analysis lines.
    ///
    /// Fails with [`AutopilotError::WrongTurn`] when it is not our
    /// move; selecting for the opponent would desync the tracked
    /// position from the live game.
    pub fn choose(
        &self,
        lines: &[(&str, &str)],
        policy: &SelectionPolicy,
    ) -> Result<CandidateMove, AutopilotError> {
        if !self.is_my_turn() {
            return Err(AutopilotError::WrongTurn);
        }

        let candidates = self.candidates(lines)?;
        selector::select(&candidates, policy)
    }

    /// Apply our own chosen move, given in UCI.
    pub fn push_uci(&mut self, uci_text: &str) -> Result<(), AutopilotError> {
        let uci: UciMove = uci_text.parse()?;
        let m = uci.to_move(&self.position)?;
        self.position.play_unchecked(m);
        Ok(())
    }

    /// Apply a move scraped off the site's move list, given in SAN.
    pub fn push_san(&mut self, san_text: &str) -> Result<(), AutopilotError> {
        let san: SanPlus = san_text.parse()?;
        let m = san.san.to_move(&self.position)?;
        self.position.play_unchecked(m);
        Ok(())
    }

    /// Resolve SAN against the current position without playing it.
    pub fn san_to_uci(&self, san_text: &str) -> Result<UciMove, AutopilotError> {
        let san: SanPlus = san_text.parse()?;
        let m = san.san.to_move(&self.position)?;
        Ok(m.to_uci(CastlingMode::Standard))
    }
}
