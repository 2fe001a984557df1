//! The capability seam between a game session and a targeting engine.

use crate::board::CellGrid;
use crate::common::EngineError;
use crate::coord::Coord;
use crate::placement::Layout;
use crate::prediction::Field;
use rand::rngs::SmallRng;

/// Everything a game session needs from one side's targeting engine. The
/// two implementations share no state; RNGs are passed per call so games
/// replay from seeds.
pub trait Strategy {
    /// Produce this side's starting layout.
    fn generate_board(&mut self, rng: &mut SmallRng) -> Result<Layout, EngineError>;

    /// Choose the next cell to fire at.
    fn next_move(&mut self, rng: &mut SmallRng) -> Result<Coord, EngineError>;

    /// Feedback: the last shot hit, with the sunk ship's length when the
    /// shot sank one.
    fn hit(&mut self, coord: Coord, sunk: Option<u8>);

    /// Feedback: the last shot missed.
    fn miss(&mut self, coord: Coord);

    /// Current knowledge of the opponent board, for display.
    fn board_state(&self) -> &CellGrid;

    /// Most recent probability field, values in [0, 1].
    fn prediction_field(&self) -> Field;
}
