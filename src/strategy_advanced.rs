//! Prediction-driven targeting.
//!
//! Each turn: settle outstanding sunk reports, rebuild the probability
//! field, fire at the strongest Unknown cell. When the field offers
//! nothing, suspect the length-3 sunk defect, roll back its bypassed
//! confirmations and try once more before falling back to random fire.

use crate::board::{CellGrid, CellState, TrackingBoard};
use crate::common::EngineError;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::fleet::Fleet;
use crate::placement::{skewed_layout, Layout};
use crate::prediction::{compute_field, Field};
use crate::resolver::SinkResolver;
use crate::strategy::Strategy;
use rand::rngs::SmallRng;
use rand::Rng;

/// Attempts allowed to the uniform-random fallback before the board is
/// declared inconsistent.
const FALLBACK_ATTEMPTS: usize = 10_000;

/// The advanced targeting engine.
pub struct AdvancedStrategy {
    board: TrackingBoard,
    fleet: Fleet,
    resolver: SinkResolver,
    field: Field,
}

impl AdvancedStrategy {
    pub fn new() -> Self {
        AdvancedStrategy {
            board: TrackingBoard::new(),
            fleet: Fleet::new(),
            resolver: SinkResolver::new(),
            field: [[0.0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// First Unknown cell carrying the field's strict maximum, scanning
    /// columns A..J and rows 1..10 in order. Zero-weight cells never win.
    fn best_unknown(&self) -> Option<Coord> {
        let mut max = 0.0f64;
        let mut best = None;
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                if self.field[x][y] > max && self.board.get(x, y) == CellState::Unknown {
                    max = self.field[x][y];
                    best = Some(Coord::from_grid(x, y));
                }
            }
        }
        best
    }

    fn random_fallback(&self, rng: &mut SmallRng) -> Result<Coord, EngineError> {
        log::warn!("prediction field empty, resorting to random targeting");
        for _ in 0..FALLBACK_ATTEMPTS {
            let x = rng.random_range(0..BOARD_SIZE);
            let y = rng.random_range(0..BOARD_SIZE);
            if self.board.get(x, y) == CellState::Unknown {
                return Ok(Coord::from_grid(x, y));
            }
        }
        Err(EngineError::NoTargetsRemaining)
    }
}

impl Default for AdvancedStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for AdvancedStrategy {
    fn generate_board(&mut self, rng: &mut SmallRng) -> Result<Layout, EngineError> {
        skewed_layout(rng)
    }

    fn next_move(&mut self, rng: &mut SmallRng) -> Result<Coord, EngineError> {
        self.resolver.resolve(&mut self.board);
        self.field = compute_field(&self.board, &self.fleet);
        if let Some(coord) = self.best_unknown() {
            return Ok(coord);
        }

        // An empty field usually means both length-3 slots got confirmed
        // off a defective signal, starving the placement passes. Undo the
        // bypassed confirmations and recompute once.
        if self.resolver.rollback(&mut self.board, &mut self.fleet) {
            self.field = compute_field(&self.board, &self.fleet);
            if let Some(coord) = self.best_unknown() {
                return Ok(coord);
            }
        }

        self.random_fallback(rng)
    }

    fn hit(&mut self, coord: Coord, sunk: Option<u8>) {
        match sunk {
            None => self.board.apply_hit(coord),
            Some(length) => {
                self.resolver
                    .accept_report(&mut self.board, &mut self.fleet, coord, length)
            }
        }
    }

    fn miss(&mut self, coord: Coord) {
        self.board.apply_miss(coord);
    }

    fn board_state(&self) -> &CellGrid {
        self.board.snapshot()
    }

    fn prediction_field(&self) -> Field {
        self.field
    }
}
