//! Baseline seek-and-destroy targeting, mainly for exercising the advanced
//! engine against a predictable opponent.

use crate::board::{CellGrid, CellState, TrackingBoard};
use crate::common::EngineError;
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::placement::{uniform_layout, Layout};
use crate::prediction::Field;
use crate::strategy::Strategy;
use rand::rngs::SmallRng;
use rand::Rng;

const SEEK_ATTEMPTS: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Seeking,
    Destroying,
}

/// Random seeker that chases hits until the target reports sunk.
pub struct RandomStrategy {
    board: TrackingBoard,
    mode: Mode,
    last_hit: Coord,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            board: TrackingBoard::new(),
            mode: Mode::Seeking,
            last_hit: Coord::from_grid(0, 0),
        }
    }

    fn seeking_move(&self, rng: &mut SmallRng) -> Result<Coord, EngineError> {
        for _ in 0..SEEK_ATTEMPTS {
            let x = rng.random_range(0..BOARD_SIZE);
            let y = rng.random_range(0..BOARD_SIZE);
            if self.board.get(x, y) == CellState::Unknown {
                return Ok(Coord::from_grid(x, y));
            }
        }
        Err(EngineError::NoTargetsRemaining)
    }

    /// Walk outward from the last hit in each direction, stepping over
    /// earlier hits, stopping a direction at a miss, and firing at the
    /// first fresh cell. Nothing fresh means the ship is boxed in; go back
    /// to seeking.
    fn destroying_move(&mut self, rng: &mut SmallRng) -> Result<Coord, EngineError> {
        let (hx, hy) = (self.last_hit.x() as isize, self.last_hit.y() as isize);
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (mut x, mut y) = (hx + dx, hy + dy);
            while (0..BOARD_SIZE as isize).contains(&x) && (0..BOARD_SIZE as isize).contains(&y) {
                match self.board.get(x as usize, y as usize) {
                    CellState::Miss => break,
                    CellState::Unknown => return Ok(Coord::from_grid(x as usize, y as usize)),
                    _ => {}
                }
                x += dx;
                y += dy;
            }
        }
        self.mode = Mode::Seeking;
        self.seeking_move(rng)
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn generate_board(&mut self, rng: &mut SmallRng) -> Result<Layout, EngineError> {
        uniform_layout(rng)
    }

    fn next_move(&mut self, rng: &mut SmallRng) -> Result<Coord, EngineError> {
        match self.mode {
            Mode::Seeking => self.seeking_move(rng),
            Mode::Destroying => self.destroying_move(rng),
        }
    }

    fn hit(&mut self, coord: Coord, sunk: Option<u8>) {
        if sunk.is_some() {
            self.board.mark_sunk(coord.x(), coord.y());
            self.mode = Mode::Seeking;
        } else {
            self.board.apply_hit(coord);
            self.mode = Mode::Destroying;
        }
        self.last_hit = coord;
    }

    fn miss(&mut self, coord: Coord) {
        self.board.apply_miss(coord);
    }

    fn board_state(&self) -> &CellGrid {
        self.board.snapshot()
    }

    fn prediction_field(&self) -> Field {
        [[1.0; BOARD_SIZE]; BOARD_SIZE]
    }
}
