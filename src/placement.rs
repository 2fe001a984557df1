//! Starting-layout generation.
//!
//! The skewed generator deliberately flattens where ships land: opponents
//! modeling a uniform or center-biased placement lose a few moves against
//! it. The uniform generator backs the baseline strategy.

use crate::bitboard::BitBoard;
use crate::common::EngineError;
use crate::config::{BOARD_SIZE, FLEET, NUM_SHIPS};
use rand::Rng;

type BB = BitBoard<u128, BOARD_SIZE>;

/// Marker for unoccupied layout cells; occupied cells hold the ship length.
pub const EMPTY_CELL: u8 = 0;

/// Retries allowed per ship before giving up on the board.
const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Orientation of a placed ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One ship's position in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipPlacement {
    pub x: u8,
    pub y: u8,
    pub length: u8,
    pub orientation: Orientation,
}

impl ShipPlacement {
    /// Occupancy mask of this ship, or an error when it overruns the board.
    pub fn mask(&self) -> Result<BB, EngineError> {
        let mut mask = BB::new();
        for i in 0..self.length as usize {
            let (x, y) = match self.orientation {
                Orientation::Horizontal => (self.x as usize + i, self.y as usize),
                Orientation::Vertical => (self.x as usize, self.y as usize + i),
            };
            mask.set(x, y)?;
        }
        Ok(mask)
    }
}

/// A generated starting layout: the occupancy grid handed to the transport
/// layer plus the placements that produced it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
    ships: [ShipPlacement; NUM_SHIPS],
}

impl Layout {
    /// Occupancy grid, `[x][y]` indexed; cell values are ship length or
    /// [`EMPTY_CELL`].
    pub fn grid(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    /// The five ship placements.
    pub fn ships(&self) -> &[ShipPlacement; NUM_SHIPS] {
        &self.ships
    }
}

// Start-position weights along the ship's own axis, one table per length.
// Edges are favored and the center flattened; hand-estimated values.
const ALONG_AXIS_LEN2: [f64; 9] = [2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 2.0];
const ALONG_AXIS_LEN3: [f64; 8] = [3.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 3.0];
const ALONG_AXIS_LEN4: [f64; 7] = [4.0, 2.0, 2.0, 1.0, 2.0, 2.0, 4.0];
const ALONG_AXIS_LEN5: [f64; 6] = [5.0, 3.0, 3.0, 3.0, 3.0, 5.0];

// Cross-axis weights: near-flat for lengths >= 3, extreme edges for the
// length-2 ship, which is the hardest to find once the field flattens.
const CROSS_AXIS: [f64; BOARD_SIZE] = [5.0, 5.5, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.5, 5.0];
const CROSS_AXIS_LEN2: [f64; BOARD_SIZE] = [9.0, 0.5, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.5, 9.0];

fn along_axis_weights(length: u8) -> &'static [f64] {
    match length {
        2 => &ALONG_AXIS_LEN2,
        3 => &ALONG_AXIS_LEN3,
        4 => &ALONG_AXIS_LEN4,
        _ => &ALONG_AXIS_LEN5,
    }
}

/// Sample an index from a discrete weight table by cumulative scan.
fn sample_weighted<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> usize {
    let total: f64 = weights.iter().sum();
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if threshold < cumulative {
            return i;
        }
    }
    weights.len() - 1
}

/// Generate a layout using the skewed placement distribution. Ships are
/// placed in fleet order; collisions resample within a bounded budget.
pub fn skewed_layout<R: Rng + ?Sized>(rng: &mut R) -> Result<Layout, EngineError> {
    place_fleet(rng, |rng, length| {
        let mut x = sample_weighted(rng, along_axis_weights(length)) as u8;
        let cross = if length == 2 {
            &CROSS_AXIS_LEN2
        } else {
            &CROSS_AXIS
        };
        let mut y = sample_weighted(rng, cross) as u8;
        let orientation = if rng.random() {
            core::mem::swap(&mut x, &mut y);
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        ShipPlacement {
            x,
            y,
            length,
            orientation,
        }
    })
}

/// Generate a layout with uniform start positions. Both axes are sampled in
/// `0..=10-len`, which skews nothing off the board and keeps every ship in
/// bounds regardless of orientation.
pub fn uniform_layout<R: Rng + ?Sized>(rng: &mut R) -> Result<Layout, EngineError> {
    place_fleet(rng, |rng, length| {
        let max_start = (BOARD_SIZE - length as usize) as u8;
        let x = rng.random_range(0..=max_start);
        let y = rng.random_range(0..=max_start);
        let orientation = if rng.random() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        ShipPlacement {
            x,
            y,
            length,
            orientation,
        }
    })
}

fn place_fleet<R, F>(rng: &mut R, mut propose: F) -> Result<Layout, EngineError>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R, u8) -> ShipPlacement,
{
    let mut occupied = BB::new();
    let mut grid = [[EMPTY_CELL; BOARD_SIZE]; BOARD_SIZE];
    let mut ships = [ShipPlacement {
        x: 0,
        y: 0,
        length: 0,
        orientation: Orientation::Horizontal,
    }; NUM_SHIPS];

    for (i, &length) in FLEET.iter().enumerate() {
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(EngineError::UnableToPlaceShip);
            }
            let placement = propose(rng, length);
            // off-board proposals and overlaps both resample
            let mask = match placement.mask() {
                Ok(mask) => mask,
                Err(_) => continue,
            };
            if !(occupied & mask).is_empty() {
                continue;
            }
            occupied = occupied | mask;
            for k in 0..length as usize {
                let (x, y) = match placement.orientation {
                    Orientation::Horizontal => (placement.x as usize + k, placement.y as usize),
                    Orientation::Vertical => (placement.x as usize, placement.y as usize + k),
                };
                grid[x][y] = length;
            }
            ships[i] = placement;
            break;
        }
    }

    Ok(Layout { grid, ships })
}
