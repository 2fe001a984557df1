//! Hidden-layout shot adjudicator.
//!
//! Stands in for the remote game session in local play and tests: it holds
//! one side's actual layout and answers shots with miss/hit/sunk. Sunk is
//! reported on the shot that completes a ship, carrying the ship's length.

use crate::bitboard::BitBoard;
use crate::common::{EngineError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS};
use crate::coord::Coord;
use crate::placement::Layout;

type BB = BitBoard<u128, BOARD_SIZE>;

#[derive(Debug, Clone, Copy)]
struct PlacedShip {
    length: u8,
    mask: BB,
    hits: BB,
}

impl PlacedShip {
    fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.length as usize
    }
}

/// Adjudicates shots against a fixed layout.
pub struct Referee {
    ships: [PlacedShip; NUM_SHIPS],
    shots: BB,
}

impl Referee {
    /// Build an adjudicator over a generated layout.
    pub fn new(layout: &Layout) -> Result<Self, EngineError> {
        let mut ships = [PlacedShip {
            length: 0,
            mask: BB::new(),
            hits: BB::new(),
        }; NUM_SHIPS];
        for (i, placement) in layout.ships().iter().enumerate() {
            ships[i] = PlacedShip {
                length: placement.length,
                mask: placement.mask()?,
                hits: BB::new(),
            };
        }
        Ok(Referee {
            ships,
            shots: BB::new(),
        })
    }

    /// Answer a shot. Shooting the same cell twice is a driver bug.
    pub fn shoot(&mut self, coord: Coord) -> Result<ShotOutcome, EngineError> {
        let (x, y) = (coord.x(), coord.y());
        if self.shots.get(x, y)? {
            return Err(EngineError::AlreadyShot);
        }
        self.shots.set(x, y)?;

        for ship in self.ships.iter_mut() {
            if ship.mask.get(x, y)? {
                ship.hits.set(x, y)?;
                if ship.is_sunk() {
                    return Ok(ShotOutcome::Sunk(ship.length));
                }
                return Ok(ShotOutcome::Hit);
            }
        }
        Ok(ShotOutcome::Miss)
    }

    /// True once every ship has been sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }
}
