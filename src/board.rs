//! Per-cell knowledge of the opponent board.
//!
//! The tracker only records what the shot feedback proves. Cells move
//! forward along Unknown → {Miss | Hit} → Sunk; the one sanctioned
//! exception is the resolver's rollback of untrusted length-3 sinkings.

use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use core::fmt;

/// Knowledge about a single opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Unknown,
    Miss,
    Hit,
    Sunk,
}

/// Grid snapshot handed to display code and the field generator.
pub type CellGrid = [[CellState; BOARD_SIZE]; BOARD_SIZE];

/// Tracks everything learned about the opponent board, indexed `[x][y]`
/// with `x` as the column.
#[derive(Clone)]
pub struct TrackingBoard {
    cells: CellGrid,
}

impl TrackingBoard {
    /// Fresh board with every cell Unknown.
    pub fn new() -> Self {
        TrackingBoard {
            cells: [[CellState::Unknown; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// State of the cell at zero-based (x, y).
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[x][y]
    }

    /// Record a reported miss. The protocol never reports the same cell
    /// twice, so anything but Unknown here is an upstream inconsistency:
    /// log it and keep the stronger knowledge.
    pub fn apply_miss(&mut self, coord: Coord) {
        let (x, y) = (coord.x(), coord.y());
        if self.cells[x][y] != CellState::Unknown {
            log::warn!(
                "miss reported at {} which is already {:?}; ignoring",
                coord,
                self.cells[x][y]
            );
            return;
        }
        self.cells[x][y] = CellState::Miss;
    }

    /// Record a reported hit. Sunk upgrades are owned by the resolver.
    pub fn apply_hit(&mut self, coord: Coord) {
        self.cells[coord.x()][coord.y()] = CellState::Hit;
    }

    /// Upgrade a cell to Sunk once the resolver has proven it.
    pub(crate) fn mark_sunk(&mut self, x: usize, y: usize) {
        self.cells[x][y] = CellState::Sunk;
    }

    /// Rollback path only: downgrade a cell to Hit.
    pub(crate) fn revert_to_hit(&mut self, x: usize, y: usize) {
        self.cells[x][y] = CellState::Hit;
    }

    /// Count of cells currently known Hit (not yet attributed to a sinking).
    pub fn hit_count(&self) -> usize {
        let mut n = 0;
        for col in self.cells.iter() {
            for &cell in col.iter() {
                if cell == CellState::Hit {
                    n += 1;
                }
            }
        }
        n
    }

    /// Read-only snapshot of the full grid.
    pub fn snapshot(&self) -> &CellGrid {
        &self.cells
    }
}

impl Default for TrackingBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrackingBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let ch = match self.cells[x][y] {
                    CellState::Unknown => '·',
                    CellState::Miss => 'o',
                    CellState::Hit => 'x',
                    CellState::Sunk => 'X',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
