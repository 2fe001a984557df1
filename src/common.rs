//! Common types: shot outcomes and engine errors.

use crate::bitboard::BitBoardError;
use crate::coord::CoordError;

/// Outcome of a shot as reported back to the firing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot sank a ship, carrying its length.
    Sunk(u8),
}

/// Errors surfaced by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed coordinate notation from the protocol layer.
    Coord(CoordError),
    /// Underlying mask error (invalid index).
    BitBoard(BitBoardError),
    /// Placement retry budget exhausted; the board should never get here.
    UnableToPlaceShip,
    /// Random-fallback budget exhausted: board knowledge is inconsistent
    /// with the protocol invariants. Automated firing must stop.
    NoTargetsRemaining,
    /// The same cell was shot twice against the referee.
    AlreadyShot,
}

impl From<CoordError> for EngineError {
    fn from(err: CoordError) -> Self {
        EngineError::Coord(err)
    }
}

impl From<BitBoardError> for EngineError {
    fn from(err: BitBoardError) -> Self {
        EngineError::BitBoard(err)
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::Coord(e) => write!(f, "coordinate error: {}", e),
            EngineError::BitBoard(e) => write!(f, "bitboard error: {}", e),
            EngineError::UnableToPlaceShip => write!(f, "unable to place ship"),
            EngineError::NoTargetsRemaining => {
                write!(f, "no targetable cells remain; board state is inconsistent")
            }
            EngineError::AlreadyShot => write!(f, "cell was already shot"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
