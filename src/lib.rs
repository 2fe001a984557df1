#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod fleet;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod prediction;
mod referee;
mod resolver;
mod strategy;
mod strategy_advanced;
mod strategy_random;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{CellGrid, CellState, TrackingBoard};
pub use common::{EngineError, ShotOutcome};
pub use config::{BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
pub use coord::{Coord, CoordError};
pub use fleet::Fleet;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::{
    skewed_layout, uniform_layout, Layout, Orientation, ShipPlacement, EMPTY_CELL,
};
pub use prediction::{compute_field, Field, INVERSE_DISTRIBUTION};
pub use referee::Referee;
pub use resolver::{SinkReport, SinkResolver};
pub use strategy::Strategy;
pub use strategy_advanced::AdvancedStrategy;
pub use strategy_random::RandomStrategy;
