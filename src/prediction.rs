//! Per-turn probability field over the opponent board.
//!
//! Rebuilt from scratch every turn, never carried over. Two passes: a
//! baseline sweep counting every feasible placement window, then a targeted
//! sweep that boosts windows running through confirmed hits. A single
//! normalization multiplies in the inverse of the background placement
//! distribution, which counters opponents relying on the natural
//! center-heavy bias of random fleets.

use crate::board::{CellState, TrackingBoard};
use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::placement::Orientation;

/// Relative cell weights; in [0, 1] once normalized.
pub type Field = [[f64; BOARD_SIZE]; BOARD_SIZE];

/// Compute the normalized field for the current board knowledge.
pub fn compute_field(board: &TrackingBoard, fleet: &Fleet) -> Field {
    let mut field = [[0.0f64; BOARD_SIZE]; BOARD_SIZE];
    baseline_pass(&mut field, board, fleet);
    targeted_pass(&mut field, board, fleet);
    normalize(&mut field);
    field
}

/// Whether a window of `length` cells starting at (x, y) stays on the board
/// and avoids every Miss and Sunk cell. Hit cells are allowed: the ships we
/// are looking for can only run through Unknown and Hit.
fn window_fits(
    board: &TrackingBoard,
    x: usize,
    y: usize,
    length: usize,
    orientation: Orientation,
) -> bool {
    match orientation {
        Orientation::Horizontal => {
            if x + length > BOARD_SIZE {
                return false;
            }
            for x2 in x..x + length {
                let cell = board.get(x2, y);
                if cell == CellState::Miss || cell == CellState::Sunk {
                    return false;
                }
            }
        }
        Orientation::Vertical => {
            if y + length > BOARD_SIZE {
                return false;
            }
            for y2 in y..y + length {
                let cell = board.get(x, y2);
                if cell == CellState::Miss || cell == CellState::Sunk {
                    return false;
                }
            }
        }
    }
    true
}

/// Weight 1 for every cell of every feasible window of every afloat ship.
fn baseline_pass(field: &mut Field, board: &TrackingBoard, fleet: &Fleet) {
    for (_, length) in fleet.afloat() {
        let length = length as usize;
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                if window_fits(board, x, y, length, Orientation::Horizontal) {
                    for x2 in x..x + length {
                        field[x2][y] += 1.0;
                    }
                }
                if window_fits(board, x, y, length, Orientation::Vertical) {
                    for y2 in y..y + length {
                        field[x][y2] += 1.0;
                    }
                }
            }
        }
    }
}

/// For every Hit cell, boost the Unknown cells of every afloat-ship window
/// running through it. Windows covering several hits get much heavier
/// weight, which drives line completion.
fn targeted_pass(field: &mut Field, board: &TrackingBoard, fleet: &Fleet) {
    for hx in 0..BOARD_SIZE {
        for hy in 0..BOARD_SIZE {
            if board.get(hx, hy) == CellState::Hit {
                boost_windows_through(field, board, fleet, hx, hy);
            }
        }
    }
}

fn boost_windows_through(
    field: &mut Field,
    board: &TrackingBoard,
    fleet: &Fleet,
    hx: usize,
    hy: usize,
) {
    for (_, length) in fleet.afloat() {
        let length = length as usize;

        // horizontal windows containing (hx, hy)
        let x_lo = hx.saturating_sub(length - 1);
        for x in x_lo..=hx {
            if !window_fits(board, x, hy, length, Orientation::Horizontal) {
                continue;
            }
            let mut n_hits = 0;
            for x2 in x..x + length {
                if board.get(x2, hy) == CellState::Hit {
                    n_hits += 1;
                }
            }
            let bonus = 2.0 + 10.0 * n_hits as f64 / length as f64;
            for x2 in x..x + length {
                if board.get(x2, hy) == CellState::Unknown {
                    field[x2][hy] += bonus;
                }
            }
        }

        // vertical windows containing (hx, hy)
        let y_lo = hy.saturating_sub(length - 1);
        for y in y_lo..=hy {
            if !window_fits(board, hx, y, length, Orientation::Vertical) {
                continue;
            }
            let mut n_hits = 0;
            for y2 in y..y + length {
                if board.get(hx, y2) == CellState::Hit {
                    n_hits += 1;
                }
            }
            let bonus = 2.0 + 10.0 * n_hits as f64 / length as f64;
            for y2 in y..y + length {
                if board.get(hx, y2) == CellState::Unknown {
                    field[hx][y2] += bonus;
                }
            }
        }
    }
}

/// Apply the inverse background distribution, then rescale so the maximum
/// is exactly 1. Must run once per field: a second application would stack
/// the inverse distribution.
fn normalize(field: &mut Field) {
    let mut max = 0.0f64;
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            field[x][y] *= INVERSE_DISTRIBUTION[x][y];
            if field[x][y] > max {
                max = field[x][y];
            }
        }
    }

    if max == 0.0 || max == 1.0 {
        return;
    }
    for col in field.iter_mut() {
        for v in col.iter_mut() {
            *v /= max;
        }
    }
}

// Reciprocal of the expected per-cell hit frequency under uniform random
// fleet placement.
pub const INVERSE_DISTRIBUTION: [[f64; BOARD_SIZE]; BOARD_SIZE] = [
    [
        1.00000000, 0.66666669, 0.52631575, 0.47619045, 0.45454544, 0.45454544, 0.47619045,
        0.52631575, 0.66666669, 1.00000000,
    ],
    [
        0.66666669, 0.50000000, 0.41666669, 0.38461536, 0.37037036, 0.37037036, 0.38461536,
        0.41666669, 0.50000000, 0.66666669,
    ],
    [
        0.52631575, 0.41666669, 0.35714284, 0.33333334, 0.32258064, 0.32258064, 0.33333334,
        0.35714284, 0.41666669, 0.52631575,
    ],
    [
        0.47619045, 0.38461536, 0.33333334, 0.31250000, 0.30303028, 0.30303028, 0.31250000,
        0.33333334, 0.38461536, 0.47619045,
    ],
    [
        0.45454544, 0.37037036, 0.32258064, 0.30303028, 0.29411766, 0.29411766, 0.30303028,
        0.32258064, 0.37037036, 0.45454544,
    ],
    [
        0.45454544, 0.37037036, 0.32258064, 0.30303028, 0.29411766, 0.29411766, 0.30303028,
        0.32258064, 0.37037036, 0.45454544,
    ],
    [
        0.47619045, 0.38461536, 0.33333334, 0.31250000, 0.30303028, 0.30303028, 0.31250000,
        0.33333334, 0.38461536, 0.47619045,
    ],
    [
        0.52631575, 0.41666669, 0.35714284, 0.33333334, 0.32258064, 0.32258064, 0.33333334,
        0.35714284, 0.41666669, 0.52631575,
    ],
    [
        0.66666669, 0.50000000, 0.41666669, 0.38461536, 0.37037036, 0.37037036, 0.38461536,
        0.41666669, 0.50000000, 0.66666669,
    ],
    [
        1.00000000, 0.66666669, 0.52631575, 0.47619045, 0.45454544, 0.45454544, 0.47619045,
        0.52631575, 0.66666669, 1.00000000,
    ],
];
