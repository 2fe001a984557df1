//! Reconciliation of "ship sunk" reports with board knowledge.
//!
//! A sunk report names one cell and a length; which other Hit cells belong
//! to the sunk ship is usually ambiguous, so reports are queued and retried
//! every turn until the surrounding hits prove an assignment. Length-3
//! reports get extra scrutiny: the upstream signal for that length is known
//! to fire without the cells actually forming a complete ship.

use crate::board::{CellState, TrackingBoard};
use crate::config::BOARD_SIZE;
use crate::coord::Coord;
use crate::fleet::Fleet;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A sunk report not yet mapped to definite cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkReport {
    pub origin: Coord,
    pub length: u8,
}

/// Outstanding reports plus the rollback log for bypassed length-3 sinks.
#[derive(Debug, Default)]
pub struct SinkResolver {
    unresolved: Vec<SinkReport>,
    ambiguous_threes: Vec<Coord>,
}

impl SinkResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports still awaiting resolution.
    pub fn outstanding(&self) -> &[SinkReport] {
        &self.unresolved
    }

    /// Origins of length-3 reports accepted on ship count alone.
    pub fn ambiguous_origins(&self) -> &[Coord] {
        &self.ambiguous_threes
    }

    /// Take in a sunk report for the cell just hit. Trusted reports queue
    /// for resolution and confirm a fleet slot; an unverifiable length-3
    /// report leaves the cell as a plain Hit, confirms a slot on ship count
    /// alone, and is logged for potential rollback.
    pub fn accept_report(
        &mut self,
        board: &mut TrackingBoard,
        fleet: &mut Fleet,
        origin: Coord,
        length: u8,
    ) {
        let (x, y) = (origin.x(), origin.y());
        board.mark_sunk(x, y);

        let trusted = if length == 3 {
            // the report checks out when the connected hits around the
            // origin account for exactly the rest of the ship
            connected_hits(board, x, y) + 1 == 3
        } else {
            true
        };

        if trusted {
            self.unresolved.push(SinkReport { origin, length });
            fleet.confirm(length);
        } else {
            board.revert_to_hit(x, y);
            fleet.confirm_three_bypassed();
            self.ambiguous_threes.push(origin);
        }
    }

    /// Run resolution passes until nothing more resolves. Called at the
    /// start of every turn, before the field is recomputed.
    pub fn resolve(&mut self, board: &mut TrackingBoard) {
        while !self.unresolved.is_empty() {
            if !self.resolve_pass(board) {
                break;
            }
        }
    }

    fn resolve_pass(&mut self, board: &mut TrackingBoard) -> bool {
        // When the Hit count matches the cells owed to outstanding reports
        // exactly, no ambiguity remains: every Hit belongs to a sunk ship.
        let expected: usize = self
            .unresolved
            .iter()
            .map(|r| r.length as usize - 1)
            .sum();
        if board.hit_count() == expected {
            for x in 0..BOARD_SIZE {
                for y in 0..BOARD_SIZE {
                    if board.get(x, y) == CellState::Hit {
                        board.mark_sunk(x, y);
                    }
                }
            }
            self.unresolved.clear();
            return true;
        }

        let mut changed = false;
        let mut i = self.unresolved.len();
        while i > 0 {
            i -= 1;
            let report = self.unresolved[i];
            if resolve_single(board, report) {
                self.unresolved.remove(i);
                changed = true;
            }
        }
        changed
    }

    /// Undo every bypassed length-3 confirmation. Returns true when a
    /// rollback actually happened. Only the move selector calls this, and
    /// only once it has run out of cells worth firing at.
    pub fn rollback(&mut self, board: &mut TrackingBoard, fleet: &mut Fleet) -> bool {
        if self.ambiguous_threes.is_empty() {
            return false;
        }
        fleet.clear_threes();
        for &origin in &self.ambiguous_threes {
            revert_around(board, origin.x(), origin.y());
        }
        self.ambiguous_threes.clear();
        true
    }
}

/// Length of the contiguous Hit run next to (x, y), origin excluded.
fn run_len(board: &TrackingBoard, x: usize, y: usize, dx: isize, dy: isize) -> usize {
    let mut n = 0;
    let mut cx = x as isize + dx;
    let mut cy = y as isize + dy;
    while (0..BOARD_SIZE as isize).contains(&cx) && (0..BOARD_SIZE as isize).contains(&cy) {
        if board.get(cx as usize, cy as usize) != CellState::Hit {
            break;
        }
        n += 1;
        cx += dx;
        cy += dy;
    }
    n
}

/// Connected Hit cells in all four directions, origin excluded.
fn connected_hits(board: &TrackingBoard, x: usize, y: usize) -> usize {
    run_len(board, x, y, -1, 0)
        + run_len(board, x, y, 1, 0)
        + run_len(board, x, y, 0, -1)
        + run_len(board, x, y, 0, 1)
}

/// Try to attribute the hits around one report's origin to its ship.
///
/// The boundary heuristic marks `length - 1` cells inward from a run edge
/// even when the run continues past them, so roughly one in twenty
/// ambiguous layouts resolves to the wrong cells.
fn resolve_single(board: &mut TrackingBoard, report: SinkReport) -> bool {
    let (x, y) = (report.origin.x(), report.origin.y());
    let length = report.length as usize;

    let left = run_len(board, x, y, -1, 0);
    let right = run_len(board, x, y, 1, 0);
    let up = run_len(board, x, y, 0, -1);
    let down = run_len(board, x, y, 0, 1);
    let h = left + right;
    let v = up + down;

    let mut resolved = false;

    if v + 1 < length && h + 1 >= length {
        if h + 1 == length {
            for k in 1..=left {
                board.mark_sunk(x - k, y);
            }
            for k in 1..=right {
                board.mark_sunk(x + k, y);
            }
            resolved = true;
        } else if left == 0 {
            // origin sits at the left end of the run
            for x2 in x + 1..x + length {
                board.mark_sunk(x2, y);
            }
            resolved = true;
        } else if right == 0 {
            // origin sits at the right end of the run
            for k in 1..length {
                board.mark_sunk(x - k, y);
            }
            resolved = true;
        }
    }

    if h + 1 < length && v + 1 >= length {
        if v + 1 == length {
            for k in 1..=up {
                board.mark_sunk(x, y - k);
            }
            for k in 1..=down {
                board.mark_sunk(x, y + k);
            }
            resolved = true;
        } else if up == 0 {
            // origin sits at the top end of the run
            for y2 in y + 1..y + length {
                board.mark_sunk(x, y2);
            }
            resolved = true;
        } else if down == 0 {
            // origin sits at the bottom end of the run
            for k in 1..length {
                board.mark_sunk(x, y - k);
            }
            resolved = true;
        }
    }

    resolved
}

/// Revert Sunk/Hit cells to Hit up to two steps from the origin in each
/// direction, stopping at the first cell that is neither.
fn revert_around(board: &mut TrackingBoard, x: usize, y: usize) {
    let is_revertable = |board: &TrackingBoard, cx: usize, cy: usize| {
        matches!(board.get(cx, cy), CellState::Sunk | CellState::Hit)
    };

    // leftward scan includes the origin itself
    let mut cx = x as isize;
    while cx >= x as isize - 2 && cx >= 0 {
        if !is_revertable(board, cx as usize, y) {
            break;
        }
        board.revert_to_hit(cx as usize, y);
        cx -= 1;
    }
    let mut cx = x + 1;
    while cx <= x + 2 && cx < BOARD_SIZE {
        if !is_revertable(board, cx, y) {
            break;
        }
        board.revert_to_hit(cx, y);
        cx += 1;
    }
    let mut cy = y as isize - 1;
    while cy >= y as isize - 2 && cy >= 0 {
        if !is_revertable(board, x, cy as usize) {
            break;
        }
        board.revert_to_hit(x, cy as usize);
        cy -= 1;
    }
    let mut cy = y + 1;
    while cy <= y + 2 && cy < BOARD_SIZE {
        if !is_revertable(board, x, cy) {
            break;
        }
        board.revert_to_hit(x, cy);
        cy += 1;
    }
}
