//! Confirmed-sunk bookkeeping for the opponent fleet.
//!
//! The fleet is the fixed multiset [2, 3, 3, 4, 5]. Lengths 2, 4 and 5 map
//! to single slots; the two length-3 ships share slots 1 and 2 and are told
//! apart purely by confirmation order. The bypass path exists because the
//! upstream "sunk length 3" signal cannot always be tied to actual cells.

use crate::config::{FLEET, NUM_SHIPS};

/// Per-slot confirmed-sunk flags for the five opponent ships.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    sunk: [bool; NUM_SHIPS],
}

impl Fleet {
    pub fn new() -> Self {
        Fleet {
            sunk: [false; NUM_SHIPS],
        }
    }

    /// Whether slot `index` has been confirmed sunk.
    pub fn is_sunk(&self, index: usize) -> bool {
        self.sunk[index]
    }

    /// Whether either length-3 slot is confirmed.
    pub fn any_three_sunk(&self) -> bool {
        self.sunk[1] || self.sunk[2]
    }

    /// Slot indices and lengths of ships not yet confirmed sunk.
    pub fn afloat(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        FLEET
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.sunk[i])
            .map(|(i, &len)| (i, len))
    }

    /// Confirm a sinking of `length` backed by cell-level evidence. Length 3
    /// fills slot 1 first, then slot 2.
    pub fn confirm(&mut self, length: u8) {
        let slot = match length {
            2 => 0,
            3 => {
                if self.sunk[1] {
                    2
                } else {
                    1
                }
            }
            4 => 3,
            5 => 4,
            _ => {
                log::warn!("sunk report for impossible ship length {}", length);
                return;
            }
        };
        self.set(slot);
    }

    /// Confirm a length-3 sinking on ship count alone, without trusting the
    /// reported cells. Always takes slot 1; the second untrusted report is
    /// the double-confirmation diagnostic.
    pub fn confirm_three_bypassed(&mut self) {
        self.set(1);
    }

    /// Rollback support: forget both length-3 confirmations.
    pub(crate) fn clear_threes(&mut self) {
        self.sunk[1] = false;
        self.sunk[2] = false;
    }

    fn set(&mut self, slot: usize) {
        if self.sunk[slot] {
            log::warn!("fleet slot {} confirmed sunk twice; ignoring", slot);
            return;
        }
        self.sunk[slot] = true;
    }
}
