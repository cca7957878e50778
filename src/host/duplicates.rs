//! A count of copies of clauses.
//!
//! A clause learnt by several solvers (or several times by one solver) is likely useful, and so counts of copies are kept to promote such clauses.

use std::collections::HashMap;

use crate::{
    host::{DuplicateKey, DuplicateTracker},
    misc::log::targets::{self},
};

/// Counts of copies of clauses, keyed by [DuplicateKey].
pub struct DuplicateDB {
    copies: HashMap<DuplicateKey, u32>,

    /// Counts are not increased past the cap.
    cap: u32,
}

impl DuplicateDB {
    /// A database capping counts at `min_copies + 1`, the count which promotes a clause to the core.
    ///
    /// As the first copy gives no signal, the second copy of a clause reports a count of two.
    pub fn new(min_copies: u32) -> Self {
        DuplicateDB {
            copies: HashMap::default(),
            cap: min_copies.saturating_add(1),
        }
    }

    /// The count of copies seen of the clause with the given key, without noting a copy.
    pub fn count(&self, key: &DuplicateKey) -> u32 {
        self.copies.get(key).copied().unwrap_or(0)
    }

    /// The number of distinct clauses seen.
    pub fn len(&self) -> usize {
        self.copies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }
}

impl DuplicateTracker for DuplicateDB {
    /// Notes a copy of the clause, and returns the count of copies seen if the clause had been seen before.
    ///
    /// The first copy of a clause is recorded, but gives a signal of 0.
    fn duplicate_signal(&mut self, key: &DuplicateKey) -> u32 {
        match self.copies.get_mut(key) {
            None => {
                self.copies.insert(key.clone(), 1);
                log::trace!(target: targets::DUPLICATES, "{:?} seen for the first time", key.ints());
                0
            }

            Some(count) => {
                if *count < self.cap {
                    *count += 1;
                }
                log::trace!(target: targets::DUPLICATES, "{:?} seen {count} times", key.ints());
                *count
            }
        }
    }
}
