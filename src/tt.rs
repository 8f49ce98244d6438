//! Transposition table: a fixed-size, mutex-guarded cache from position
//! hash to search result.

use parking_lot::Mutex;

use crate::board::types::Move;
use crate::search::config::MATE_VALUE;

/// Default table size: two million entries, indexed by `key mod size`.
pub const DEFAULT_TT_SIZE: usize = 2_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TTFlag {
    Exact,
    Alpha,
    Beta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TranspositionEntry {
    pub key: u64,
    pub score: i32,
    pub depth: i32,
    /// `None` plays the role the spec's `from = 0xFF` sentinel plays in a
    /// systems-language rendition: "no move recorded here".
    pub best_move: Option<Move>,
    pub flag: TTFlag,
}

impl TranspositionEntry {
    const EMPTY: TranspositionEntry = TranspositionEntry {
        key: 0,
        score: 0,
        depth: 0,
        best_move: None,
        flag: TTFlag::Exact,
    };
}

/// Result of a [`TranspositionTable::probe`]: a score usable for an
/// immediate cutoff (if the stored depth/bound allow one) and, separately,
/// a best-move hint for move ordering that is returned even on a
/// depth/bound miss.
pub(crate) struct ProbeResult {
    pub score: Option<i32>,
    pub hint_move: Option<Move>,
}

/// Fixed-size table of search results, shared across worker threads behind
/// a single mutex. Replacement policy is "always overwrite": the source's
/// simpler-but-correct choice over per-bucket aging (see `DESIGN.md`).
pub struct TranspositionTable {
    slots: Mutex<Vec<TranspositionEntry>>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        TranspositionTable {
            slots: Mutex::new(vec![TranspositionEntry::EMPTY; size]),
        }
    }

    /// Drop every stored entry, e.g. between unrelated searches that
    /// should not see each other's results.
    pub fn clear(&self) {
        let mut slots = self.slots.lock();
        slots.iter_mut().for_each(|e| *e = TranspositionEntry::EMPTY);
    }

    pub(crate) fn probe(&self, key: u64, depth: i32, alpha: i32, beta: i32) -> ProbeResult {
        let slots = self.slots.lock();
        let len = slots.len() as u64;
        let entry = slots[(key % len) as usize];
        drop(slots);

        if entry.key != key {
            return ProbeResult {
                score: None,
                hint_move: None,
            };
        }

        let hint_move = entry.best_move;

        // A mate score this far from the root encodes a distance-to-mate
        // that is only valid at the depth it was computed at; using it at
        // a different depth would misreport how fast the mate is.
        if entry.score.abs() > MATE_VALUE - 100 {
            return ProbeResult {
                score: None,
                hint_move,
            };
        }

        if entry.depth >= depth {
            let score = match entry.flag {
                TTFlag::Exact => Some(entry.score),
                TTFlag::Alpha if entry.score <= alpha => Some(alpha),
                TTFlag::Beta if entry.score >= beta => Some(beta),
                _ => None,
            };
            if score.is_some() {
                return ProbeResult { score, hint_move };
            }
        }

        ProbeResult {
            score: None,
            hint_move,
        }
    }

    pub(crate) fn store(
        &self,
        key: u64,
        score: i32,
        depth: i32,
        alpha_orig: i32,
        beta: i32,
        best_move: Option<Move>,
    ) {
        let flag = if score <= alpha_orig {
            TTFlag::Alpha
        } else if score >= beta {
            TTFlag::Beta
        } else {
            TTFlag::Exact
        };

        let mut slots = self.slots.lock();
        let len = slots.len() as u64;
        let idx = (key % len) as usize;
        slots[idx] = TranspositionEntry {
            key,
            score,
            depth,
            best_move,
            flag,
        };
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new(DEFAULT_TT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_on_empty_table() {
        let tt = TranspositionTable::new(1024);
        let probe = tt.probe(12345, 4, -1000, 1000);
        assert!(probe.score.is_none());
        assert!(probe.hint_move.is_none());
    }

    #[test]
    fn exact_entry_hits_at_equal_or_greater_depth() {
        let tt = TranspositionTable::new(1024);
        tt.store(42, 100, 5, -1000, 1000, None);
        let probe = tt.probe(42, 5, -1000, 1000);
        assert_eq!(probe.score, Some(100));

        let shallow_probe = tt.probe(42, 3, -1000, 1000);
        assert_eq!(shallow_probe.score, Some(100));

        let deep_probe = tt.probe(42, 6, -1000, 1000);
        assert!(deep_probe.score.is_none());
    }

    #[test]
    fn alpha_flag_only_cuts_off_when_stored_score_at_or_below_alpha() {
        let tt = TranspositionTable::new(1024);
        // score(50) <= beta(1000) and > alpha_orig(-1000) would be Exact;
        // force an Alpha bound by storing with alpha_orig above the score.
        tt.store(7, 50, 4, 60, 1000, None);
        let probe = tt.probe(7, 4, 60, 1000);
        assert_eq!(probe.score, Some(60));
    }

    #[test]
    fn unreliable_mate_scores_are_treated_as_a_miss() {
        let tt = TranspositionTable::new(1024);
        tt.store(9, MATE_VALUE - 1, 4, -MATE_VALUE, MATE_VALUE, None);
        let probe = tt.probe(9, 4, -MATE_VALUE, MATE_VALUE);
        assert!(probe.score.is_none());
    }

    #[test]
    fn always_replace_overwrites_regardless_of_depth() {
        let tt = TranspositionTable::new(1024);
        tt.store(1, 100, 10, -1000, 1000, None);
        tt.store(1, -50, 1, -1000, 1000, None);
        let probe = tt.probe(1, 1, -1000, 1000);
        assert_eq!(probe.score, Some(-50));
    }
}
