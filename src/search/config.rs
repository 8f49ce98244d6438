//! Search-wide constants and tunables, centralized rather than scattered
//! `const`s at each use site.

/// A score this large cannot be reached by material + PST terms; used as
/// the alpha-beta window's outer bound.
pub const INF: i32 = 50_000;

/// Magnitude assigned to an immediate checkmate. Scores within
/// `MATE_VALUE - 100` of this are mate scores at some ply distance.
pub const MATE_VALUE: i32 = 49_000;

/// Quiescence delta-pruning margin: a queen's value plus a little slack,
/// the standard choice for "even winning the best reachable material
/// couldn't possibly raise alpha".
pub const DELTA_PRUNING_MARGIN: i32 = 975;

/// Knobs for a single `best_move` call. Constructed with [`Default`] and
/// overridden field by field; every field has a caller-facing meaning
/// described in the external interface.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    /// Iterative-deepening target depth. Recommended range `[1, 10]`; not
    /// clamped or validated (0 yields an immediate quiescence-only probe).
    pub search_depth: u32,
    /// Number of Lazy-SMP workers. `0` and `1` both mean single-threaded.
    pub worker_count: usize,
    /// Transposition table size in entries.
    pub tt_size: usize,
    /// Quiescence delta-pruning margin, see [`DELTA_PRUNING_MARGIN`].
    pub delta_margin: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            search_depth: 5,
            worker_count: 1,
            tt_size: crate::tt::DEFAULT_TT_SIZE,
            delta_margin: DELTA_PRUNING_MARGIN,
        }
    }
}
