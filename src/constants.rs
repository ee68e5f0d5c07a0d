//! Constants for board geometry and search limits.
//!
//! The board is a single row of 13 pits: player A's six play pits, player A's
//! store, then player B's six play pits. Player B's store is not modelled, so
//! sowing wraps straight from pit 12 back to pit 0.

use std::ops::Range;

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of pits on the board.
pub const PITS: usize = 13;

/// Index of player A's store.
pub const STORE: usize = 6;

/// Player A's play pits. Starting pits are only ever chosen from this range.
pub const PLAY_PITS: Range<usize> = 0..STORE;

/// Player B's play pits. They take part in sowing but are never chosen.
pub const OPPONENT_PITS: Range<usize> = STORE + 1..PITS;

/// Stones in each play pit of the default starting layout.
pub const DEFAULT_STONES: u32 = 4;

/// Default starting layout: four stones in every play pit, an empty store.
pub const DEFAULT_LAYOUT: [u32; PITS] = [
    DEFAULT_STONES,
    DEFAULT_STONES,
    DEFAULT_STONES,
    DEFAULT_STONES,
    DEFAULT_STONES,
    DEFAULT_STONES,
    0,
    DEFAULT_STONES,
    DEFAULT_STONES,
    DEFAULT_STONES,
    DEFAULT_STONES,
    DEFAULT_STONES,
    DEFAULT_STONES,
];

/// Most stones a parsed layout may hold in total. One below `u32::MAX`, so a
/// capture of every stone plus one still fits in the store.
pub const MAX_TOTAL: u32 = u32::MAX - 1;

// =============================================================================
// Search Limits
// =============================================================================

/// Maximum relay hops in one turn before it is abandoned as a dead end.
///
/// The default layout never needs more than a few dozen; this only guards
/// hand-made layouts that relay forever.
pub const MAX_HOPS: usize = 1000;
