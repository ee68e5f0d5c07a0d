//! Board state: thirteen pits of stones.
//!
//! [`Board`] is the live, mutable board the search sows on. [`Layout`] is the
//! plain value snapshot of it that gets copied into history, compared in
//! tests, and printed as an output line.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::constants::{DEFAULT_LAYOUT, MAX_TOTAL, PITS, PLAY_PITS, STORE};
use crate::error::SearchError;

/// Index of the pit directly across the board from `pit`.
#[inline]
pub fn mirror(pit: usize) -> usize {
    PITS - 1 - pit
}

/// Stone counts of all thirteen pits, index-aligned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout([u32; PITS]);

impl Layout {
    pub const fn new(counts: [u32; PITS]) -> Self {
        Layout(counts)
    }

    /// Total number of stones on the board.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    /// Stones in the store.
    pub fn store(&self) -> u32 {
        self.0[STORE]
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout(DEFAULT_LAYOUT)
    }
}

impl Index<usize> for Layout {
    type Output = u32;

    fn index(&self, pit: usize) -> &u32 {
        &self.0[pit]
    }
}

/// Parses thirteen non-negative integers separated by whitespace or commas.
///
/// The total must stay below [`MAX_TOTAL`] so that sowing and capture cannot
/// overflow a pit.
impl FromStr for Layout {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.len() != PITS {
            return Err(SearchError::invalid_layout(format!(
                "expected {PITS} pit counts, got {}",
                tokens.len()
            )));
        }

        let mut counts = [0u32; PITS];
        for (pit, token) in tokens.iter().enumerate() {
            let value: i64 = token.parse().map_err(|_| {
                SearchError::invalid_layout(format!("pit {pit}: '{token}' is not a number"))
            })?;
            if value < 0 {
                return Err(SearchError::invalid_layout(format!(
                    "pit {pit}: negative stone count {value}"
                )));
            }
            counts[pit] = u32::try_from(value).map_err(|_| {
                SearchError::invalid_layout(format!("pit {pit}: stone count {value} is too large"))
            })?;
        }
        let layout = Layout(counts);
        if layout.total() > u64::from(MAX_TOTAL) {
            return Err(SearchError::invalid_layout(format!(
                "{} stones in total, at most {MAX_TOTAL} allowed",
                layout.total()
            )));
        }
        Ok(layout)
    }
}

/// Space-separated counts, pit 0 first.
impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pit, count) in self.0.iter().enumerate() {
            if pit > 0 {
                write!(f, " ")?;
            }
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

/// The board the search sows on.
///
/// Board only stores stones. Sowing lives in [`crate::sower`] and the rules
/// about where a turn ends live in [`crate::search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pits: [u32; PITS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new(&Layout::default())
    }
}

impl Board {
    pub fn new(layout: &Layout) -> Self {
        Board { pits: layout.0 }
    }

    /// Install an explicit layout, replacing every pit.
    pub fn reset(&mut self, layout: &Layout) {
        self.pits = layout.0;
    }

    pub fn snapshot(&self) -> Layout {
        Layout(self.pits)
    }

    /// Stones in `pit`.
    ///
    /// # Panics
    ///
    /// Panics if `pit >= PITS`.
    #[inline]
    pub fn stones(&self, pit: usize) -> u32 {
        self.pits[pit]
    }

    /// True if `pit` holds no stones. Pits off the board count as empty.
    #[inline]
    pub fn is_empty(&self, pit: usize) -> bool {
        self.pits.get(pit).is_none_or(|&s| s == 0)
    }

    pub fn total(&self) -> u64 {
        self.snapshot().total()
    }

    /// First non-empty play pit at or after `from`, if any.
    pub fn next_play_pit(&self, from: usize) -> Option<usize> {
        (from.max(PLAY_PITS.start)..PLAY_PITS.end).find(|&pit| !self.is_empty(pit))
    }

    pub(crate) fn take_all(&mut self, pit: usize) -> u32 {
        std::mem::take(&mut self.pits[pit])
    }

    /// Add one stone to `pit`; `None` if the count would overflow.
    pub(crate) fn add_stone(&mut self, pit: usize) -> Option<()> {
        self.pits[pit] = self.pits[pit].checked_add(1)?;
        Some(())
    }

    pub(crate) fn set_stones(&mut self, pit: usize, stones: u32) {
        self.pits[pit] = stones;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.snapshot().fmt(f)
    }
}
