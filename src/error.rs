//! Error types for layout parsing and the search.

use crate::board::Layout;

/// Errors raised while setting up or running a search.
///
/// Exhausting the search is not an error; see
/// [`Outcome::Exhausted`](crate::search::Outcome::Exhausted).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The starting layout could not be accepted.
    #[error("invalid layout: {reason}")]
    InvalidLayout { reason: String },

    /// A sowing was requested from a pit with no stones.
    #[error("sow from empty pit {pit} (layout: {layout}, turns: {turns:?})")]
    SowFromEmptyPit {
        pit: usize,
        layout: Layout,
        turns: Vec<usize>,
    },

    /// A pit would hold more stones than a `u32` can count.
    #[error("stone count overflow in pit {pit} (layout: {layout}, turns: {turns:?})")]
    StoneOverflow {
        pit: usize,
        layout: Layout,
        turns: Vec<usize>,
    },

    /// A pit index outside the board.
    #[error("pit {pit} is out of range")]
    PitOutOfRange { pit: usize },

    /// Search bookkeeping went out of step with the board.
    #[error("search invariant broken: {detail} (layout: {layout}, turns: {turns:?})")]
    Invariant {
        detail: &'static str,
        layout: Layout,
        turns: Vec<usize>,
    },
}

impl SearchError {
    pub(crate) fn invalid_layout(reason: impl Into<String>) -> Self {
        SearchError::InvalidLayout {
            reason: reason.into(),
        }
    }

    /// Attach the turn list to errors that report it.
    pub(crate) fn with_turns(mut self, current: &[usize]) -> Self {
        match &mut self {
            SearchError::SowFromEmptyPit { turns, .. }
            | SearchError::StoneOverflow { turns, .. } => *turns = current.to_vec(),
            _ => {}
        }
        self
    }
}

/// Result type for search operations.
pub type SearchResult<T> = Result<T, SearchError>;
