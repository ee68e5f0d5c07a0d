//! Retraction of failed branches.
//!
//! The current sequence's layout and turn lists form the decision stack.
//! Retracting pops the failed turn, restores the board to the layout it was
//! chosen from and tries the next non-empty pit after it. When no such pit is
//! left, that layout is popped too and the walk continues one decision
//! further back. An empty stack means every branch has been tried.

use crate::board::Board;
use crate::error::{SearchError, SearchResult};
use crate::sequence::Sequence;

/// Where the search goes after a retraction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Retraction {
    /// The board was restored and `pit` pushed as the new last turn.
    Resume(usize),
    /// No earlier decision has an untried pit left.
    Exhausted,
}

/// Undo the last turn of `seq` and find the next branch to try.
///
/// Expects one turn per recorded layout. On [`Retraction::Resume`] that still
/// holds and `board` matches the last layout. On [`Retraction::Exhausted`]
/// both lists are empty.
pub fn retract(seq: &mut Sequence, board: &mut Board) -> SearchResult<Retraction> {
    if seq.layouts.len() != seq.turns.len() {
        return Err(SearchError::Invariant {
            detail: "decision stack has unpaired layouts and turns",
            layout: board.snapshot(),
            turns: seq.turns.clone(),
        });
    }

    while let Some(tried) = seq.turns.pop() {
        let Some(layout) = seq.layouts.last() else {
            return Err(SearchError::Invariant {
                detail: "turn without a layout to restore",
                layout: board.snapshot(),
                turns: seq.turns.clone(),
            });
        };
        board.reset(layout);

        if let Some(pit) = board.next_play_pit(tried + 1) {
            log::debug!("retract: pit {tried} -> {pit} at depth {}", seq.layouts.len());
            seq.turns.push(pit);
            return Ok(Retraction::Resume(pit));
        }
        seq.layouts.pop();
    }

    Ok(Retraction::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Layout;

    fn stack(frames: &[([u32; 13], usize)]) -> Sequence {
        let mut seq = Sequence::default();
        for &(counts, pit) in frames {
            seq.layouts.push(Layout::new(counts));
            seq.turns.push(pit);
        }
        seq
    }

    #[test]
    fn test_retract_tries_next_pit_on_same_layout() {
        let start = [4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4];
        let mut seq = stack(&[(start, 0)]);
        let mut board = Board::new(&Layout::new([0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4]));

        assert_eq!(retract(&mut seq, &mut board), Ok(Retraction::Resume(1)));
        assert_eq!(board.snapshot(), Layout::new(start));
        assert_eq!(seq.turns(), &[1]);
        assert_eq!(seq.layouts().len(), 1);
    }

    #[test]
    fn test_retract_skips_empty_pits() {
        let layout = [1, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut seq = stack(&[(layout, 0)]);
        let mut board = Board::default();

        assert_eq!(retract(&mut seq, &mut board), Ok(Retraction::Resume(3)));
        assert_eq!(board.snapshot(), Layout::new(layout));
    }

    #[test]
    fn test_retract_walks_back_a_level() {
        let outer = [0, 0, 3, 0, 2, 0, 0, 1, 1, 1, 1, 1, 1];
        let inner = [1, 0, 0, 0, 0, 0, 4, 1, 1, 1, 1, 1, 1];
        // Pit 5 was the last play pit at the inner layout, so it is spent
        let mut seq = stack(&[(outer, 2), (inner, 5)]);
        let mut board = Board::default();

        assert_eq!(retract(&mut seq, &mut board), Ok(Retraction::Resume(4)));
        assert_eq!(board.snapshot(), Layout::new(outer));
        assert_eq!(seq.layouts(), &[Layout::new(outer)]);
        assert_eq!(seq.turns(), &[4]);
    }

    #[test]
    fn test_retract_exhausted() {
        let mut seq = stack(&[
            ([0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0], 5),
            ([3, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0], 0),
        ]);
        let mut board = Board::default();
        let before = board.snapshot();

        assert_eq!(retract(&mut seq, &mut board), Ok(Retraction::Exhausted));
        assert!(seq.layouts().is_empty());
        assert!(seq.turns().is_empty());
        // The last restore still happened before giving up
        assert_ne!(board.snapshot(), before);
    }

    #[test]
    fn test_retract_empty_stack() {
        let mut seq = Sequence::default();
        let mut board = Board::default();
        assert_eq!(retract(&mut seq, &mut board), Ok(Retraction::Exhausted));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_retract_unpaired_stack() {
        let mut seq = Sequence::new(Layout::default());
        let mut board = Board::default();
        assert!(matches!(
            retract(&mut seq, &mut board),
            Err(SearchError::Invariant { .. })
        ));
    }
}
