//! A single sowing step.
//!
//! Sowing empties the start pit and drops one stone into each following pit,
//! wrapping from the last pit back to pit 0. A hand of 13 or more stones laps
//! the board and refills the start pit as well. Nothing here knows about
//! turns, stores or captures.

use crate::board::Board;
use crate::constants::PITS;
use crate::error::{SearchError, SearchResult};

/// Sow every stone from `start` and return the pit that received the last one.
///
/// Errors leave `turns` empty; the search fills it in. An overflow aborts
/// mid-sow and the board is not rolled back.
pub fn sow(board: &mut Board, start: usize) -> SearchResult<usize> {
    if start >= PITS {
        return Err(SearchError::PitOutOfRange { pit: start });
    }
    if board.is_empty(start) {
        return Err(SearchError::SowFromEmptyPit {
            pit: start,
            layout: board.snapshot(),
            turns: Vec::new(),
        });
    }

    let mut hand = board.take_all(start);
    let mut pit = start;
    while hand > 0 {
        pit = (pit + 1) % PITS;
        if board.add_stone(pit).is_none() {
            return Err(SearchError::StoneOverflow {
                pit,
                layout: board.snapshot(),
                turns: Vec::new(),
            });
        }
        hand -= 1;
    }
    Ok(pit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Layout;
    use crate::constants::STORE;

    fn board(counts: [u32; PITS]) -> Board {
        Board::new(&Layout::new(counts))
    }

    #[test]
    fn test_sow_from_pit_0_default() {
        let mut b = Board::default();
        let landing = sow(&mut b, 0).unwrap();
        assert_eq!(landing, 4);
        assert_eq!(
            b.snapshot(),
            Layout::new([0, 5, 5, 5, 5, 4, 0, 4, 4, 4, 4, 4, 4])
        );
    }

    #[test]
    fn test_sow_wraps_from_last_pit() {
        let mut b = board([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(sow(&mut b, 12).unwrap(), 0);
        assert_eq!(b.stones(0), 1);
        assert!(b.is_empty(12));
    }

    #[test]
    fn test_sow_landing_formula() {
        for start in 0..PITS {
            for k in 1..PITS as u32 {
                let mut counts = [0; PITS];
                counts[start] = k;
                let mut b = board(counts);
                let landing = sow(&mut b, start).unwrap();
                assert_eq!(landing, (start + k as usize) % PITS, "start {start}, {k} stones");
            }
        }
    }

    #[test]
    fn test_sow_full_lap_refills_start() {
        let mut counts = [0; PITS];
        counts[3] = 13;
        let mut b = board(counts);
        let landing = sow(&mut b, 3).unwrap();
        assert_eq!(landing, 3);
        assert_eq!(b.snapshot(), Layout::new([1; PITS]));
    }

    #[test]
    fn test_sow_passes_through_store() {
        let mut b = board([0, 0, 0, 0, 3, 0, 2, 0, 0, 0, 0, 0, 0]);
        assert_eq!(sow(&mut b, 4).unwrap(), 7);
        assert_eq!(b.stones(STORE), 3);
    }

    #[test]
    fn test_sow_from_empty_pit() {
        let mut b = board([0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let before = b.snapshot();
        match sow(&mut b, 0) {
            Err(SearchError::SowFromEmptyPit { pit, layout, .. }) => {
                assert_eq!(pit, 0);
                assert_eq!(layout, before);
            }
            other => panic!("expected SowFromEmptyPit, got {other:?}"),
        }
        assert_eq!(b.snapshot(), before, "failed sow must not touch the board");
    }

    #[test]
    fn test_sow_overflow_is_error() {
        let mut b = board([1, u32::MAX, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        match sow(&mut b, 0) {
            Err(SearchError::StoneOverflow { pit, .. }) => assert_eq!(pit, 1),
            other => panic!("expected StoneOverflow, got {other:?}"),
        }
    }

    #[test]
    fn test_sow_out_of_range() {
        let mut b = Board::default();
        assert_eq!(sow(&mut b, PITS), Err(SearchError::PitOutOfRange { pit: PITS }));
    }

    #[test]
    fn test_sow_conserves_stones() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..500 {
            let mut counts = [0; PITS];
            for c in counts.iter_mut() {
                *c = rng.u32(0..30);
            }
            let start = rng.usize(0..PITS);
            counts[start] = counts[start].max(1);

            let mut b = board(counts);
            let before = b.total();
            sow(&mut b, start).unwrap();
            assert_eq!(b.total(), before, "stones not conserved for {counts:?} from {start}");
        }
    }
}
