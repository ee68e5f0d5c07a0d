//! Sequence history.
//!
//! A [`Sequence`] holds the layouts seen at each decision point, the starting
//! pit chosen at each one, and the pot total once the sequence closes. The
//! current sequence's two lists double as the search's decision stack: layout
//! `k` is the board at decision `k` and turn `k` is the pit tried there.
//!
//! When a sequence closes, the next one carries on with the same lists, so the
//! history keeps growing across sequence boundaries and backtracking can walk
//! back past a close. The closed sequence keeps a copy of the history as it
//! stood at that moment.

use crate::board::Layout;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    pub(crate) layouts: Vec<Layout>,
    pub(crate) turns: Vec<usize>,
    pub(crate) pot_total: Option<u32>,
}

impl Sequence {
    pub fn new(start: Layout) -> Self {
        Sequence {
            layouts: vec![start],
            turns: Vec::new(),
            pot_total: None,
        }
    }

    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    pub fn turns(&self) -> &[usize] {
        &self.turns
    }

    /// Stones in the store when the sequence closed, `None` while open.
    pub fn pot_total(&self) -> Option<u32> {
        self.pot_total
    }

    pub fn is_closed(&self) -> bool {
        self.pot_total.is_some()
    }

    /// Layout the sequence closed on (or the latest decision point if open).
    pub fn last_layout(&self) -> Option<&Layout> {
        self.layouts.last()
    }

    /// Turns written as one digit per starting pit, e.g. `"5214"`.
    pub fn turn_string(&self) -> String {
        self.turns.iter().map(|t| t.to_string()).collect()
    }

    /// Close this sequence with `pot_total` and return the one that continues it.
    ///
    /// `self` keeps a frozen copy of the history; the returned sequence takes
    /// over the live lists.
    pub(crate) fn close(&mut self, pot_total: u32) -> Sequence {
        self.pot_total = Some(pot_total);
        Sequence {
            layouts: self.layouts.clone(),
            turns: self.turns.clone(),
            pot_total: None,
        }
    }
}

/// Every sequence opened during a search, in creation order.
///
/// Only the last sequence is ever changed; earlier ones are closed records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchLog {
    sequences: Vec<Sequence>,
}

impl SearchLog {
    pub fn new(start: Layout) -> Self {
        SearchLog {
            sequences: vec![Sequence::new(start)],
        }
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Number of sequences opened, including the current one.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn current(&self) -> &Sequence {
        // A log is created with one sequence and never shrinks.
        &self.sequences[self.sequences.len() - 1]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Sequence {
        let last = self.sequences.len() - 1;
        &mut self.sequences[last]
    }

    /// Sequences that ended with a capture.
    pub fn closed(&self) -> impl Iterator<Item = &Sequence> + '_ {
        self.sequences.iter().filter(|s| s.is_closed())
    }

    pub fn closed_count(&self) -> usize {
        self.closed().count()
    }

    /// Highest pot total over all closed sequences.
    pub fn max_pot_total(&self) -> Option<u32> {
        self.closed().filter_map(Sequence::pot_total).max()
    }

    /// Closed sequences that reach [`max_pot_total`](Self::max_pot_total).
    pub fn best_sequences(&self) -> Vec<&Sequence> {
        match self.max_pot_total() {
            Some(max) => self.closed().filter(|s| s.pot_total == Some(max)).collect(),
            None => Vec::new(),
        }
    }

    /// Close the current sequence and open its continuation.
    pub(crate) fn close_current(&mut self, pot_total: u32) {
        let next = self.current_mut().close(pot_total);
        self.sequences.push(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log() {
        let log = SearchLog::new(Layout::default());
        assert_eq!(log.len(), 1);
        assert!(!log.is_empty());
        assert_eq!(log.current().layouts(), &[Layout::default()]);
        assert!(log.current().turns().is_empty());
        assert!(!log.current().is_closed());
        assert_eq!(log.max_pot_total(), None);
        assert!(log.best_sequences().is_empty());
    }

    #[test]
    fn test_close_carries_history_forward() {
        let mut log = SearchLog::new(Layout::default());
        log.current_mut().turns.push(2);
        let after = Layout::new([4, 4, 0, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4]);
        log.current_mut().layouts.push(after);

        log.close_current(5);
        assert_eq!(log.len(), 2);

        let closed = &log.sequences()[0];
        assert_eq!(closed.pot_total(), Some(5));
        assert_eq!(closed.last_layout(), Some(&after));

        let current = log.current();
        assert!(!current.is_closed());
        assert_eq!(current.layouts(), closed.layouts());
        assert_eq!(current.turns(), &[2]);

        // Later changes to the live lists leave the closed record alone
        log.current_mut().turns.push(0);
        assert_eq!(log.sequences()[0].turns(), &[2]);
    }

    #[test]
    fn test_best_sequences() {
        let mut log = SearchLog::new(Layout::default());
        for (pit, pot) in [(0, 3), (1, 9), (2, 9), (3, 4)] {
            log.current_mut().turns.push(pit);
            log.close_current(pot);
        }
        assert_eq!(log.closed_count(), 4);
        assert_eq!(log.max_pot_total(), Some(9));

        let best = log.best_sequences();
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].turn_string(), "01");
        assert_eq!(best[1].turn_string(), "012");
    }
}
