//! End-of-search reporting.
//!
//! [`Summary`] reports the highest pot total and the sequences that reach it.
//! [`Listing`] prints every closed sequence as `turns. total`. [`Diagram`]
//! draws a layout as the two-row board:
//!
//! ```text
//!     [ 4][ 4][ 4][ 4][ 4][ 4]
//!     [ 4][ 4][ 4][ 4][ 4][ 4][ 0]
//! ```
//!
//! Player B's pits run right to left along the top row, player A's pits left
//! to right along the bottom, ending at the store.

use std::fmt;

use crate::board::Layout;
use crate::constants::{OPPONENT_PITS, PLAY_PITS, STORE};
use crate::search::{Outcome, SearchStats};
use crate::sequence::SearchLog;

/// Two-row drawing of a layout.
pub struct Diagram<'a>(pub &'a Layout);

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.0;
        write!(f, "    ")?;
        for pit in OPPONENT_PITS.rev() {
            write!(f, "[{:>2}]", layout[pit])?;
        }
        writeln!(f)?;
        write!(f, "    ")?;
        for pit in PLAY_PITS {
            write!(f, "[{:>2}]", layout[pit])?;
        }
        write!(f, "[{:>2}]", layout[STORE])
    }
}

/// Highest pot and the sequences that reach it.
pub struct Summary<'a> {
    pub log: &'a SearchLog,
    pub outcome: Outcome,
    pub stats: SearchStats,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.outcome {
            Outcome::Exhausted => "search exhausted",
            Outcome::LimitReached => "sequence limit reached",
        };
        writeln!(
            f,
            "Done ({status}): {} sequences closed, {} dead ends",
            self.stats.sequences_closed, self.stats.dead_ends
        )?;

        let Some(max) = self.log.max_pot_total() else {
            return writeln!(f, "No sequence reached the store");
        };
        writeln!(f, "Max = {max}")?;
        writeln!(f, "Winners:")?;
        for seq in self.log.best_sequences() {
            writeln!(f, "  {}", seq.turn_string())?;
            if let Some(layout) = seq.last_layout() {
                writeln!(f, "{}", Diagram(layout))?;
            }
        }
        Ok(())
    }
}

/// One `turns. total` line per closed sequence.
pub struct Listing<'a>(pub &'a SearchLog);

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seq in self.0.closed() {
            if let Some(total) = seq.pot_total() {
                writeln!(f, "{}. {total}", seq.turn_string())?;
            }
        }
        Ok(())
    }
}
