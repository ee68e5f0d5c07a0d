//! Mancala-Sow: an exhaustive sowing-sequence enumerator.
//!
//! Starting from one board layout, the search tries every starting pit on
//! player A's side, relays sowing until the turn ends, and records a sequence
//! each time the last stone lands in the store. Turns that end in an empty pit
//! are dead ends; the search backtracks to the next untried pit and carries on
//! until every branch has been tried.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and default limits
//! - [`board`] - Board state and layout snapshots
//! - [`sower`] - The single sowing step
//! - [`search`] - Turn and sequence state machine
//! - [`backtrack`] - Retraction to the next untried branch
//! - [`sequence`] - Sequence history and the search log
//! - [`report`] - Summary, listing and board diagrams
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use mancala_sow::board::Layout;
//! use mancala_sow::search::{Outcome, Search};
//!
//! let start: Layout = "0 0 0 0 0 1 0 0 0 0 0 0 0".parse().unwrap();
//! let mut search = Search::new(start);
//!
//! let mut lines = Vec::new();
//! let outcome = search.run(|layout| lines.push(layout.to_string())).unwrap();
//!
//! assert_eq!(outcome, Outcome::Exhausted);
//! assert_eq!(lines, ["0 0 0 0 0 0 1 0 0 0 0 0 0"]);
//! ```

pub mod backtrack;
pub mod board;
pub mod constants;
pub mod error;
pub mod report;
pub mod search;
pub mod sequence;
pub mod sower;
