//! The search driver: turn and sequence state machine.
//!
//! A [`Search`] owns the board and the [`SearchLog`] and advances one
//! transition per [`Search::step`]:
//!
//! - `Selecting`: pick the first non-empty play pit at or after a resume index
//! - `Sowing`: sow once; the landing pit decides what happens next
//! - `SequenceClosing`: the last stone hit the store; capture and record
//! - `DeadEnd`: the last stone hit an empty pit; retract to the next branch
//!
//! Sowing from a pit that ends on a non-empty pit (other than the store)
//! relays: the landing pit is sown next within the same turn.
//!
//! The capture on close overwrites the store with the stones in the pit
//! mirroring the turn's starting pit, plus one. It is the only step that does
//! not conserve stones.

use crate::backtrack::{retract, Retraction};
use crate::board::{mirror, Board, Layout};
use crate::constants::{MAX_HOPS, STORE};
use crate::error::{SearchError, SearchResult};
use crate::sequence::SearchLog;

/// Safety valves for layouts that would otherwise run for a very long time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Stop after this many sequences have closed.
    pub max_sequences: Option<usize>,
    /// Deepest decision stack allowed; a close that would go deeper counts as
    /// a dead end.
    pub max_depth: Option<usize>,
    /// Relay hops allowed in one turn before it counts as a dead end.
    pub max_hops: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_sequences: None,
            max_depth: None,
            max_hops: MAX_HOPS,
        }
    }
}

/// How a finished search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every branch reachable from the starting layout was explored.
    Exhausted,
    /// `max_sequences` was hit first.
    LimitReached,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Choose a starting pit, scanning from the given index.
    Selecting(usize),
    /// Sow from the given pit.
    Sowing(usize),
    SequenceClosing,
    DeadEnd,
    Finished(Outcome),
}

/// What a single [`Search::step`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A starting pit was chosen and pushed as a turn.
    Selected(usize),
    Sowed { from: usize, landing: usize },
    /// A sequence closed; the layout is the board after capture.
    Closed(Layout),
    Retracted(Retraction),
    Finished(Outcome),
}

/// Counters kept while searching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub sequences_closed: usize,
    pub dead_ends: usize,
    pub hops: u64,
    /// Most layouts ever held on the decision stack.
    pub max_depth: usize,
}

/// Exhaustive sowing search from one starting layout.
pub struct Search {
    board: Board,
    log: SearchLog,
    limits: SearchLimits,
    state: State,
    /// Hops taken in the current turn.
    turn_hops: usize,
    stats: SearchStats,
}

impl Search {
    pub fn new(start: Layout) -> Self {
        Self::with_limits(start, SearchLimits::default())
    }

    pub fn with_limits(start: Layout, limits: SearchLimits) -> Self {
        Search {
            board: Board::new(&start),
            log: SearchLog::new(start),
            limits,
            state: State::Selecting(0),
            turn_hops: 0,
            stats: SearchStats {
                max_depth: 1,
                ..SearchStats::default()
            },
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn log(&self) -> &SearchLog {
        &self.log
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Run to completion, passing each closed sequence's layout to `emit`.
    pub fn run<F: FnMut(&Layout)>(&mut self, mut emit: F) -> SearchResult<Outcome> {
        log::info!("search start: {}", self.board);
        loop {
            match self.step()? {
                Event::Closed(layout) => emit(&layout),
                Event::Finished(outcome) => {
                    log::info!(
                        "search finished ({outcome:?}): {} sequences closed, {} dead ends, max depth {}",
                        self.stats.sequences_closed,
                        self.stats.dead_ends,
                        self.stats.max_depth
                    );
                    return Ok(outcome);
                }
                _ => {}
            }
        }
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> SearchResult<Event> {
        match self.state {
            State::Selecting(resume) => self.select(resume),
            State::Sowing(pit) => self.sow_from(pit),
            State::SequenceClosing => self.close_sequence(),
            State::DeadEnd => {
                self.stats.dead_ends += 1;
                self.backtrack()
            }
            State::Finished(outcome) => Ok(Event::Finished(outcome)),
        }
    }

    fn select(&mut self, resume: usize) -> SearchResult<Event> {
        match self.board.next_play_pit(resume) {
            Some(pit) => {
                self.log.current_mut().turns.push(pit);
                self.turn_hops = 0;
                self.state = State::Sowing(pit);
                Ok(Event::Selected(pit))
            }
            None => {
                // Nothing to choose here: drop this decision point, then retract
                self.log.current_mut().layouts.pop();
                self.backtrack()
            }
        }
    }

    fn sow_from(&mut self, pit: usize) -> SearchResult<Event> {
        let landing = crate::sower::sow(&mut self.board, pit)
            .map_err(|e| e.with_turns(self.log.current().turns()))?;
        self.turn_hops += 1;
        self.stats.hops += 1;
        log::trace!("sow {pit} -> {landing}: {}", self.board);

        self.state = if landing == STORE {
            if self.at_depth_limit() {
                log::debug!("depth limit reached, treating close as dead end");
                State::DeadEnd
            } else {
                State::SequenceClosing
            }
        } else if self.board.stones(landing) == 1 {
            State::DeadEnd
        } else if self.turn_hops >= self.limits.max_hops {
            log::warn!(
                "turn abandoned after {} hops (turns: {:?})",
                self.turn_hops,
                self.log.current().turns()
            );
            State::DeadEnd
        } else {
            State::Sowing(landing)
        };
        Ok(Event::Sowed { from: pit, landing })
    }

    fn at_depth_limit(&self) -> bool {
        self.limits
            .max_depth
            .is_some_and(|max| self.log.current().layouts.len() >= max)
    }

    /// Capture into the store and record the result.
    ///
    /// The capture is applied before the layout is recorded, so the pushed
    /// layout carries the new store count. It is the board the next turn is
    /// chosen from and the one a later retraction restores.
    fn close_sequence(&mut self) -> SearchResult<Event> {
        let Some(&start) = self.log.current().turns.last() else {
            return Err(SearchError::Invariant {
                detail: "closing a sequence with no turn",
                layout: self.board.snapshot(),
                turns: Vec::new(),
            });
        };

        let Some(pot) = self.board.stones(mirror(start)).checked_add(1) else {
            return Err(SearchError::StoneOverflow {
                pit: STORE,
                layout: self.board.snapshot(),
                turns: self.log.current().turns.clone(),
            });
        };
        self.board.set_stones(STORE, pot);
        let layout = self.board.snapshot();

        let current = self.log.current_mut();
        current.layouts.push(layout);
        let depth = current.layouts.len();
        log::debug!("close: pot {pot}, turns {}, depth {depth}", current.turn_string());
        self.log.close_current(pot);

        self.stats.sequences_closed += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        self.state = match self.limits.max_sequences {
            Some(max) if self.stats.sequences_closed >= max => {
                log::warn!("sequence limit {max} reached");
                State::Finished(Outcome::LimitReached)
            }
            _ => State::Selecting(0),
        };
        Ok(Event::Closed(layout))
    }

    fn backtrack(&mut self) -> SearchResult<Event> {
        let retraction = retract(self.log.current_mut(), &mut self.board)?;
        self.state = match retraction {
            Retraction::Resume(pit) => {
                self.turn_hops = 0;
                State::Sowing(pit)
            }
            Retraction::Exhausted => State::Finished(Outcome::Exhausted),
        };
        Ok(Event::Retracted(retraction))
    }
}
