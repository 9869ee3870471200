//! The live match plus its undo history.

use crate::logic::play::{record_throw, ThrowOutcome};
use crate::models::{MatchConfiguration, MatchError, MatchState};

/// When undo is allowed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UndoPolicy {
    /// Only while the match is unfinished; a recorded result stays recorded.
    #[default]
    WhileUnfinished,
    /// Also after the match has finished (reopens it).
    Always,
}

/// Owns the live MatchState and a stack of whole-state snapshots, one pushed
/// before every recorded throw.
#[derive(Clone, Debug)]
pub struct MatchSession {
    state: MatchState,
    history: Vec<MatchState>,
    undo_policy: UndoPolicy,
}

impl MatchSession {
    /// Start a new match.
    pub fn new(configuration: MatchConfiguration) -> Self {
        let state = MatchState::new(configuration);
        log::info!(
            "Match {} started: {} players, {} sets of {} throws",
            state.id,
            state.player_count(),
            state.configuration.set_count(),
            state.configuration.throws_per_set()
        );
        Self {
            state,
            history: Vec::new(),
            undo_policy: UndoPolicy::default(),
        }
    }

    pub fn with_undo_policy(mut self, undo_policy: UndoPolicy) -> Self {
        self.undo_policy = undo_policy;
        self
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Number of throws that can be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Record a throw. On error neither the state nor the history changes.
    pub fn record_throw(&mut self, score: u8) -> Result<ThrowOutcome, MatchError> {
        let snapshot = self.state.clone();
        let outcome = record_throw(&mut self.state, score)?;
        self.history.push(snapshot);
        Ok(outcome)
    }

    /// Restore the state from before the last recorded throw.
    pub fn undo(&mut self) -> Result<(), MatchError> {
        if self.state.is_finished() && self.undo_policy == UndoPolicy::WhileUnfinished {
            return Err(MatchError::UndoAfterFinish);
        }
        self.state = self.history.pop().ok_or(MatchError::NothingToUndo)?;
        log::debug!("Match {}: undo ({} left)", self.state.id, self.history.len());
        Ok(())
    }

    /// Throw away the current match and start again with the same configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.state.configuration.clone()).with_undo_policy(self.undo_policy);
    }
}
