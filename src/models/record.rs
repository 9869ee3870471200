//! Persisted results: last match record and badges.

use crate::logic::{overall_totals, set_totals, sudden_death_total};
use crate::models::match_state::{MatchError, MatchId, MatchState, WinReason};
use crate::models::route::LAP_GOAL;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tens a player needs in one match for the power badge.
pub const POWER_BADGE_TENS: u32 = 3;

/// Result of a finished match, written once and read back for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_id: MatchId,
    pub finished_at: DateTime<Utc>,
    pub player_names: Vec<String>,
    /// `set_totals[player][set]`
    pub set_totals: Vec<Vec<u32>>,
    pub sudden_death_totals: Vec<u32>,
    pub totals: Vec<u32>,
    pub winner_index: usize,
    pub winner_reason: WinReason,
}

impl MatchRecord {
    /// Build the record of a finished match.
    pub fn from_finished(state: &MatchState, finished_at: DateTime<Utc>) -> Result<Self, MatchError> {
        let (winner_index, reason) = state.winner().ok_or(MatchError::NotFinished)?;
        let players = 0..state.player_count();
        Ok(Self {
            match_id: state.id,
            finished_at,
            player_names: state.configuration.player_names().to_vec(),
            set_totals: players.clone().map(|p| set_totals(state, p)).collect(),
            sudden_death_totals: players.map(|p| sudden_death_total(state, p)).collect(),
            totals: overall_totals(state),
            winner_index,
            winner_reason: reason.clone(),
        })
    }

    pub fn winner_name(&self) -> &str {
        self.player_names
            .get(self.winner_index)
            .map(String::as_str)
            .unwrap_or("unknown")
    }
}

/// Shareable one-line result.
impl std::fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matoate result: ")?;
        for (i, (name, total)) in self.player_names.iter().zip(&self.totals).enumerate() {
            if i > 0 {
                write!(f, " / ")?;
            }
            write!(f, "{} {}", name, total)?;
        }
        write!(f, ". Winner: {} ({})", self.winner_name(), self.winner_reason)
    }
}

/// Achievement flags. Once earned, never lost.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badges {
    /// Someone completed a full lap in one match.
    pub hayabusa: bool,
    /// Someone threw three or more tens in one match.
    pub power: bool,
}

impl Badges {
    /// Award any badges the finished match qualifies for. Returns true if a new one was earned.
    pub fn award(&mut self, state: &MatchState) -> bool {
        let before = *self;
        if overall_totals(state).iter().any(|&t| t >= LAP_GOAL) {
            self.hayabusa = true;
        }
        if state.tens_by_player.iter().any(|&n| n >= POWER_BADGE_TENS) {
            self.power = true;
        }
        *self != before
    }
}
