//! Recording throws: turn order, set transitions and finishing the match.

use crate::logic::aggregates::overall_total;
use crate::logic::sudden_death::{record_sudden_death_throw, start_sudden_death};
use crate::logic::winner::{resolve_winner, Resolution};
use crate::models::{MatchError, MatchState, Phase, WinReason, LAP_GOAL, SCORE_MAX, STATION_STEP};
use serde::Serialize;

/// What a recorded throw did to the thrower's total.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ThrowOutcome {
    pub player_index: usize,
    pub score: u8,
    pub previous_total: u32,
    pub total: u32,
}

impl ThrowOutcome {
    /// The throw moved the player past at least one station.
    pub fn reached_station(&self) -> bool {
        self.previous_total / STATION_STEP < self.total / STATION_STEP
    }

    /// The throw crossed a multiple of the lap length.
    pub fn completed_lap(&self) -> bool {
        self.previous_total / LAP_GOAL < self.total / LAP_GOAL
    }
}

/// Whose turn it is, for display.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct TurnInfo {
    pub player_index: usize,
    /// 1-based, within the current set or within sudden death.
    pub throw_number: u32,
    pub sudden_death: bool,
    pub set_index: usize,
    /// Regular throws left for this player in the set (None in sudden death).
    pub remaining_in_set: Option<u32>,
}

/// Next thrower, or None once the match is finished.
pub fn current_turn(state: &MatchState) -> Option<TurnInfo> {
    match &state.phase {
        Phase::Regular {
            set_index,
            player_index,
        } => {
            let thrown = state.scores[*player_index][*set_index].len() as u32;
            Some(TurnInfo {
                player_index: *player_index,
                throw_number: thrown + 1,
                sudden_death: false,
                set_index: *set_index,
                remaining_in_set: Some(state.configuration.throws_per_set().saturating_sub(thrown)),
            })
        }
        Phase::SuddenDeath { contenders, cursor } => {
            let player_index = contenders[*cursor];
            Some(TurnInfo {
                player_index,
                throw_number: state.sudden_death_scores[player_index].len() as u32 + 1,
                sudden_death: true,
                set_index: state.current_set_index(),
                remaining_in_set: None,
            })
        }
        Phase::Finished { .. } => None,
    }
}

/// Record one throw for the player whose turn it is.
///
/// Rejects scores above 10 and finished matches without touching the state.
pub fn record_throw(state: &mut MatchState, score: u8) -> Result<ThrowOutcome, MatchError> {
    if score > SCORE_MAX {
        return Err(MatchError::InvalidScore(score));
    }
    let (player_index, regular_set) = match &state.phase {
        Phase::Finished { .. } => return Err(MatchError::MatchFinished),
        Phase::Regular {
            set_index,
            player_index,
        } => (*player_index, Some(*set_index)),
        Phase::SuddenDeath { contenders, cursor } => (contenders[*cursor], None),
    };

    let previous_total = overall_total(state, player_index);
    if score == SCORE_MAX {
        state.tens_by_player[player_index] += 1;
    }
    match regular_set {
        Some(set_index) => {
            state.scores[player_index][set_index].push(score);
            advance_regular_turn(state, set_index, player_index);
        }
        None => record_sudden_death_throw(state, player_index, score),
    }
    log::debug!(
        "Match {}: player {} threw {}",
        state.id,
        player_index,
        score
    );

    Ok(ThrowOutcome {
        player_index,
        score,
        previous_total,
        total: overall_total(state, player_index),
    })
}

/// Pass the turn after a regular throw: next set when everyone has finished this one,
/// winner resolution after the last set, otherwise the next player still owing throws.
fn advance_regular_turn(state: &mut MatchState, set_index: usize, player_index: usize) {
    let limit = state.configuration.throws_per_set() as usize;
    let players = state.player_count();
    let set_complete = state.scores.iter().all(|sets| sets[set_index].len() >= limit);

    if set_complete {
        if set_index + 1 < state.configuration.set_count() as usize {
            log::info!("Match {}: set {} complete", state.id, set_index + 1);
            state.phase = Phase::Regular {
                set_index: set_index + 1,
                player_index: 0,
            };
        } else {
            finish_regular_match(state);
        }
        return;
    }

    let next = (1..=players)
        .map(|step| (player_index + step) % players)
        .find(|&p| state.scores[p][set_index].len() < limit);
    if let Some(next) = next {
        state.phase = Phase::Regular {
            set_index,
            player_index: next,
        };
    }
}

fn finish_regular_match(state: &mut MatchState) {
    match resolve_winner(state) {
        Resolution::Decisive {
            winner_index,
            reason,
        } => finish_match(state, winner_index, reason),
        Resolution::Tied { contenders } => start_sudden_death(state, contenders),
    }
}

/// Record the winner. The state is read-only afterwards.
pub(crate) fn finish_match(state: &mut MatchState, winner_index: usize, reason: WinReason) {
    log::info!(
        "Match {}: {} wins ({})",
        state.id,
        state
            .configuration
            .player_name(winner_index)
            .unwrap_or("unknown"),
        reason
    );
    state.phase = Phase::Finished {
        winner_index,
        reason,
    };
}
