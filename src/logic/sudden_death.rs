//! Sudden death: contenders throw in turn; after each equal-length round of at
//! least three throws the cumulative leaders survive until one remains.

use crate::logic::aggregates::sudden_death_total;
use crate::logic::play::finish_match;
use crate::models::{MatchState, Phase, WinReason, SUDDEN_DEATH_MIN_THROWS};

/// Enter sudden death with the tied players (all players if the list is empty).
/// Only reached from regular-play resolution, on an unfinished match.
pub(crate) fn start_sudden_death(state: &mut MatchState, contenders: Vec<usize>) {
    let contenders = if contenders.is_empty() {
        (0..state.player_count()).collect()
    } else {
        contenders
    };
    log::info!("Match {}: sudden death between players {:?}", state.id, contenders);
    state.phase = Phase::SuddenDeath {
        contenders,
        cursor: 0,
    };
}

/// Record an overtime throw for `player` and move the cursor on. Caller has
/// checked that sudden death is active and `player` is the current contender.
pub(crate) fn record_sudden_death_throw(state: &mut MatchState, player: usize, score: u8) {
    state.sudden_death_scores[player].push(score);
    if let Phase::SuddenDeath { contenders, cursor } = &mut state.phase {
        *cursor = (*cursor + 1) % contenders.len();
    }
    evaluate_sudden_death(state);
}

/// Eliminate trailing contenders once every contender has the same number of
/// throws and at least the minimum. Finishes the match when one leader remains.
fn evaluate_sudden_death(state: &mut MatchState) {
    let Phase::SuddenDeath { contenders, .. } = &state.phase else {
        return;
    };
    let counts: Vec<usize> = contenders
        .iter()
        .map(|&p| state.sudden_death_scores[p].len())
        .collect();
    let Some(&throws_each) = counts.first() else {
        return;
    };
    if counts.iter().any(|&n| n != throws_each) || throws_each < SUDDEN_DEATH_MIN_THROWS {
        return;
    }

    let totals: Vec<u32> = contenders
        .iter()
        .map(|&p| sudden_death_total(state, p))
        .collect();
    let max = totals.iter().copied().max().unwrap_or(0);
    let leaders: Vec<usize> = contenders
        .iter()
        .zip(&totals)
        .filter(|(_, total)| **total == max)
        .map(|(&p, _)| p)
        .collect();

    if let [winner_index] = leaders[..] {
        let reason = if throws_each == SUDDEN_DEATH_MIN_THROWS {
            WinReason::SuddenDeathMinimum
        } else {
            WinReason::SuddenDeathExtended(throws_each as u32)
        };
        finish_match(state, winner_index, reason);
        return;
    }

    log::info!(
        "Match {}: sudden death still tied after {} throws each, continuing with {:?}",
        state.id,
        throws_each,
        leaders
    );
    state.phase = Phase::SuddenDeath {
        contenders: leaders,
        cursor: 0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchConfiguration;

    #[test]
    fn empty_contenders_falls_back_to_everyone() {
        let names = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut state = MatchState::new(MatchConfiguration::new(3, names, 1, 1).unwrap());
        start_sudden_death(&mut state, Vec::new());
        assert_eq!(
            state.phase,
            Phase::SuddenDeath {
                contenders: vec![0, 1, 2],
                cursor: 0
            }
        );
    }
}
