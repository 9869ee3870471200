//! Integration tests for sudden death.

use matoate_score::{
    current_turn, overall_total, record_throw, sudden_death_total, MatchConfiguration,
    MatchError, MatchState, Phase, WinReason,
};

/// A match already tied after one set of one throw each (everyone threw 5).
fn tied_match(players: usize) -> MatchState {
    let names = (0..players).map(|i| format!("P{i}")).collect();
    let mut state = MatchState::new(MatchConfiguration::new(players, names, 1, 1).unwrap());
    for _ in 0..players {
        record_throw(&mut state, 5).unwrap();
    }
    assert!(state.in_sudden_death());
    state
}

fn play(state: &mut MatchState, throws: &[u8]) {
    for &score in throws {
        record_throw(state, score).unwrap();
    }
}

#[test]
fn leader_after_three_throws_wins_minimum() {
    let mut state = tied_match(2);
    play(&mut state, &[3, 2, 3, 2]);
    // two throws each: not evaluated yet even though player 0 leads
    assert!(state.in_sudden_death());
    play(&mut state, &[3, 2]);
    assert_eq!(state.winner(), Some((0, &WinReason::SuddenDeathMinimum)));
    assert_eq!(sudden_death_total(&state, 0), 9);
    assert_eq!(overall_total(&state, 0), 14);
    assert_eq!(overall_total(&state, 1), 11);
}

#[test]
fn no_evaluation_until_counts_are_equal() {
    let mut state = tied_match(2);
    play(&mut state, &[10, 0, 10, 0, 10]);
    assert!(state.in_sudden_death());
    let turn = current_turn(&state).unwrap();
    assert!(turn.sudden_death);
    assert_eq!(turn.player_index, 1);
    assert_eq!(turn.throw_number, 3);
    play(&mut state, &[0]);
    assert_eq!(state.winner(), Some((0, &WinReason::SuddenDeathMinimum)));
}

#[test]
fn tie_after_three_extends_with_cumulative_totals() {
    let mut state = tied_match(2);
    play(&mut state, &[4, 4, 4, 4, 4, 4]);
    assert_eq!(
        state.phase,
        Phase::SuddenDeath {
            contenders: vec![0, 1],
            cursor: 0
        }
    );
    play(&mut state, &[1, 5]);
    assert_eq!(state.winner(), Some((1, &WinReason::SuddenDeathExtended(4))));
    assert_eq!(sudden_death_total(&state, 1), 17);
    assert_eq!(WinReason::SuddenDeathExtended(4).to_string(), "suddenDeathExtended(4)");
}

#[test]
fn trailing_contenders_are_eliminated() {
    let mut state = tied_match(3);
    play(&mut state, &[3, 3, 1, 3, 3, 1, 3, 3, 1]);
    assert_eq!(
        state.phase,
        Phase::SuddenDeath {
            contenders: vec![0, 1],
            cursor: 0
        }
    );
    // player 2 no longer throws
    play(&mut state, &[2, 4]);
    assert_eq!(state.winner(), Some((1, &WinReason::SuddenDeathExtended(4))));
    assert_eq!(state.sudden_death_scores[2].len(), 3);
}

#[test]
fn match_decided_in_sudden_death_stays_closed() {
    let mut state = tied_match(2);
    play(&mut state, &[6, 1, 6, 1, 6, 1]);
    assert!(state.is_finished());
    let finished = state.clone();

    assert_eq!(record_throw(&mut state, 5), Err(MatchError::MatchFinished));
    assert_eq!(state, finished);
    assert!(current_turn(&state).is_none());
}
