//! Integration tests for MatchSession: undo history, reset and the undo policy.

use matoate_score::{
    overall_total, MatchConfiguration, MatchError, MatchSession, Phase, UndoPolicy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn session(players: usize, throws_per_set: u32, sets: u32) -> MatchSession {
    let names = (0..players).map(|i| format!("P{i}")).collect();
    MatchSession::new(MatchConfiguration::new(players, names, throws_per_set, sets).unwrap())
}

#[test]
fn undo_restores_previous_state_exactly() {
    let mut s = session(2, 2, 2);
    s.record_throw(7).unwrap();
    let before = s.state().clone();
    s.record_throw(10).unwrap();
    assert_ne!(s.state(), &before);
    s.undo().unwrap();
    assert_eq!(s.state(), &before);
    assert_eq!(s.history_len(), 1);
}

#[test]
fn undo_across_set_and_sudden_death_transitions() {
    let mut s = session(2, 1, 1);
    s.record_throw(5).unwrap();
    let before_tie = s.state().clone();
    s.record_throw(5).unwrap();
    assert!(s.state().in_sudden_death());
    s.undo().unwrap();
    assert_eq!(s.state(), &before_tie);
    assert!(!s.state().in_sudden_death());
}

#[test]
fn undo_restores_sudden_death_narrowing() {
    let mut s = session(3, 1, 1);
    for score in [5, 5, 5, 3, 3, 1, 3, 3, 1, 3, 3] {
        s.record_throw(score).unwrap();
    }
    let before_narrowing = s.state().clone();
    assert_eq!(
        before_narrowing.phase,
        Phase::SuddenDeath {
            contenders: vec![0, 1, 2],
            cursor: 2
        }
    );

    s.record_throw(1).unwrap();
    assert_eq!(
        s.state().phase,
        Phase::SuddenDeath {
            contenders: vec![0, 1],
            cursor: 0
        }
    );
    s.undo().unwrap();
    assert_eq!(s.state(), &before_narrowing);

    s.record_throw(1).unwrap();
    // mid-round, after the narrowing
    let mid_round = s.state().clone();
    s.record_throw(2).unwrap();
    assert_eq!(
        s.state().phase,
        Phase::SuddenDeath {
            contenders: vec![0, 1],
            cursor: 1
        }
    );
    s.undo().unwrap();
    assert_eq!(s.state(), &mid_round);
    assert_eq!(s.state().sudden_death_scores[0].len(), 3);
}

#[test]
fn nothing_to_undo_on_fresh_match() {
    let mut s = session(2, 1, 1);
    assert_eq!(s.undo(), Err(MatchError::NothingToUndo));
}

#[test]
fn rejected_throw_leaves_history_alone() {
    let mut s = session(2, 1, 1);
    assert_eq!(s.record_throw(12), Err(MatchError::InvalidScore(12)));
    assert_eq!(s.history_len(), 0);
}

#[test]
fn finished_match_cannot_be_undone_by_default() {
    let mut s = session(2, 1, 1);
    s.record_throw(9).unwrap();
    s.record_throw(1).unwrap();
    assert!(s.state().is_finished());
    let finished = s.state().clone();

    assert_eq!(s.undo(), Err(MatchError::UndoAfterFinish));
    assert_eq!(s.record_throw(3), Err(MatchError::MatchFinished));
    assert_eq!(s.state(), &finished);
    assert_eq!(s.history_len(), 2);
}

#[test]
fn always_policy_reopens_finished_match() {
    let mut s = session(2, 1, 1).with_undo_policy(UndoPolicy::Always);
    s.record_throw(9).unwrap();
    s.record_throw(1).unwrap();
    assert!(s.state().is_finished());
    s.undo().unwrap();
    assert!(!s.state().is_finished());
}

#[test]
fn reset_starts_fresh_and_clears_history() {
    let mut s = session(3, 2, 1);
    s.record_throw(4).unwrap();
    s.record_throw(6).unwrap();
    let old_id = s.state().id;
    s.reset();
    assert_eq!(s.history_len(), 0);
    assert_ne!(s.state().id, old_id);
    assert_eq!(overall_total(s.state(), 0), 0);
    assert_eq!(s.state().player_count(), 3);
}

#[test]
fn random_matches_keep_totals_and_undo_consistent() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let players = rng.gen_range(2..=3);
        let mut s = session(players, rng.gen_range(1..=4), rng.gen_range(1..=3));
        let mut thrown = vec![0u32; players];

        while !s.state().is_finished() {
            let before = s.state().clone();
            let score = rng.gen_range(0..=10u8);
            let outcome = s.record_throw(score).unwrap();
            thrown[outcome.player_index] += u32::from(score);

            if !s.state().is_finished() && rng.gen_bool(0.2) {
                s.undo().unwrap();
                assert_eq!(s.state(), &before);
                thrown[outcome.player_index] -= u32::from(score);
            }
        }

        for (p, &sum) in thrown.iter().enumerate() {
            assert_eq!(overall_total(s.state(), p), sum);
        }
    }
}
