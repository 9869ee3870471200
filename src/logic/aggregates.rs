//! Score totals derived from a match state.

use crate::models::MatchState;

fn sum(throws: &[u8]) -> u32 {
    throws.iter().map(|&s| u32::from(s)).sum()
}

/// Sum of each set for a player, one entry per set of the match (unplayed sets are 0).
pub fn set_totals(state: &MatchState, player: usize) -> Vec<u32> {
    state
        .scores
        .get(player)
        .map(|sets| sets.iter().map(|set| sum(set)).collect())
        .unwrap_or_default()
}

/// Sum of a player's regular-play throws.
pub fn regular_total(state: &MatchState, player: usize) -> u32 {
    set_totals(state, player).iter().sum()
}

/// The player's highest single set.
pub fn best_set_total(state: &MatchState, player: usize) -> u32 {
    set_totals(state, player).into_iter().max().unwrap_or(0)
}

/// Sum of a player's sudden-death throws (0 if none).
pub fn sudden_death_total(state: &MatchState, player: usize) -> u32 {
    state
        .sudden_death_scores
        .get(player)
        .map(|throws| sum(throws))
        .unwrap_or(0)
}

/// Everything the player has scored: regular sets plus sudden death.
pub fn overall_total(state: &MatchState, player: usize) -> u32 {
    regular_total(state, player) + sudden_death_total(state, player)
}

pub fn overall_totals(state: &MatchState) -> Vec<u32> {
    (0..state.player_count())
        .map(|p| overall_total(state, p))
        .collect()
}
