//! Winner resolution after the last regular set.

use crate::logic::aggregates::{best_set_total, regular_total};
use crate::models::{MatchState, WinReason};

/// Result of resolving a completed regular match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Resolution {
    Decisive { winner_index: usize, reason: WinReason },
    /// No criterion separated these players; they go to sudden death.
    Tied { contenders: Vec<usize> },
}

/// A criterion that narrows the contenders to those with the highest value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TieBreak {
    /// Sum of all regular sets.
    Total,
    /// Highest single set.
    BestSet,
}

/// Applied in order until one player remains.
pub const TIE_BREAKS: [TieBreak; 2] = [TieBreak::Total, TieBreak::BestSet];

impl TieBreak {
    fn value(self, state: &MatchState, player: usize) -> u32 {
        match self {
            TieBreak::Total => regular_total(state, player),
            TieBreak::BestSet => best_set_total(state, player),
        }
    }

    fn reason(self) -> WinReason {
        match self {
            TieBreak::Total => WinReason::Total,
            TieBreak::BestSet => WinReason::BestSet,
        }
    }

    /// Contenders sharing the highest value, in their original order.
    pub fn narrow(self, state: &MatchState, contenders: &[usize]) -> Vec<usize> {
        let values: Vec<u32> = contenders.iter().map(|&p| self.value(state, p)).collect();
        let Some(&max) = values.iter().max() else {
            return Vec::new();
        };
        contenders
            .iter()
            .zip(&values)
            .filter(|(_, v)| **v == max)
            .map(|(&p, _)| p)
            .collect()
    }
}

/// Decide the regular match: total first, then best set. Call once every player
/// has completed every set.
pub fn resolve_winner(state: &MatchState) -> Resolution {
    let mut contenders: Vec<usize> = (0..state.player_count()).collect();
    for criterion in TIE_BREAKS {
        contenders = criterion.narrow(state, &contenders);
        if let [winner_index] = contenders[..] {
            return Resolution::Decisive {
                winner_index,
                reason: criterion.reason(),
            };
        }
    }
    Resolution::Tied { contenders }
}
