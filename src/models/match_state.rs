//! MatchState, its phase, win reasons and MatchError.

use crate::models::config::MatchConfiguration;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

pub const SCORE_MIN: u8 = 0;
pub const SCORE_MAX: u8 = 10;

/// Every contender must throw this many sudden-death balls before anyone can win.
pub const SUDDEN_DEATH_MIN_THROWS: usize = 3;

/// Errors that can occur during match operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    /// Throw score outside 0..=10.
    InvalidScore(u8),
    /// Only 2 or 3 players are supported.
    InvalidPlayerCount(usize),
    /// Fewer names than players.
    MissingPlayerNames { needed: usize, given: usize },
    InvalidThrowsPerSet(u32),
    InvalidSetCount(u32),
    /// The match already has a winner.
    MatchFinished,
    /// Undo history is empty.
    NothingToUndo,
    /// Undo would reopen a recorded result.
    UndoAfterFinish,
    /// The action needs a finished match.
    NotFinished,
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::InvalidScore(score) => {
                write!(f, "Score {} is out of range ({}-{})", score, SCORE_MIN, SCORE_MAX)
            }
            MatchError::InvalidPlayerCount(n) => write!(f, "Need 2 or 3 players (got {})", n),
            MatchError::MissingPlayerNames { needed, given } => {
                write!(f, "Need {} player names (got {})", needed, given)
            }
            MatchError::InvalidThrowsPerSet(n) => write!(f, "Invalid throws per set: {}", n),
            MatchError::InvalidSetCount(n) => write!(f, "Invalid number of sets: {}", n),
            MatchError::MatchFinished => write!(f, "The match is already finished"),
            MatchError::NothingToUndo => write!(f, "Nothing to undo"),
            MatchError::UndoAfterFinish => write!(f, "A finished match cannot be undone"),
            MatchError::NotFinished => write!(f, "The match is not finished yet"),
        }
    }
}

/// Why the winner won. Serialized as `total`, `bestSet`, `suddenDeathMinimum`
/// or `suddenDeathExtended(N)`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum WinReason {
    /// Highest overall total after the regular sets.
    Total,
    /// Tied on total, highest single set.
    BestSet,
    /// Sudden death decided after the minimum number of throws.
    SuddenDeathMinimum,
    /// Sudden death decided after this many throws each.
    SuddenDeathExtended(u32),
}

impl std::fmt::Display for WinReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WinReason::Total => write!(f, "total"),
            WinReason::BestSet => write!(f, "bestSet"),
            WinReason::SuddenDeathMinimum => write!(f, "suddenDeathMinimum"),
            WinReason::SuddenDeathExtended(n) => write!(f, "suddenDeathExtended({})", n),
        }
    }
}

impl From<WinReason> for String {
    fn from(reason: WinReason) -> Self {
        reason.to_string()
    }
}

impl TryFrom<String> for WinReason {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "total" => Ok(WinReason::Total),
            "bestSet" => Ok(WinReason::BestSet),
            "suddenDeathMinimum" => Ok(WinReason::SuddenDeathMinimum),
            other => other
                .strip_prefix("suddenDeathExtended(")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(|n| n.parse().ok())
                .map(WinReason::SuddenDeathExtended)
                .ok_or_else(|| format!("unknown win reason: {}", other)),
        }
    }
}

/// Where the match is. Exactly one of regular play, sudden death or finished.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase")]
pub enum Phase {
    /// `player_index` throws next, in set `set_index`.
    Regular { set_index: usize, player_index: usize },
    /// `contenders[cursor]` throws next.
    SuddenDeath { contenders: Vec<usize>, cursor: usize },
    Finished { winner_index: usize, reason: WinReason },
}

/// Full state of one match. Mutated only by recording throws.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub id: MatchId,
    pub configuration: MatchConfiguration,
    /// `scores[player][set]` holds that set's throws in order.
    pub scores: Vec<Vec<Vec<u8>>>,
    /// Overtime throws per player (indexed by original player index).
    pub sudden_death_scores: Vec<Vec<u8>>,
    /// Number of perfect throws per player.
    pub tens_by_player: Vec<u32>,
    pub phase: Phase,
}

impl MatchState {
    /// Fresh match: empty sets, first player of the first set to throw.
    pub fn new(configuration: MatchConfiguration) -> Self {
        let players = configuration.player_count();
        let sets = configuration.set_count() as usize;
        Self {
            id: Uuid::new_v4(),
            scores: vec![vec![Vec::new(); sets]; players],
            sudden_death_scores: vec![Vec::new(); players],
            tens_by_player: vec![0; players],
            phase: Phase::Regular {
                set_index: 0,
                player_index: 0,
            },
            configuration,
        }
    }

    pub fn player_count(&self) -> usize {
        self.configuration.player_count()
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }

    pub fn in_sudden_death(&self) -> bool {
        matches!(self.phase, Phase::SuddenDeath { .. })
    }

    /// Winner index and reason, once finished.
    pub fn winner(&self) -> Option<(usize, &WinReason)> {
        match &self.phase {
            Phase::Finished {
                winner_index,
                reason,
            } => Some((*winner_index, reason)),
            _ => None,
        }
    }

    /// Index of the set being played (the last set once regular play is over).
    pub fn current_set_index(&self) -> usize {
        match self.phase {
            Phase::Regular { set_index, .. } => set_index,
            _ => (self.configuration.set_count() as usize).saturating_sub(1),
        }
    }
}
