//! Match logic: recording throws, winner resolution, sudden death, undo and route progress.

mod aggregates;
mod play;
mod progress;
mod session;
mod sudden_death;
mod winner;

pub use aggregates::{
    best_set_total, overall_total, overall_totals, regular_total, set_totals, sudden_death_total,
};
pub use play::{current_turn, record_throw, ThrowOutcome, TurnInfo};
pub use progress::route_progress;
pub use session::{MatchSession, UndoPolicy};
pub use winner::{resolve_winner, Resolution, TieBreak, TIE_BREAKS};
