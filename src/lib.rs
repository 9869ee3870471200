//! Matoate scorekeeper: match engine, tie-breaks, undo and route progress.

pub mod logic;
pub mod models;
pub mod report;
pub mod storage;

pub use logic::{
    best_set_total, current_turn, overall_total, overall_totals, record_throw, regular_total,
    resolve_winner, route_progress, set_totals, sudden_death_total, MatchSession, Resolution,
    ThrowOutcome, TieBreak, TurnInfo, UndoPolicy, TIE_BREAKS,
};
pub use models::{
    Badges, MatchConfiguration, MatchError, MatchId, MatchRecord, MatchState, Phase, Route,
    RouteProgress, Settings, Station, StationLabelMode, WinReason, LAP_GOAL, STATIONS,
    STATION_STEP, SUDDEN_DEATH_MIN_THROWS,
};
pub use report::write_scoreboard_csv;
pub use storage::Store;
