//! Data structures for a matoate match: configuration, match state, route, results.

mod config;
mod match_state;
mod record;
mod route;

pub use config::{
    MatchConfiguration, Settings, MAX_PLAYERS, MAX_SET_COUNT, MAX_THROWS_PER_SET, MIN_PLAYERS,
};
pub use match_state::{
    MatchError, MatchId, MatchState, Phase, WinReason, SCORE_MAX, SCORE_MIN,
    SUDDEN_DEATH_MIN_THROWS,
};
pub use record::{Badges, MatchRecord, POWER_BADGE_TENS};
pub use route::{
    Route, RouteProgress, Station, StationLabelMode, LAP_GOAL, STATIONS, STATION_STEP,
};
