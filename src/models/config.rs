//! Match configuration (fixed for one match) and persisted user settings.

use crate::models::match_state::MatchError;
use crate::models::route::StationLabelMode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 3;
pub const MAX_THROWS_PER_SET: u32 = 30;
pub const MAX_SET_COUNT: u32 = 4;

/// Rules of a single match. Immutable once the match has started.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchConfiguration {
    player_count: usize,
    /// Display names; only the first `player_count` take part.
    player_names: Vec<String>,
    throws_per_set: u32,
    set_count: u32,
}

impl MatchConfiguration {
    /// Validate and build a configuration.
    pub fn new(
        player_count: usize,
        player_names: Vec<String>,
        throws_per_set: u32,
        set_count: u32,
    ) -> Result<Self, MatchError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(MatchError::InvalidPlayerCount(player_count));
        }
        if player_names.len() < player_count {
            return Err(MatchError::MissingPlayerNames {
                needed: player_count,
                given: player_names.len(),
            });
        }
        if !(1..=MAX_THROWS_PER_SET).contains(&throws_per_set) {
            return Err(MatchError::InvalidThrowsPerSet(throws_per_set));
        }
        if !(1..=MAX_SET_COUNT).contains(&set_count) {
            return Err(MatchError::InvalidSetCount(set_count));
        }
        Ok(Self {
            player_count,
            player_names,
            throws_per_set,
            set_count,
        })
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn throws_per_set(&self) -> u32 {
        self.throws_per_set
    }

    pub fn set_count(&self) -> u32 {
        self.set_count
    }

    /// Names of the players taking part (length == player count).
    pub fn player_names(&self) -> &[String] {
        &self.player_names[..self.player_count]
    }

    pub fn player_name(&self, index: usize) -> Option<&str> {
        self.player_names().get(index).map(String::as_str)
    }
}

/// User preferences, persisted between runs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub player_count: usize,
    /// Always three entries; the third is only used in 3-player matches.
    pub player_names: Vec<String>,
    pub throws_per_set: u32,
    pub set_count: u32,
    pub kids_mode: bool,
    pub effects_on: bool,
    pub sound_on: bool,
    pub station_label_mode: StationLabelMode,
}

const DEFAULT_NAMES: [&str; MAX_PLAYERS] = ["プレイヤー１", "プレイヤー２", "プレイヤー３"];

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_count: 2,
            player_names: DEFAULT_NAMES.iter().map(|n| n.to_string()).collect(),
            throws_per_set: 10,
            set_count: 2,
            kids_mode: true,
            effects_on: true,
            sound_on: false,
            station_label_mode: StationLabelMode::Kana,
        }
    }
}

impl Settings {
    /// Read settings from loosely typed JSON. Each field is taken independently:
    /// missing or mistyped fields use the default, numbers are clamped into range,
    /// blank names are replaced.
    pub fn from_json_value(value: &Value) -> Self {
        let defaults = Self::default();
        let kids_mode = value
            .get("kids_mode")
            .and_then(Value::as_bool)
            .unwrap_or(defaults.kids_mode);
        let stored_names = value.get("player_names").and_then(Value::as_array);
        let player_names = DEFAULT_NAMES
            .iter()
            .enumerate()
            .map(|(i, fallback)| {
                let stored = stored_names
                    .and_then(|names| names.get(i))
                    .and_then(Value::as_str);
                sanitize_name(stored, fallback)
            })
            .collect();
        let station_label_mode = value
            .get("station_label_mode")
            .and_then(|v| StationLabelMode::deserialize(v).ok())
            .unwrap_or(if kids_mode {
                StationLabelMode::Kana
            } else {
                StationLabelMode::Kanji
            });

        Self {
            player_count: clamp_number(
                value.get("player_count"),
                MIN_PLAYERS as i64,
                MAX_PLAYERS as i64,
                defaults.player_count as i64,
            ) as usize,
            player_names,
            throws_per_set: clamp_number(
                value.get("throws_per_set"),
                1,
                i64::from(MAX_THROWS_PER_SET),
                i64::from(defaults.throws_per_set),
            ) as u32,
            set_count: clamp_number(
                value.get("set_count"),
                1,
                i64::from(MAX_SET_COUNT),
                i64::from(defaults.set_count),
            ) as u32,
            kids_mode,
            effects_on: value
                .get("effects_on")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.effects_on),
            sound_on: value
                .get("sound_on")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.sound_on),
            station_label_mode,
        }
    }

    /// Configuration for a new match with these settings.
    pub fn match_configuration(&self) -> Result<MatchConfiguration, MatchError> {
        MatchConfiguration::new(
            self.player_count,
            self.player_names.clone(),
            self.throws_per_set,
            self.set_count,
        )
    }
}

fn sanitize_name(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => fallback.to_string(),
    }
}

fn clamp_number(value: Option<&Value>, min: i64, max: i64, fallback: i64) -> i64 {
    match value.and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))) {
        Some(n) => n.clamp(min, max),
        None => fallback,
    }
}
