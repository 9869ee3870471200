//! The route a player's score travels along: stations, label modes and progress.

use serde::{Deserialize, Serialize};

/// A named waypoint on the route.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Station {
    pub kanji: &'static str,
    pub kana: &'static str,
}

/// Points between two neighbouring stations.
pub const STATION_STEP: u32 = 15;

/// Tohoku Shinkansen, Tokyo to Shin-Aomori.
pub const STATIONS: [Station; 7] = [
    Station { kanji: "東京", kana: "とうきょう" },
    Station { kanji: "上野", kana: "うえの" },
    Station { kanji: "大宮", kana: "おおみや" },
    Station { kanji: "仙台", kana: "せんだい" },
    Station { kanji: "盛岡", kana: "もりおか" },
    Station { kanji: "八戸", kana: "はちのへ" },
    Station { kanji: "新青森", kana: "しんあおもり" },
];

/// Points for one full lap of the reference route (90).
pub const LAP_GOAL: u32 = STATION_STEP * (STATIONS.len() as u32 - 1);

/// How station names are shown.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationLabelMode {
    #[default]
    Kana,
    Kanji,
    Both,
}

impl StationLabelMode {
    pub fn label(self, station: &Station) -> String {
        match self {
            StationLabelMode::Kana => station.kana.to_string(),
            StationLabelMode::Kanji => station.kanji.to_string(),
            StationLabelMode::Both => format!("{} / {}", station.kana, station.kanji),
        }
    }
}

/// An ordered list of stations spaced `step` points apart. A lap is
/// `step * (stations - 1)` points.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Route<'a> {
    stations: &'a [Station],
    step: u32,
    lap_length: u32,
}

impl<'a> Route<'a> {
    /// None unless there are at least two stations, a positive step, and the lap
    /// length fits in a `u32`.
    pub fn new(stations: &'a [Station], step: u32) -> Option<Self> {
        if stations.len() < 2 || step == 0 {
            return None;
        }
        let gaps = u32::try_from(stations.len() - 1).ok()?;
        let lap_length = step.checked_mul(gaps)?;
        Some(Self {
            stations,
            step,
            lap_length,
        })
    }

    pub fn stations(&self) -> &'a [Station] {
        self.stations
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn lap_length(&self) -> u32 {
        self.lap_length
    }
}

impl Default for Route<'static> {
    fn default() -> Self {
        Self {
            stations: &STATIONS,
            step: STATION_STEP,
            lap_length: LAP_GOAL,
        }
    }
}

/// Where a score puts a player on the route. Derived, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RouteProgress {
    /// 1-based lap number.
    pub lap: u64,
    /// Points into the current lap (0..=lap length).
    pub position_in_lap: u32,
    pub station_index: usize,
    pub current_station: Station,
    pub next_station: Station,
    pub distance_to_next: u32,
    /// 0.0..=1.0
    pub lap_fraction: f64,
    /// True exactly at positive multiples of the lap length.
    pub lap_just_completed: bool,
}
