//! JSON file store for settings and finished-match results.
//!
//! Persistence is best effort: reads fall back to defaults, failed writes are
//! logged and dropped. Nothing here can fail a match operation.

use crate::logic::overall_totals;
use crate::models::{Badges, MatchRecord, MatchState, Settings};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";
const LAST_MATCH_FILE: &str = "last_match.json";
const BEST_TOTAL_FILE: &str = "best_total.json";
const BADGES_FILE: &str = "badges.json";

/// Errors reading or writing a store file.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "io error: {}", e),
            StorageError::Json(e) => write!(f, "json error: {}", e),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

/// A directory of JSON files.
#[derive(Clone, Debug)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, StorageError> {
        let data = fs::read_to_string(self.path(file))?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let payload = serde_json::to_string_pretty(value)?;
        fs::write(self.path(file), payload)?;
        Ok(())
    }

    fn write_best_effort<T: Serialize>(&self, file: &str, value: &T) {
        if let Err(e) = self.write_json(file, value) {
            log::warn!("Could not save {}: {}", self.path(file).display(), e);
        }
    }

    /// Stored settings, or defaults for anything missing or unreadable.
    pub fn load_settings(&self) -> Settings {
        match self.read_json::<serde_json::Value>(SETTINGS_FILE) {
            Ok(value) => Settings::from_json_value(&value),
            Err(StorageError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Settings::default()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Settings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) {
        self.write_best_effort(SETTINGS_FILE, settings);
    }

    pub fn load_last_match(&self) -> Option<MatchRecord> {
        self.read_json(LAST_MATCH_FILE).ok()
    }

    /// Highest single-player total ever stored (0 if none).
    pub fn load_best_total(&self) -> u32 {
        self.read_json(BEST_TOTAL_FILE).unwrap_or(0)
    }

    pub fn load_badges(&self) -> Badges {
        self.read_json(BADGES_FILE).unwrap_or_default()
    }

    /// Store the results of a finished match: last-match record, best total and
    /// badges. Returns the record, or None if the match is not finished.
    pub fn record_finished_match(&self, state: &MatchState) -> Option<MatchRecord> {
        let record = MatchRecord::from_finished(state, Utc::now()).ok()?;

        let match_best = overall_totals(state).into_iter().max().unwrap_or(0);
        let best = self.load_best_total().max(match_best);
        self.write_best_effort(BEST_TOTAL_FILE, &best);

        let mut badges = self.load_badges();
        if badges.award(state) {
            log::info!("New badge earned: {:?}", badges);
        }
        self.write_best_effort(BADGES_FILE, &badges);

        self.write_best_effort(LAST_MATCH_FILE, &record);
        Some(record)
    }
}
