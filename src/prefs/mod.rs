// src/prefs/mod.rs
//! Persisted user preferences.
//!
//! Toggles survive restarts as a small JSON file under the user config dir.
//! Loading never fails: any read/parse problem falls back to defaults, and a
//! failed save is logged and swallowed, matching the silent-failure contract
//! of client-side key-value storage.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::character::CharacterId;

/// User-facing toggles and the last selected character.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Prefs {
    pub voice_enabled: bool,
    pub sound_enabled: bool,
    pub volume: f32,
    pub last_character: Option<CharacterId>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            voice_enabled: true,
            sound_enabled: true,
            volume: 1.0,
            last_character: None,
            updated_at: Utc::now(),
        }
    }
}

/// Default on-disk location: `<config dir>/animind/prefs.json`.
pub fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("animind").join("prefs.json"))
}

impl Prefs {
    /// Load preferences from `path`, falling back to defaults on any error.
    pub fn load(path: &PathBuf) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(err) => {
                    warn!("failed to parse prefs at {}: {err}", path.display());
                    Self::default()
                }
            },
            // Missing file is the normal first-run case.
            Err(_) => Self::default(),
        }
    }

    /// Persist preferences to `path`, stamping `updated_at`. Errors are
    /// logged, not propagated - losing a toggle is not worth crashing over.
    pub fn save(&mut self, path: &PathBuf) {
        self.updated_at = Utc::now();

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!("failed to create prefs dir {}: {err}", parent.display());
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    warn!("failed to write prefs to {}: {err}", path.display());
                }
            }
            Err(err) => warn!("failed to serialize prefs: {err}"),
        }
    }
}
