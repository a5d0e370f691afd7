// src/character/mod.rs
//! Character registry for the chat client.
//!
//! Three fictional personas are available; each carries static profile data
//! (selector card copy, asset paths, voice line) in its own data file. The
//! backend receives only the lowercase id; everything else is client-side
//! presentation.

pub mod goku;
pub mod itachi;
pub mod vegeta;

use serde::{Deserialize, Serialize};

/// The selectable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterId {
    Goku,
    Vegeta,
    Itachi,
}

impl CharacterId {
    /// All characters, in selector display order.
    pub fn all() -> &'static [CharacterId] {
        &[CharacterId::Goku, CharacterId::Vegeta, CharacterId::Itachi]
    }

    /// Lowercase wire id, as the backend expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterId::Goku => "goku",
            CharacterId::Vegeta => "vegeta",
            CharacterId::Itachi => "itachi",
        }
    }

    /// Static profile data for this character.
    pub fn profile(&self) -> &'static CharacterProfile {
        match self {
            CharacterId::Goku => &goku::PROFILE,
            CharacterId::Vegeta => &vegeta::PROFILE,
            CharacterId::Itachi => &itachi::PROFILE,
        }
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CharacterId {
    type Err = ();

    /// Parse a character id, e.g. from the CLI `--character` flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "goku" => Ok(CharacterId::Goku),
            "vegeta" => Ok(CharacterId::Vegeta),
            "itachi" => Ok(CharacterId::Itachi),
            _ => Err(()),
        }
    }
}

/// Static per-character presentation data.
#[derive(Debug, Clone, Copy)]
pub struct CharacterProfile {
    pub id: CharacterId,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: &'static str,
    pub strengths: &'static [&'static str],
    pub quote: &'static str,
    /// Avatar image asset path, relative to the frontend's public root.
    pub image: &'static str,
    /// Selection sound-effect asset path.
    pub sound_effect: &'static str,
    /// Short greeting line spoken on selection (max ~3 seconds).
    pub voice_line: &'static str,
}
