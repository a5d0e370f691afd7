// src/mood/animation.rs
//! Maps (character, mood) to the CSS animation class the frontend plays.
//! Pure lookup table; unknown moods fall back to the character's idle class.

use super::Mood;
use crate::character::CharacterId;

/// Animation class shown when no character-specific class applies.
pub const IDLE_CLASS: &str = "avatar-idle";

/// Animation class for a character in a given mood.
pub fn animation_class(character: CharacterId, mood: Mood) -> &'static str {
    match character {
        CharacterId::Goku => match mood {
            Mood::Excited => "goku-powerup",
            Mood::Positive => "goku-happy",
            Mood::Neutral => "goku-idle",
            Mood::Negative => "goku-concerned",
            Mood::Angry => "goku-intense",
            Mood::Sad => "goku-quiet",
        },
        CharacterId::Vegeta => match mood {
            Mood::Excited => "vegeta-pride",
            Mood::Positive => "vegeta-smirk",
            Mood::Neutral => "vegeta-idle",
            Mood::Negative => "vegeta-disdain",
            Mood::Angry => "vegeta-rage",
            Mood::Sad => "vegeta-stern",
        },
        CharacterId::Itachi => match mood {
            Mood::Excited => "itachi-determined",
            Mood::Positive => "itachi-calm",
            Mood::Neutral => "itachi-idle",
            Mood::Negative => "itachi-concern",
            Mood::Angry => "itachi-sharingan",
            Mood::Sad => "itachi-sorrow",
        },
    }
}
