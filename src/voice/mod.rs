// src/voice/mod.rs
//! Voice-line planning for character selection.
//!
//! Speech synthesis itself happens in the presentation layer; this module
//! owns the decisions that feed it: which line to speak, the per-character
//! pitch/rate tuning, and which of the platform's available voices to use.
//! Voice matching prefers named voices, then any English voice, then
//! whatever is first.

use crate::character::CharacterId;

/// Per-character synthesis tuning.
#[derive(Debug, Clone, Copy)]
pub struct VoiceTuning {
    pub pitch: f32,
    pub rate: f32,
    /// Preferred platform voice names, in order. Matched by substring.
    pub voice_preference: &'static [&'static str],
}

/// A voice reported by the platform's speech engine.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceInfo {
    pub name: String,
    /// BCP-47 language tag, e.g. "en-US".
    pub lang: String,
}

/// Synthesis tuning for a character.
pub fn tuning_for(character: CharacterId) -> VoiceTuning {
    match character {
        // Higher and upbeat, slightly faster
        CharacterId::Goku => VoiceTuning {
            pitch: 1.2,
            rate: 1.05,
            voice_preference: &["Google US English", "Microsoft David", "Alex"],
        },
        // Deeper and harsher, more deliberate
        CharacterId::Vegeta => VoiceTuning {
            pitch: 0.95,
            rate: 0.95,
            voice_preference: &["Google UK English Male", "Microsoft Mark", "Daniel"],
        },
        // Deep, calm, measured
        CharacterId::Itachi => VoiceTuning {
            pitch: 0.85,
            rate: 0.9,
            voice_preference: &["Google US English", "Microsoft David", "Bruce"],
        },
    }
}

/// Pick the best available voice for a character.
///
/// Tries the character's preferred voice names first (substring match), then
/// falls back to any English voice, then to the first voice offered. Returns
/// `None` only when no voices are available at all.
pub fn select_voice<'a>(character: CharacterId, voices: &'a [VoiceInfo]) -> Option<&'a VoiceInfo> {
    let tuning = tuning_for(character);

    for pref in tuning.voice_preference {
        if let Some(voice) = voices.iter().find(|v| v.name.contains(pref)) {
            return Some(voice);
        }
    }

    voices
        .iter()
        .find(|v| v.lang.starts_with("en"))
        .or_else(|| voices.first())
}

/// Clamp a playback volume to the valid 0.0 - 1.0 range.
pub fn clamp_volume(volume: f32) -> f32 {
    volume.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str, lang: &str) -> VoiceInfo {
        VoiceInfo {
            name: name.to_string(),
            lang: lang.to_string(),
        }
    }

    #[test]
    fn preferred_voice_wins() {
        let voices = vec![
            voice("Amelie", "fr-FR"),
            voice("Microsoft David - English (United States)", "en-US"),
            voice("Google US English", "en-US"),
        ];
        let picked = select_voice(CharacterId::Goku, &voices).unwrap();
        assert_eq!(picked.name, "Google US English");
    }

    #[test]
    fn falls_back_to_english_voice() {
        let voices = vec![voice("Amelie", "fr-FR"), voice("Karen", "en-AU")];
        let picked = select_voice(CharacterId::Vegeta, &voices).unwrap();
        assert_eq!(picked.name, "Karen");
    }

    #[test]
    fn falls_back_to_first_voice() {
        let voices = vec![voice("Amelie", "fr-FR")];
        let picked = select_voice(CharacterId::Itachi, &voices).unwrap();
        assert_eq!(picked.name, "Amelie");
    }

    #[test]
    fn no_voices_means_none() {
        assert_eq!(select_voice(CharacterId::Goku, &[]), None);
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(clamp_volume(1.5), 1.0);
        assert_eq!(clamp_volume(-0.2), 0.0);
        assert_eq!(clamp_volume(0.7), 0.7);
    }
}
