// src/mood/mod.rs
//! Rule-based mood detection for avatar animations.
//!
//! Maps a user message to one of six mood categories using keyword tables
//! plus punctuation heuristics. This is a deterministic scorer, not a trained
//! classifier: each matched table entry counts +1, exclamation marks boost
//! excitement/anger when related evidence is present, and a question mark
//! dampens excitement. Pure function of the input, no state between calls.

pub mod animation;
pub mod keywords;

use serde::{Deserialize, Serialize};

pub use animation::animation_class;
pub use keywords::keywords_for;

/// The six mood categories driving avatar animation state.
/// `Neutral` is the default, the no-evidence fallback, and the state the
/// avatar controller decays back to after its reset timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Excited,
    Positive,
    Neutral,
    Negative,
    Angry,
    Sad,
}

/// Tie-break priority among scored moods. The first entry equal to the
/// maximum score wins, so `Excited` structurally beats a tied `Sad`.
pub const PRIORITY: [Mood; 5] = [
    Mood::Excited,
    Mood::Angry,
    Mood::Sad,
    Mood::Positive,
    Mood::Negative,
];

impl Mood {
    /// Human-readable label for display next to the avatar.
    pub fn description(&self) -> &'static str {
        match self {
            Mood::Excited => "Excited & Energetic",
            Mood::Positive => "Positive & Happy",
            Mood::Neutral => "Calm & Neutral",
            Mood::Negative => "Negative & Concerned",
            Mood::Angry => "Angry & Frustrated",
            Mood::Sad => "Sad & Melancholic",
        }
    }

    /// Lowercase wire/display id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excited => "excited",
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Negative => "negative",
            Mood::Angry => "angry",
            Mood::Sad => "sad",
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Neutral
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excited" => Ok(Mood::Excited),
            "positive" => Ok(Mood::Positive),
            "neutral" => Ok(Mood::Neutral),
            "negative" => Ok(Mood::Negative),
            "angry" => Ok(Mood::Angry),
            "sad" => Ok(Mood::Sad),
            _ => Err(()),
        }
    }
}

/// Per-call score vector over the five scored moods. Counts can go negative
/// after the question-mark penalty, which is why these are `i32` and not a
/// plain tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodScores {
    pub excited: i32,
    pub angry: i32,
    pub sad: i32,
    pub positive: i32,
    pub negative: i32,
}

impl MoodScores {
    pub fn get(&self, mood: Mood) -> i32 {
        match mood {
            Mood::Excited => self.excited,
            Mood::Angry => self.angry,
            Mood::Sad => self.sad,
            Mood::Positive => self.positive,
            Mood::Negative => self.negative,
            Mood::Neutral => 0,
        }
    }

    fn get_mut(&mut self, mood: Mood) -> &mut i32 {
        match mood {
            Mood::Excited => &mut self.excited,
            Mood::Angry => &mut self.angry,
            Mood::Sad => &mut self.sad,
            Mood::Positive => &mut self.positive,
            Mood::Negative => &mut self.negative,
            Mood::Neutral => unreachable!("neutral carries no score"),
        }
    }

    /// Maximum across the five scored moods.
    pub fn max(&self) -> i32 {
        PRIORITY
            .iter()
            .map(|m| self.get(*m))
            .max()
            .unwrap_or(0)
    }

    /// First mood in priority order holding the maximum score, or `Neutral`
    /// when the maximum is zero (no surviving evidence).
    pub fn leader(&self) -> Mood {
        let max = self.max();
        if max == 0 {
            return Mood::Neutral;
        }
        for mood in PRIORITY {
            if self.get(mood) == max {
                return mood;
            }
        }
        Mood::Neutral
    }
}

/// Score a message against the keyword tables and punctuation heuristics.
///
/// Exposed separately from [`detect_mood`] so callers (and tests) can observe
/// boost magnitudes rather than just the winning category.
pub fn score_text(text: &str) -> MoodScores {
    let mut scores = MoodScores::default();
    if text.is_empty() {
        return scores;
    }

    // Keywords match on a lowercase copy; punctuation counts on the original.
    let lower = text.to_lowercase();
    let exclamations = text.chars().filter(|c| *c == '!').count();
    let has_exclamation = exclamations >= 1;
    let has_multiple_exclamation = exclamations >= 2;
    let has_question_mark = text.contains('?');

    // One point per matched table entry, regardless of how many times the
    // keyword occurs in the text.
    for mood in PRIORITY {
        for keyword in keywords_for(mood) {
            if lower.contains(keyword) {
                *scores.get_mut(mood) += 1;
            }
        }
    }

    // Exclamation marks amplify excitement when any excited/positive
    // evidence exists.
    if has_exclamation && (scores.excited > 0 || scores.positive > 0) {
        scores.excited += if has_multiple_exclamation { 2 } else { 1 };
    }

    // Exclamation marks amplify anger when any angry/negative evidence exists.
    if has_exclamation && (scores.angry > 0 || scores.negative > 0) {
        scores.angry += 1;
    }

    // Questions read as curiosity, not excitement. The penalty runs after the
    // boost and can push the score to zero or below.
    if has_question_mark && scores.excited > 0 {
        scores.excited -= 1;
    }

    scores
}

/// Detect the mood of a user message.
///
/// Returns `Neutral` for empty input or when no mood accumulates positive
/// evidence after the heuristic adjustments; ties resolve via [`PRIORITY`].
/// Never fails: the worst case is a wrong-but-valid mood.
pub fn detect_mood(text: &str) -> Mood {
    score_text(text).leader()
}
