// src/mood/keywords.rs
//! Static keyword evidence tables for the mood classifier.
//!
//! Each non-neutral mood maps to an ordered list of lowercase substrings that
//! count as positive evidence. Neutral has no table; it is the absence of
//! evidence. Matching is substring-based and case-insensitive, with no
//! tokenization or word-boundary checks.

use super::Mood;

pub const EXCITED_KEYWORDS: &[&str] = &[
    "awesome",
    "amazing",
    "yes",
    "yeah",
    "yay",
    "wow",
    "fantastic",
    "incredible",
    "great",
    "excellent",
    "let's go",
    "hype",
    "train",
    "pumped",
    "excited",
    "love it",
    "perfect",
    "brilliant",
];

pub const ANGRY_KEYWORDS: &[&str] = &[
    "stupid",
    "fool",
    "idiot",
    "hate",
    "trash",
    "terrible",
    "awful",
    "useless",
    "pathetic",
    "annoying",
    "angry",
    "mad",
    "furious",
    "rage",
    "damn",
    "hell",
    "crap",
];

pub const SAD_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "alone",
    "lonely",
    "lost",
    "hurt",
    "broken",
    "crying",
    "tears",
    "miss",
    "sorry",
    "regret",
    "hopeless",
    "empty",
    "down",
    "unhappy",
];

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "nice",
    "thanks",
    "thank you",
    "appreciate",
    "cool",
    "helpful",
    "useful",
    "interesting",
    "glad",
    "happy",
    "pleased",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "wrong",
    "problem",
    "issue",
    "difficult",
    "hard",
    "can't",
    "won't",
    "don't like",
    "dislike",
    "confusing",
];

/// Keyword table for a scored (non-neutral) mood. Neutral returns the empty
/// slice since it carries no evidence of its own.
pub fn keywords_for(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Excited => EXCITED_KEYWORDS,
        Mood::Angry => ANGRY_KEYWORDS,
        Mood::Sad => SAD_KEYWORDS,
        Mood::Positive => POSITIVE_KEYWORDS,
        Mood::Negative => NEGATIVE_KEYWORDS,
        Mood::Neutral => &[],
    }
}
