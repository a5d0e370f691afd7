// src/character/goku.rs
//! Goku's profile data - cheerful, encouraging, endless energy.

use super::{CharacterId, CharacterProfile};

pub static PROFILE: CharacterProfile = CharacterProfile {
    id: CharacterId::Goku,
    name: "Goku",
    title: "Earth's Goofy Hero",
    description: "The Saiyan warrior with boundless energy",
    tone: "Cheerful & Encouraging",
    strengths: &[
        "Motivational gym advice",
        "Positive encouragement",
        "Never-give-up attitude",
        "Simple, honest wisdom",
    ],
    quote: "\"I don't care how strong you are, if you don't have fun, what's the point?\"",
    image: "/characters/goku.png",
    // Ki aura rising / power-up whoosh
    sound_effect: "/audio/goku.mp3",
    voice_line: "Let's go! Time to train!",
};
