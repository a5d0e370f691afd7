// src/character/itachi.rs
//! Itachi's profile data - calm, philosophical, measured.

use super::{CharacterId, CharacterProfile};

pub static PROFILE: CharacterProfile = CharacterProfile {
    id: CharacterId::Itachi,
    name: "Itachi",
    title: "Silent Protector",
    description: "The prodigy ninja with calm wisdom",
    tone: "Calm & Philosophical",
    strengths: &[
        "Emotional support",
        "Deep life advice",
        "Strategic thinking",
        "Understanding sacrifice",
    ],
    quote: "\"Those who forgive themselves and are able to accept their true nature, they are the strong ones.\"",
    image: "/characters/itachi.png",
    // Sharingan activation (low hum + spin)
    sound_effect: "/audio/itachi.mp3",
    voice_line: "Speak. I am listening.",
};
