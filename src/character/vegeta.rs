// src/character/vegeta.rs
//! Vegeta's profile data - harsh, direct, prideful.

use super::{CharacterId, CharacterProfile};

pub static PROFILE: CharacterProfile = CharacterProfile {
    id: CharacterId::Vegeta,
    name: "Vegeta",
    title: "Prince of all Saiyans",
    description: "The prideful Saiyan prince",
    tone: "Harsh & Direct",
    strengths: &[
        "Brutal honesty",
        "No-nonsense motivation",
        "Pushing past limits",
        "Competitive drive",
    ],
    quote: "\"Strength is the only thing that matters in this world. Everything else is just a delusion.\"",
    image: "/characters/vegeta.png",
    // Scouter beep / energy charge
    sound_effect: "/audio/vegeta.mp3",
    voice_line: "Tch. Let's see what you've got.",
};
