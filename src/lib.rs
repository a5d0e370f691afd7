// src/lib.rs

pub mod avatar;
pub mod character;
pub mod chat;
pub mod config;
pub mod mood;
pub mod prefs;
pub mod voice;

pub use character::CharacterId;
pub use mood::{detect_mood, Mood};
