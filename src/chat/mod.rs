// src/chat/mod.rs
//! Chat backend plumbing.
//!
//! The chat completion itself lives in an external HTTP service; this module
//! holds the client for it plus the wake-up poller used while the backend
//! cold-starts.

pub mod client;
pub mod readiness;

pub use client::{ChatClient, ChatError, ChatRequest, ChatResponse};
pub use readiness::{ReadinessProbe, ReadinessStatus, LOADING_MESSAGES};
