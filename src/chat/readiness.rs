// src/chat/readiness.rs
//! Backend wake-up poller.
//!
//! The hosted backend cold-starts, so the client probes the root route until
//! it answers, polling on a fixed interval against a hard deadline. Network
//! errors during polling are expected (the service is still waking) and are
//! swallowed. While waiting, themed loading messages rotate for display.

use std::time::Duration;

use rand::Rng;
use reqwest::Client as HttpClient;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Rotating loading messages shown while the backend wakes.
pub const LOADING_MESSAGES: &[&str] = &[
    "Summoning chakra reserves...",
    "Aligning Saiyan battle memory...",
    "Syncing multiverse personalities...",
    "Stabilizing AniMind core systems...",
    "Booting character consciousness modules...",
    "Concentrating spiritual pressure...",
    "Gathering Dragon Balls...",
];

/// Outcome of a wake-up wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessStatus {
    Ready,
    TimedOut,
}

/// Polls the backend health route until it responds or a deadline passes.
pub struct ReadinessProbe {
    client: HttpClient,
    health_url: String,
    poll_interval: Duration,
    startup_timeout: Duration,
    message_index: usize,
}

impl ReadinessProbe {
    pub fn new(base_url: &str, poll_interval: Duration, startup_timeout: Duration) -> Self {
        Self {
            client: HttpClient::new(),
            health_url: format!("{}/", base_url.trim_end_matches('/')),
            poll_interval,
            startup_timeout,
            // Start the rotation somewhere random so repeated launches don't
            // always open on the same line.
            message_index: rand::rng().random_range(0..LOADING_MESSAGES.len()),
        }
    }

    /// Next loading message in the rotation.
    pub fn next_loading_message(&mut self) -> &'static str {
        let msg = LOADING_MESSAGES[self.message_index];
        self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
        msg
    }

    /// One health check. `false` covers both error responses and network
    /// failures - a cold backend can produce either.
    pub async fn check(&self) -> bool {
        match self.client.get(&self.health_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                debug!("health check failed: {err}");
                false
            }
        }
    }

    /// Probe immediately, then poll until the backend answers or the startup
    /// deadline passes.
    pub async fn wait_until_ready(&mut self) -> ReadinessStatus {
        let deadline = Instant::now() + self.startup_timeout;

        if self.check().await {
            info!("backend is ready");
            return ReadinessStatus::Ready;
        }

        loop {
            if Instant::now() >= deadline {
                warn!(
                    "backend did not come up within {}s",
                    self.startup_timeout.as_secs()
                );
                return ReadinessStatus::TimedOut;
            }

            info!("{}", self.next_loading_message());
            tokio::time::sleep(self.poll_interval).await;

            if self.check().await {
                info!("backend is ready");
                return ReadinessStatus::Ready;
            }
        }
    }
}
