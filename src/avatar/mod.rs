// src/avatar/mod.rs
//! Avatar mood state with auto-reset.
//!
//! Holds the currently displayed mood and decays it back to neutral after a
//! fixed timeout. At most one reset timer is live at a time: every
//! `set_mood` aborts the previous timer before scheduling a new one
//! (last-write-wins). Abort is best-effort, so each timer also carries the
//! generation it was scheduled for and fires only if no newer write landed
//! in between.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::mood::Mood;

/// Default time before the displayed mood reverts to neutral.
pub const DEFAULT_RESET_TIMEOUT: Duration = Duration::from_millis(5000);

/// Current avatar mood plus its pending reset timer.
///
/// Cheap to clone; clones share the same underlying state.
#[derive(Clone)]
pub struct AvatarMood {
    inner: Arc<Mutex<State>>,
    reset_timeout: Duration,
}

struct State {
    mood: Mood,
    // Bumped on every set/reset; a stale timer sees a mismatch and backs off.
    generation: u64,
    reset_task: Option<JoinHandle<()>>,
}

impl AvatarMood {
    pub fn new(reset_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(State {
                mood: Mood::Neutral,
                generation: 0,
                reset_task: None,
            })),
            reset_timeout,
        }
    }

    /// Currently displayed mood.
    pub fn mood(&self) -> Mood {
        self.inner.lock().unwrap().mood
    }

    /// Replace the displayed mood and (re)start the reset timer.
    ///
    /// Setting `Neutral` cancels any pending timer without scheduling a new
    /// one; neutral is terminal until the next non-neutral set.
    pub fn set_mood(&self, mood: Mood) {
        let mut state = self.inner.lock().unwrap();
        if let Some(task) = state.reset_task.take() {
            task.abort();
        }
        state.mood = mood;
        state.generation += 1;

        if mood != Mood::Neutral {
            let inner = Arc::clone(&self.inner);
            let timeout = self.reset_timeout;
            let scheduled_for = state.generation;
            state.reset_task = Some(tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                let mut state = inner.lock().unwrap();
                if state.generation != scheduled_for {
                    return;
                }
                debug!("avatar mood timed out, reverting to neutral");
                state.mood = Mood::Neutral;
                state.reset_task = None;
            }));
        }
    }

    /// Cancel any pending timer and force neutral immediately.
    pub fn reset(&self) {
        let mut state = self.inner.lock().unwrap();
        if let Some(task) = state.reset_task.take() {
            task.abort();
        }
        state.mood = Mood::Neutral;
        state.generation += 1;
    }
}

impl Default for AvatarMood {
    fn default() -> Self {
        Self::new(DEFAULT_RESET_TIMEOUT)
    }
}
