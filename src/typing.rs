// src/typing.rs

use crate::app::App;
use crate::config::Config;
use crate::dispatcher::Reply;
use log::debug;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

/// How long the bot pretends to type, sampled uniformly from `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelay {
    min: Duration,
    max: Duration,
}

impl TypingDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_millis(config.typing_delay_min_ms),
            Duration::from_millis(config.typing_delay_max_ms),
        )
    }

    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        rand::rng().random_range(self.min..self.max)
    }
}

/// Shows the placeholder, waits once, then swaps in the finalized reply.
/// The lock is not held while waiting.
pub async fn simulate_typing(app: &Arc<Mutex<App>>, reply: Reply, delay: Duration) {
    {
        let mut guard = app.lock().await;
        guard.conversation.begin_typing();
    }

    sleep(delay).await;

    let mut guard = app.lock().await;
    guard.conversation.finish_typing(reply);
}

/// Plays a reply sequence one message at a time, in order, then marks the
/// session idle so it accepts input again.
pub async fn play_replies(app: Arc<Mutex<App>>, replies: Vec<Reply>, delay: TypingDelay) {
    for reply in replies {
        let wait = delay.sample();
        debug!("Typing for {}ms", wait.as_millis());
        simulate_typing(&app, reply, wait).await;
    }

    app.lock().await.set_replying(false);
}
