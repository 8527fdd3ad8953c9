use std::time::{Duration, Instant};

/// How long a notification stays on screen
const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// A transient one-line message with an expiry time
///
/// Time is passed in by the caller so state transitions stay deterministic
/// under test.
#[derive(Debug, Default)]
pub struct NotificationState {
    message: Option<String>,
    expires_at: Option<Instant>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message until the display duration elapses
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.expires_at = Some(now + DISPLAY_DURATION);
    }

    /// The current message, if it has not expired
    pub fn active(&self, now: Instant) -> Option<&str> {
        match self.expires_at {
            Some(expires_at) if now < expires_at => self.message.as_deref(),
            _ => None,
        }
    }

    /// Drop an expired message
    pub fn tick(&mut self, now: Instant) {
        if self.active(now).is_none() {
            self.message = None;
            self.expires_at = None;
        }
    }
}
