use std::time::Duration;

/// How long a success banner stays up before clearing itself.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);

/// What the notification area is currently showing. At most one of these
/// exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Notification {
    #[default]
    Idle,
    /// Sticky until the user closes the modal.
    Error(String),
    /// Cleared by its expiry timer.
    Success(String),
}

/// Notification slot plus an epoch counter.
///
/// Every transition bumps the epoch, and the timer armed for a success
/// must present the epoch it was handed. A timer that lost the race to a
/// newer notification is ignored, so the latest write always wins and an
/// error is never cleared by a leftover success timer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    current: Notification,
    epoch: u64,
}

impl NotificationState {
    pub fn current(&self) -> &Notification {
        &self.current
    }

    /// Show a sticky error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Notification::Error(message.into());
        self.epoch += 1;
    }

    /// Show a success and hand back the epoch its expiry timer must
    /// present to `expire_success`.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.current = Notification::Success(message.into());
        self.epoch += 1;
        self.epoch
    }

    /// The user closed whatever is showing.
    pub fn dismiss(&mut self) {
        self.current = Notification::Idle;
        self.epoch += 1;
    }

    /// Timer callback for the success raised at `epoch`. Returns whether
    /// anything was cleared.
    pub fn expire_success(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch {
            return false;
        }
        // Epochs match, so the slot still holds the success this timer
        // was armed for.
        self.current = Notification::Idle;
        self.epoch += 1;
        true
    }
}
