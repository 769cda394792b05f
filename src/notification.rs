/// How long a notification stays up before it clears itself.
pub const NOTIFICATION_TTL: std::time::Duration = std::time::Duration::from_secs(3);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Distinguishes successive notifications, so that an expiry scheduled for one of them can't
/// clear a later one.
#[derive(Clone, Copy, Debug, derive_more::Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NotificationId(u64);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// A pending expiry of a specific notification.  Whoever drives the session is expected to hand
/// this back to [`NotificationSlot::clear`] (typically via `Session::clear_notification`) once
/// `delay` has elapsed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use = "the notification never clears unless the ScheduledClear is scheduled"]
pub struct ScheduledClear {
    pub notification_id: NotificationId,
    pub delay: std::time::Duration,
}

/// Holds at most one notification.  Raising a notification replaces the current one.
#[derive(Clone, Debug, Default)]
pub struct NotificationSlot {
    current_o: Option<Notification>,
    next_notification_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn current(&self) -> Option<&Notification> {
        self.current_o.as_ref()
    }
    pub fn raise(&mut self, message: impl Into<String>, severity: Severity) -> ScheduledClear {
        let notification_id = NotificationId(self.next_notification_id);
        self.next_notification_id += 1;
        let message = message.into();
        match severity {
            Severity::Success => tracing::info!("{}", message),
            Severity::Error => tracing::warn!("{}", message),
        }
        self.current_o = Some(Notification {
            id: notification_id,
            message,
            severity,
        });
        ScheduledClear {
            notification_id,
            delay: NOTIFICATION_TTL,
        }
    }
    /// Clears the current notification if and only if it is the one the ScheduledClear was
    /// issued for.  Returns true if something was cleared.
    pub fn clear(&mut self, scheduled_clear: ScheduledClear) -> bool {
        match self.current_o.as_ref() {
            Some(notification) if notification.id == scheduled_clear.notification_id => {
                self.current_o = None;
                true
            }
            _ => {
                tracing::trace!(
                    "ignoring stale clear for notification {}",
                    scheduled_clear.notification_id
                );
                false
            }
        }
    }
}
