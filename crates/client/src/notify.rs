use crate::BankError;
use std::fmt;

/// Kind of a [`Notification`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Error,
    Success,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Success => "success",
        })
    }
}

/// A message for the user about the outcome of an interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    /// Cleared once the user dismissed it.
    pub visible: bool,
}

impl Notification {
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, title: title.into(), body: body.into(), visible: true }
    }

    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            body: body.into(),
            visible: true,
        }
    }

    /// The notification shown after a confirmed transaction.
    pub fn transaction_success() -> Self {
        Self::success("Transaction Success", "Your transaction was successful")
    }
}

impl From<&BankError> for Notification {
    fn from(err: &BankError) -> Self {
        let (title, body) = err.normalize();
        Self::error(title, body)
    }
}

/// Presentation surface that displays notifications.
///
/// Called every time the orchestrator emits a notification. The sink owns display and
/// dismissal; the orchestrator never waits on it.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<T> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}
