use bank_client::{Notification, NotificationKind, NotificationSink};
use yansi::Paint;

/// Prints every notification to stderr as soon as it is emitted.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalSink;

impl NotificationSink for TerminalSink {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", render(notification));
    }
}

fn render(notification: &Notification) -> String {
    let title = match notification.kind {
        NotificationKind::Error => notification.title.red().bold().to_string(),
        NotificationKind::Success => notification.title.green().bold().to_string(),
    };
    format!("{title}: {}", notification.body)
}
