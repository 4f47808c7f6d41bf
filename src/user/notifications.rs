use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Sale,
    System,
    Message,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Sale => "Sale",
            NotificationKind::System => "System",
            NotificationKind::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    /// Relative age as shown, e.g. "2m ago".
    pub time: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
}

fn notification(
    id: &str,
    title: &str,
    message: &str,
    time: &str,
    kind: NotificationKind,
    read: bool,
) -> Notification {
    Notification {
        id: id.to_string(),
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        kind,
        read,
    }
}

pub fn mock_notifications() -> Vec<Notification> {
    use NotificationKind::*;
    vec![
        notification(
            "n1",
            "New Sale!",
            "You sold \"Midnight Protocol\" for $29.99",
            "2m ago",
            Sale,
            false,
        ),
        notification(
            "n2",
            "Project Exported",
            "Your project \"Sunset Boulevard\" is ready to download.",
            "1h ago",
            System,
            false,
        ),
        notification(
            "n3",
            "New Message",
            "User @kairo sent you a message.",
            "3h ago",
            Message,
            true,
        ),
    ]
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Returns how many notifications changed.
pub fn mark_all_read(notifications: &mut [Notification]) -> usize {
    let mut changed = 0;
    for n in notifications.iter_mut().filter(|n| !n.read) {
        n.read = true;
        changed += 1;
    }
    changed
}
