//! Notification title component

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use crate::model::{Notification, NotificationKind};

/// Build a notification line for title bar display
///
/// If `max_width` is provided and the notification is too long,
/// it will be truncated with "…" at the end.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    let (label, color) = match notification.kind {
        NotificationKind::Success => ("Done:", Color::Green),
        NotificationKind::Info => ("Info:", Color::Cyan),
    };

    // " | " + label + " " + message + " "
    let fixed = 3 + label.len() + 1;
    let message_len = notification.message.chars().count();

    let message = match max_width {
        Some(max) if fixed + message_len + 1 > max => {
            let available = max.saturating_sub(fixed + 2);
            if available == 0 {
                return Line::default();
            }
            let truncated: String = notification.message.chars().take(available).collect();
            format!("{}… ", truncated)
        }
        _ => format!("{} ", notification.message),
    };

    if message.trim().is_empty() {
        return Line::default();
    }

    Line::from(vec![
        Span::raw(" | "),
        Span::styled(
            format!("{} ", label),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(message, Style::default().fg(color)),
    ])
}
