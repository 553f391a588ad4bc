//! Status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::ui::core::{Notification, NotificationLevel};

/// One-line bar at the bottom: the current transient notification, or the key
/// hints when nothing happened.
pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: Rect, notification: Option<&Notification>, show_key_hints: bool) {
        let (text, color) = match notification {
            Some(n) => {
                let color = match n.level {
                    NotificationLevel::Info => Color::Green,
                    NotificationLevel::Warning => Color::Yellow,
                    NotificationLevel::Error => Color::Red,
                };
                (n.text.clone(), color)
            }
            None if show_key_hints => (
                "a: add • d: delete • c: done • enter: details • tab/←→: lists • esc: back • q: quit".to_string(),
                Color::DarkGray,
            ),
            None => (String::new(), Color::DarkGray),
        };

        let paragraph = Paragraph::new(text).style(Style::default().fg(color));
        f.render_widget(paragraph, area);
    }
}
