//! System dialogs: help panel and session logs.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use crate::ui::layout::LayoutManager;

const HELP_ENTRIES: &[(&str, &str)] = &[
    ("↑/↓", "Move between cards in a list"),
    ("tab / →", "Next list (wraps around)"),
    ("shift+tab / ←", "Previous list (wraps around)"),
    ("a", "Add a card to the focused list"),
    ("d", "Delete the focused card"),
    ("c", "Move the focused card to the Done list"),
    ("enter", "Show card details"),
    ("esc", "Back / close"),
    ("G", "Show session logs"),
    ("?", "This help"),
    ("q", "Quit"),
];

/// Render the help dialog listing all key bindings.
pub fn render_help_dialog(f: &mut Frame, area: Rect) {
    let height = HELP_ENTRIES.len() as u16 + 4;
    let dialog_area = LayoutManager::centered_rect_lines(60, height, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(" Help ", Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(key, description)| {
            Line::from(vec![
                Span::styled(format!("{key:>14}  "), Style::default().fg(Color::Yellow)),
                Span::styled(*description, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let body_rect = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    f.render_widget(Paragraph::new(lines), body_rect);

    let instructions_rect = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    f.render_widget(create_instructions_paragraph(&[shortcuts::ESC_CLOSE]), instructions_rect);
}

/// Render the session logs dialog (newest first), with a scroll offset.
pub fn render_logs_dialog(f: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
    let dialog_area = LayoutManager::centered_rect(80, 70, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(" Session Logs ", Color::Magenta);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let visible = inner.height.saturating_sub(1) as usize;
    let lines: Vec<Line> = logs
        .iter()
        .skip(scroll_offset)
        .take(visible)
        .map(|entry| Line::from(Span::styled(entry.clone(), Style::default().fg(Color::Gray))))
        .collect();

    let body_rect = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    f.render_widget(Paragraph::new(lines), body_rect);

    let instructions_rect = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1), inner.width, 1);
    f.render_widget(create_instructions_paragraph(&[shortcuts::ESC_CLOSE]), instructions_rect);
}
