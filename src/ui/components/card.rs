//! Card presentation unit.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

use crate::api::Card;

/// Renders one card's title and keeps a reference to the backing card entity.
///
/// A card widget exists in a column if and only if the backing card currently
/// belongs to that list; moves rebuild the widget around the post-mutation
/// card instead of relocating it.
pub struct CardComponent {
    pub card: Card,
}

impl CardComponent {
    pub fn new(card: Card) -> Self {
        Self { card }
    }

    pub fn title(&self) -> &str {
        self.card.display_name()
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, focused: bool) {
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if focused { BorderType::Thick } else { BorderType::Rounded })
            .style(style);

        f.render_widget(Paragraph::new(self.title()).block(block), rect);
    }
}
