//! Column unit: one list and its ordered cards.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{block::BorderType, Block, Borders},
    Frame,
};

use crate::api::{Card, List};
use crate::ui::components::card::CardComponent;
use crate::ui::core::{Action, Component};

/// Height of one rendered card, including its borders.
const CARD_HEIGHT: u16 = 3;

/// A column owns its cards in fetch order and the intra-column focus state.
///
/// `focused_card == None` while the column is active means the column itself
/// holds focus, which only happens when it has no cards. Navigation clamps at
/// both ends; there is no wrap within a column.
pub struct ColumnComponent {
    pub list: List,
    pub cards: Vec<CardComponent>,
    pub focused_card: Option<usize>,
    active: bool,
}

impl ColumnComponent {
    pub fn new(list: List, cards: Vec<Card>) -> Self {
        Self {
            list,
            cards: cards.into_iter().map(CardComponent::new).collect(),
            focused_card: None,
            active: false,
        }
    }

    pub fn display_name(&self) -> &str {
        self.list.display_name()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The card currently holding focus, if any.
    pub fn focused_card(&self) -> Option<&Card> {
        self.focused_card.and_then(|index| self.cards.get(index)).map(|c| &c.card)
    }

    /// Move focus one card down, clamped at the last card.
    pub fn focus_next_card(&mut self) {
        self.navigate_card(1);
    }

    /// Move focus one card up, clamped at the first card.
    pub fn focus_previous_card(&mut self) {
        self.navigate_card(-1);
    }

    fn navigate_card(&mut self, direction: i32) {
        if self.cards.is_empty() {
            return;
        }

        match self.focused_card {
            // Column-level focus: jump to the first card
            None => self.focused_card = Some(0),
            Some(current) => {
                let next = current as i32 + direction;
                if next >= 0 && (next as usize) < self.cards.len() {
                    self.focused_card = Some(next as usize);
                }
                // Stop at boundaries
            }
        }
    }

    /// Append a card widget, keeping fetch/creation order.
    pub fn push_card(&mut self, card: Card) {
        self.cards.push(CardComponent::new(card));
    }

    /// Remove the widget backing `card_id`, fixing up the focus index so the
    /// selection stays on a live card.
    pub fn remove_card(&mut self, card_id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.card.id == card_id)?;
        let removed = self.cards.remove(index);

        self.focused_card = match self.focused_card {
            Some(_) if self.cards.is_empty() => None,
            Some(focused) if focused > index => Some(focused - 1),
            Some(focused) if focused >= self.cards.len() => Some(self.cards.len() - 1),
            other => other,
        };

        Some(removed.card)
    }

    /// First visible card index so the focused card stays on screen.
    fn scroll_offset(&self, visible: usize) -> usize {
        match self.focused_card {
            Some(focused) if visible > 0 && focused >= visible => focused + 1 - visible,
            _ => 0,
        }
    }
}

impl Component for ColumnComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down => self.focus_next_card(),
            KeyCode::Up => self.focus_previous_card(),
            _ => {}
        }
        Action::None
    }

    /// Gaining focus transfers it to the first card when one exists; an empty
    /// column keeps the focus itself.
    fn on_focus(&mut self) {
        self.active = true;
        self.focused_card = if self.cards.is_empty() { None } else { Some(0) };
    }

    fn on_blur(&mut self) {
        self.active = false;
        self.focused_card = None;
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        // Column border is highlighted when the column itself carries focus,
        // i.e. it is active and empty.
        let column_focused = self.active && self.focused_card.is_none();
        let border_style = if column_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if self.active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ({}) ", self.display_name(), self.cards.len()));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let visible = (inner.height / CARD_HEIGHT) as usize;
        let offset = self.scroll_offset(visible);

        for (slot, (index, card)) in self.cards.iter().enumerate().skip(offset).take(visible).enumerate() {
            let card_rect = Rect::new(
                inner.x,
                inner.y + (slot as u16) * CARD_HEIGHT,
                inner.width,
                CARD_HEIGHT,
            );
            let focused = self.active && self.focused_card == Some(index);
            card.render(f, card_rect, focused);
        }
    }
}
