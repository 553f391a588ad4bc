//! Board view: ordered columns, inter-column focus, and the board actions.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::api::{Board, Card};
use crate::constants::{
    DONE_LIST_KEYWORDS, INFO_ALREADY_DONE, WARN_NO_CARD_SELECTED, WARN_NO_DONE_LIST, WARN_NO_LIST_AVAILABLE,
};
use crate::ui::components::column::ColumnComponent;
use crate::ui::core::{Action, Component, DialogType, Notification};

/// One open board.
///
/// Columns render in fetch order and are never re-sorted. Focus is explicit
/// state owned here: `focused_column` indexes into `columns`, and the active
/// column tracks its own focused card. Nothing is focused right after the
/// board opens.
pub struct BoardComponent {
    pub board: Board,
    pub columns: Vec<ColumnComponent>,
    pub focused_column: Option<usize>,
    done_list_override: Option<String>,
}

impl BoardComponent {
    pub fn new(board: Board, columns: Vec<ColumnComponent>, done_list_override: Option<String>) -> Self {
        Self {
            board,
            columns,
            focused_column: None,
            done_list_override,
        }
    }

    /// Move focus to the next column, wrapping past the last one.
    pub fn focus_next_column(&mut self) {
        self.navigate_column(1);
    }

    /// Move focus to the previous column, wrapping past the first one.
    pub fn focus_previous_column(&mut self) {
        self.navigate_column(-1);
    }

    fn navigate_column(&mut self, direction: i32) {
        if self.columns.is_empty() {
            return;
        }

        let count = self.columns.len() as i32;
        let next = match self.focused_column {
            Some(current) => ((current as i32 + direction).rem_euclid(count)) as usize,
            // Nothing focused yet: start at the first column
            None => 0,
        };
        self.set_focused_column(next);
    }

    fn set_focused_column(&mut self, index: usize) {
        if let Some(previous) = self.focused_column {
            if previous != index {
                if let Some(column) = self.columns.get_mut(previous) {
                    column.on_blur();
                }
            }
        }
        self.focused_column = Some(index);
        if let Some(column) = self.columns.get_mut(index) {
            column.on_focus();
        }
    }

    /// The column containing the current focus, if any.
    pub fn focused_column(&self) -> Option<&ColumnComponent> {
        self.focused_column.and_then(|index| self.columns.get(index))
    }

    /// The card holding focus, if a card (not just a column) is focused.
    pub fn focused_card(&self) -> Option<&Card> {
        self.focused_column().and_then(|column| column.focused_card())
    }

    /// Index of the column that "mark done" targets: the configured name when
    /// set, otherwise the first column whose name matches the keyword set.
    /// Case-insensitive exact match, first match in column order wins.
    pub fn find_done_column(&self) -> Option<usize> {
        self.columns.iter().position(|column| {
            let name = column.display_name().to_lowercase();
            match &self.done_list_override {
                Some(wanted) => name == wanted.to_lowercase(),
                None => DONE_LIST_KEYWORDS.contains(&name.as_str()),
            }
        })
    }

    /// Mount a card widget in the column its `list_id` points at. Used only
    /// after the server confirmed a create or move.
    pub fn insert_card(&mut self, card: Card) -> bool {
        match self.columns.iter_mut().find(|column| column.list.id == card.list_id) {
            Some(column) => {
                column.push_card(card);
                true
            }
            None => false,
        }
    }

    /// Remove the widget backing `card_id` from whichever column holds it.
    pub fn remove_card(&mut self, card_id: &str) -> Option<Card> {
        self.columns.iter_mut().find_map(|column| column.remove_card(card_id))
    }

    fn add_card_action(&self) -> Action {
        // Target the focused column, falling back to the first one
        let target = self.focused_column.or(if self.columns.is_empty() { None } else { Some(0) });
        match target.and_then(|index| self.columns.get(index)) {
            Some(column) => Action::ShowDialog(DialogType::CardCreation {
                list_id: column.list.id.clone(),
                list_name: column.display_name().to_string(),
            }),
            None => Action::Notify(Notification::warning(WARN_NO_LIST_AVAILABLE)),
        }
    }

    fn delete_card_action(&self) -> Action {
        match self.focused_card() {
            Some(card) => Action::ShowDialog(DialogType::DeleteConfirmation {
                card_id: card.id.clone(),
                card_name: card.display_name().to_string(),
            }),
            None => Action::Notify(Notification::warning(WARN_NO_CARD_SELECTED)),
        }
    }

    fn mark_done_action(&self) -> Action {
        let Some(card) = self.focused_card() else {
            return Action::Notify(Notification::warning(WARN_NO_CARD_SELECTED));
        };

        let Some(done_index) = self.find_done_column() else {
            return Action::Notify(Notification::warning(WARN_NO_DONE_LIST));
        };
        let done_list_id = self.columns[done_index].list.id.clone();

        // Already in the done list: informational no-op, not an error
        if card.list_id == done_list_id {
            return Action::Notify(Notification::info(INFO_ALREADY_DONE));
        }

        Action::MoveCard {
            card_id: card.id.clone(),
            target_list_id: done_list_id,
        }
    }

    fn view_details_action(&self) -> Action {
        match self.focused_card() {
            Some(card) => Action::ViewCardDetails {
                card_id: card.id.clone(),
            },
            None => Action::Notify(Notification::warning(WARN_NO_CARD_SELECTED)),
        }
    }
}

impl Component for BoardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            // Column traversal is intercepted here so Tab never falls through
            // to any default focus cycling.
            KeyCode::Tab | KeyCode::Right => {
                self.focus_next_column();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.focus_previous_column();
                Action::None
            }
            KeyCode::Up | KeyCode::Down => {
                if let Some(index) = self.focused_column {
                    if let Some(column) = self.columns.get_mut(index) {
                        return column.handle_key_events(key);
                    }
                }
                Action::None
            }
            KeyCode::Esc => Action::Back,
            KeyCode::Char('a') => self.add_card_action(),
            KeyCode::Char('d') => self.delete_card_action(),
            KeyCode::Char('c') => self.mark_done_action(),
            KeyCode::Enter => self.view_details_action(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.columns.is_empty() {
            let empty = Paragraph::new("This board has no lists.").style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, rect);
            return;
        }

        let count = self.columns.len() as u32;
        let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
        let areas = Layout::horizontal(constraints).split(rect);

        for (column, area) in self.columns.iter_mut().zip(areas.iter()) {
            column.render(f, *area);
        }
    }
}
