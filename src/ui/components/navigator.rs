//! Project → board selection tree.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List as ListWidget, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::{Board, BoardApi};
use crate::ui::core::{Action, Component};

/// One row of the flattened two-level tree.
enum TreeRow {
    Project { name: String },
    Board { board: Board },
}

/// Screen to select a board from the authenticated user's projects.
///
/// Projects and their boards are fetched once per entry; a fetch failure is
/// rendered inline in place of the missing rows and leaves the screen usable.
pub struct NavigatorComponent {
    rows: Vec<TreeRow>,
    selected: usize,
    list_state: ListState,
    error: Option<String>,
}

impl NavigatorComponent {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            error: None,
        }
    }

    /// Fetch projects and, per project, its boards. Partial results built
    /// before a failure stay visible next to the error message.
    pub async fn load(&mut self, api: &dyn BoardApi) {
        self.rows.clear();
        self.error = None;
        self.selected = 0;
        self.list_state.select(None);

        match api.projects().await {
            Ok(projects) => {
                for project in projects {
                    self.rows.push(TreeRow::Project {
                        name: project.name.clone(),
                    });
                    match api.boards(&project.id).await {
                        Ok(boards) => {
                            for board in boards {
                                self.rows.push(TreeRow::Board { board });
                            }
                        }
                        Err(e) => {
                            self.error = Some(format!("Error loading boards: {e}"));
                            break;
                        }
                    }
                }
            }
            Err(e) => self.error = Some(format!("Error loading boards: {e}")),
        }

        if !self.rows.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of board leaves currently in the tree.
    pub fn board_count(&self) -> usize {
        self.rows.iter().filter(|row| matches!(row, TreeRow::Board { .. })).count()
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.list_state.select(Some(index));
    }

    fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected + 1 < self.rows.len() {
            self.select(self.selected + 1);
        }
    }

    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.select(self.selected - 1);
        }
    }

    /// The board under the cursor, if the cursor is on a board leaf.
    pub fn selected_board(&self) -> Option<&Board> {
        match self.rows.get(self.selected) {
            Some(TreeRow::Board { board }) => Some(board),
            _ => None,
        }
    }
}

impl Default for NavigatorComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for NavigatorComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::None
            }
            KeyCode::Enter => match self.selected_board() {
                // Only board leaves open anything; project rows are structure
                Some(board) => Action::OpenBoard(board.clone()),
                None => Action::None,
            },
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Select a Board ");

        if let Some(error) = &self.error {
            if self.rows.is_empty() {
                let paragraph = Paragraph::new(error.as_str())
                    .style(Style::default().fg(Color::Red))
                    .wrap(Wrap { trim: true })
                    .block(block);
                f.render_widget(paragraph, rect);
                return;
            }
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| match row {
                TreeRow::Project { name } => ListItem::new(Line::from(Span::styled(
                    name.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))),
                TreeRow::Board { board } => ListItem::new(Line::from(Span::styled(
                    format!("  {}", board.name),
                    Style::default().fg(Color::White),
                ))),
            })
            .collect();

        let list = ListWidget::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
