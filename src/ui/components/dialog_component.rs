//! Modal dialog component.
//!
//! One component owns whichever dialog is currently open: card creation
//! input, delete confirmation, read-only card details, help, and session
//! logs. Rendering is delegated to the modules under [`dialogs`].

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::logger::Logger;
use crate::ui::components::dialogs::{card_dialogs, system_dialogs};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    scroll_offset: usize,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            scroll_offset: 0,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.clear_dialog();
        self.dialog_type = Some(dialog_type);
    }

    pub fn hide(&mut self) {
        self.clear_dialog();
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.scroll_offset = 0;
    }

    /// Enter in the card creation dialog. Empty input keeps the dialog open.
    fn handle_submit(&mut self) -> Action {
        match &self.dialog_type {
            Some(DialogType::CardCreation { list_id, .. }) => {
                let name = self.input_buffer.trim().to_string();
                if name.is_empty() {
                    return Action::None;
                }
                let action = Action::CreateCard {
                    list_id: list_id.clone(),
                    name,
                };
                self.clear_dialog();
                action
            }
            // Details, help and logs close on Enter as well
            Some(_) => {
                self.clear_dialog();
                Action::None
            }
            None => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            Some(DialogType::CardCreation { .. }) => match key.code {
                KeyCode::Enter => self.handle_submit(),
                // Dismissing the modal is a silent no-op
                KeyCode::Esc => {
                    self.clear_dialog();
                    Action::None
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                    Action::None
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::DeleteConfirmation { card_id, .. }) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    let action = Action::DeleteCard {
                        card_id: card_id.clone(),
                    };
                    self.clear_dialog();
                    action
                }
                // 'n' or Esc: no remote call, nothing to report
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.clear_dialog();
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Up => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                    Action::None
                }
                KeyCode::Down => {
                    self.scroll_offset = self.scroll_offset.saturating_add(1);
                    Action::None
                }
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    self.clear_dialog();
                    Action::None
                }
                _ => Action::None,
            },
            Some(DialogType::CardDetails { .. }) | Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    self.clear_dialog();
                    Action::None
                }
                _ => Action::None,
            },
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::CardCreation { list_name, .. }) => {
                card_dialogs::render_card_creation_dialog(f, rect, &self.input_buffer, list_name);
            }
            Some(DialogType::DeleteConfirmation { card_name, .. }) => {
                card_dialogs::render_delete_confirmation_dialog(f, rect, card_name);
            }
            Some(DialogType::CardDetails { title, description }) => {
                card_dialogs::render_card_details_dialog(f, rect, title, description);
            }
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect);
            }
            Some(DialogType::Logs) => {
                let logs = self.logger.get_logs();
                let max_offset = logs.len().saturating_sub(1);
                self.scroll_offset = self.scroll_offset.min(max_offset);
                system_dialogs::render_logs_dialog(f, rect, &logs, self.scroll_offset);
            }
            None => {}
        }
    }
}
