//! Application shell: screen routing, action dispatch, and remote calls.
//!
//! All mutating flows go through [`AppComponent::handle_app_action`]: the
//! remote call is awaited first, and the local widget tree is patched only
//! after the server confirmed the operation. A failed call leaves the UI
//! exactly as it was and surfaces the error in the status bar.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use crate::api::{Board, BoardApi};
use crate::config::Config;
use crate::constants::{INFO_CARD_DELETED, INFO_MOVED_TO_DONE, NO_DESCRIPTION};
use crate::logger::Logger;
use crate::ui::components::{BoardComponent, ColumnComponent, DialogComponent, NavigatorComponent, StatusBar};
use crate::ui::core::{Action, Component, DialogType, EventType, Notification, NotificationLevel};
use crate::ui::layout::LayoutManager;

/// Which full-screen view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Navigator,
    Board,
}

pub struct AppComponent {
    api: Arc<dyn BoardApi>,
    config: Config,
    navigator: NavigatorComponent,
    board: Option<BoardComponent>,
    screen: Screen,
    dialog: DialogComponent,
    notification: Option<Notification>,
    logger: Logger,
    pub should_quit: bool,
}

impl AppComponent {
    pub fn new(api: Arc<dyn BoardApi>, config: Config) -> Self {
        let logger = Logger::new();
        Self {
            api,
            config,
            navigator: NavigatorComponent::new(),
            board: None,
            screen: Screen::Navigator,
            dialog: DialogComponent::new(logger.clone()),
            notification: None,
            logger,
            should_quit: false,
        }
    }

    /// Populate the navigator before the first frame.
    pub async fn load_initial_data(&mut self) {
        self.logger.log("Loading projects and boards".to_string());
        self.navigator.load(self.api.as_ref()).await;
        if let Some(error) = self.navigator.error() {
            self.logger.log(error.to_string());
        }
    }

    pub async fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => self.handle_key_event(key).await,
            EventType::Resize(..) | EventType::Tick | EventType::Other => {}
        }
    }

    async fn handle_key_event(&mut self, key: KeyEvent) {
        // Any key press dismisses the previous transient notification
        self.notification = None;

        // Ctrl-C quits no matter which screen or dialog holds the input
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Dialogs capture input while open
        let action = if self.dialog.is_visible() {
            self.dialog.handle_key_events(key)
        } else {
            let screen_action = match self.screen {
                Screen::Navigator => self.navigator.handle_key_events(key),
                Screen::Board => match self.board.as_mut() {
                    Some(board) => board.handle_key_events(key),
                    None => Action::None,
                },
            };
            match screen_action {
                Action::None => self.handle_global_key(key),
                other => other,
            }
        };

        self.handle_app_action(action).await;
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    async fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::OpenBoard(board) => self.open_board(board).await,

            Action::Back => {
                // Leaving a board drops its state; nothing is cached, so the
                // navigator re-fetches on the way back
                self.board = None;
                self.screen = Screen::Navigator;
                self.navigator.load(self.api.as_ref()).await;
            }

            Action::CreateCard { list_id, name } => self.create_card(&list_id, &name).await,
            Action::DeleteCard { card_id } => self.delete_card(&card_id).await,
            Action::MoveCard {
                card_id,
                target_list_id,
            } => self.move_card(&card_id, &target_list_id).await,
            Action::ViewCardDetails { card_id } => self.view_card_details(&card_id).await,

            Action::ShowDialog(dialog_type) => self.dialog.show(dialog_type),
            Action::HideDialog => self.dialog.hide(),

            Action::Notify(notification) => self.notify(notification),

            Action::None => {}
        }
    }

    async fn open_board(&mut self, board: Board) {
        self.logger.log(format!("Opening board '{}'", board.name));

        let lists = match self.api.lists(&board.id).await {
            Ok(lists) => lists,
            Err(e) => {
                self.notify(Notification::error(format!("Error opening board: {e}")));
                return;
            }
        };

        let mut columns = Vec::with_capacity(lists.len());
        for list in lists {
            let cards = match self.api.cards(&board.id, &list.id).await {
                Ok(cards) => cards,
                Err(e) => {
                    self.notify(Notification::error(format!("Error opening board: {e}")));
                    return;
                }
            };
            columns.push(ColumnComponent::new(list, cards));
        }

        self.board = Some(BoardComponent::new(board, columns, self.config.ui.done_list.clone()));
        self.screen = Screen::Board;
    }

    async fn create_card(&mut self, list_id: &str, name: &str) {
        match self.api.create_card(list_id, name).await {
            Ok(card) => {
                let label = card.display_name().to_string();
                if let Some(board) = self.board.as_mut() {
                    board.insert_card(card);
                }
                self.notify(Notification::info(format!("Added card: {label}")));
            }
            Err(e) => self.notify(Notification::error(format!("Error creating card: {e}"))),
        }
    }

    async fn delete_card(&mut self, card_id: &str) {
        match self.api.delete_card(card_id).await {
            Ok(()) => {
                if let Some(board) = self.board.as_mut() {
                    board.remove_card(card_id);
                }
                self.notify(Notification::info(INFO_CARD_DELETED));
            }
            // The widget stays mounted; the server still owns the card
            Err(e) => self.notify(Notification::error(format!("Error deleting card: {e}"))),
        }
    }

    async fn move_card(&mut self, card_id: &str, target_list_id: &str) {
        match self.api.move_card(card_id, target_list_id).await {
            Ok(updated) => {
                if let Some(board) = self.board.as_mut() {
                    board.remove_card(card_id);
                    board.insert_card(updated);
                }
                self.notify(Notification::info(INFO_MOVED_TO_DONE));
            }
            Err(e) => self.notify(Notification::error(format!("Error moving card: {e}"))),
        }
    }

    async fn view_card_details(&mut self, card_id: &str) {
        // Details are re-fetched so the dialog shows current server state
        match self.api.card(card_id).await {
            Ok(card) => {
                let title = card.display_name().to_string();
                let description = card
                    .description
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or(NO_DESCRIPTION)
                    .to_string();
                self.dialog.show(DialogType::CardDetails { title, description });
            }
            Err(e) => self.notify(Notification::error(format!("Error loading card: {e}"))),
        }
    }

    fn notify(&mut self, notification: Notification) {
        let prefix = match notification.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warn",
            NotificationLevel::Error => "error",
        };
        self.logger.log(format!("[{prefix}] {}", notification.text));
        self.notification = Some(notification);
    }

    pub fn render(&mut self, f: &mut Frame) {
        let areas = LayoutManager::main_layout(f.area());

        match self.screen {
            Screen::Navigator => self.navigator.render(f, areas[0]),
            Screen::Board => {
                if let Some(board) = self.board.as_mut() {
                    board.render(f, areas[0]);
                }
            }
        }

        StatusBar::render(f, areas[1], self.notification.as_ref(), self.config.ui.show_key_hints);

        if self.dialog.is_visible() {
            self.dialog.render(f, f.area());
        }
    }

    // Test-facing accessors; the event loop only needs should_quit.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn board(&self) -> Option<&BoardComponent> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut BoardComponent> {
        self.board.as_mut()
    }

    pub fn navigator(&self) -> &NavigatorComponent {
        &self.navigator
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }
}
