use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use plankan::config::Config;
use plankan::constants::{INFO_ALREADY_DONE, INFO_CARD_DELETED, INFO_MOVED_TO_DONE, WARN_NO_DONE_LIST};
use plankan::ui::app_component::{AppComponent, Screen};
use plankan::ui::core::{DialogType, EventType, NotificationLevel};

use crate::fake_api::FakeApi;

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(key(code)).await;
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

/// Start the app and open the sample "Sprint" board.
async fn open_sprint_board(api: Arc<FakeApi>) -> AppComponent {
    let mut app = AppComponent::new(api, Config::default());
    app.load_initial_data().await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(app.screen(), Screen::Board);
    app
}

fn card_ids(app: &AppComponent, column: usize) -> Vec<String> {
    app.board().unwrap().columns[column]
        .cards
        .iter()
        .map(|c| c.card.id.clone())
        .collect()
}

#[tokio::test]
async fn test_open_board_builds_columns_in_server_order() {
    let api = Arc::new(FakeApi::sample());
    let app = open_sprint_board(api).await;

    let board = app.board().unwrap();
    assert_eq!(board.columns.len(), 3);
    assert_eq!(board.columns[0].display_name(), "To Do");
    assert_eq!(board.columns[0].card_count(), 2);
    assert_eq!(board.columns[1].card_count(), 0);
    assert_eq!(board.columns[2].card_count(), 1);
    assert_eq!(board.focused_column, None);
}

#[tokio::test]
async fn test_mark_done_moves_card_after_server_confirms() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('c')).await;

    assert!(api.calls().contains(&"move_card(c1, l3)".to_string()));
    assert_eq!(card_ids(&app, 0), vec!["c2"]);
    assert_eq!(card_ids(&app, 2), vec!["c3", "c1"]);
    // The server agrees: c1 now belongs to the Done list
    assert_eq!(api.server_cards_in("l3").len(), 2);
    assert_eq!(app.notification().unwrap().text, INFO_MOVED_TO_DONE);
}

#[tokio::test]
async fn test_mark_done_is_a_noop_when_already_done() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;

    // Focus the single card in Done
    press(&mut app, KeyCode::BackTab).await;
    press(&mut app, KeyCode::Char('c')).await;

    assert_eq!(api.call_count("move_card"), 0);
    let notification = app.notification().unwrap();
    assert_eq!(notification.level, NotificationLevel::Info);
    assert_eq!(notification.text, INFO_ALREADY_DONE);
}

#[tokio::test]
async fn test_mark_done_warns_when_no_done_list_exists() {
    let api = Arc::new(FakeApi::sample_without_done_list());
    let mut app = open_sprint_board(api.clone()).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('c')).await;

    assert_eq!(api.call_count("move_card"), 0);
    let notification = app.notification().unwrap();
    assert_eq!(notification.level, NotificationLevel::Warning);
    assert_eq!(notification.text, WARN_NO_DONE_LIST);
    assert_eq!(card_ids(&app, 0), vec!["c1", "c2"]);
}

#[tokio::test]
async fn test_mark_done_failure_leaves_the_board_unchanged() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;
    api.fail_on("move_card");

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('c')).await;

    assert_eq!(app.notification().unwrap().level, NotificationLevel::Error);
    assert_eq!(card_ids(&app, 0), vec!["c1", "c2"]);
    assert_eq!(card_ids(&app, 2), vec!["c3"]);
}

#[tokio::test]
async fn test_add_card_appends_to_the_target_list() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('a')).await;
    assert!(app.dialog().is_visible());

    type_text(&mut app, "Buy milk").await;
    press(&mut app, KeyCode::Enter).await;

    assert!(api.calls().contains(&"create_card(l1, Buy milk)".to_string()));
    // The new card is mounted as the last child of To Do
    let ids = card_ids(&app, 0);
    assert_eq!(ids.len(), 3);
    assert_eq!(
        app.board().unwrap().columns[0].cards[2].card.name.as_deref(),
        Some("Buy milk")
    );
    assert_eq!(app.notification().unwrap().text, "Added card: Buy milk");
}

#[tokio::test]
async fn test_add_card_failure_mounts_nothing() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;
    api.fail_on("create_card");

    press(&mut app, KeyCode::Char('a')).await;
    type_text(&mut app, "Buy milk").await;
    press(&mut app, KeyCode::Enter).await;

    assert_eq!(app.notification().unwrap().level, NotificationLevel::Error);
    assert_eq!(card_ids(&app, 0), vec!["c1", "c2"]);
}

#[tokio::test]
async fn test_delete_card_confirmed_removes_the_widget() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('y')).await;

    assert!(api.calls().contains(&"delete_card(c1)".to_string()));
    assert_eq!(card_ids(&app, 0), vec!["c2"]);
    assert_eq!(app.notification().unwrap().text, INFO_CARD_DELETED);
    // Focus stays on a live card
    assert_eq!(
        app.board().unwrap().focused_card().map(|c| c.id.clone()),
        Some("c2".to_string())
    );
}

#[tokio::test]
async fn test_delete_card_declined_makes_no_remote_call() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('n')).await;

    assert_eq!(api.call_count("delete_card"), 0);
    assert_eq!(card_ids(&app, 0), vec!["c1", "c2"]);
    assert!(!app.dialog().is_visible());
    assert!(app.notification().is_none());
}

#[tokio::test]
async fn test_delete_card_failure_keeps_the_widget() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;
    api.fail_on("delete_card");

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('y')).await;

    assert_eq!(app.notification().unwrap().level, NotificationLevel::Error);
    assert_eq!(card_ids(&app, 0), vec!["c1", "c2"]);
}

#[tokio::test]
async fn test_view_details_refetches_the_card() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api.clone()).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Enter).await;

    assert!(api.calls().contains(&"card(c1)".to_string()));
    match &app.dialog().dialog_type {
        Some(DialogType::CardDetails { title, description }) => {
            assert_eq!(title, "Write spec");
            assert_eq!(description, "Define the board flows.");
        }
        other => panic!("expected details dialog, got {other:?}"),
    }
}

#[tokio::test]
async fn test_view_details_falls_back_when_description_is_empty() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;

    match &app.dialog().dialog_type {
        Some(DialogType::CardDetails { title, description }) => {
            assert_eq!(title, "Review patch");
            assert_eq!(description, "No description entered.");
        }
        other => panic!("expected details dialog, got {other:?}"),
    }
}

#[tokio::test]
async fn test_notification_clears_on_the_next_key_press() {
    let api = Arc::new(FakeApi::sample());
    let mut app = open_sprint_board(api).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('c')).await;
    assert!(app.notification().is_some());

    press(&mut app, KeyCode::Down).await;
    assert!(app.notification().is_none());
}

#[tokio::test]
async fn test_done_list_override_routes_the_move() {
    let api = Arc::new(FakeApi::sample());
    let mut config = Config::default();
    config.ui.done_list = Some("Doing".to_string());

    let mut app = AppComponent::new(api.clone(), config);
    app.load_initial_data().await;
    press(&mut app, KeyCode::Down).await;
    press(&mut app, KeyCode::Enter).await;

    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Char('c')).await;

    assert!(api.calls().contains(&"move_card(c1, l2)".to_string()));
    assert_eq!(card_ids(&app, 1), vec!["c1"]);
}
