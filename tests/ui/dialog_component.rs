use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use plankan::logger::Logger;
use plankan::ui::components::DialogComponent;
use plankan::ui::core::{Action, Component, DialogType};

fn dialog() -> DialogComponent {
    DialogComponent::new(Logger::new())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_card_creation_submit_produces_create_action() {
    let mut dialog = dialog();
    dialog.show(DialogType::CardCreation {
        list_id: "l1".to_string(),
        list_name: "To Do".to_string(),
    });

    type_text(&mut dialog, "Buy milk");
    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::CreateCard { list_id, name } => {
            assert_eq!(list_id, "l1");
            assert_eq!(name, "Buy milk");
        }
        other => panic!("expected create action, got {other:?}"),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_card_name_is_trimmed_on_submit() {
    let mut dialog = dialog();
    dialog.show(DialogType::CardCreation {
        list_id: "l1".to_string(),
        list_name: "To Do".to_string(),
    });

    type_text(&mut dialog, "  Buy milk  ");
    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::CreateCard { name, .. } => assert_eq!(name, "Buy milk"),
        other => panic!("expected create action, got {other:?}"),
    }
}

#[test]
fn test_empty_card_name_keeps_dialog_open() {
    let mut dialog = dialog();
    dialog.show(DialogType::CardCreation {
        list_id: "l1".to_string(),
        list_name: "To Do".to_string(),
    });

    type_text(&mut dialog, "   ");
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
    assert!(dialog.is_visible());
}

#[test]
fn test_escape_cancels_card_creation_silently() {
    let mut dialog = dialog();
    dialog.show(DialogType::CardCreation {
        list_id: "l1".to_string(),
        list_name: "To Do".to_string(),
    });

    type_text(&mut dialog, "half typed");
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::None));
    assert!(!dialog.is_visible());
    assert!(dialog.input_buffer.is_empty());
}

#[test]
fn test_backspace_edits_the_input_buffer() {
    let mut dialog = dialog();
    dialog.show(DialogType::CardCreation {
        list_id: "l1".to_string(),
        list_name: "To Do".to_string(),
    });

    type_text(&mut dialog, "abc");
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "ab");
}

#[test]
fn test_delete_confirmation_yes_produces_delete_action() {
    let mut dialog = dialog();
    dialog.show(DialogType::DeleteConfirmation {
        card_id: "c1".to_string(),
        card_name: "Write spec".to_string(),
    });

    match dialog.handle_key_events(key(KeyCode::Char('y'))) {
        Action::DeleteCard { card_id } => assert_eq!(card_id, "c1"),
        other => panic!("expected delete action, got {other:?}"),
    }
    assert!(!dialog.is_visible());
}

#[test]
fn test_delete_confirmation_no_is_a_silent_noop() {
    let mut dialog = dialog();
    dialog.show(DialogType::DeleteConfirmation {
        card_id: "c1".to_string(),
        card_name: "Write spec".to_string(),
    });

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::None));
    assert!(!dialog.is_visible());
}

#[test]
fn test_details_dialog_closes_on_escape_and_enter() {
    for close_key in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
        let mut dialog = dialog();
        dialog.show(DialogType::CardDetails {
            title: "Write spec".to_string(),
            description: "No description entered.".to_string(),
        });
        dialog.handle_key_events(key(close_key));
        assert!(!dialog.is_visible());
    }
}

#[test]
fn test_showing_a_dialog_resets_previous_state() {
    let mut dialog = dialog();
    dialog.show(DialogType::CardCreation {
        list_id: "l1".to_string(),
        list_name: "To Do".to_string(),
    });
    type_text(&mut dialog, "leftover");

    dialog.show(DialogType::Help);
    assert!(dialog.input_buffer.is_empty());
}
