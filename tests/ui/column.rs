use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use plankan::api::{Card, List};
use plankan::ui::components::ColumnComponent;
use plankan::ui::core::Component;

fn list(id: &str, name: &str) -> List {
    List {
        id: id.to_string(),
        name: Some(name.to_string()),
        board_id: "b1".to_string(),
    }
}

fn card(id: &str, name: &str, list_id: &str) -> Card {
    Card {
        id: id.to_string(),
        name: Some(name.to_string()),
        description: None,
        list_id: list_id.to_string(),
    }
}

fn column_with_cards(count: usize) -> ColumnComponent {
    let cards = (0..count)
        .map(|i| card(&format!("c{i}"), &format!("Card {i}"), "l1"))
        .collect();
    ColumnComponent::new(list("l1", "To Do"), cards)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_focus_transfers_to_first_card_on_entry() {
    let mut column = column_with_cards(3);
    column.on_focus();
    assert_eq!(column.focused_card, Some(0));
}

#[test]
fn test_empty_column_keeps_column_level_focus() {
    let mut column = column_with_cards(0);
    column.on_focus();
    assert_eq!(column.focused_card, None);

    // Up/Down in an empty column stay a no-op
    column.handle_key_events(key(KeyCode::Down));
    assert_eq!(column.focused_card, None);
}

#[test]
fn test_card_navigation_clamps_at_both_ends() {
    let mut column = column_with_cards(3);
    column.on_focus();

    // Up at the first card stays put
    column.focus_previous_card();
    assert_eq!(column.focused_card, Some(0));

    column.focus_next_card();
    column.focus_next_card();
    assert_eq!(column.focused_card, Some(2));

    // Down at the last card stays put
    column.focus_next_card();
    assert_eq!(column.focused_card, Some(2));
}

#[test]
fn test_blur_clears_card_focus() {
    let mut column = column_with_cards(2);
    column.on_focus();
    column.focus_next_card();
    column.on_blur();
    assert_eq!(column.focused_card, None);
}

#[test]
fn test_push_card_appends_at_end() {
    let mut column = column_with_cards(2);
    column.push_card(card("c9", "Newest", "l1"));
    assert_eq!(column.card_count(), 3);
    assert_eq!(column.cards[2].card.id, "c9");
}

#[test]
fn test_remove_card_keeps_focus_on_a_live_card() {
    let mut column = column_with_cards(3);
    column.on_focus();
    column.focus_next_card();
    column.focus_next_card();
    assert_eq!(column.focused_card, Some(2));

    // Removing the focused last card clamps focus to the new last card
    let removed = column.remove_card("c2").unwrap();
    assert_eq!(removed.id, "c2");
    assert_eq!(column.focused_card, Some(1));

    // Removing a card before the focus shifts the index down
    let mut column = column_with_cards(3);
    column.on_focus();
    column.focus_next_card();
    column.remove_card("c0");
    assert_eq!(column.focused_card, Some(0));
    assert_eq!(column.focused_card().unwrap().id, "c1");
}

#[test]
fn test_removing_the_only_card_clears_focus() {
    let mut column = column_with_cards(1);
    column.on_focus();
    column.remove_card("c0");
    assert!(column.is_empty());
    assert_eq!(column.focused_card, None);
}

#[test]
fn test_remove_unknown_card_is_none() {
    let mut column = column_with_cards(2);
    assert!(column.remove_card("missing").is_none());
    assert_eq!(column.card_count(), 2);
}
