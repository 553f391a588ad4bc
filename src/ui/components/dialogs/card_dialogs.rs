//! Card dialogs: creation input, delete confirmation, read-only details.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::ui::layout::LayoutManager;

/// Render the card creation dialog: one input line plus instructions.
pub fn render_card_creation_dialog(f: &mut Frame, area: Rect, input_buffer: &str, list_name: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(" New Card ", Color::Green);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let input_rect = Rect::new(inner.x, inner.y, inner.width, 3);
    f.render_widget(
        create_input_paragraph(input_buffer, &format!("Card name ({list_name})")),
        input_rect,
    );

    let instructions_rect = Rect::new(inner.x, inner.y + 4, inner.width, 1);
    let instructions = [
        shortcuts::ENTER_CONFIRM,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(create_instructions_paragraph(&instructions), instructions_rect);
}

/// Render the delete confirmation dialog naming the card.
pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, card_name: &str) {
    let dialog_area = LayoutManager::centered_rect(60, 25, area);
    f.render_widget(Clear, dialog_area);

    let card_preview = if card_name.chars().count() > 40 {
        let truncated: String = card_name.chars().take(37).collect();
        format!("{truncated}...")
    } else {
        card_name.to_string()
    };

    let confirm_text = format!("Delete '{card_preview}'?\n\nThis action cannot be undone!\n\nPress 'y' to confirm or 'n'/Esc to cancel");

    let confirm_paragraph = Paragraph::new(confirm_text)
        .block(create_dialog_block(" Confirm Delete ", Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(confirm_paragraph, dialog_area);
}

/// Render the read-only card details dialog.
pub fn render_card_details_dialog(f: &mut Frame, area: Rect, title: &str, description: &str) {
    let dialog_area = LayoutManager::centered_rect(70, 60, area);
    f.render_widget(Clear, dialog_area);

    let heading = format!(" Details for {title} ");
    let block = create_dialog_block(&heading, Color::Cyan);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let body_rect = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(2));
    let body = Paragraph::new(description)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });
    f.render_widget(body, body_rect);

    if inner.height >= 2 {
        let instructions_rect = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        f.render_widget(create_instructions_paragraph(&[shortcuts::ESC_CLOSE]), instructions_rect);
    }
}
