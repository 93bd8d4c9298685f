//! Shared form rendering: labeled inputs with focus and inline errors.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::{COLOR_BORDER, COLOR_ERROR, COLOR_FOCUS, COLOR_HINT};
use crate::app::TextField;

/// Height of one labeled input (border + content + border).
pub const INPUT_HEIGHT: u16 = 3;

/// Render a labeled single-line input. The cursor is shown on the
/// focused field only.
pub fn render_input(frame: &mut Frame, area: Rect, label: &str, field: &TextField, focused: bool) {
    let border_color = if focused { COLOR_FOCUS } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", label));

    let inner = block.inner(area);
    let text = field.display();
    let paragraph = Paragraph::new(text.clone()).block(block);
    frame.render_widget(paragraph, area);

    if focused {
        // Cursor sits after the character it follows; clamp to the box.
        let x = inner.x + (field.cursor() as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

/// Render an inline validation/error line under a form.
pub fn render_form_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(error) = error {
        let paragraph = Paragraph::new(error)
            .style(Style::default().fg(COLOR_ERROR))
            .wrap(ratatui::widgets::Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

/// Render a dim helper line (key hints under a form).
pub fn render_form_hint(frame: &mut Frame, area: Rect, hint: &str) {
    let paragraph = Paragraph::new(hint).style(Style::default().fg(COLOR_HINT));
    frame.render_widget(paragraph, area);
}
