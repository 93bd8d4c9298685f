//! Profile screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::forms::{render_form_error, render_form_hint, render_input, INPUT_HEIGHT};
use super::helpers::SPINNER_FRAMES;
use super::theme::{COLOR_BORDER, COLOR_HEADER};
use crate::app::{App, ProfileField};
use crate::traits::{CredentialsProvider, HttpClient};

pub fn render_profile_screen<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Profile ");
    frame.render_widget(&block, area);
    let inner = block.inner(area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let heading = if app.profile_form.submitting {
        format!("{} Saving...", SPINNER_FRAMES[0])
    } else {
        "Edit your profile".to_string()
    };
    frame.render_widget(
        Paragraph::new(heading).style(Style::default().fg(COLOR_HEADER)),
        rows[0],
    );

    let form = &app.profile_form;
    render_input(
        frame,
        rows[1],
        "Full name",
        &form.full_name,
        form.focus == ProfileField::FullName,
    );
    render_input(
        frame,
        rows[2],
        "Firm name",
        &form.firm_name,
        form.focus == ProfileField::FirmName,
    );
    render_input(frame, rows[3], "Email", &form.email, form.focus == ProfileField::Email);

    render_form_error(frame, rows[4], form.error.as_deref());
    render_form_hint(frame, rows[5], "[Tab] Next field  [Enter] Save  [Esc] Back");
}
