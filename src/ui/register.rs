//! Registration screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::forms::{render_form_error, render_form_hint, render_input, INPUT_HEIGHT};
use super::helpers::{centered_rect, SPINNER_FRAMES};
use super::theme::{COLOR_BORDER, COLOR_HEADER};
use crate::app::{App, RegisterField};
use crate::traits::{CredentialsProvider, HttpClient};

pub fn render_register_screen<C, P>(frame: &mut Frame, app: &App<C, P>)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let area = frame.area();
    let dialog = centered_rect(area, 52, 22);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" titledesk ");
    frame.render_widget(&block, dialog);
    let inner = block.inner(dialog);

    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let heading = if app.register_form.submitting {
        format!("{} Creating account...", SPINNER_FRAMES[0])
    } else {
        "Create your account".to_string()
    };
    frame.render_widget(
        Paragraph::new(heading)
            .style(Style::default().fg(COLOR_HEADER))
            .alignment(Alignment::Center),
        rows[0],
    );

    let form = &app.register_form;
    render_input(frame, rows[1], "Email", &form.email, form.focus == RegisterField::Email);
    render_input(
        frame,
        rows[2],
        "Password",
        &form.password,
        form.focus == RegisterField::Password,
    );
    render_input(
        frame,
        rows[3],
        "Full name",
        &form.full_name,
        form.focus == RegisterField::FullName,
    );
    render_input(
        frame,
        rows[4],
        "Firm name",
        &form.firm_name,
        form.focus == RegisterField::FirmName,
    );

    render_form_error(frame, rows[5], form.error.as_deref());
    render_form_hint(
        frame,
        rows[6],
        "[Tab] Next field  [Enter] Create account  [Esc] Back to sign in",
    );
}
