//! Login screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::forms::{render_form_error, render_form_hint, render_input, INPUT_HEIGHT};
use super::helpers::{centered_rect, SPINNER_FRAMES};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::{App, LoginField};
use crate::traits::{CredentialsProvider, HttpClient};

const TITLEDESK_LOGO: &str = "titledesk";

pub fn render_login_screen<C, P>(frame: &mut Frame, app: &App<C, P>)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let area = frame.area();
    let dialog = centered_rect(area, 48, 16);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", TITLEDESK_LOGO));
    frame.render_widget(&block, dialog);
    let inner = block.inner(dialog);

    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let heading = if app.loading {
        format!("{} Checking session...", SPINNER_FRAMES[0])
    } else if app.login_form.submitting {
        format!("{} Signing in...", SPINNER_FRAMES[0])
    } else {
        "Sign in to continue".to_string()
    };
    frame.render_widget(
        Paragraph::new(heading)
            .style(Style::default().fg(COLOR_HEADER))
            .alignment(Alignment::Center),
        rows[0],
    );

    render_input(
        frame,
        rows[1],
        "Email",
        &app.login_form.email,
        app.login_form.focus == LoginField::Email,
    );
    render_input(
        frame,
        rows[2],
        "Password",
        &app.login_form.password,
        app.login_form.focus == LoginField::Password,
    );

    render_form_error(frame, rows[3], app.login_form.error.as_deref());
    render_form_hint(
        frame,
        rows[4],
        "[Tab] Next field  [Enter] Sign in  [F2] Register  [Esc] Quit",
    );

    let footer = Paragraph::new("Title search, organized.")
        .style(Style::default().fg(COLOR_DIM))
        .alignment(Alignment::Center);
    frame.render_widget(footer, rows[5]);
}
