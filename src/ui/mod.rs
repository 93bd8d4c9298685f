//! UI rendering for the titledesk TUI.
//!
//! One render function per screen, dispatched from [`render`]. Signed-in
//! screens share a header bar (app name, screen title, signed-in user)
//! and a notice line at the bottom; login/register render as centered
//! dialogs on an empty background.

mod dashboard;
mod documents;
mod forms;
mod helpers;
mod login;
mod profile;
mod register;
mod reports;
pub mod theme;
mod upload;

pub use helpers::{centered_rect, format_size, format_timestamp, truncate_to_width};

use ratatui::{prelude::*, widgets::Paragraph};

use crate::app::{App, NoticeKind, Screen};
use crate::traits::{CredentialsProvider, HttpClient};
use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS};

/// Render the current screen.
pub fn render<C, P>(frame: &mut Frame, app: &App<C, P>)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    match app.screen {
        Screen::Login => login::render_login_screen(frame, app),
        Screen::Register => register::render_register_screen(frame, app),
        _ => render_signed_in(frame, app),
    }
}

fn render_signed_in<C, P>(frame: &mut Frame, app: &App<C, P>)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let area = frame.area();
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, rows[0]);

    match app.screen {
        Screen::Dashboard => dashboard::render_dashboard_screen(frame, app, rows[1]),
        Screen::Documents => documents::render_documents_screen(frame, app, rows[1]),
        Screen::DocumentDetail => documents::render_document_detail_screen(frame, app, rows[1]),
        Screen::Upload => upload::render_upload_screen(frame, app, rows[1]),
        Screen::Reports => reports::render_reports_screen(frame, app, rows[1]),
        Screen::ReportDetail => reports::render_report_detail_screen(frame, app, rows[1]),
        Screen::Profile => profile::render_profile_screen(frame, app, rows[1]),
        // Handled by render().
        Screen::Login | Screen::Register => {}
    }

    render_notice(frame, app, rows[2]);
}

fn render_header<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let user = app
        .identity
        .as_ref()
        .map(|i| i.display_name().to_string())
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(" titledesk ", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
        Span::styled("│ ", Style::default().fg(COLOR_BORDER)),
        Span::raw(app.screen.title()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let right = Paragraph::new(Line::from(Span::styled(
        format!("{} ", user),
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, area);
}

fn render_notice<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let Some(notice) = &app.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Info => COLOR_DIM,
        NoticeKind::Success => COLOR_SUCCESS,
        NoticeKind::Error => COLOR_ERROR,
    };
    frame.render_widget(
        Paragraph::new(format!(" {}", notice.text)).style(Style::default().fg(color)),
        area,
    );
}
