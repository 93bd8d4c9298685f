//! Upload screen: stage file paths and watch the batch progress.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::forms::{render_input, INPUT_HEIGHT};
use super::helpers::{format_size, SPINNER_FRAMES};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};
use crate::app::App;
use crate::models::UploadState;
use crate::traits::{CredentialsProvider, HttpClient};

pub fn render_upload_screen<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let rows = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_input(frame, rows[0], "File path", &app.upload_input, !app.uploading);

    let staged = if app.pending_upload_paths.is_empty() {
        "Type a file path and press Enter to stage it.".to_string()
    } else {
        format!(
            "{} file(s) staged — press Enter on an empty input to start",
            app.pending_upload_paths.len()
        )
    };
    frame.render_widget(
        Paragraph::new(staged).style(Style::default().fg(COLOR_DIM)),
        rows[1],
    );

    let items: Vec<ListItem> = if app.uploads.is_empty() {
        app.pending_upload_paths
            .iter()
            .map(|path| ListItem::new(format!("  {}", path.display())))
            .collect()
    } else {
        app.uploads
            .iter()
            .map(|entry| {
                let (marker, style) = match &entry.state {
                    UploadState::Uploading => {
                        (SPINNER_FRAMES[0].to_string(), Style::default().fg(COLOR_PENDING))
                    }
                    UploadState::Success => ("✓".to_string(), Style::default().fg(COLOR_SUCCESS)),
                    UploadState::Error(_) => ("✗".to_string(), Style::default().fg(COLOR_ERROR)),
                };
                let detail = match &entry.state {
                    UploadState::Error(message) => format!(" — {}", message),
                    _ => String::new(),
                };
                ListItem::new(Line::styled(
                    format!(
                        " {} {} ({}){}",
                        marker,
                        entry.name,
                        format_size(entry.size),
                        detail
                    ),
                    style,
                ))
            })
            .collect()
    };

    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" Files "),
        ),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new("[Enter] Stage path / start upload  [Esc] Back").style(Style::default().fg(COLOR_DIM)),
        rows[3],
    );
}
