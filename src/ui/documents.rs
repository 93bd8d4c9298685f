//! Document list and detail screens.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::helpers::{format_timestamp, truncate_to_width};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_PENDING, COLOR_SUCCESS};
use crate::app::App;
use crate::models::DocumentStatus;
use crate::traits::{CredentialsProvider, HttpClient};

fn status_style(status: DocumentStatus) -> Style {
    match status {
        DocumentStatus::Uploaded => Style::default().fg(COLOR_DIM),
        DocumentStatus::Processing => Style::default().fg(COLOR_PENDING),
        DocumentStatus::Processed => Style::default().fg(COLOR_SUCCESS),
    }
}

pub fn render_documents_screen<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let rows_layout =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(
            " Documents ({}) — {} selected for report ",
            app.documents.len(),
            app.selected_documents.len()
        ));

    if app.documents.is_empty() {
        frame.render_widget(
            Paragraph::new("No documents yet. Press [u] to upload.")
                .style(Style::default().fg(COLOR_DIM))
                .block(block),
            rows_layout[0],
        );
    } else {
        // Fixed columns take 4 + 17 + 11 cells plus borders and spacing.
        let name_width = area.width.saturating_sub(38).max(20) as usize;
        let rows: Vec<Row> = app
            .documents
            .iter()
            .enumerate()
            .map(|(i, doc)| {
                let mark = if app.selected_documents.contains(&doc.id) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let style = if i == app.documents_index {
                    Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(mark),
                    Cell::from(truncate_to_width(&doc.filename, name_width)),
                    Cell::from(format_timestamp(doc.upload_date)),
                    Cell::from(doc.status.label()).style(status_style(doc.status)),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(20),
                Constraint::Length(17),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(vec!["", "Filename", "Uploaded", "Status"])
                .style(Style::default().fg(COLOR_DIM)),
        )
        .block(block);
        frame.render_widget(table, rows_layout[0]);
    }

    frame.render_widget(
        Paragraph::new(
            "[↑/↓] Move  [Space] Select  [Enter] Open  [g] Generate report  [u] Upload  [r] Refresh  [Esc] Back",
        )
        .style(Style::default().fg(COLOR_DIM)),
        rows_layout[1],
    );
}

pub fn render_document_detail_screen<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Document ");

    let Some(doc) = &app.document_detail else {
        frame.render_widget(
            Paragraph::new("Loading...")
                .style(Style::default().fg(COLOR_DIM))
                .block(block),
            area,
        );
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("File:     ", Style::default().fg(COLOR_DIM)),
            Span::raw(doc.filename.clone()),
        ]),
        Line::from(vec![
            Span::styled("Uploaded: ", Style::default().fg(COLOR_DIM)),
            Span::raw(format_timestamp(doc.upload_date)),
        ]),
        Line::from(vec![
            Span::styled("Status:   ", Style::default().fg(COLOR_DIM)),
            Span::styled(doc.status.label(), status_style(doc.status)),
        ]),
        Line::from(""),
    ];

    match &doc.extracted_text {
        Some(text) if !text.is_empty() => {
            lines.push(Line::styled("Extracted text:", Style::default().fg(COLOR_DIM)));
            for text_line in text.lines() {
                lines.push(Line::raw(text_line.to_string()));
            }
        }
        _ => lines.push(Line::styled(
            "No extracted text yet.",
            Style::default().fg(COLOR_DIM),
        )),
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
