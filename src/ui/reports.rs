//! Report list and detail screens.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::helpers::{format_timestamp, SPINNER_FRAMES};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_FOCUS, COLOR_PENDING, COLOR_SUCCESS};
use crate::app::App;
use crate::models::ReportStatus;
use crate::traits::{CredentialsProvider, HttpClient};

fn status_style(status: ReportStatus) -> Style {
    match status {
        ReportStatus::Pending => Style::default().fg(COLOR_DIM),
        ReportStatus::Processing => Style::default().fg(COLOR_PENDING),
        ReportStatus::Completed => Style::default().fg(COLOR_SUCCESS),
        ReportStatus::Failed => Style::default().fg(COLOR_ERROR),
    }
}

pub fn render_reports_screen<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
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
        .title(format!(" Reports ({}) ", app.reports.len()));

    if app.reports.is_empty() {
        frame.render_widget(
            Paragraph::new("No reports yet. Select documents on the Documents screen and press [g].")
                .style(Style::default().fg(COLOR_DIM))
                .block(block),
            rows_layout[0],
        );
    } else {
        let rows: Vec<Row> = app
            .reports
            .iter()
            .enumerate()
            .map(|(i, report)| {
                let style = if i == app.reports_index {
                    Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(report.title.clone()),
                    Cell::from(format_timestamp(report.created_at)),
                    Cell::from(report.status.label()).style(status_style(report.status)),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(20),
                Constraint::Length(17),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(vec!["Title", "Created", "Status"]).style(Style::default().fg(COLOR_DIM)),
        )
        .block(block);
        frame.render_widget(table, rows_layout[0]);
    }

    frame.render_widget(
        Paragraph::new("[↑/↓] Move  [Enter] Open  [r] Refresh  [Esc] Back")
            .style(Style::default().fg(COLOR_DIM)),
        rows_layout[1],
    );
}

pub fn render_report_detail_screen<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Report ");

    let Some(report) = &app.report_detail else {
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
            Span::styled("Title:    ", Style::default().fg(COLOR_DIM)),
            Span::raw(report.title.clone()),
        ]),
        Line::from(vec![
            Span::styled("Created:  ", Style::default().fg(COLOR_DIM)),
            Span::raw(format_timestamp(report.created_at)),
        ]),
        Line::from(vec![
            Span::styled("Status:   ", Style::default().fg(COLOR_DIM)),
            Span::styled(report.status.label(), status_style(report.status)),
        ]),
        Line::from(vec![
            Span::styled("Sources:  ", Style::default().fg(COLOR_DIM)),
            Span::raw(format!("{} document(s)", report.document_ids.len())),
        ]),
        Line::from(""),
    ];

    match report.status {
        ReportStatus::Completed => {
            if let Some(content) = &report.content {
                for content_line in content.lines() {
                    lines.push(Line::raw(content_line.to_string()));
                }
            }
        }
        ReportStatus::Failed => {
            let detail = report
                .error_message
                .as_deref()
                .unwrap_or("Report generation failed.");
            lines.push(Line::styled(detail.to_string(), Style::default().fg(COLOR_ERROR)));
        }
        _ => {
            lines.push(Line::styled(
                format!("{} Generating report, refreshing every few seconds...", SPINNER_FRAMES[0]),
                Style::default().fg(COLOR_PENDING),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
