//! Dashboard screen: entry point after sign-in.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::App;
use crate::traits::{CredentialsProvider, HttpClient};

pub fn render_dashboard_screen<C, P>(frame: &mut Frame, app: &App<C, P>, area: Rect)
where
    C: HttpClient + Clone + 'static,
    P: CredentialsProvider + 'static,
{
    let rows = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).split(area);

    let greeting = match &app.identity {
        Some(identity) => {
            let firm = identity
                .firm_name
                .as_deref()
                .filter(|f| !f.is_empty())
                .map(|f| format!(" · {}", f))
                .unwrap_or_default();
            format!("Welcome back, {}{}", identity.display_name(), firm)
        }
        None => "Welcome".to_string(),
    };
    frame.render_widget(
        Paragraph::new(greeting)
            .style(Style::default().fg(COLOR_ACCENT))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(COLOR_BORDER)),
            ),
        rows[0],
    );

    let menu = vec![
        Line::from(""),
        menu_line("d", "Documents", "browse uploaded documents"),
        menu_line("u", "Upload", "upload new documents"),
        menu_line("r", "Reports", "view and generate title reports"),
        menu_line("p", "Profile", "edit your profile"),
        Line::from(""),
        menu_line("s", "Sign out", ""),
        menu_line("q", "Quit", ""),
    ];
    frame.render_widget(
        Paragraph::new(menu).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(" Menu "),
        ),
        rows[1],
    );
}

fn menu_line(key: &str, label: &str, detail: &str) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("  [{}] ", key), Style::default().fg(COLOR_ACCENT)),
        Span::raw(format!("{:<12}", label)),
    ];
    if !detail.is_empty() {
        spans.push(Span::styled(detail.to_string(), Style::default().fg(COLOR_DIM)));
    }
    Line::from(spans)
}
