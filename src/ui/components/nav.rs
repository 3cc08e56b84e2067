use crate::ui::state::{AppState, Page};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("F{} {}", i + 1, page.label())))
        .collect();
    let selected = Page::ALL.iter().position(|p| *p == state.page()).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(Span::styled(
                    " HOSPITAL LAS CASITAS ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(tabs, area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::raw("Committed to your health  "),
        Span::styled(
            "[F1] Home  [F2] Medical Team  [F3] Book Appointment  [Ctrl+C] Quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(notice) = state.notice() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            notice.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(footer, area);
}
