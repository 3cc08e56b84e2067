use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const HOSPITAL_PHONE: &str = "+56 9 9123 4567";

pub fn render_home(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Cards
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Hospital Las Casitas",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[1]);

    render_card(
        frame,
        cards[0],
        " Our Services ",
        "Comprehensive medical care with the best specialists.",
        "[t] See medical team",
    );
    render_card(
        frame,
        cards[1],
        " Book an Appointment ",
        "Reserve your consultation quickly and easily.",
        "[a] Request appointment",
    );
    render_card(
        frame,
        cards[2],
        " 24/7 Care ",
        "We are available for you at any time.",
        &format!("Call {}", HOSPITAL_PHONE),
    );
}

fn render_card(frame: &mut Frame, area: Rect, title: &str, body: &str, action: &str) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text = vec![
        Line::from(body.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            action.to_string(),
            Style::default().fg(Color::Yellow),
        )),
    ];

    let card = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}
