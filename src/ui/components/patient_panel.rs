use crate::domain::{PatientPanel, PatientStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

fn status_color(status: PatientStatus) -> Color {
    match status {
        PatientStatus::Waiting => Color::Yellow,
        PatientStatus::InConsultation => Color::Blue,
        PatientStatus::Attended => Color::Green,
    }
}

pub fn render_patient_panel(frame: &mut Frame, area: Rect, panel: &PatientPanel) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Patients
            Constraint::Percentage(35), // Control panel
        ])
        .split(area);

    render_patients(frame, chunks[0], panel);
    render_counts(frame, chunks[1], panel);
}

fn render_patients(frame: &mut Frame, area: Rect, panel: &PatientPanel) {
    let block = Block::default()
        .title(format!(" Current Patients  [f] filter: {} ", panel.filter().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Cell::from("Age").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Cell::from("Status").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    ]);

    let rows: Vec<Row> = panel
        .filtered()
        .into_iter()
        .map(|p| {
            Row::new(vec![
                Cell::from(p.name.clone()),
                Cell::from(format!("{}", p.age)),
                Cell::from(p.status.label()).style(Style::default().fg(status_color(p.status))),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        vec![
            Constraint::Min(20),    // Name
            Constraint::Length(5),  // Age
            Constraint::Length(16), // Status
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);

    frame.render_widget(table, area);
}

fn render_counts(frame: &mut Frame, area: Rect, panel: &PatientPanel) {
    let stats = panel.stats();
    let counter = |label: &str, value: usize, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<16}", label), Style::default().fg(color)),
            Span::styled(format!("{}", value), Style::default().add_modifier(Modifier::BOLD)),
        ])
    };

    let lines = vec![
        counter("Total patients", stats.total, Color::Red),
        counter("Waiting", stats.waiting, status_color(PatientStatus::Waiting)),
        counter("Attended", stats.attended, status_color(PatientStatus::Attended)),
        counter("In consultation", stats.in_consultation, status_color(PatientStatus::InConsultation)),
    ];

    let counts = Paragraph::new(lines).block(
        Block::default()
            .title(" Control Panel ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(counts, area);
}
