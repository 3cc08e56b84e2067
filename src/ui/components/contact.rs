use crate::domain::FormField;
use crate::ui::components::home::HOSPITAL_PHONE;
use crate::ui::views::{AppointmentForm, FormFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const ADDRESS: &str = "Av. Salvador 364, Providencia, Región Metropolitana";
const EMAIL: &str = "123@hlc.cl";

pub fn render_contact(frame: &mut Frame, area: Rect, form: &AppointmentForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_contact_info(frame, chunks[0]);
    render_form(frame, chunks[1], form);
}

fn render_contact_info(frame: &mut Frame, area: Rect) {
    let label = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![Span::styled("Address: ", label), Span::raw(ADDRESS)]),
        Line::from(vec![Span::styled("Phone: ", label), Span::raw(HOSPITAL_PHONE)]),
        Line::from(vec![Span::styled("Email: ", label), Span::raw(EMAIL)]),
    ];

    let info = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Contact Information ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(info, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn render_form(frame: &mut Frame, area: Rect, form: &AppointmentForm) {
    let block = Block::default()
        .title(" Book an Appointment  [Tab] next field  [Enter] submit ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let focus = form.focus();
    let mut lines = Vec::new();

    let selector = match form.attached() {
        Some(doctor) => doctor.label(),
        None => "Select a doctor".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Doctor: ", focus_style(focus == FormFocus::DoctorSelect)),
        Span::raw(format!("◀ {} ▶", selector)),
    ]));

    if let Some(doctor) = form.attached() {
        lines.push(Line::from(Span::styled(
            format!(
                "  Selected: {} - {}, {} years of experience",
                doctor.name, doctor.specialty, doctor.experience
            ),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(Line::from(""));

    for field in FormField::ALL {
        let focused = focus == FormFocus::Field(field);
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label()), focus_style(focused)),
            Span::raw(format!("{}{}", form.fields().get(field), cursor)),
        ]));
    }
    lines.push(Line::from(""));

    let (button, button_style) = if form.submit_disabled() {
        ("[ Select a doctor ]", Style::default().fg(Color::DarkGray))
    } else {
        ("[ Book Appointment ]", focus_style(focus == FormFocus::Submit).fg(Color::Green))
    };
    let button_style = if focus == FormFocus::Submit {
        button_style.add_modifier(Modifier::REVERSED)
    } else {
        button_style
    };
    lines.push(Line::from(Span::styled(button, button_style)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
