use crate::domain::Doctor;
use crate::ui::views::{DoctorList, ServiceListState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_medical_team(
    frame: &mut Frame,
    area: Rect,
    doctors: &DoctorList,
    services: &ServiceListState,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Doctor cards
            Constraint::Percentage(35), // Services
        ])
        .split(area);

    render_doctor_list(frame, chunks[0], doctors);
    render_service_list(frame, chunks[1], services);

    if let Some(card) = doctors.highlighted().filter(|c| c.details_open()) {
        render_doctor_details(frame, centered_rect(60, 70, area), card.doctor());
    }
}

fn render_doctor_list(frame: &mut Frame, area: Rect, doctors: &DoctorList) {
    let block = Block::default()
        .title(" Our Medical Team  [↑/↓] move  [Enter] details  [s] select ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let items: Vec<ListItem> = doctors
        .cards()
        .iter()
        .map(|card| {
            let doctor = card.doctor();
            ListItem::new(vec![
                Line::from(Span::styled(
                    doctor.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    doctor.specialty.clone(),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    format!("{} years of experience", doctor.experience),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(doctors.cursor()));
    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn render_service_list(frame: &mut Frame, area: Rect, state: &ServiceListState) {
    let block = Block::default()
        .title(" Services ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.is_loading {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Loading services...",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let items: Vec<ListItem> = match &state.services {
        Some(services) if !services.is_empty() => services
            .iter()
            .map(|s| ListItem::new(format!("• {}", s.name)))
            .collect(),
        _ => vec![ListItem::new(Span::styled(
            "No services available",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(List::new(items).block(block), area);
}

/// Every weekday is listed with its hours. Days flagged unavailable are
/// dimmed and marked rather than hidden.
pub fn render_doctor_details(frame: &mut Frame, area: Rect, doctor: &Doctor) {
    let block = Block::default()
        .title(format!(" {} ", doctor.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let label = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(doctor.specialty.clone(), Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Experience: ", label),
            Span::raw(format!("{} years", doctor.experience)),
            Span::raw("    "),
            Span::styled("Consultations: ", label),
            Span::raw("+1000 patients"),
        ]),
        Line::from(""),
        Line::from(Span::styled("Office hours", label)),
    ];

    for (day, entry) in doctor.weekly_hours() {
        let line = match entry {
            Some(schedule) if schedule.available => Line::from(vec![
                Span::styled("◷ ", Style::default().fg(Color::Cyan)),
                Span::raw(format!("{:<10} {}", day.label(), schedule.hours)),
            ]),
            Some(schedule) => Line::from(Span::styled(
                format!("◷ {:<10} {} (unavailable)", day.label(), schedule.hours),
                Style::default().fg(Color::DarkGray),
            )),
            None => Line::from(Span::styled(
                format!("◷ {:<10} -", day.label()),
                Style::default().fg(Color::DarkGray),
            )),
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled("Specialty: ", label), Span::raw(doctor.specialty.clone())]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[Esc] close", Style::default().fg(Color::DarkGray))));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Weekday;
    use crate::sources::seed_doctors;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn details_popup_lists_all_weekdays() {
        let mut doctor = seed_doctors().remove(3);
        if let Some(tuesday) = doctor.schedule.get_mut(&Weekday::Tuesday) {
            tuesday.available = false;
        }

        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal
            .draw(|frame| render_doctor_details(frame, frame.size(), &doctor))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        for day in Weekday::ALL {
            assert!(text.contains(day.label()), "missing {}", day.label());
        }
        assert!(text.contains("14:00-20:00 (unavailable)"));
        assert!(text.contains("Neurology"));
    }

    #[test]
    fn service_list_shows_loading_then_services() {
        let mut state = ServiceListState::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal
            .draw(|frame| render_service_list(frame, frame.size(), &state))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("Loading services..."));

        state.finish(Ok(crate::sources::seed_services()));
        terminal
            .draw(|frame| render_service_list(frame, frame.size(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(!text.contains("Loading"));
        assert!(text.contains("Oncology"));
    }
}
