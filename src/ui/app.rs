use crate::config::AppConfig;
use crate::event::{AppEvent, EventSender};
use crate::sources::{spawn_service_fetch, DoctorDirectory, SeedDoctorSource, SeedServiceSource, ViewContext};
use crate::ui::components::{
    render_contact, render_footer, render_header, render_home, render_medical_team, render_patient_panel,
};
use crate::ui::state::{AppState, Page};
use crate::ui::views::FormFocus;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, trace};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the UI loop
    let result = run_app(&mut terminal, config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: AppConfig) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    let directory = DoctorDirectory::mount(&SeedDoctorSource).context("Failed to mount doctor directory")?;
    let ctx = ViewContext::with_directory(directory);
    let mut state = AppState::new(&ctx, config.clone(), tx.clone()).context("Failed to build views")?;

    spawn_service_fetch(Arc::new(SeedServiceSource), config.service_delay, tx.clone());
    let input = spawn_input_reader(tx);

    loop {
        let started = Instant::now();
        terminal.draw(|frame| render(frame, &state))?;
        trace!("Rendered {:?} in {:?}", state.page(), started.elapsed());

        let Some(event) = rx.recv().await else {
            break;
        };
        handle_event(event, &mut state);

        if state.should_quit {
            break;
        }
    }

    state.teardown();
    // Closing the channel tells the input thread to stop.
    drop(rx);
    if input.join().is_err() {
        error!("Input thread panicked");
    }

    Ok(())
}

/// Blocking crossterm reader, forwarding input into the UI task's queue.
fn spawn_input_reader(events: EventSender) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || {
        while !events.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    error!("Error polling terminal events: {}", e);
                    break;
                }
            }

            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => events.send(AppEvent::Key(key)),
                Ok(Event::Resize(_, _)) => events.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    error!("Error reading terminal event: {}", e);
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        }
    })
}

pub fn render(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(10),   // Page
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    render_header(frame, chunks[0], state);

    match state.page() {
        Page::Home => render_home(frame, chunks[1]),
        Page::MedicalTeam => render_medical_team(frame, chunks[1], &state.doctor_list, &state.services),
        Page::Contact => render_contact(frame, chunks[1], &state.form),
        Page::Panel => {
            if let Some(mounted) = state.panel() {
                render_patient_panel(frame, chunks[1], &mounted.panel);
            }
        }
    }

    render_footer(frame, chunks[2], state);
}

pub fn handle_event(event: AppEvent, state: &mut AppState) {
    match event {
        AppEvent::Key(key) => handle_key_event(key, state),
        other => state.apply_event(other),
    }
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit();
        return;
    }

    let nav = match key.code {
        KeyCode::F(n @ 1..=4) => Page::ALL.get(n as usize - 1).copied(),
        _ => None,
    };
    if let Some(page) = nav {
        state.navigate(page);
        return;
    }

    match state.page() {
        Page::Contact => handle_form_key(key, state),
        Page::Home => match key.code {
            KeyCode::Char('t') => state.navigate(Page::MedicalTeam),
            KeyCode::Char('a') => state.navigate(Page::Contact),
            _ => handle_common_key(key, state),
        },
        Page::MedicalTeam => match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.doctor_list.move_up(),
            KeyCode::Down | KeyCode::Char('j') => state.doctor_list.move_down(),
            KeyCode::Enter | KeyCode::Char('d') => state.doctor_list.toggle_details(),
            KeyCode::Char('s') => state.select_highlighted_doctor(),
            KeyCode::Esc if state.doctor_list.close_details() => {}
            _ => handle_common_key(key, state),
        },
        Page::Panel => match key.code {
            KeyCode::Char('f') => state.cycle_panel_filter(),
            _ => handle_common_key(key, state),
        },
    }
}

fn handle_common_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => state.quit(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            state.navigate(Page::ALL[index]);
        }
        _ => {}
    }
}

fn handle_form_key(key: KeyEvent, state: &mut AppState) {
    if key.code == KeyCode::Enter && state.form.focus() == FormFocus::Submit {
        // A disabled submit control ignores activation.
        if !state.form.submit_disabled() {
            state.submit_appointment();
        }
        return;
    }

    let form = &mut state.form;
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left if form.focus() == FormFocus::DoctorSelect => form.cycle_doctor(false),
        KeyCode::Right if form.focus() == FormFocus::DoctorSelect => form.cycle_doctor(true),
        KeyCode::Enter => form.focus_next(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.input_char(c),
        _ => {}
    }
}
