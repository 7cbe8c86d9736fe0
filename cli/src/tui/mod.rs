pub mod app;
pub mod ui;

use std::io;
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use triplog_core::{TripRepository, TripService};

use crate::tui::app::{App, InputMode};

pub fn run<R: TripRepository>(service: TripService<R>, owner_id: String, selected_day: NaiveDate) -> Result<()> {
    let mut app = App::new(service, owner_id, selected_day)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, R: TripRepository>(terminal: &mut Terminal<B>, app: &mut App<R>) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(std::time::Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Left | KeyCode::Char('h') => app.previous_day(),
                KeyCode::Right | KeyCode::Char('l') => app.next_day(),
                KeyCode::Char('t') => app.jump_to_today(),
                KeyCode::Char('g') | KeyCode::Enter => app.jump_to_trip_day(),
                KeyCode::Char('a') => app.enter_add_mode(),
                _ => {}
            },
            InputMode::Adding => match key.code {
                KeyCode::Enter => app.submit_command(),
                KeyCode::Esc => app.exit_input_mode(),
                KeyCode::Char(c) => app.input_char(c),
                KeyCode::Backspace => app.delete_char(),
                KeyCode::Left => app.move_cursor_left(),
                KeyCode::Right => app.move_cursor_right(),
                _ => {}
            },
        }
    }
}
