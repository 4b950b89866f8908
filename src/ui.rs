// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;
pub mod quit_confirm;

use crate::app::{App, AppState};
use crate::config::Config;
use crate::constants::TICK_RATE_MS;
use crate::errors::ChatfolioResult;
use crate::key_handlers::handle_key_event;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::{mpsc, Mutex};

/// Enum for different types of events.
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI until the visitor quits.
pub async fn run_ui(config: Config) -> ChatfolioResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = Arc::new(Mutex::new(App::new(config)));
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: Arc<Mutex<App>>,
) -> ChatfolioResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    let tick_rate = Duration::from_millis(TICK_RATE_MS);

    // Crossterm polling blocks, so it gets its own thread
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!("Failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        {
            let guard = app.lock().await;
            if guard.state == AppState::Quit {
                info!("Visitor left the chat");
                break;
            }
            terminal.draw(|f| draw(f, &guard))?;
        }

        match rx.recv().await {
            Some(Event::Input(CEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                handle_key_event(key, &app).await?;
            }
            Some(Event::Input(_)) => {}
            Some(Event::Tick) => app.lock().await.tick(),
            None => break,
        }
    }

    Ok(())
}

/// Renders the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Messages
            Constraint::Length(1), // Status
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    header::draw_header(f, chunks[0], app);
    chat::draw_messages(f, chunks[1], app);
    app.status_indicator.render(f, chunks[2]);
    chat::draw_input(f, chunks[3], app);
    footer::draw_footer(f, chunks[4], app);

    if app.state == AppState::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, f.area());
    }
}
