// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: initialization and cleanup, the event
// loop (keyboard input, redraw ticks), and key dispatch into App actions.

pub mod app;
pub mod theme;
pub mod toast;
pub mod ui;

use anyhow::{Context, Result};
use app::{App, Screen};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including on error, so a panic message stays readable.
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two event sources: keyboard input (polled) and a periodic tick that
/// drives redraws (so toasts expire even with no input). tokio::select!
/// waits on whichever fires first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: global keys first, then the current screen
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Global: Ctrl-C always quits
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        app.should_quit = true;
        return;
    }

    match app.screen {
        Screen::AnswerEntry => handle_answer_entry_key(app, key_event),
        Screen::Result { .. } => handle_result_key(app, key_event),
    }
}

/// Keys on the answer-entry screen: free text plus submit
fn handle_answer_entry_key(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Enter => {
            if !app.should_debounce_action() {
                app.submit_answer();
            }
        }
        KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            app.input.push(c);
        }
        _ => {}
    }
}

/// Keys on the result screen: the single acknowledgment action, the
/// always-available close, and the copy affordance (incorrect only)
fn handle_result_key(app: &mut App, key_event: KeyEvent) {
    match key_event.code {
        KeyCode::Enter => {
            if !app.should_debounce_action() {
                app.acknowledge();
            }
        }
        KeyCode::Esc => {
            if !app.should_debounce_action() {
                app.dismiss_result();
            }
        }
        KeyCode::Char('y') => {
            app.copy_answer();
        }
        _ => {}
    }
}
