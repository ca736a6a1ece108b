// Frame rendering - screen layouts
//
// Pure presentation: everything drawn here is derived from App state built
// by the interpreter and the router. The two result presentations mirror
// the product design - a centered celebration for correct, and a review
// card with the expected answer for incorrect.

use super::app::{App, Screen};
use crate::result::{Outcome, ResultState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Main render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title bar
            Constraint::Min(8),    // screen content
            Constraint::Length(1), // hint bar
        ])
        .split(f.area());

    render_title(f, chunks[0], app);

    match &app.screen {
        Screen::AnswerEntry => render_answer_entry(f, chunks[1], app),
        Screen::Result { state, celebration } => match state.outcome {
            Outcome::Correct => render_correct(f, chunks[1], app, celebration),
            Outcome::Incorrect => render_incorrect(f, chunks[1], app, state),
        },
    }

    render_hints(f, chunks[2], app);

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
    app.clear_expired_toast();
}

fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " lexidrill ",
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· translation drill", Style::default().fg(app.theme.dim)),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(title, area);
}

fn render_answer_entry(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading
            Constraint::Length(4), // prompt
            Constraint::Length(4), // input
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let heading = Paragraph::new("Translate this sentence").style(
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(heading, chunks[0]);

    let prompt = Paragraph::new(format!("\u{201c}{}\u{201d}", app.deck.current().source))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .padding(Padding::horizontal(1)),
        );
    f.render_widget(prompt, chunks[1]);

    let input = Paragraph::new(app.input.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(" your answer ")
                .padding(Padding::horizontal(1)),
        );
    f.render_widget(input, chunks[2]);
}

fn render_correct(f: &mut Frame, area: Rect, app: &App, celebration: &str) {
    // Vertically centered stack: banner, celebration line, continue button
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(area);

    let banner = Paragraph::new("¡Correcto!")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.correct)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(banner, chunks[1]);

    let line = Paragraph::new(celebration)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.dim));
    f.render_widget(line, chunks[3]);

    render_continue_button(f, chunks[4], app, app.theme.correct);
}

fn render_incorrect(f: &mut Frame, area: Rect, app: &App, state: &ResultState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // review tag
            Constraint::Length(2), // heading
            Constraint::Length(4), // prompt recap
            Constraint::Length(4), // submitted answer
            Constraint::Length(6), // error card
            Constraint::Length(3), // got-it button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    // Static display value, not computed here (scheduling is the lesson
    // engine's job)
    let review_tag = Paragraph::new("Review in 2 days")
        .alignment(Alignment::Right)
        .style(Style::default().fg(app.theme.highlight));
    f.render_widget(review_tag, chunks[0]);

    // Recap of what was being asked, so the rejected answer has context
    let heading = Paragraph::new("Translate this sentence").style(
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(heading, chunks[1]);

    let prompt = Paragraph::new(format!("\u{201c}{}\u{201d}", app.deck.current().source))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .padding(Padding::horizontal(1)),
        );
    f.render_widget(prompt, chunks[2]);

    let submitted = Paragraph::new(fit_width(
        &state.submitted_answer,
        area.width.saturating_sub(6) as usize,
    ))
    .style(Style::default().fg(app.theme.dim))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.dim))
            .title(" what you wrote ")
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(submitted, chunks[3]);

    let card_lines = vec![
        Line::from(Span::styled(
            "✗ Incorrect",
            Style::default()
                .fg(app.theme.incorrect)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Correct Answer:",
            Style::default().fg(app.theme.incorrect),
        )),
        Line::from(Span::styled(
            fit_width(
                &state.expected_answer,
                area.width.saturating_sub(6) as usize,
            ),
            Style::default()
                .fg(app.theme.incorrect)
                .add_modifier(Modifier::UNDERLINED),
        )),
    ];
    let card = Paragraph::new(card_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.incorrect))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(card, chunks[4]);

    render_continue_button(f, chunks[5], app, app.theme.incorrect);
}

fn render_continue_button(f: &mut Frame, area: Rect, app: &App, color: ratatui::style::Color) {
    let button = Paragraph::new(app.continue_label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(button, area);
}

/// Hint bar: available keys for the current screen, plus the most recent
/// warning from the log buffer if there is one
fn render_hints(f: &mut Frame, area: Rect, app: &App) {
    let hints = match &app.screen {
        Screen::AnswerEntry => "Enter check · Esc quit",
        Screen::Result { state, .. } if state.outcome.is_correct() => "Enter continue · Esc close",
        Screen::Result { .. } => "Enter got it · y copy answer · Esc close",
    };

    let line = match app.log_buffer.last_warning() {
        Some(entry) => Line::from(vec![
            Span::styled(hints, Style::default().fg(app.theme.dim)),
            Span::raw("  "),
            Span::styled(
                format!("⚠ {}", entry.message),
                Style::default().fg(app.theme.highlight),
            ),
        ]),
        None => Line::from(Span::styled(hints, Style::default().fg(app.theme.dim))),
    };

    f.render_widget(Paragraph::new(line), area);
}

/// Truncate to a display width, respecting wide characters. Appends an
/// ellipsis when anything was cut.
fn fit_width(s: &str, max_width: usize) -> String {
    // Even the ellipsis needs a cell
    if max_width == 0 {
        return String::new();
    }
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}
