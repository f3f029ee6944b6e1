//! TUI rendering with ratatui
//!
//! Panels for the Bulls and Cows game.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::answer_marks;
use crate::solver::universe_size;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Player guesses
            Constraint::Percentage(50), // Solver trace + messages
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🐂 BULLS AND COWS - {} digits, {} possible secrets",
        app.length,
        universe_size(app.length)
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let win = entry.answer.is_win(app.length);
            let guess_style = if win {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(entry.guess.to_string(), guess_style),
                Span::raw("  "),
                Span::styled(
                    answer_marks(entry.answer, app.length),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("  {}", entry.answer)),
            ]))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Your Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Solver trace
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    render_solver_trace(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_solver_trace(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.solver_trace.is_empty() {
        vec![ListItem::new("Press 's' to let the solver try").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.solver_trace
            .iter()
            .map(|record| {
                ListItem::new(format!(
                    "#{:<3} {}  {}",
                    record.index,
                    record.guess,
                    answer_marks(record.answer, app.length)
                ))
            })
            .collect()
    };

    let trace = List::new(items).block(
        Block::default()
            .title(format!(" Solver ({}) ", app.strategy))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(trace, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        ),
        InputMode::Revealed => (
            " Secret revealed | Press 'n' for new game or 'q' to quit ".to_string(),
            app.game
                .secret()
                .map(ToString::to_string)
                .unwrap_or_default(),
            Color::Magenta,
        ),
        InputMode::Guessing => (
            format!(" Enter {} distinct digits | Enter to submit ", app.length),
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let avg_text = format!("Avg guesses: {:.2}", app.stats.average_guesses());
    f.render_widget(
        Paragraph::new(avg_text).alignment(Alignment::Center),
        chunks[1],
    );

    let guesses_text = format!("Guess #{}", app.history.len() + 1);
    f.render_widget(
        Paragraph::new(guesses_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | n: New | s: Solve | +/-: Length")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
