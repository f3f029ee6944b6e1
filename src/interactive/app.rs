//! TUI application state and logic

use crate::core::{Answer, DigitSequence, MAX_LENGTH};
use crate::game::Game;
use crate::solver::{GuessRecord, Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game<StdRng>,
    pub strategy: StrategyType,
    pub length: usize,
    pub history: Vec<HistoryEntry>,
    pub solver_trace: Vec<GuessRecord>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
    Revealed,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: DigitSequence,
    pub answer: Answer,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_guesses: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl App {
    #[must_use]
    pub fn new(game: Game<StdRng>, length: usize, strategy: StrategyType) -> Self {
        Self {
            game,
            strategy,
            length: length.clamp(1, MAX_LENGTH),
            history: Vec::new(),
            solver_trace: Vec::new(),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Guess the secret: distinct digits, bulls and cows as feedback."
                    .to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        }
    }

    pub fn new_game(&mut self) {
        self.history.clear();
        self.solver_trace.clear();
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;

        match self.game.generate_secret(self.length) {
            Ok(_) => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("New secret of {} digits generated.", self.length),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Adjust the secret length and start over
    pub fn change_length(&mut self, delta: isize) {
        let length = self.length.saturating_add_signed(delta).clamp(1, MAX_LENGTH);
        if length != self.length {
            self.length = length;
            self.new_game();
        }
    }

    pub fn handle_guess(&mut self, input: &str) {
        let guess = match DigitSequence::new(input) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.game.propose(&guess) {
            Ok(answer) => {
                self.history.push(HistoryEntry { guess, answer });
                self.input_buffer.clear();

                if answer.is_win(self.length) {
                    self.stats.games_won += 1;
                    self.stats.total_guesses += self.history.len();
                    self.input_mode = InputMode::WinCelebration;
                    self.add_message(
                        &format!(
                            "🎉 {guess} is found in {} guesses. Congratulations!",
                            self.history.len()
                        ),
                        MessageStyle::Success,
                    );
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Give up and let the solver break the current secret
    pub fn solve_current(&mut self) {
        let solver = Solver::new(self.strategy);
        let mut trace = Vec::new();

        match self.game.solve(&solver, |record| trace.push(*record)) {
            Ok(solution) => {
                self.solver_trace = trace;
                self.input_mode = InputMode::Revealed;
                self.add_message(
                    &format!(
                        "Solver ({}) found {} in {} attempts.",
                        self.strategy, solution.sequence, solution.attempts
                    ),
                    MessageStyle::Success,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('n') => app.new_game(),
                KeyCode::Char('+') => app.change_length(1),
                KeyCode::Char('-') => app.change_length(-1),
                _ if app.input_mode != InputMode::Guessing => {
                    // Game over, only the keys above apply
                }
                KeyCode::Char('s') => app.solve_current(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if app.input_buffer.len() < app.length {
                        app.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = app.input_buffer.clone();
                    app.handle_guess(&input);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::StrongStrategy;
    use rand::SeedableRng;

    fn app(length: usize) -> App {
        let mut app = App::new(
            Game::new(StdRng::seed_from_u64(5)),
            length,
            StrategyType::Strong(StrongStrategy),
        );
        app.new_game();
        app
    }

    #[test]
    fn new_game_generates_secret() {
        let app = app(4);
        assert_eq!(app.game.secret_len(), 4);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn winning_guess_switches_mode() {
        let mut app = app(3);
        let secret = app.game.secret().unwrap().to_string();

        app.handle_guess(&secret);
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.history.last().unwrap().answer, Answer::new(3, 0));
    }

    #[test]
    fn invalid_guess_is_reported() {
        let mut app = app(4);
        app.handle_guess("1123");
        assert!(app.history.is_empty());
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));

        app.handle_guess("123");
        assert!(app.history.is_empty());
    }

    #[test]
    fn solve_current_records_trace() {
        let mut app = app(4);
        app.solve_current();

        assert_eq!(app.input_mode, InputMode::Revealed);
        let last = app.solver_trace.last().unwrap();
        assert_eq!(Some(&last.guess), app.game.secret());
    }

    #[test]
    fn change_length_is_clamped() {
        let mut app = app(10);
        app.change_length(1);
        assert_eq!(app.length, 10);
        assert_eq!(app.stats.total_games, 1);

        app.change_length(-1);
        assert_eq!(app.length, 9);
        assert_eq!(app.game.secret_len(), 9);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(2);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "9");
    }
}
