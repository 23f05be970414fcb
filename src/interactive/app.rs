//! TUI application state and logic

use crate::core::{Code, Feedback};
use crate::solver::minimax::calculate_metrics;
use crate::solver::{Solver, StrategyType};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub solver: Solver<StrategyType>,
    pub history: Vec<HistoryEntry>,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_code: String,
    pub max_rounds: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualCode,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub code: Code,
    pub max_partition: usize,
    pub expected_remaining: f64,
    pub partitions: usize,
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
    pub round_distribution: [usize; 11],
}

impl App {
    #[must_use]
    pub fn new(strategy: StrategyType, max_rounds: usize) -> Self {
        Self {
            solver: Solver::new(strategy),
            history: Vec::new(),
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest guesses that minimize the worst case.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback as 'exact color', e.g. '2 1' or '21'".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Colors: R)ed Y)ellow O)range P)ink B)lue G)reen S)late-grey blacK"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_code: String::new(),
            max_rounds,
        }
    }

    pub fn compute_suggestion(&mut self) {
        if let Some(guess) = self.solver.next_guess() {
            let metrics = calculate_metrics(&guess, self.solver.candidates());

            self.current_guess = Some(GuessInfo {
                code: guess,
                max_partition: metrics.max_partition,
                expected_remaining: metrics.expected_remaining,
                partitions: metrics.partitions,
            });
        } else {
            self.current_guess = None;
            self.add_message("No valid guesses remaining!", MessageStyle::Error);
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let feedback = match input.trim().to_lowercase().as_str() {
            "win" | "correct" => Some(Feedback::WIN),
            other => Feedback::parse(other),
        };

        let Some(feedback) = feedback else {
            self.add_message(
                "Invalid feedback! Use two counts like '2 1' or 'win'",
                MessageStyle::Error,
            );
            return;
        };

        let Some(guess_info) = self.current_guess.clone() else {
            return;
        };

        let candidates_before = self.solver.remaining();

        if feedback.is_win() {
            self.history.push(HistoryEntry {
                guess: guess_info.code,
                feedback,
                candidates_before,
                candidates_after: 1,
            });

            self.stats.games_won += 1;
            self.stats.total_games += 1;
            let rounds = self.history.len();
            if rounds < self.stats.round_distribution.len() {
                self.stats.round_distribution[rounds] += 1;
            }

            self.input_mode = InputMode::WinCelebration;

            let celebration = match rounds {
                1 => "FIRST TRY! The opener was the secret!",
                2..=4 => "CRACKED! Ahead of the curve!",
                5 | 6 => "CRACKED! Solid work!",
                _ => "CRACKED!",
            };

            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            self.input_buffer.clear();
            return;
        }

        self.solver.apply_feedback(guess_info.code, feedback);
        let candidates_after = self.solver.remaining();

        self.history.push(HistoryEntry {
            guess: guess_info.code,
            feedback,
            candidates_before,
            candidates_after,
        });

        if candidates_after == 0 {
            self.add_message(
                "No candidates remain - some feedback was wrong. Press 'u' to undo.",
                MessageStyle::Error,
            );
            self.current_guess = None;
        } else if self.history.len() >= self.max_rounds {
            self.stats.total_games += 1;
            self.add_message(
                "Round limit reached! Press 'n' for a new game.",
                MessageStyle::Error,
            );
            self.current_guess = None;
        } else {
            self.compute_suggestion();
            self.add_message(
                &format!("{candidates_after} candidates remaining"),
                MessageStyle::Info,
            );
        }

        self.input_buffer.clear();
    }

    pub fn new_game(&mut self) {
        self.solver.reset();
        self.history.clear();
        self.current_guess = None;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! I'll suggest the opening guess.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    /// Undo the last round by replaying the remaining history from scratch
    pub fn undo_last(&mut self) {
        if self.history.pop().is_some() {
            self.solver.reset();
            for entry in &self.history {
                self.solver.apply_feedback(entry.guess, entry.feedback);
            }
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
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

    pub fn use_manual_code(&mut self) {
        let Ok(code) = Code::parse(&self.manual_code) else {
            self.add_message(
                "Invalid code! Use four color initials, e.g. 'rgby'",
                MessageStyle::Error,
            );
            return;
        };

        let metrics = calculate_metrics(&code, self.solver.candidates());

        // Warn when the manual pick has a worse worst case than the suggestion
        if let Some(ref suggested) = self.current_guess
            && metrics.max_partition > suggested.max_partition
        {
            self.add_message(
                &format!(
                    "Note: suggested guess kept worst case at {} (yours: {})",
                    suggested.max_partition, metrics.max_partition
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (worst case {} candidates)",
                code, metrics.max_partition
            ),
            MessageStyle::Success,
        );

        self.current_guess = Some(GuessInfo {
            code,
            max_partition: metrics.max_partition,
            expected_remaining: metrics.expected_remaining,
            partitions: metrics.partitions,
        });

        self.input_mode = InputMode::Feedback;
        self.manual_code.clear();
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

    // Run app
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
    // Compute initial suggestion
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    _ => {
                        // In celebration mode, ignore other keys
                    }
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game();
                    }
                    KeyCode::Char('u') => {
                        app.undo_last();
                    }
                    KeyCode::Tab => {
                        // Switch to manual code mode
                        if app.solver.remaining() > 0 {
                            app.input_mode = InputMode::ManualCode;
                            app.add_message(
                                "Enter your own code (4 color initials)",
                                MessageStyle::Info,
                            );
                        }
                    }
                    KeyCode::Char(c) => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
                    }
                    _ => {}
                },
                InputMode::ManualCode => match key.code {
                    KeyCode::Esc => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_code.clear();
                        app.add_message("Cancelled manual code entry", MessageStyle::Info);
                    }
                    KeyCode::Tab => {
                        // Toggle back to feedback mode
                        app.input_mode = InputMode::Feedback;
                        app.manual_code.clear();
                    }
                    KeyCode::Char(c) => {
                        if app.manual_code.len() < Code::LENGTH && c.is_alphabetic() {
                            app.manual_code.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.manual_code.pop();
                    }
                    KeyCode::Enter => {
                        if app.manual_code.len() == Code::LENGTH {
                            app.use_manual_code();
                        } else {
                            app.add_message(
                                "Code must be exactly 4 color initials!",
                                MessageStyle::Error,
                            );
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
