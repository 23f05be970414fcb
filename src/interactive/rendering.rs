//! TUI rendering with ratatui
//!
//! Visualizations for the Mastermind solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Code, Feedback};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

/// Render a code as colored peg spans followed by its initials
fn code_spans(code: &Code) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(Code::LENGTH + 2);
    for &peg in code.pegs() {
        let (r, g, b) = peg.rgb();
        spans.push(Span::styled("●", Style::default().fg(Color::Rgb(r, g, b))));
    }
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        code.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    spans
}

/// Key pegs: filled for exact, hollow for color-only
fn feedback_span(feedback: Feedback) -> Span<'static> {
    let mut pegs = String::new();
    for _ in 0..feedback.exact() {
        pegs.push('●');
    }
    for _ in 0..feedback.color() {
        pegs.push('○');
    }
    for _ in (feedback.exact() + feedback.color()) as usize..Code::LENGTH {
        pegs.push('·');
    }
    Span::styled(pegs, Style::default().fg(Color::White))
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("MASTERMIND SOLVER - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current guess info
            Constraint::Percentage(30), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    if let Some(ref guess) = app.current_guess {
        // Bar showing how much of the candidate set the worst case keeps
        let total = app.solver.remaining().max(1);
        let kept = guess.max_partition as f64 / total as f64;
        let bar_len = ((1.0 - kept) * 18.0) as usize;
        let cut_bar = "█".repeat(bar_len) + &"░".repeat(18_usize.saturating_sub(bar_len));

        let mut title_line = vec![Span::raw("Suggested: ")];
        title_line.extend(code_spans(&guess.code));

        let content = vec![
            Line::from(title_line),
            Line::from(format!("Cut:       [{cut_bar}]")),
            Line::from(format!("Worst:     {} candidates", guess.max_partition)),
            Line::from(format!(
                "Expected:  {:.1} candidates remain",
                guess.expected_remaining
            )),
            Line::from(format!("Buckets:   {} feedback values", guess.partitions)),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Current Guess ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    } else {
        // No current guess
        let paragraph = Paragraph::new("No suggestion available").block(
            Block::default()
                .title(" Current Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        f.render_widget(paragraph, area);
    }
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates_count = app.solver.remaining();

    let content = if candidates_count == 0 {
        vec![Line::from("No consistent codes remain")]
    } else if candidates_count <= 12 {
        let candidates = app.solver.candidates();

        let mut lines = vec![Line::from(format!(
            "Remaining ({candidates_count}), with worst-case if played:"
        ))];

        for candidate in candidates.iter().take(12) {
            let metrics = crate::solver::minimax::calculate_metrics(candidate, candidates);

            let mut spans = vec![Span::raw("  ")];
            spans.extend(code_spans(candidate));
            spans.push(Span::styled(
                format!("  worst {}", metrics.max_partition),
                Style::default().fg(Color::Cyan),
            ));
            lines.push(Line::from(spans));
        }
        lines
    } else {
        vec![
            Line::from(format!("{candidates_count} candidates remaining")),
            Line::from(format!(
                "of {} possible codes",
                crate::core::Code::SPACE_SIZE
            )),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(5)
        .enumerate()
        .map(|(i, entry)| {
            let mut spans = vec![Span::raw(format!("{}: ", app.history.len() - i))];
            spans.extend(code_spans(&entry.guess));
            spans.push(Span::raw(" "));
            spans.push(feedback_span(entry.feedback));
            spans.push(Span::raw(format!(
                "  {} → {}",
                entry.candidates_before, entry.candidates_after
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Search space gauge
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = Code::SPACE_SIZE;
    let current_candidates = app.solver.remaining();
    let eliminated = total - current_candidates;
    let progress_pct = ((eliminated as f64 / total as f64) * 100.0) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{current_candidates}/{total} codes remain"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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
            " CRACKED! | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Feedback (exact color, e.g. '2 1' or 'win') | TAB for manual code ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualCode => (
            " Enter Code to Play (4 initials: r y o p b g s k) | ESC to cancel ",
            app.manual_code.as_str(),
            Color::Cyan,
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
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round_text = format!("Round: {}/{}", app.history.len() + 1, app.max_rounds);
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.solver.remaining());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.solver.remaining() == 0 && !app.history.is_empty() {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | Enter: Submit | TAB: Manual Code"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
