//! Simple interactive CLI mode
//!
//! Text-based interactive assistant without TUI. The user plays codemaker
//! against a real opponent (or board game) and relays the key-peg feedback.

use crate::core::{Code, Feedback};
use crate::output::formatters::{code_pegs, feedback_pegs};
use crate::solver::minimax::calculate_metrics;
use crate::solver::{Solver, Strategy};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// solver cannot provide a valid guess.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S: Strategy>(solver: &mut Solver<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║            Mastermind Solver - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses that minimize the worst-case candidate count.");
    println!("After each guess, enter the key-peg feedback as two numbers:\n");
    println!("  - First number:  pegs of the right color in the right spot");
    println!("  - Second number: pegs of the right color in the wrong spot");
    println!("  - Examples: '2 1', '2,1', '21'");
    println!("  - Or type 'win' if the guess was exactly right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last round\n");

    let mut history: Vec<(Code, Feedback)> = Vec::new();
    let mut round = 1;

    loop {
        let candidates_count = solver.remaining();

        if candidates_count == 0 {
            println!("\nNo candidates remain! Some feedback must have been wrong.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" => {
                    if history.pop().is_some() {
                        round -= 1;
                        replay(solver, &history);
                        println!("Undone! Back to round {round}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" => {
                    history.clear();
                    round = 1;
                    solver.reset();
                    println!("\nNew game started!\n");
                }
                _ => {}
            }
            continue;
        }

        let guess = solver.next_guess().ok_or("No valid guesses available")?;

        println!("────────────────────────────────────────────────────────────");
        println!("Round {round}: {candidates_count} candidates remaining");
        println!("────────────────────────────────────────────────────────────");

        let metrics = calculate_metrics(&guess, solver.candidates());

        println!("\nSuggested guess: {} {}", guess, code_pegs(&guess));
        println!("   Worst case:       {} candidates", metrics.max_partition);
        println!(
            "   Expected remain:  {:.1} candidates",
            metrics.expected_remaining
        );
        println!("   Feedback buckets: {}\n", metrics.partitions);

        if candidates_count <= 10 {
            println!("Remaining candidates:");
            for candidate in solver.candidates().iter().take(10) {
                println!("  • {} {}", candidate, code_pegs(candidate));
            }
            println!();
        }

        let feedback = loop {
            let input =
                get_user_input("Enter feedback (exact color, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    history.clear();
                    round = 1;
                    solver.reset();
                    println!("\nNew game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if history.pop().is_some() {
                        round -= 1;
                        replay(solver, &history);
                        println!("Undone! Back to round {round}\n");
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => {
                    break Some(Feedback::WIN);
                }
                _ => {
                    if let Some(feedback) = Feedback::parse(&input) {
                        break Some(feedback);
                    }
                    println!("Invalid feedback! Use two numbers like '2 1', 'win', or a command\n");
                }
            }
        };

        if let Some(feedback) = feedback {
            if feedback.is_win() {
                use colored::Colorize;

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!(
                    "{}",
                    "        C O D E   C R A C K E D !        "
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(70).bright_cyan());

                println!(
                    "\n  Secret found in {} {}",
                    round.to_string().bright_cyan().bold(),
                    if round == 1 { "round" } else { "rounds" }
                );

                println!("\n  Guess history:");
                for (i, (code, fb)) in history.iter().enumerate() {
                    println!(
                        "    {}. {} {} {}",
                        (i + 1).to_string().bright_black(),
                        code_pegs(code),
                        code.to_string().bright_white().bold(),
                        feedback_pegs(*fb)
                    );
                }
                println!(
                    "    {}. {} {} {}",
                    round.to_string().bright_black(),
                    code_pegs(&guess),
                    guess.to_string().bright_white().bold(),
                    feedback_pegs(Feedback::WIN)
                );

                println!("\n{}", "═".repeat(70).bright_cyan());
                println!();

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        history.clear();
                        round = 0; // Incremented to 1 below
                        solver.reset();
                        println!("\nNew game started!\n");
                    }
                    _ => {
                        println!("\nThanks for playing!\n");
                        return Ok(());
                    }
                }
            } else {
                history.push((guess, feedback));
                solver.apply_feedback(guess, feedback);
            }

            round += 1;
        }
    }
}

/// Rebuild the solver's candidate set from a history prefix
fn replay<S: Strategy>(solver: &mut Solver<S>, history: &[(Code, Feedback)]) {
    solver.reset();
    for &(code, feedback) in history {
        solver.apply_feedback(code, feedback);
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
