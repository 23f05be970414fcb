//! Mastermind Minimax Solver
//!
//! A Mastermind codebreaker for 4-peg codes over an 8-color palette, using
//! Knuth-style worst-case minimax with sampling to keep every round fast.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_minimax::core::{Code, Feedback};
//!
//! // Parse codes from color initials
//! let guess = Code::parse("rryy").unwrap();
//! let secret = Code::parse("rgby").unwrap();
//!
//! // Score the guess: (exact, color) key pegs
//! let feedback = Feedback::score(&guess, &secret);
//! assert_eq!((feedback.exact(), feedback.color()), (2, 0));
//! ```

// Core domain types
pub mod core;

// Codebreaking algorithms
pub mod solver;

// Game orchestration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
