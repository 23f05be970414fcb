//! Core domain types for Mastermind
//!
//! The fundamental domain types. All types here are pure, testable, and have
//! clear mathematical properties; the only outside dependency is the RNG used
//! to draw random codes.

mod code;
mod color;
mod feedback;

pub use code::{Code, CodeError};
pub use color::Color;
pub use feedback::Feedback;
