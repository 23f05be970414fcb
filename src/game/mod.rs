//! Game orchestration
//!
//! The oracle seam (who scores a guess) and the round loop that drives a
//! solver against it.

pub mod oracle;
pub mod session;

pub use oracle::{Codemaker, Oracle};
pub use session::{Outcome, RoundRecord, SessionConfig, SessionError, SessionReport, run};
