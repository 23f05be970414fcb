//! Minimax guess evaluation
//!
//! Worst-case minimization over feedback partitions, with optional sampling.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, max_partition, partition_counts};
pub use selector::{SampleCaps, select_exhaustive, select_sampled};
