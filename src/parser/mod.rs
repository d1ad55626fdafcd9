//! Collapsed stack parsing.
//!
//! This module handles:
//! - The `<stack> <value>` line grammar
//! - Splitting stacks into frame names
//! - Typed per-line parse errors

pub mod folded;

// Re-export main types
pub use folded::{parse_line, StackSample};
