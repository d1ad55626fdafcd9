//! Weighted call tree construction.
//!
//! This module transforms collapsed stack lines into:
//! - A rooted, multi-way tree of frames
//! - Per-frame aggregate weights
//! - Parent/child links for layout alignment

pub mod builder;
pub mod node;

// Re-export main types
pub use builder::StackTree;
pub use node::{Node, NodeId};
