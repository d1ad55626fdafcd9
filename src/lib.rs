//! flametext
//!
//! Text-mode flame graphs from collapsed stack samples.
//!
//! This crate provides the core implementation for the `flametext` CLI
//! tool: a parser for the `<stack> <value>` line format, a weighted call
//! tree builder, and a fixed-width text renderer.

pub mod commands;
pub mod flamegraph;
pub mod parser;
pub mod tree;
pub mod utils;
