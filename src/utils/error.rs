//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing collapsed stack lines
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("expected `<stack> <value>`, found {0} field(s)")]
    FieldCount(usize),

    #[error("invalid sample value {0:?}: {1}")]
    InvalidValue(String, #[source] std::num::ParseIntError),
}

/// Errors that can occur during flame graph rendering
///
/// These indicate a broken layout invariant, not bad input data, and
/// abort the rendering pass.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("level-order depth went from {0} to {1}")]
    DepthOrder(usize, usize),

    #[error("label {0:?} spans {1} column(s), segment needs {2}")]
    LabelWidth(String, usize, usize),
}
