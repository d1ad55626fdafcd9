//! Parse the collapsed stack format, one sample per line.
//!
//! Format: "parent;child;grandchild value"
//!
//! Example: "main;execute_tx;storage_read 1000"
//! This means: main called execute_tx which called storage_read, and the
//! path was sampled with weight 1000.

use crate::utils::error::ParseError;

/// A single collapsed stack sample
///
/// **Public** - consumed by the tree builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSample {
    /// Call path as a semicolon-separated string, root-adjacent frame first
    pub stack: String,

    /// Sample weight attributed to this exact path
    pub value: u64,
}

impl StackSample {
    /// Create a new stack sample
    ///
    /// **Public** - constructor
    pub fn new(stack: impl Into<String>, value: u64) -> Self {
        Self {
            stack: stack.into(),
            value,
        }
    }

    /// Frame names along the path, root-adjacent first
    ///
    /// Frame names are opaque text; empty names are legal.
    pub fn frames(&self) -> impl Iterator<Item = &str> {
        self.stack.split(';')
    }
}

/// Parse one line of collapsed stack input
///
/// **Public** - entry point used by the tree builder
///
/// # Arguments
/// * `line` - Raw input line; surrounding whitespace is ignored
///
/// # Returns
/// The parsed sample
///
/// # Errors
/// * `ParseError::FieldCount` - not exactly two whitespace-separated fields
/// * `ParseError::InvalidValue` - second field is not a base-10 `u64`
pub fn parse_line(line: &str) -> Result<StackSample, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    match fields.as_slice() {
        [stack, value] => {
            let value = value
                .parse::<u64>()
                .map_err(|e| ParseError::InvalidValue(value.to_string(), e))?;
            Ok(StackSample::new(*stack, value))
        }
        other => Err(ParseError::FieldCount(other.len())),
    }
}
