//! Configuration and constants for the CLI.

/// Total canvas width in columns, representing 100% of the root weight
pub const CANVAS_WIDTH: usize = 200;

/// Segments narrower than this render as a bare digit with dot filler
pub const NARROW_LIMIT: usize = 10;

/// Minimum field width for the column count inside bracketed labels
pub const COUNT_FIELD_MIN: usize = 3;

// Filler characters for segment labels
// Wide segments pad with '#' inside the brackets, narrow ones with '.'
pub const WIDE_FILL: char = '#';
pub const NARROW_FILL: char = '.';

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";
