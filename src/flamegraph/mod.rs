//! Text flame graph rendering.
//!
//! This module converts a weighted call tree into a fixed-width text
//! diagram. Each frame is drawn as a segment whose width is its share of
//! the total weight, one row per call depth, children aligned under the
//! column where their parent started.

pub mod label;
pub mod renderer;

// Re-export main types
pub use label::segment_label;
pub use renderer::{render_flamegraph, RenderConfig};
