//! Fixed-width segment labels for the text canvas.
//!
//! Every segment must fill its computed span exactly, so labels degrade
//! as the span narrows: bracketed name with a column count, then a
//! truncated name, then a bare digit with dot filler, then nothing.

use crate::utils::config::{COUNT_FIELD_MIN, NARROW_FILL, NARROW_LIMIT, WIDE_FILL};

/// Render the label for one segment, exactly `width` characters long
///
/// **Public** - used by the renderer for every segment
///
/// # Arguments
/// * `name` - Frame name to display
/// * `width` - Target width in character columns
///
/// # Returns
/// A string of exactly `width` characters:
/// * `width == 0` - empty string
/// * `width < 10` - the width digit plus dot filler, e.g. `5....`
/// * name fits    - `[name 42########]` with the count right-justified
/// * otherwise    - `[truncated_na...42]`
///
/// Widths are measured in characters, not bytes; names may be multi-byte.
pub fn segment_label(name: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let count = width.to_string();
    if width < NARROW_LIMIT {
        // single digit plus filler
        let mut label = count;
        label.extend(std::iter::repeat(NARROW_FILL).take(width - 1));
        return label;
    }

    let name_len = name.chars().count();
    let count_field = count.len().max(COUNT_FIELD_MIN);

    if width > name_len + count_field + 2 {
        // "[" + name + right-justified count + filler + "]"
        let fill = width - name_len - count_field - 2;
        let hashes: String = std::iter::repeat(WIDE_FILL).take(fill).collect();
        format!("[{}{:>field$}{}]", name, count, hashes, field = count_field)
    } else {
        // "[" + truncated name + "..." + count + "]"
        // keeping (width - 5 - digits) characters makes the total exact
        let keep = width - 5 - count.len();
        let truncated: String = name.chars().take(keep).collect();
        format!("[{}...{}]", truncated, count)
    }
}
