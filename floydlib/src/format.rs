//! Cell and row formatting.
//!
//! Every cell in a triangle shares one width: the digit count of the largest
//! value. The first cell of a row is padded to exactly that width and every
//! later cell gets one extra column, so cells can be concatenated directly and
//! still read as space-separated columns:
//!
//! ```text
//!   1
//!   2   3
//!   4   5   6
//! ```

/// Right-justify `value` in a field of `width` characters.
///
/// Pads on the left with ASCII spaces and never truncates: a value wider than
/// `width` is returned as is.
pub fn right_justify(value: u64, width: usize) -> String {
    format!("{:>width$}", value, width = width)
}

/// Format one row of cells.
///
/// The first cell is right-justified to `width`, each following cell to
/// `width + 1`, and the cells are joined with no separator.
pub fn format_row<I>(values: I, width: usize) -> String
where
    I: IntoIterator<Item = u64>,
{
    let mut line = String::new();
    for (index, value) in values.into_iter().enumerate() {
        let cell = if index == 0 { width } else { width + 1 };
        line.push_str(&right_justify(value, cell));
    }
    line
}
