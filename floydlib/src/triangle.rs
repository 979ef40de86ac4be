//! Triangle arithmetic and the row generator.
//!
//! Row `n` of Floyd's triangle holds the `n` consecutive values ending at
//! `n * (n + 1) / 2`, so every row is derived from its number alone and the
//! whole triangle can be produced lazily, one line at a time.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::error::FloydError;
use crate::format::format_row;
use crate::Result;

/// Number of rows printed when no size is given.
pub const DEFAULT_SIZE: i64 = 15;

/// Largest row count whose last element fits in a `u64`.
pub const MAX_SIZE: i64 = 6_074_000_999;

/// The value of the final cell in `row`.
///
/// `last_element(0)` is 0, which seeds the start of row 1.
///
/// Panics on overflow in debug builds; use [`checked_last_element`] for sizes
/// that have not been validated.
pub fn last_element(row: u64) -> u64 {
    // Halve whichever factor is even first so the product never overflows
    // before the division.
    if row % 2 == 0 {
        (row / 2) * (row + 1)
    } else {
        row * ((row + 1) / 2)
    }
}

/// Like [`last_element`], returning `None` if the value does not fit in `u64`.
pub fn checked_last_element(row: u64) -> Option<u64> {
    let next = row.checked_add(1)?;
    if row % 2 == 0 {
        (row / 2).checked_mul(next)
    } else {
        row.checked_mul(next / 2)
    }
}

/// Number of decimal digits in `value`, or 0 for 0.
pub fn digit_count(mut value: u64) -> usize {
    let mut width = 0;
    while value > 0 {
        value /= 10;
        width += 1;
    }
    width
}

/// Width in characters of the last element of `row`.
///
/// This is the cell width for a triangle of `row` rows, since the last element
/// of the last row is the largest value in it.
pub fn cell_width(row: u64) -> usize {
    digit_count(last_element(row))
}

/// Generate the lines of a triangle with `size` rows.
///
/// Non-positive sizes produce no lines. The iterator is lazy: each line is
/// built only when requested, so callers can write it out before the next
/// one exists.
///
/// Fails only with [`FloydError::SizeTooLarge`] for sizes above [`MAX_SIZE`].
/// Such a triangle holds more than 1.8e19 values, so the error can never
/// occur for a size whose output could actually be printed.
///
/// ```rust
/// let lines: Vec<String> = floydlib::generate(3).unwrap().collect();
/// assert_eq!(lines, vec!["1", "2 3", "4 5 6"]);
/// ```
pub fn generate(size: i64) -> Result<impl Iterator<Item = String>> {
    Ok(Triangle::new(size)?.rows().map(|row| row.line))
}

/// A triangle of a fixed number of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    size: u64,
    cell_width: usize,
}

impl Default for Triangle {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE as u64,
            cell_width: cell_width(DEFAULT_SIZE as u64),
        }
    }
}

impl Triangle {
    /// Create a triangle with `size` rows.
    ///
    /// Sizes of zero or below give an empty triangle. Fails only above
    /// [`MAX_SIZE`], where the largest value would not fit in a `u64`.
    pub fn new(size: i64) -> Result<Self> {
        let rows = u64::try_from(size).unwrap_or(0);
        let last = checked_last_element(rows).ok_or(FloydError::SizeTooLarge { size })?;
        Ok(Self {
            size: rows,
            cell_width: digit_count(last),
        })
    }

    /// Number of rows.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Width shared by every cell.
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    /// Total number of cells, which is also the largest value.
    pub fn total_cells(&self) -> u64 {
        last_element(self.size)
    }

    /// Iterate over the rows in order, starting with row 1.
    pub fn rows(&self) -> Rows {
        Rows {
            next: 1,
            size: self.size,
            width: self.cell_width,
        }
    }
}

/// One formatted row of a triangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Row number, starting at 1. Also the number of cells.
    pub number: u64,
    /// First value in the row
    pub start: u64,
    /// The rendered line, without a trailing newline
    pub line: String,
}

impl Row {
    /// Last value in the row.
    pub fn last(&self) -> u64 {
        self.start + self.number - 1
    }

    /// The values of the row's cells, in order.
    pub fn values(&self) -> RangeInclusive<u64> {
        self.start..=self.last()
    }
}

/// Iterator over the rows of a [`Triangle`].
#[derive(Debug, Clone)]
pub struct Rows {
    next: u64,
    size: u64,
    width: usize,
}

impl Iterator for Rows {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next > self.size {
            return None;
        }
        let number = self.next;
        self.next += 1;

        let start = last_element(number - 1) + 1;
        let line = format_row(start..start + number, self.width);
        Some(Row {
            number,
            start,
            line,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.size + 1).saturating_sub(self.next);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Rows {}
