//! # floydlib
//!
//! Generates Floyd's triangle: row `n` holds `n` consecutive numbers, starting
//! from 1 and continuing across rows, with every cell right-justified to the
//! width of the largest number.
//!
//! ## Overview
//!
//! The triangle is a pure function of its row count. The library computes it
//! lazily and leaves all I/O to the caller:
//!
//! - **triangle**: arithmetic (`last_element`, `cell_width`) and the row
//!   generator (`generate`, `Triangle::rows`)
//! - **format**: right-justification of cells and rows
//! - **output**: streaming lines to a writer, or collecting a serializable table
//!
//! ## Example
//!
//! ```rust
//! use floydlib::{cell_width, generate, last_element, Triangle, TriangleTable};
//!
//! assert_eq!(last_element(15), 120);
//! assert_eq!(cell_width(15), 3);
//!
//! let lines: Vec<String> = generate(15).unwrap().collect();
//! assert_eq!(lines.len(), 15);
//! assert!(lines[14].starts_with("106 107 108"));
//!
//! // Sizes of zero or below produce nothing
//! assert_eq!(generate(-3).unwrap().count(), 0);
//!
//! let table = TriangleTable::from_triangle(&Triangle::new(4).unwrap());
//! assert_eq!(table.total_cells, 10);
//! ```

pub mod error;
pub mod format;
pub mod options;
pub mod output;
pub mod triangle;

pub use error::FloydError;
pub use format::{format_row, right_justify};
pub use options::OutputFormat;
pub use output::{write_lines, TableRow, TriangleTable};
pub use triangle::{
    cell_width, checked_last_element, digit_count, generate, last_element, Row, Rows, Triangle,
    DEFAULT_SIZE, MAX_SIZE,
};

/// Result type for floydlib operations
pub type Result<T> = std::result::Result<T, FloydError>;
