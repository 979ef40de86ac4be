//! Output: present a triangle as text lines or as a table.
//!
//! - **write_lines**: streams each row to a writer as soon as it is built
//! - **TriangleTable**: serializable snapshot of every row, for JSON output
//!
//! ## Example
//!
//! ```rust
//! use floydlib::{output::write_lines, Triangle};
//!
//! let mut out = Vec::new();
//! let written = write_lines(Triangle::new(3).unwrap().rows(), &mut out).unwrap();
//! assert_eq!(written, 3);
//! assert_eq!(String::from_utf8(out).unwrap(), "1\n2 3\n4 5 6\n");
//! ```

pub mod table;

use std::io::Write;

use crate::triangle::Row;
use crate::Result;

pub use table::{TableRow, TriangleTable};

/// Write each row's line followed by a newline, returning how many were written.
///
/// Rows are pulled from the iterator one at a time, so nothing is buffered
/// beyond what `writer` itself buffers.
pub fn write_lines<I, W>(rows: I, writer: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Row>,
    W: Write + ?Sized,
{
    let mut written = 0;
    for row in rows {
        writeln!(writer, "{}", row.line)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FloydError;
    use crate::triangle::Triangle;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_lines_matches_generate() {
        let mut out = Vec::new();
        let written = write_lines(Triangle::new(15).unwrap().rows(), &mut out).unwrap();
        assert_eq!(written, 15);

        let expected: String = crate::generate(15)
            .unwrap()
            .map(|line| line + "\n")
            .collect();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_write_lines_empty() {
        let mut out = Vec::new();
        let written = write_lines(Triangle::new(0).unwrap().rows(), &mut out).unwrap();
        assert_eq!(written, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_lines_propagates_io_error() {
        let err = write_lines(Triangle::new(2).unwrap().rows(), &mut FailingWriter).unwrap_err();
        assert!(matches!(err, FloydError::Io(_)));
    }
}
