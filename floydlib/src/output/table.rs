//! Table-ready triangle data.
//!
//! `TriangleTable` collects every row of a triangle together with the values
//! behind each line, so it can be serialized as a single document. Plain text
//! output does not go through here; it streams rows directly.

use serde::{Deserialize, Serialize};

use crate::triangle::{Row, Triangle};
use crate::Result;

/// A single row in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row number, starting at 1
    pub row: u64,
    /// First value in the row
    pub start: u64,
    /// Every value in the row, in order
    pub values: Vec<u64>,
    /// The rendered line, exactly as plain text output prints it
    pub line: String,
}

impl From<Row> for TableRow {
    fn from(row: Row) -> Self {
        TableRow {
            row: row.number,
            start: row.start,
            values: row.values().collect(),
            line: row.line,
        }
    }
}

/// Table-ready triangle data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleTable {
    /// Number of rows
    pub size: u64,
    /// Width shared by every cell
    pub cell_width: usize,
    /// Number of values across all rows
    pub total_cells: u64,
    /// Rows in order
    pub rows: Vec<TableRow>,
}

impl TriangleTable {
    /// Collect every row of `triangle`.
    pub fn from_triangle(triangle: &Triangle) -> Self {
        TriangleTable {
            size: triangle.size(),
            cell_width: triangle.cell_width(),
            total_cells: triangle.total_cells(),
            rows: triangle.rows().map(TableRow::from).collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_from_triangle() {
        let table = TriangleTable::from_triangle(&Triangle::new(3).unwrap());
        assert_eq!(table.size, 3);
        assert_eq!(table.cell_width, 1);
        assert_eq!(table.total_cells, 6);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(
            table.rows[2],
            TableRow {
                row: 3,
                start: 4,
                values: vec![4, 5, 6],
                line: "4 5 6".to_string(),
            }
        );
    }

    #[test]
    fn test_table_value_count() {
        let table = TriangleTable::from_triangle(&Triangle::new(15).unwrap());
        let count: usize = table.rows.iter().map(|r| r.values.len()).sum();
        assert_eq!(count as u64, table.total_cells);
        assert_eq!(table.rows[14].values.first(), Some(&106));
        assert_eq!(table.rows[14].values.last(), Some(&120));
    }

    #[test]
    fn test_table_empty() {
        let table = TriangleTable::from_triangle(&Triangle::new(-5).unwrap());
        assert_eq!(table.size, 0);
        assert_eq!(table.cell_width, 0);
        assert_eq!(table.total_cells, 0);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_table_json() {
        let table = TriangleTable::from_triangle(&Triangle::new(2).unwrap());
        let json = table.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["size"], 2);
        assert_eq!(parsed["cell_width"], 1);
        assert_eq!(parsed["rows"][1]["line"], "2 3");
        assert_eq!(parsed["rows"][1]["values"], serde_json::json!([2, 3]));

        let back: TriangleTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
