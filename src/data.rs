//! Minimal column-major tabular model shared by transformers, generators,
//! and the profiling baseline.
//!
//! This is deliberately small: the harness only needs enough structure to
//! feed a transformer and account for the size of what comes back.

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Heap-inclusive size estimate in bytes.
    fn size_bytes(&self) -> usize {
        let heap = match self {
            Cell::Text(s) => s.capacity(),
            _ => 0,
        };
        std::mem::size_of::<Cell>() + heap
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn size_bytes(&self) -> usize {
        self.name.capacity() + self.cells.iter().map(Cell::size_bytes).sum::<usize>()
    }
}

/// A column-major table. Column order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for the common single-column tables used by
    /// the fixture generators.
    pub fn with_column(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            columns: vec![Column::new(name, cells)],
        }
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of rows, taken from the longest column.
    pub fn num_rows(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Resident size estimate used by the wall-clock profiler's memory
    /// accounting.
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of::<Table>() + self.columns.iter().map(Column::size_bytes).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_is_by_name() {
        let mut table = Table::with_column("value", vec![Cell::Number(1.0)]);
        table.push_column(Column::new("label", vec![Cell::Text("a".into())]));

        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.column("label").unwrap().len(), 1);
        assert!(table.column("missing").is_none());
    }

    #[test]
    fn size_accounts_for_text_heap() {
        let small = Table::with_column("value", vec![Cell::Number(1.0)]);
        let big = Table::with_column("value", vec![Cell::Text("a long categorical label".into())]);
        assert!(big.size_bytes() > small.size_bytes());
    }

    #[test]
    fn num_rows_uses_longest_column() {
        let mut table = Table::with_column("a", vec![Cell::Number(1.0), Cell::Number(2.0)]);
        table.push_column(Column::new("b", vec![Cell::Null]));
        assert_eq!(table.num_rows(), 2);
    }
}
