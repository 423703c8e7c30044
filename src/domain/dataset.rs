// ============================================================
// DATASET TYPES
// ============================================================
// Columnar in-memory representation of a parsed tabular file

use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

/// Cell markers treated as missing values, in addition to the empty string
const MISSING_MARKERS: [&str; 6] = ["NA", "N/A", "null", "NULL", "NaN", "nan"];

/// Inferred scalar type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    Text,
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Printed with the dtype names users know from dataframe tooling
        match self {
            ColumnType::Integer => write!(f, "int64"),
            ColumnType::Float => write!(f, "float64"),
            ColumnType::Boolean => write!(f, "bool"),
            ColumnType::Text => write!(f, "object"),
        }
    }
}

/// A single named column of raw cells; `None` is a missing value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    /// Column name (header)
    pub name: String,

    /// Raw cell values in row order
    pub cells: Vec<Option<String>>,
}

impl Column {
    /// Create an empty column
    pub fn new(name: String) -> Self {
        Self {
            name,
            cells: Vec::new(),
        }
    }

    /// Append a raw cell, normalizing missing-value markers to `None`.
    ///
    /// Only the missing check looks at a trimmed copy; the stored value
    /// keeps whatever whitespace the reader passed through.
    pub fn push_cell(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
            self.cells.push(None);
        } else {
            self.cells.push(Some(raw.to_string()));
        }
    }

    /// Number of cells (rows)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the column has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of missing cells
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Iterate over present (non-missing) cell values
    pub fn present(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().filter_map(|c| c.as_deref())
    }

    /// Number of distinct present values
    pub fn distinct_count(&self) -> usize {
        let mut seen = std::collections::HashSet::new();
        for value in self.present() {
            seen.insert(value);
        }
        seen.len()
    }

    /// Infer the column type from its present values.
    ///
    /// Follows dataframe conventions: an integer column with any missing
    /// value is demoted to float, and a boolean column with any missing
    /// value falls back to text.
    pub fn infer_type(&self) -> ColumnType {
        if self.cells.is_empty() {
            return ColumnType::Text;
        }

        let has_missing = self.missing_count() > 0;
        let mut any_present = false;
        let mut all_bool = true;
        let mut all_int = true;
        let mut all_float = true;

        for value in self.present() {
            let value = value.trim();
            any_present = true;
            if !is_bool_value(value) {
                all_bool = false;
            }
            if value.parse::<i64>().is_err() {
                all_int = false;
            }
            if value.parse::<f64>().is_err() {
                all_float = false;
            }
        }

        if !any_present {
            // All-missing columns read as float (all-NaN)
            return ColumnType::Float;
        }

        if all_bool && !has_missing {
            ColumnType::Boolean
        } else if all_int && !has_missing {
            ColumnType::Integer
        } else if all_float {
            ColumnType::Float
        } else {
            ColumnType::Text
        }
    }

    /// Parse cells as numbers, keeping row alignment (`None` for missing
    /// or unparsable cells)
    pub fn numeric_cells(&self) -> Vec<Option<f64>> {
        self.cells
            .iter()
            .map(|c| c.as_deref().and_then(|v| v.trim().parse::<f64>().ok()))
            .collect()
    }

    /// Present cells that parse as numbers, row order preserved
    pub fn numeric_values(&self) -> Vec<f64> {
        self.numeric_cells().into_iter().flatten().collect()
    }

    /// Whether every present value parses as a number
    pub fn is_numeric(&self) -> bool {
        matches!(self.infer_type(), ColumnType::Integer | ColumnType::Float)
    }
}

fn is_bool_value(value: &str) -> bool {
    matches!(value, "true" | "false" | "True" | "False" | "TRUE" | "FALSE")
}

/// An in-memory tabular dataset, loaded fresh per interaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from columns, which must all have the same length
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(|c| c.len()).unwrap_or(0);
        for column in &columns {
            if column.len() != row_count {
                return Err(AppError::Parse(format!(
                    "Column '{}' has {} rows, expected {}",
                    column.name,
                    column.len(),
                    row_count
                )));
            }
        }
        Ok(Self { columns, row_count })
    }

    /// Column headers in file order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in file order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names from `requested` that are absent from this dataset
    pub fn missing_columns<'a>(&self, requested: &[&'a str]) -> Vec<&'a str> {
        requested
            .iter()
            .filter(|name| self.column(name).is_none())
            .copied()
            .collect()
    }

    /// First `n` rows as display strings; missing cells render empty
    pub fn head(&self, n: usize) -> Vec<Vec<String>> {
        let rows = n.min(self.row_count);
        (0..rows)
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| c.cells[row].clone().unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    /// Paired numeric values of two columns, dropping rows where either
    /// side is missing or unparsable
    pub fn numeric_pairs(&self, x: &Column, y: &Column) -> Vec<(f64, f64)> {
        x.numeric_cells()
            .into_iter()
            .zip(y.numeric_cells())
            .filter_map(|(a, b)| Some((a?, b?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, raw: &[&str]) -> Column {
        let mut col = Column::new(name.to_string());
        for cell in raw {
            col.push_cell(cell);
        }
        col
    }

    #[test]
    fn test_missing_markers_normalized() {
        let col = column("a", &["1", "", "NA", "null", "NaN", "2"]);
        assert_eq!(col.missing_count(), 4);
        assert_eq!(col.present().count(), 2);
    }

    #[test]
    fn test_push_cell_keeps_raw_whitespace() {
        let col = column("a", &["  5  ", "  NA  "]);
        assert_eq!(col.cells[0].as_deref(), Some("  5  "));
        // The missing check still sees the trimmed value
        assert!(col.cells[1].is_none());
        // Parsing tolerates the padding
        assert_eq!(col.infer_type(), ColumnType::Float);
        assert_eq!(col.numeric_values(), vec![5.0]);
    }

    #[test]
    fn test_infer_integer() {
        let col = column("a", &["1", "2", "-3"]);
        assert_eq!(col.infer_type(), ColumnType::Integer);
    }

    #[test]
    fn test_missing_demotes_integer_to_float() {
        let col = column("a", &["1", "", "3"]);
        assert_eq!(col.infer_type(), ColumnType::Float);
    }

    #[test]
    fn test_infer_float_and_text() {
        assert_eq!(column("a", &["1.5", "2"]).infer_type(), ColumnType::Float);
        assert_eq!(column("a", &["x", "2"]).infer_type(), ColumnType::Text);
    }

    #[test]
    fn test_infer_boolean() {
        assert_eq!(
            column("a", &["true", "False"]).infer_type(),
            ColumnType::Boolean
        );
        // A missing value falls back to text
        assert_eq!(column("a", &["true", ""]).infer_type(), ColumnType::Text);
    }

    #[test]
    fn test_all_missing_is_float() {
        assert_eq!(column("a", &["", "NA"]).infer_type(), ColumnType::Float);
    }

    #[test]
    fn test_distinct_excludes_missing() {
        let col = column("a", &["x", "y", "x", ""]);
        assert_eq!(col.distinct_count(), 2);
    }

    #[test]
    fn test_numeric_pairs_drop_incomplete_rows() {
        let x = column("x", &["1", "2", "", "4"]);
        let y = column("y", &["10", "", "30", "40"]);
        let ds = Dataset::new(vec![x, y]).unwrap();
        let pairs = ds.numeric_pairs(ds.column("x").unwrap(), ds.column("y").unwrap());
        assert_eq!(pairs, vec![(1.0, 10.0), (4.0, 40.0)]);
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let x = column("x", &["1"]);
        let y = column("y", &["1", "2"]);
        assert!(Dataset::new(vec![x, y]).is_err());
    }

    #[test]
    fn test_head_renders_missing_as_empty() {
        let ds = Dataset::new(vec![column("a", &["1", "", "3"])]).unwrap();
        let head = ds.head(2);
        assert_eq!(head, vec![vec!["1".to_string()], vec![String::new()]]);
    }
}
