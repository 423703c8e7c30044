// ============================================================
// SUMMARY TYPES
// ============================================================
// Derived per-column statistics shown alongside the dataset preview

use serde::{Deserialize, Serialize};

use super::dataset::ColumnType;

/// Per-column statistics: missing values, cardinality, inferred type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name
    pub column: String,

    /// Number of missing cells
    pub missing_count: usize,

    /// Missing cells as a percentage of rows, rounded to 2 decimals
    pub missing_ratio: f64,

    /// Number of distinct present values
    pub distinct_count: usize,

    /// Inferred column type
    pub dtype: ColumnType,
}

/// Summary table for a whole dataset, sorted by missing count descending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of rows in the summarized dataset
    pub row_count: usize,

    /// One entry per column
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Render the summary as an aligned text table
    pub fn to_table(&self) -> String {
        let mut width = "column".len();
        for entry in &self.columns {
            width = width.max(entry.column.len());
        }

        let mut out = format!(
            "{:<w$}  {:>8}  {:>8}  {:>8}  dtype\n",
            "column",
            "missing",
            "ratio_%",
            "unique",
            w = width
        );
        for entry in &self.columns {
            out.push_str(&format!(
                "{:<w$}  {:>8}  {:>8.2}  {:>8}  {}\n",
                entry.column,
                entry.missing_count,
                entry.missing_ratio,
                entry.distinct_count,
                entry.dtype,
                w = width
            ));
        }
        out
    }
}
