// ============================================================
// PREVIEW USE CASE
// ============================================================
// First rows of a dataset, formatted for display

use serde::{Deserialize, Serialize};

use crate::domain::dataset::Dataset;

/// Head preview of a dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Take the first `n` rows of a dataset for display
pub fn preview(dataset: &Dataset, n: usize) -> DatasetPreview {
    DatasetPreview {
        headers: dataset.headers().iter().map(|h| h.to_string()).collect(),
        rows: dataset.head(n),
    }
}

impl DatasetPreview {
    /// Render the preview as an aligned text table
    pub fn to_table(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.len());
                }
            }
        }

        let mut out = String::new();
        let header_line: Vec<String> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:<w$}", h, w = widths[i]))
            .collect();
        out.push_str(&header_line.join("  "));
        out.push('\n');

        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<w$}", cell, w = widths[i]))
                .collect();
            out.push_str(&line.join("  "));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Column;

    #[test]
    fn test_preview_limits_rows() {
        let mut col = Column::new("a".to_string());
        for i in 0..10 {
            col.push_cell(&i.to_string());
        }
        let ds = Dataset::new(vec![col]).unwrap();
        let head = preview(&ds, 5);
        assert_eq!(head.rows.len(), 5);
        assert_eq!(head.headers, vec!["a"]);
    }

    #[test]
    fn test_table_has_header_row() {
        let mut col = Column::new("name".to_string());
        col.push_cell("Alice");
        let ds = Dataset::new(vec![col]).unwrap();
        let table = preview(&ds, 5).to_table();
        assert!(table.starts_with("name"));
        assert!(table.contains("Alice"));
    }
}
