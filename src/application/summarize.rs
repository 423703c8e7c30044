// ============================================================
// SUMMARIZE USE CASE
// ============================================================
// Project a dataset into its per-column summary table

use tracing::debug;

use crate::domain::dataset::Dataset;
use crate::domain::summary::{ColumnSummary, DatasetSummary};

/// Compute the per-column summary table for a dataset.
///
/// Pure and deterministic: rows come out sorted by missing count
/// descending, with the file's column order preserved on ties.
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    let row_count = dataset.row_count();

    let mut columns: Vec<ColumnSummary> = dataset
        .columns()
        .iter()
        .map(|column| {
            let missing_count = column.missing_count();
            let missing_ratio = if row_count == 0 {
                0.0
            } else {
                round2(missing_count as f64 / row_count as f64 * 100.0)
            };
            ColumnSummary {
                column: column.name.clone(),
                missing_count,
                missing_ratio,
                distinct_count: column.distinct_count(),
                dtype: column.infer_type(),
            }
        })
        .collect();

    // Stable sort keeps file order for columns with equal missing counts
    columns.sort_by(|a, b| b.missing_count.cmp(&a.missing_count));

    debug!(rows = row_count, columns = columns.len(), "Summarized dataset");
    DatasetSummary { row_count, columns }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::{Column, ColumnType};

    fn column(name: &str, raw: &[&str]) -> Column {
        let mut col = Column::new(name.to_string());
        for cell in raw {
            col.push_cell(cell);
        }
        col
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            column("id", &["1", "2", "3", "4"]),
            column("score", &["1.5", "", "", "4.0"]),
            column("city", &["NYC", "LA", "", "NYC"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_sorted_by_missing_descending() {
        let summary = summarize(&dataset());
        let names: Vec<&str> = summary.columns.iter().map(|c| c.column.as_str()).collect();
        assert_eq!(names, vec!["score", "city", "id"]);
    }

    #[test]
    fn test_ratio_rounded_to_two_decimals() {
        let ds = Dataset::new(vec![column("a", &["", "1", "2"])]).unwrap();
        let summary = summarize(&ds);
        assert_eq!(summary.columns[0].missing_ratio, 33.33);
    }

    #[test]
    fn test_counts_and_types() {
        let summary = summarize(&dataset());
        let city = summary.columns.iter().find(|c| c.column == "city").unwrap();
        assert_eq!(city.missing_count, 1);
        assert_eq!(city.distinct_count, 2);
        assert_eq!(city.dtype, ColumnType::Text);

        let id = summary.columns.iter().find(|c| c.column == "id").unwrap();
        assert_eq!(id.dtype, ColumnType::Integer);

        let score = summary.columns.iter().find(|c| c.column == "score").unwrap();
        assert_eq!(score.dtype, ColumnType::Float);
        assert_eq!(score.missing_ratio, 50.0);
    }

    #[test]
    fn test_deterministic_for_fixed_dataset() {
        let ds = dataset();
        assert_eq!(summarize(&ds), summarize(&ds));
    }

    #[test]
    fn test_zero_row_dataset() {
        let ds = Dataset::new(vec![Column::new("a".to_string())]).unwrap();
        let summary = summarize(&ds);
        assert_eq!(summary.columns[0].missing_ratio, 0.0);
        assert_eq!(summary.columns[0].distinct_count, 0);
    }

    #[test]
    fn test_ties_keep_file_order() {
        let ds = Dataset::new(vec![
            column("b", &["1", "2"]),
            column("a", &["x", "y"]),
        ])
        .unwrap();
        let summary = summarize(&ds);
        let names: Vec<&str> = summary.columns.iter().map(|c| c.column.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
