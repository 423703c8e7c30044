// ============================================================
// RENDER USE CASE
// ============================================================
// Validate a chart request and dispatch to the drawing backend

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::domain::chart::{ChartKind, ChartRequest};
use crate::domain::dataset::{Column, Dataset};
use crate::domain::error::{AppError, Result};
use crate::domain::render_config::RenderConfig;
use crate::infrastructure::plot;
use crate::infrastructure::storage::ensure_output_dir;

/// Chart rendering use case
pub struct ChartRenderer {
    config: RenderConfig,
}

impl ChartRenderer {
    /// Create a new renderer
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration
    pub fn default_config() -> Self {
        Self::new(RenderConfig::default())
    }

    /// Render `request` against `dataset`, writing a PNG to `output`.
    ///
    /// Fails with `Input` when a requested column is absent or unusable
    /// for the chart kind, and `Render` when the drawing backend fails.
    pub fn render(&self, dataset: &Dataset, request: &ChartRequest, output: &Path) -> Result<()> {
        self.config
            .validate()
            .map_err(AppError::ValidationError)?;

        let requested: Vec<&str> = if request.kind.is_single_column() {
            vec![request.y_column.as_str()]
        } else {
            vec![request.x_column.as_str(), request.y_column.as_str()]
        };
        let absent = dataset.missing_columns(&requested);
        if !absent.is_empty() {
            return Err(AppError::Input(format!(
                "Columns not found: {}",
                absent.join(", ")
            )));
        }

        ensure_output_dir(output)?;
        let title = request.title();

        match request.kind {
            ChartKind::Line => {
                let points = self.paired_series(dataset, request)?;
                plot::draw_line(
                    output,
                    &self.config,
                    &title,
                    &request.x_column,
                    &request.y_column,
                    &points,
                )?;
            }
            ChartKind::Scatter => {
                let points = self.paired_series(dataset, request)?;
                plot::draw_scatter(
                    output,
                    &self.config,
                    &title,
                    &request.x_column,
                    &request.y_column,
                    &points,
                )?;
            }
            ChartKind::Histogram => {
                let values = self.numeric_series(dataset, &request.y_column)?;
                plot::draw_histogram(output, &self.config, &title, &request.y_column, &values)?;
            }
            ChartKind::Density => {
                let values = self.numeric_series(dataset, &request.y_column)?;
                plot::draw_density(output, &self.config, &title, &request.y_column, &values)?;
            }
            ChartKind::Pie => {
                let slices = self.pie_slices(dataset, &request.y_column)?;
                plot::draw_pie(output, &self.config, &title, &slices)?;
            }
        }

        info!(
            kind = %request.kind,
            output = %output.display(),
            "Rendered chart"
        );
        Ok(())
    }

    /// Row-aligned (x, y) pairs for line and scatter charts
    fn paired_series(&self, dataset: &Dataset, request: &ChartRequest) -> Result<Vec<(f64, f64)>> {
        let x = self.numeric_column(dataset, &request.x_column)?;
        let y = self.numeric_column(dataset, &request.y_column)?;
        let points = dataset.numeric_pairs(x, y);
        if points.is_empty() {
            return Err(AppError::Input(format!(
                "Columns '{}' and '{}' have no rows where both values are present",
                request.x_column, request.y_column
            )));
        }
        Ok(points)
    }

    /// Present numeric values for histogram and density charts
    fn numeric_series(&self, dataset: &Dataset, name: &str) -> Result<Vec<f64>> {
        let column = self.numeric_column(dataset, name)?;
        let values = column.numeric_values();
        if values.is_empty() {
            return Err(AppError::Input(format!(
                "Column '{}' has no values to plot",
                name
            )));
        }
        Ok(values)
    }

    fn numeric_column<'a>(&self, dataset: &'a Dataset, name: &str) -> Result<&'a Column> {
        // Presence was validated up front; treat a miss here as absent too
        let column = dataset
            .column(name)
            .ok_or_else(|| AppError::Input(format!("Columns not found: {}", name)))?;
        if !column.is_numeric() {
            return Err(AppError::Input(format!(
                "Column '{}' is not numeric ({})",
                name,
                column.infer_type()
            )));
        }
        Ok(column)
    }

    /// Value counts of a column, most frequent first; the tail beyond
    /// `max_pie_slices` collapses into an "other" slice
    fn pie_slices(&self, dataset: &Dataset, name: &str) -> Result<Vec<(String, f64)>> {
        let column = dataset
            .column(name)
            .ok_or_else(|| AppError::Input(format!("Columns not found: {}", name)))?;

        let mut first_seen: Vec<&str> = Vec::new();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for value in column.present() {
            if !counts.contains_key(value) {
                first_seen.push(value);
            }
            *counts.entry(value).or_insert(0) += 1;
        }
        if first_seen.is_empty() {
            return Err(AppError::Input(format!(
                "Column '{}' has no values to plot",
                name
            )));
        }

        let mut entries: Vec<(String, usize)> = first_seen
            .into_iter()
            .map(|value| (value.to_string(), counts[value]))
            .collect();
        // Stable sort keeps first-seen order for equal counts
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        if entries.len() > self.config.max_pie_slices {
            let tail: usize = entries
                .split_off(self.config.max_pie_slices)
                .into_iter()
                .map(|(_, count)| count)
                .sum();
            entries.push(("other".to_string(), tail));
        }

        Ok(entries
            .into_iter()
            .map(|(label, count)| (label, count as f64))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;

    fn column(name: &str, raw: &[&str]) -> Column {
        let mut col = Column::new(name.to_string());
        for cell in raw {
            col.push_cell(cell);
        }
        col
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            column("x", &["1", "2", "3", "4", "5"]),
            column("y", &["2.0", "4.0", "1.0", "8.0", "3.0"]),
            column("label", &["a", "b", "a", "c", "a"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_missing_column_is_input_error() {
        let renderer = ChartRenderer::default_config();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        let request = ChartRequest::new("nope", "also_nope", ChartKind::Scatter);
        let err = renderer.render(&dataset(), &request, &out).unwrap_err();
        match err {
            AppError::Input(msg) => {
                assert_eq!(msg, "Columns not found: nope, also_nope");
            }
            other => panic!("expected Input error, got {:?}", other),
        }
        assert!(!out.exists());
    }

    #[test]
    fn test_single_column_kinds_ignore_x() {
        let renderer = ChartRenderer::default_config();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("hist.png");
        // x does not exist, but histogram only reads y
        let request = ChartRequest::new("missing", "y", ChartKind::Histogram);
        renderer.render(&dataset(), &request, &out).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn test_non_numeric_column_is_input_error() {
        let renderer = ChartRenderer::default_config();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        let request = ChartRequest::new("x", "label", ChartKind::Line);
        let err = renderer.render(&dataset(), &request, &out).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn test_each_kind_renders_valid_columns() {
        let renderer = ChartRenderer::default_config();
        let dir = tempfile::tempdir().unwrap();
        let ds = dataset();
        for kind in ChartKind::all() {
            let y = if kind == ChartKind::Pie { "label" } else { "y" };
            let out = dir.path().join(format!("{}.png", kind));
            let request = ChartRequest::new("x", y, kind);
            renderer.render(&ds, &request, &out).unwrap();
            let meta = std::fs::metadata(&out).unwrap();
            assert!(meta.len() > 0, "{} chart should not be empty", kind);
        }
    }

    #[test]
    fn test_pie_slices_sorted_and_capped() {
        let config = RenderConfig {
            max_pie_slices: 3,
            ..RenderConfig::default()
        };
        let renderer = ChartRenderer::new(config);
        let col = column("c", &["a", "b", "b", "c", "d", "b", "a"]);
        let ds = Dataset::new(vec![col]).unwrap();
        let slices = renderer.pie_slices(&ds, "c").unwrap();
        // Top max_pie_slices values survive, the tail becomes "other"
        assert_eq!(slices.len(), 4);
        assert_eq!(slices[0], ("b".to_string(), 3.0));
        assert_eq!(slices[1], ("a".to_string(), 2.0));
        assert_eq!(slices[2], ("c".to_string(), 1.0));
        assert_eq!(slices[3], ("other".to_string(), 1.0));
    }

    #[test]
    fn test_zero_row_dataset_is_input_error() {
        let renderer = ChartRenderer::default_config();
        let ds = Dataset::new(vec![
            Column::new("x".to_string()),
            Column::new("y".to_string()),
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        for kind in ChartKind::all() {
            let out = dir.path().join(format!("{}.png", kind));
            let request = ChartRequest::new("x", "y", kind);
            let err = renderer.render(&ds, &request, &out).unwrap_err();
            assert!(
                matches!(err, AppError::Input(_)),
                "{} on an empty dataset should be an input error",
                kind
            );
            assert!(!out.exists());
        }
    }

    #[test]
    fn test_all_missing_rows_is_input_error() {
        let renderer = ChartRenderer::default_config();
        let ds = Dataset::new(vec![
            column("x", &["1", "", "3"]),
            column("y", &["", "2", ""]),
        ])
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.png");
        let request = ChartRequest::new("x", "y", ChartKind::Line);
        let err = renderer.render(&ds, &request, &out).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }
}
