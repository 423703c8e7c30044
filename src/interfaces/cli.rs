// ============================================================
// CLI INTERFACE
// ============================================================
// Thin command wrapper over the library use cases

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::info;

use crate::application::render::ChartRenderer;
use crate::application::{preview, summarize};
use crate::domain::chart::{ChartKind, ChartRequest};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::csv::CsvReader;
use crate::infrastructure::storage::session_plot_path;

#[derive(Parser)]
#[command(
    name = "csviz",
    version,
    about = "Summarize CSV columns and render quick charts"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Per-column summary: missing values, cardinality, inferred type
    Summary {
        /// CSV file to summarize
        file: PathBuf,

        /// Emit the summary as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },

    /// Show the first rows of the dataset
    Preview {
        /// CSV file to preview
        file: PathBuf,

        /// Number of rows to show
        #[arg(long)]
        rows: Option<usize>,
    },

    /// Render a chart from two columns to a PNG file
    Plot {
        /// CSV file to plot from
        file: PathBuf,

        /// X-axis column (required for line and scatter)
        #[arg(long)]
        x: Option<String>,

        /// Y-axis column
        #[arg(long)]
        y: String,

        /// Chart kind: line, histogram, density, scatter, pie
        #[arg(long)]
        kind: ChartKind,

        /// Output image path (default: a unique plot-<id>.png)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

/// Parse arguments and run the selected command
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Command::Summary { file, json } => {
            let dataset = load(&file)?;
            let summary = summarize(&dataset);
            if json {
                let rendered = serde_json::to_string_pretty(&summary)
                    .map_err(|e| AppError::Internal(e.to_string()))?;
                println!("{}", rendered);
            } else {
                println!("{} rows x {} columns", summary.row_count, summary.columns.len());
                print!("{}", summary.to_table());
            }
        }
        Command::Preview { file, rows } => {
            let dataset = load(&file)?;
            let head = preview(&dataset, rows.unwrap_or(config.preview_rows));
            print!("{}", head.to_table());
        }
        Command::Plot { file, x, y, kind, out } => {
            let dataset = load(&file)?;
            let x = match x {
                Some(x) => x,
                None if kind.is_single_column() => y.clone(),
                None => {
                    return Err(AppError::Input(format!(
                        "--x is required for {} charts",
                        kind
                    )))
                }
            };
            let output = out.unwrap_or_else(|| session_plot_path(Path::new(".")));
            let request = ChartRequest::new(x, y, kind);
            ChartRenderer::new(config.render).render(&dataset, &request, &output)?;
            println!("{}", output.display());
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<crate::domain::dataset::Dataset> {
    let dataset = CsvReader::read_file_auto_detect(path)?;
    info!(
        file = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "Loaded dataset"
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_plot_args_parse() {
        let cli = Cli::try_parse_from([
            "csviz", "plot", "data.csv", "--x", "age", "--y", "salary", "--kind", "scatter",
        ])
        .unwrap();
        match cli.command {
            Command::Plot { x, y, kind, .. } => {
                assert_eq!(x.as_deref(), Some("age"));
                assert_eq!(y, "salary");
                assert_eq!(kind, ChartKind::Scatter);
            }
            _ => panic!("expected plot command"),
        }
    }
}
