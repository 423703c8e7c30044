//! csviz: summarize the columns of a CSV file and render quick charts.
//!
//! The crate is layered the usual way: `domain` holds the dataset, summary
//! and chart types; `application` the summarize/preview/render use cases;
//! `infrastructure` the CSV reader, the plotting backend and configuration;
//! `interfaces` the CLI.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use application::{preview, summarize, ChartRenderer, DatasetPreview};
pub use domain::{
    ChartKind, ChartRequest, Column, ColumnSummary, ColumnType, Dataset, DatasetSummary,
    RenderConfig,
};
pub use domain::error::{AppError, Result};
pub use infrastructure::csv::CsvReader;
