// ============================================================
// DOMAIN LAYER
// ============================================================
// Core types and value objects for dataset summaries and charts
// No I/O, no external services

pub mod chart;
pub mod dataset;
pub mod error;
pub mod render_config;
pub mod summary;

pub use chart::{ChartKind, ChartRequest};
pub use dataset::{Column, ColumnType, Dataset};
pub use render_config::RenderConfig;
pub use summary::{ColumnSummary, DatasetSummary};
