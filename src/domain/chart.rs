// ============================================================
// CHART TYPES
// ============================================================
// The five fixed rendering rules and the per-request chart selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed chart rendering rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// y against x, connected in row order
    Line,
    /// Binned counts of y
    Histogram,
    /// Normalized bins of y with a kernel density overlay
    Density,
    /// y against x as points
    Scatter,
    /// Value counts of y as slices
    Pie,
}

impl ChartKind {
    /// Chart kinds that only read the y column
    pub fn is_single_column(&self) -> bool {
        matches!(self, ChartKind::Histogram | ChartKind::Density | ChartKind::Pie)
    }

    /// All chart kinds, in menu order
    pub fn all() -> [ChartKind; 5] {
        [
            ChartKind::Line,
            ChartKind::Histogram,
            ChartKind::Density,
            ChartKind::Scatter,
            ChartKind::Pie,
        ]
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Histogram => write!(f, "histogram"),
            ChartKind::Density => write!(f, "density"),
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::Pie => write!(f, "pie"),
        }
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "histogram" | "hist" => Ok(ChartKind::Histogram),
            "density" | "distribution" => Ok(ChartKind::Density),
            "scatter" => Ok(ChartKind::Scatter),
            "pie" => Ok(ChartKind::Pie),
            other => Err(format!(
                "Unknown chart kind '{}', expected one of: line, histogram, density, scatter, pie",
                other
            )),
        }
    }
}

/// A single chart request: which columns to read and how to draw them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartRequest {
    /// X-axis column name (ignored by single-column kinds)
    pub x_column: String,

    /// Y-axis column name
    pub y_column: String,

    /// Selected rendering rule
    pub kind: ChartKind,
}

impl ChartRequest {
    pub fn new(x_column: impl Into<String>, y_column: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
            kind,
        }
    }

    /// Title matching the rendering rule
    pub fn title(&self) -> String {
        match self.kind {
            ChartKind::Line => format!("Line Plot of {} vs {}", self.y_column, self.x_column),
            ChartKind::Histogram => format!("Histogram of {}", self.y_column),
            ChartKind::Density => format!("Distribution of {}", self.y_column),
            ChartKind::Scatter => format!("Scatter Plot of {} vs {}", self.y_column, self.x_column),
            ChartKind::Pie => format!("Pie Chart of {}", self.y_column),
        }
    }
}
