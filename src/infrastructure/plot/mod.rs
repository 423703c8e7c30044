// ============================================================
// PLOT INFRASTRUCTURE
// ============================================================
// Chart drawing backend and the series math behind it

mod charts;
mod stats;

pub use charts::{draw_density, draw_histogram, draw_line, draw_pie, draw_scatter};
pub use stats::{bin_densities, histogram_bins, kde_curve, Bin};
