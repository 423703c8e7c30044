// ============================================================
// APPLICATION LAYER
// ============================================================
// Use cases over a loaded dataset: summarize, preview, render

pub mod preview;
pub mod render;
pub mod summarize;

pub use preview::{preview, DatasetPreview};
pub use render::ChartRenderer;
pub use summarize::summarize;
