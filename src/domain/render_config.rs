// ============================================================
// RENDER CONFIGURATION
// ============================================================
// Tunables for the chart rendering backend

use serde::{Deserialize, Serialize};

/// Configuration for chart rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output image width in pixels (default: 1000)
    pub width: u32,

    /// Output image height in pixels (default: 600)
    pub height: u32,

    /// Number of bins for histogram and density charts (default: 30)
    pub bins: usize,

    /// Maximum pie slices before the tail collapses into "other" (default: 12)
    pub max_pie_slices: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            bins: 30,
            max_pie_slices: 12,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.width < 100 || self.height < 100 {
            return Err("width and height must be at least 100 pixels".to_string());
        }
        if self.bins == 0 {
            return Err("bins must be > 0".to_string());
        }
        if self.max_pie_slices < 2 {
            return Err("max_pie_slices must be >= 2".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_bins() {
        let config = RenderConfig::default().with_bins(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_tiny_canvas() {
        let config = RenderConfig::default().with_size(10, 10);
        assert!(config.validate().is_err());
    }
}
