// ============================================================
// APP CONFIGURATION
// ============================================================
// Layered configuration: defaults, csviz.toml, then CSVIZ_* env vars

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::domain::error::{AppError, Result};
use crate::domain::render_config::RenderConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Chart rendering tunables
    pub render: RenderConfig,

    /// Rows shown by the dataset preview (default: 5)
    pub preview_rows: usize,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `csviz.toml`, and
    /// `CSVIZ_*` environment variables (e.g. `CSVIZ_RENDER__BINS=20`)
    pub fn load() -> Result<Self> {
        let config: AppConfig = Figment::new()
            .merge(Serialized::defaults(AppConfig::defaults()))
            .merge(Toml::file("csviz.toml"))
            .merge(Env::prefixed("CSVIZ_").split("__"))
            .extract()
            .map_err(|e| AppError::ValidationError(format!("Invalid configuration: {}", e)))?;

        config
            .render
            .validate()
            .map_err(AppError::ValidationError)?;
        Ok(config)
    }

    fn defaults() -> Self {
        Self {
            render: RenderConfig::default(),
            preview_rows: 5,
        }
    }
}
