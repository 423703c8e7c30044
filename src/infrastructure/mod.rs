// ============================================================
// INFRASTRUCTURE LAYER
// ============================================================
// File ingestion, chart drawing, configuration, output storage

pub mod config;
pub mod csv;
pub mod plot;
pub mod storage;
