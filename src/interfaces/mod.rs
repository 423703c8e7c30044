// ============================================================
// INTERFACES LAYER
// ============================================================

pub mod cli;
