// ============================================================
// CSV INFRASTRUCTURE
// ============================================================
// File ingestion into the domain Dataset type

mod reader;

pub use reader::CsvReader;
