// ============================================================
// CSV READER
// ============================================================
// Read CSV files into a columnar Dataset with encoding detection

use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::domain::dataset::{Column, Dataset};
use crate::domain::error::{AppError, Result};

/// CSV reader with delimiter and encoding detection
pub struct CsvReader {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvReader {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvReader {
    /// Create a new CSV reader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether to trim whitespace
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Read a CSV file into a dataset
    pub fn read_file(&self, path: &Path) -> Result<Dataset> {
        let content = read_with_encoding_detection(path)?;
        self.read_content(&content)
    }

    /// Read CSV content from a string
    pub fn read_content(&self, content: &str) -> Result<Dataset> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::Parse(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
        for header in headers.iter() {
            if columns.iter().any(|c| c.name == header) {
                return Err(AppError::Parse(format!(
                    "Duplicate column name: {}",
                    header
                )));
            }
            columns.push(Column::new(header.to_string()));
        }

        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::Parse(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            for (idx, column) in columns.iter_mut().enumerate() {
                column.push_cell(record.get(idx).unwrap_or(""));
            }
        }

        Dataset::new(columns)
    }

    /// Read a CSV file with automatic delimiter detection
    pub fn read_file_auto_detect(path: &Path) -> Result<Dataset> {
        let content = read_with_encoding_detection(path)?;
        let delimiter = Self::detect_delimiter(&content);
        Self::default().with_delimiter(delimiter).read_content(&content)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let sample_lines: Vec<_> = content.lines().take(10).collect();

            if sample_lines.is_empty() {
                continue;
            }

            let mut field_counts = Vec::new();
            for line in &sample_lines {
                let count = line.bytes().filter(|&b| b == delimiter).count();
                field_counts.push(count);
            }

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());
            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }
}

/// Read file bytes, trying UTF-8 first and falling back to Windows-1252
fn read_with_encoding_detection(path: &Path) -> Result<String> {
    let buffer = std::fs::read(path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;

    if let Ok(content) = std::str::from_utf8(&buffer) {
        return Ok(content.to_string());
    }

    let (decoded, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&buffer);
    if !had_errors {
        return Ok(decoded.into_owned());
    }

    Ok(String::from_utf8_lossy(&buffer).to_string())
}
