//! File-format detection by extension.

use std::path::Path;

use crate::error::FormatError;

/// A file format identified from a path's extension.
///
/// Csv and Json are recognized formats without an adapter: detection
/// succeeds, adapter selection fails with an unsupported-format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Avro,
    Parquet,
    Csv,
    Json,
}

impl FileFormat {
    /// Identify the format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            return Err(FormatError::unsupported(format!(
                "'{}' has no file extension",
                path.display()
            )));
        };
        match extension.to_ascii_lowercase().as_str() {
            "avro" => Ok(Self::Avro),
            "parquet" => Ok(Self::Parquet),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(FormatError::unsupported(format!(
                "unknown extension '.{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Avro => "avro",
            Self::Parquet => "parquet",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}
