// crates/infra/src/csv_source.rs
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use mailtally_ports::source::{ColumnRequest, ColumnSource};
use mailtally_shared_kernel::{InfrastructureError, Result};

use crate::quote_check::{QuoteChecked, quote_error};

const DELIMITER: u8 = b',';

/// Filesystem adapter implementing the `ColumnSource` port for comma-separated text.
///
/// Strict RFC 4180 quoting applies. Every record must have as many fields as the
/// header, and the file handle is dropped on every return path.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvColumnSource;

impl CsvColumnSource {
    pub fn new() -> Self {
        Self
    }
}

impl ColumnSource for CsvColumnSource {
    fn for_each_value(&self, request: &ColumnRequest, visit: &mut dyn FnMut(&str)) -> Result<()> {
        let path = request.path.as_path();
        let file = open_source(path)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .from_reader(QuoteChecked::new(file, DELIMITER));

        let headers = reader.headers().map_err(|e| malformed(path, &e))?;
        if headers.is_empty() {
            return Err(InfrastructureError::MalformedInput {
                path: path.to_path_buf(),
                line: None,
                reason: "missing header row".into(),
            }
            .into());
        }

        let mut record = StringRecord::new();
        while reader.read_record(&mut record).map_err(|e| malformed(path, &e))? {
            let value = record.get(request.column).ok_or_else(|| missing_column(path, &record, request.column))?;
            visit(value);
        }
        Ok(())
    }
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| InfrastructureError::NotFound { path: path.to_path_buf(), source }.into())
}

fn malformed(path: &Path, err: &csv::Error) -> InfrastructureError {
    if let Some(quote) = io_source(err).and_then(quote_error) {
        return InfrastructureError::MalformedInput {
            path: PathBuf::from(path),
            line: Some(quote.line),
            reason: quote.reason.to_string(),
        };
    }
    let reason = match err.kind() {
        ErrorKind::UnequalLengths { expected_len, len, .. } => {
            format!("found {len} fields, expected {expected_len}")
        }
        ErrorKind::Utf8 { .. } => "invalid UTF-8".to_string(),
        ErrorKind::Io(io) => format!("read failed: {io}"),
        _ => err.to_string(),
    };
    InfrastructureError::MalformedInput { path: PathBuf::from(path), line: err.position().map(|p| p.line()), reason }
}

fn io_source(err: &csv::Error) -> Option<&std::io::Error> {
    match err.kind() {
        ErrorKind::Io(io) => Some(io),
        _ => None,
    }
}

fn missing_column(path: &Path, record: &StringRecord, column: usize) -> InfrastructureError {
    InfrastructureError::MalformedInput {
        path: path.to_path_buf(),
        line: record.position().map(|p| p.line()),
        reason: format!("row has {} fields, column {column} requested", record.len()),
    }
}
