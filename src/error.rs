use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for loading and accessing tables.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested header row is beyond the rows that were loaded.
    #[error("Failed to read {requested} row(s) of data, only {available} available")]
    HeaderRowOutOfRange { requested: usize, available: usize },

    /// A row number outside `[1, count]`, or no current row (`None`).
    #[error("{}", describe_row(.0))]
    InvalidRow(Option<usize>),

    /// Column index beyond the permitted range.
    #[error("Column {0} out of bounds")]
    ColumnOutOfBounds(usize),

    /// Two non-blank headers trim to the same name.
    #[error("Duplicate header name: {0}")]
    DuplicateHeader(String),

    /// Named access for a header that is not indexed.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// The source file could not be opened or read.
    #[error("Cannot read '{}': {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// IO error on a reader or writer.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field (CSV) or line (TSV) exceeds the configured maximum length.
    #[error("Row {row} exceeds the maximum length of {limit} bytes")]
    RecordTooLong { row: usize, limit: usize },
}

fn describe_row(row: &Option<usize>) -> String {
    match row {
        Some(row) => format!("Row {row} not found"),
        None => "Invalid current row".to_string(),
    }
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, Error>;
