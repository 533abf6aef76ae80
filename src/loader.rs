//! Table loader builder and load methods.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::decode::{decode_csv, decode_csv_lines, decode_tsv};
use crate::encoding::decode_text;
use crate::error::{Error, Result};
use crate::table::{DEFAULT_HEADER_ROW, Table};

/// Delimited text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Comma-separated, `"` quoting, fields may span lines.
    #[default]
    Csv,
    /// Tab-separated, no quoting, one record per line.
    Tsv,
}

impl Format {
    /// The field delimiter byte.
    pub const fn delimiter(&self) -> u8 {
        match self {
            Format::Csv => b',',
            Format::Tsv => b'\t',
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Csv => write!(f, "csv"),
            Format::Tsv => write!(f, "tsv"),
        }
    }
}

/// Builder for loading a [`Table`] from a file, reader or string.
///
/// # Example
///
/// ```no_run
/// use csv_cursor::{Format, Loader};
///
/// let mut loader = Loader::new();
/// loader.format(Format::Tsv).header_row(2).max_record_len(Some(4096));
///
/// let table = loader.load_path("data.tsv").unwrap();
/// println!("{} rows, columns {:?}", table.count(), table.headers());
/// ```
#[derive(Debug, Clone)]
pub struct Loader {
    format: Format,
    /// 1-based header row, 0 for none.
    header_row: usize,
    /// Longest CSV field or TSV line in bytes; `None` for unlimited.
    max_record_len: Option<usize>,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Create a loader for CSV with column names in row 1.
    pub fn new() -> Self {
        Self {
            format: Format::Csv,
            header_row: DEFAULT_HEADER_ROW,
            max_record_len: None,
        }
    }

    /// Set the input format.
    pub fn format(&mut self, format: Format) -> &mut Self {
        self.format = format;
        self
    }

    /// Set the 1-based row that holds column names (0 for no header row).
    pub fn header_row(&mut self, header_row: usize) -> &mut Self {
        self.header_row = header_row;
        self
    }

    /// Limit the byte length of a CSV field or TSV line.
    ///
    /// `None` or `Some(0)` removes the limit.
    pub fn max_record_len(&mut self, max_record_len: Option<usize>) -> &mut Self {
        self.max_record_len = max_record_len;
        self
    }

    /// Load a file.
    ///
    /// Failure to open or read the file is reported as
    /// [`Error::SourceUnreadable`].
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        let unreadable = |source| Error::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unreadable)?;
        let mut data = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut data)
            .map_err(unreadable)?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "read source file");
        self.load_bytes(&data)
    }

    /// Load everything a reader yields.
    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<Table> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.load_bytes(&data)
    }

    /// Load raw bytes, transcoding to UTF-8 when needed.
    pub fn load_bytes(&self, data: &[u8]) -> Result<Table> {
        let text = decode_text(data);
        let records = match self.format {
            Format::Csv => decode_csv(&text, self.max_record_len)?,
            Format::Tsv => decode_tsv(&text, self.max_record_len)?,
        };
        self.build(records.len(), Table::from_records(records, self.header_row))
    }

    /// Load text held in memory.
    ///
    /// CSV text is split into lines before fields are parsed, so quoted
    /// fields cannot span lines; the length limit is not applied. TSV text
    /// is decoded as by [`load_bytes`](Self::load_bytes).
    pub fn load_str(&self, text: &str) -> Result<Table> {
        let records = match self.format {
            Format::Csv => decode_csv_lines(text)?,
            Format::Tsv => decode_tsv(text, self.max_record_len)?,
        };
        self.build(records.len(), Table::from_records(records, self.header_row))
    }

    fn build(&self, decoded: usize, table: Result<Table>) -> Result<Table> {
        tracing::debug!(
            format = %self.format,
            decoded,
            header_row = self.header_row,
            ok = table.is_ok(),
            "loaded table"
        );
        table
    }
}
