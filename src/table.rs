//! The materialized table, its header index and its row cursor.

use std::path::Path;
use std::str::FromStr;

use crate::cursor::Cursor;
use crate::decode::Records;
use crate::error::{Error, Result};
use crate::headers::HeaderIndex;
use crate::loader::{Format, Loader};
use crate::view::{RowView, Rows};

/// Header row used by the convenience constructors.
pub const DEFAULT_HEADER_ROW: usize = 1;

/// A fully loaded CSV/TSV table.
///
/// Rows are numbered from 1, columns from 0. A table has exactly one
/// cursor: [`get`](Self::get), [`cell`](Self::cell) and
/// [`row_map`](Self::row_map) read from the row it points at, and the
/// [`rewind`](Self::rewind) / [`valid`](Self::valid) /
/// [`advance`](Self::advance) methods walk it over the rows. The cursor is
/// not re-entrant; use [`iter`](Self::iter) for independent read-only
/// positions.
///
/// # Example
///
/// ```
/// use csv_cursor::Table;
///
/// let mut table = Table::from_csv_str("Name,Age\nRich,40\nFred,1000\n", 1).unwrap();
/// assert_eq!(table.count(), 2);
///
/// table.rewind();
/// while table.valid() {
///     println!("{} is {}", table.get("Name").unwrap(), table.get("Age").unwrap());
///     table.advance();
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Row `n` lives at index `n - 1`.
    rows: Vec<Vec<String>>,
    /// Header strings exactly as given, blanks included.
    headers: Option<Vec<String>>,
    header_index: HeaderIndex,
    cursor: Cursor,
}

impl Table {
    /// Create an empty table with no headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from decoded records.
    ///
    /// `header_row` is the 1-based row holding column names, or 0 for none.
    /// The header row and every row above it are removed from the data.
    pub fn from_records(records: Records, header_row: usize) -> Result<Self> {
        let mut table = Self {
            rows: records,
            ..Self::default()
        };

        if header_row > 0 {
            if header_row > table.count() {
                return Err(Error::HeaderRowOutOfRange {
                    requested: header_row,
                    available: table.count(),
                });
            }
            table.extract_headers(Some(header_row))?;
        }

        table.rewind();
        Ok(table)
    }

    /// Load a comma-separated file.
    ///
    /// `max_field_len` limits the byte length of a single field (`None` for
    /// no limit).
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        max_field_len: Option<usize>,
        header_row: usize,
    ) -> Result<Self> {
        Loader::new()
            .header_row(header_row)
            .max_record_len(max_field_len)
            .load_path(path)
    }

    /// Load a tab-separated file.
    ///
    /// `max_line_len` limits the byte length of a line (`None` for no
    /// limit).
    pub fn from_tsv_path<P: AsRef<Path>>(
        path: P,
        max_line_len: Option<usize>,
        header_row: usize,
    ) -> Result<Self> {
        Loader::new()
            .format(Format::Tsv)
            .header_row(header_row)
            .max_record_len(max_line_len)
            .load_path(path)
    }

    /// Parse comma-separated text held in memory.
    ///
    /// The text is split into lines before fields are parsed, so quoted
    /// fields cannot contain line breaks here. [`from_path`](Self::from_path)
    /// and [`Loader::load_reader`] handle them.
    pub fn from_csv_str(text: &str, header_row: usize) -> Result<Self> {
        Loader::new().header_row(header_row).load_str(text)
    }

    /// Use a row (or the cursor row when `None`) as the column names.
    ///
    /// That row and all rows before it are removed; the remaining rows are
    /// renumbered from 1 and the cursor is rewound.
    pub fn extract_headers(&mut self, row: Option<usize>) -> Result<&mut Self> {
        if let Some(row) = row {
            self.set_row(row)?;
        }
        let row = self.cursor_row()?;

        let header_index = HeaderIndex::build(self.rows[row - 1].as_slice())?;
        let headers = self.rows.drain(..row).next_back().unwrap_or_default();
        self.headers = Some(headers);
        self.header_index = header_index;

        tracing::debug!(
            header_row = row,
            columns = self.header_index.len(),
            rows = self.rows.len(),
            "extracted headers"
        );

        self.rewind();
        Ok(self)
    }

    /// Set the column names without touching the data rows.
    ///
    /// Names are trimmed for lookup and blank names are not indexed. On
    /// [`Error::DuplicateHeader`] the previous headers stay in place.
    pub fn set_headers<S: AsRef<str>>(&mut self, names: &[S]) -> Result<&mut Self> {
        let header_index = HeaderIndex::build(names)?;
        self.headers = Some(names.iter().map(|n| n.as_ref().to_string()).collect());
        self.header_index = header_index;
        Ok(self)
    }

    /// Number of data rows.
    #[inline]
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Move the cursor back to row 1.
    pub fn rewind(&mut self) {
        self.cursor.rewind();
    }

    /// True if the cursor points at an existing row.
    pub fn valid(&self) -> bool {
        self.row_number().is_some()
    }

    /// Move the cursor to the next row, or off the end after the last one.
    pub fn advance(&mut self) {
        self.cursor.advance(self.count());
    }

    /// The cursor's row number; same as [`row_number`](Self::row_number).
    pub fn key(&self) -> Option<usize> {
        self.row_number()
    }

    /// The table positioned at the cursor row.
    pub fn current(&self) -> &Self {
        self
    }

    /// Current row number, or `None` when the cursor is off the table.
    pub fn row_number(&self) -> Option<usize> {
        self.cursor.row(self.count())
    }

    /// Move the cursor to a row (1-based).
    ///
    /// An out-of-range row leaves the cursor without a position.
    pub fn set_row(&mut self, row: usize) -> Result<&mut Self> {
        if self.cursor.seek(row, self.count()) {
            Ok(self)
        } else {
            Err(Error::InvalidRow(Some(row)))
        }
    }

    /// Cell at column `col` of `row`, or of the cursor row when `row` is
    /// `None`. Passing a row moves the cursor there.
    ///
    /// Columns up to and including the header count (or the row's field
    /// count when there are no headers) are accepted; positions past the
    /// end of a short row read as `""`.
    pub fn cell(&mut self, col: usize, row: Option<usize>) -> Result<&str> {
        if let Some(row) = row {
            self.set_row(row)?;
        }
        let row = self.cursor_row()?;
        self.cell_at(row, col)
    }

    /// Cell of the cursor row under the given header name.
    pub fn get(&self, name: &str) -> Result<&str> {
        let col = self
            .header_index
            .position(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))?;
        self.cell_at(self.cursor_row()?, col)
    }

    /// The cursor row as `(header, value)` pairs in column order, or `None`
    /// when the cursor is off the table.
    pub fn row_map(&self) -> Option<Vec<(&str, &str)>> {
        self.row_number().map(|row| self.map_row(row))
    }

    /// Fields of the cursor row.
    pub fn fields(&self) -> Option<&[String]> {
        self.row_number().map(|row| self.rows[row - 1].as_slice())
    }

    /// Indexed (trimmed, non-blank) header names in column order.
    pub fn headers(&self) -> Vec<&str> {
        self.header_index.names().collect()
    }

    /// Header strings exactly as set, blanks included.
    pub fn raw_headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// All data rows, first row first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Read-only views of every row, independent of the cursor.
    pub fn iter(&self) -> Rows<'_> {
        Rows::new(self)
    }

    /// Read-only view of one row.
    pub fn row(&self, row: usize) -> Result<RowView<'_>> {
        if (1..=self.count()).contains(&row) {
            Ok(RowView::new(self, row))
        } else {
            Err(Error::InvalidRow(Some(row)))
        }
    }

    pub(crate) fn header_index(&self) -> &HeaderIndex {
        &self.header_index
    }

    pub(crate) fn row_fields(&self, row: usize) -> &[String] {
        &self.rows[row - 1]
    }

    /// Bounds-checked cell lookup; `row` must be a valid row number.
    pub(crate) fn cell_at(&self, row: usize, col: usize) -> Result<&str> {
        let fields = self.row_fields(row);
        let max_cols = match &self.headers {
            Some(headers) if !headers.is_empty() => headers.len(),
            _ => fields.len(),
        };
        if col > max_cols {
            return Err(Error::ColumnOutOfBounds(col));
        }
        Ok(fields.get(col).map_or("", String::as_str))
    }

    pub(crate) fn map_row(&self, row: usize) -> Vec<(&str, &str)> {
        let fields = self.row_fields(row);
        self.header_index
            .iter()
            .map(|(name, col)| (name, fields.get(col).map_or("", String::as_str)))
            .collect()
    }

    fn cursor_row(&self) -> Result<usize> {
        self.row_number().ok_or(Error::InvalidRow(None))
    }
}

impl FromStr for Table {
    type Err = Error;

    /// Parse CSV text with column names in the first line.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_csv_str(s, DEFAULT_HEADER_ROW)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = RowView<'a>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
