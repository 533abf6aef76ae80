//! Writing a table back out as CSV.

use std::io;

use crate::error::{Error, Result};
use crate::loader::Format;
use crate::table::Table;

impl Table {
    /// Write the header row (if any) and every data row as CSV.
    ///
    /// Fields are quoted only when they contain a comma, a quote or a line
    /// break; quotes are escaped by doubling. Short rows are written with
    /// the fields they have.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(Format::Csv.delimiter())
            .flexible(true)
            .from_writer(writer);

        if let Some(headers) = self.raw_headers().filter(|h| !h.is_empty()) {
            writer.write_record(headers)?;
        }
        for row in self.rows() {
            writer.write_record(row)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Render the table as a CSV string.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Io(io::Error::other(e)))
    }
}
