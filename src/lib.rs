//! csv-cursor: random-access CSV/TSV tables with a row cursor
//!
//! Loads an entire CSV or TSV source into memory and exposes the rows both
//! through a single "current row" cursor and by direct addressing. Columns
//! can be read by position or by the names found in a header row.
//!
//! # Quick Start
//!
//! ```no_run
//! use csv_cursor::Table;
//!
//! // Column names are taken from row 1
//! let mut table = Table::from_path("people.csv", None, 1).unwrap();
//!
//! println!("There are {} rows", table.count());
//! println!("Name: {}", table.get("Name").unwrap());
//! println!("First column: {}", table.cell(0, None).unwrap());
//!
//! table.rewind();
//! while table.valid() {
//!     println!("Hello, {}", table.get("Name").unwrap());
//!     table.advance();
//! }
//! ```
//!
//! # Addressing
//!
//! - Rows are numbered from 1, columns from 0.
//! - Header names are trimmed. Blank headers are allowed (and can only be
//!   reached by column number); any other repeated name is rejected with
//!   [`Error::DuplicateHeader`].
//! - Cells missing from short rows read as an empty string.
//!
//! # Iteration
//!
//! A table has one cursor, moved with [`Table::rewind`],
//! [`Table::advance`] and [`Table::set_row`]. Nested loops over the same
//! table share that cursor. [`Table::iter`] yields read-only [`RowView`]s
//! instead, which can be held and nested freely:
//!
//! ```
//! use csv_cursor::Table;
//!
//! let table: Table = "Name,Age\nRich,40\nFred,1000\n".parse().unwrap();
//! let ages: Vec<&str> = table.iter().map(|row| row.get("Age").unwrap()).collect();
//! assert_eq!(ages, ["40", "1000"]);
//! ```
//!
//! # Loading Options
//!
//! ```no_run
//! use csv_cursor::{Format, Loader};
//!
//! let mut loader = Loader::new();
//! loader
//!     .format(Format::Tsv)
//!     .header_row(2)
//!     .max_record_len(Some(64 * 1024));
//!
//! let table = loader.load_path("report.tsv").unwrap();
//! print!("{}", table.to_csv_string().unwrap());
//! ```

mod cursor;
pub mod decode;
mod encode;
mod encoding;
mod error;
mod headers;
mod loader;
mod table;
mod view;

pub use error::{Error, Result};
pub use headers::HeaderIndex;
pub use loader::{Format, Loader};
pub use table::{DEFAULT_HEADER_ROW, Table};
pub use view::{RowView, Rows};

// Re-export for advanced usage
pub use encoding::{decode_text, is_utf8};
