//! Read-only row views that do not move the table cursor.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::table::Table;

/// One row of a [`Table`], addressed by its row number.
///
/// Views borrow the table immutably, so any number may exist at once. Cell
/// access follows the same bounds and short-row rules as
/// [`Table::cell`].
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    table: &'a Table,
    row: usize,
}

impl<'a> RowView<'a> {
    pub(crate) fn new(table: &'a Table, row: usize) -> Self {
        Self { table, row }
    }

    /// The 1-based row number.
    pub fn row_number(&self) -> usize {
        self.row
    }

    /// Cell under the given header name.
    pub fn get(&self, name: &str) -> Result<&'a str> {
        let col = self
            .table
            .header_index()
            .position(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))?;
        self.table.cell_at(self.row, col)
    }

    /// Cell at a 0-based column.
    pub fn cell(&self, col: usize) -> Result<&'a str> {
        self.table.cell_at(self.row, col)
    }

    /// The row's fields as stored.
    pub fn fields(&self) -> &'a [String] {
        self.table.row_fields(self.row)
    }

    /// `(header, value)` pairs in column order.
    pub fn to_map(&self) -> Vec<(&'a str, &'a str)> {
        self.table.map_row(self.row)
    }
}

/// Iterator over the rows of a [`Table`], returned by [`Table::iter`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    table: &'a Table,
    next: usize,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(table: &'a Table) -> Self {
        Self { table, next: 1 }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = RowView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.table.count() {
            return None;
        }
        let view = RowView::new(self.table, self.next);
        self.next += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.table.count() + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
