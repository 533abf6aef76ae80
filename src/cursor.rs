/// Current-row position of a [`Table`](crate::Table).
///
/// Holds a 1-based row number, or no position once iteration has run past
/// the last row or a positioning attempt failed. The cursor knows nothing
/// about the rows themselves; callers pass the current row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Option<usize>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// A cursor at row 1.
    pub const fn new() -> Self {
        Self { position: Some(1) }
    }

    /// Move back to row 1.
    #[inline]
    pub fn rewind(&mut self) {
        self.position = Some(1);
    }

    /// Step forward one row; past the last row the position is dropped.
    pub fn advance(&mut self, count: usize) {
        self.position = match self.position {
            Some(row) if row < count => Some(row + 1),
            _ => None,
        };
    }

    /// Move to `row`, which must be in `[1, count]`.
    ///
    /// On failure the position is dropped and `false` is returned.
    pub fn seek(&mut self, row: usize, count: usize) -> bool {
        if (1..=count).contains(&row) {
            self.position = Some(row);
            true
        } else {
            self.position = None;
            false
        }
    }

    /// The current row if it addresses one of `count` rows.
    #[inline]
    pub fn row(&self, count: usize) -> Option<usize> {
        self.position.filter(|row| (1..=count).contains(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.row(3), Some(1));
        cursor.advance(3);
        cursor.advance(3);
        assert_eq!(cursor.row(3), Some(3));
        cursor.advance(3);
        assert_eq!(cursor.row(3), None);

        // Stays past the end.
        cursor.advance(3);
        assert_eq!(cursor.row(3), None);

        cursor.rewind();
        assert_eq!(cursor.row(3), Some(1));
    }

    #[test]
    fn test_empty_table() {
        let mut cursor = Cursor::new();
        assert_eq!(cursor.row(0), None);
        cursor.advance(0);
        assert_eq!(cursor.row(0), None);
    }

    #[test]
    fn test_seek() {
        let mut cursor = Cursor::new();
        assert!(cursor.seek(2, 2));
        assert_eq!(cursor.row(2), Some(2));

        assert!(!cursor.seek(3, 2));
        assert_eq!(cursor.row(2), None);

        assert!(cursor.seek(1, 2));
        assert!(!cursor.seek(0, 2));
        assert_eq!(cursor.row(2), None);
    }
}
