//! Cursor over a row source.

use crate::result::bind::RowSource;
use crate::result::row::ResultRow;

/// Walks the rows of a [`RowSource`] through a bound [`ResultRow`].
///
/// The row is valid exactly while the cursor stands on a fetched row. Once
/// the source runs dry, or after [`Cursor::reset`], every field of the row
/// answers with an access error.
pub struct Cursor<R: ResultRow, S: RowSource> {
    row: R,
    source: S,
    exhausted: bool,
    rows_fetched: usize,
}

impl<R: ResultRow, S: RowSource> Cursor<R, S> {
    /// Bind `row` to `source`, starting at column 0.
    pub fn new(mut row: R, mut source: S) -> Self {
        row.invalidate();
        let width = row.bind_fields(&mut source, 0);
        log::debug!("cursor bound {} result columns", width);
        Self {
            row,
            source,
            exhausted: false,
            rows_fetched: 0,
        }
    }

    /// Advance to the next row.
    ///
    /// Returns the row if one was fetched, `None` once the source has no more
    /// rows. A source error leaves the row invalid.
    pub fn next(&mut self) -> Result<Option<&R>, S::Error> {
        if self.exhausted {
            return Ok(None);
        }

        match self.source.fetch() {
            Ok(true) => {
                self.row.validate();
                self.rows_fetched += 1;
                Ok(Some(&self.row))
            }
            Ok(false) => {
                self.row.invalidate();
                self.exhausted = true;
                log::debug!("cursor exhausted after {} rows", self.rows_fetched);
                Ok(None)
            }
            Err(e) => {
                self.row.invalidate();
                Err(e)
            }
        }
    }

    /// The bound row, valid or not
    pub fn row(&self) -> &R {
        &self.row
    }

    /// Drop the current row without fetching.
    pub fn reset(&mut self) {
        self.row.invalidate();
    }

    pub fn rows_fetched(&self) -> usize {
        self.rows_fetched
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn into_parts(self) -> (R, S) {
        (self.row, self.source)
    }
}
