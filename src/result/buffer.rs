//! In-memory row source.
//!
//! Holds rows as raw nullable column bytes, the same shape a text-protocol
//! driver hands out, and decodes them into bound slots on every fetch.

use crate::error::BufferError;
use crate::result::bind::{ColumnSlot, ResultBinder, RowSource};
use crate::types::{Boolean, Integral};
use bytes::Bytes;
use std::collections::VecDeque;

/// Raw column values of one row. `None` is SQL NULL.
pub type RawRow = Vec<Option<Bytes>>;

#[derive(Debug)]
enum Binding {
    Boolean(ColumnSlot<bool>),
    Integral(ColumnSlot<i64>),
}

/// Row buffer over rows held in memory
#[derive(Debug, Default)]
pub struct MemoryRowBuffer {
    rows: VecDeque<RawRow>,
    /// Bound slots by column index
    bindings: Vec<(usize, Binding)>,
    fetched: usize,
}

impl MemoryRowBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = RawRow>,
    {
        Self {
            rows: rows.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Build rows from text columns, the way a text protocol delivers them
    pub fn from_text_rows<'a, I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = Option<&'a str>>,
    {
        Self::from_rows(rows.into_iter().map(|row| {
            row.into_iter()
                .map(|column| column.map(|text| Bytes::copy_from_slice(text.as_bytes())))
                .collect()
        }))
    }

    pub fn push_row(&mut self, row: RawRow) {
        self.rows.push_back(row);
    }

    /// Rows not fetched yet
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    /// Rows fetched so far
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    pub fn bound_columns(&self) -> usize {
        self.bindings.len()
    }

    fn bind(&mut self, index: usize, binding: Binding) {
        self.bindings.retain(|(bound, _)| *bound != index);
        self.bindings.push((index, binding));
    }
}

impl ResultBinder for MemoryRowBuffer {
    fn bind_boolean_result(&mut self, index: usize, slot: ColumnSlot<bool>) {
        self.bind(index, Binding::Boolean(slot));
    }

    fn bind_integral_result(&mut self, index: usize, slot: ColumnSlot<i64>) {
        self.bind(index, Binding::Integral(slot));
    }
}

impl RowSource for MemoryRowBuffer {
    type Error = BufferError;

    /// A row narrower than the bound columns is an error that leaves the row
    /// queued and every bound slot untouched.
    fn fetch(&mut self) -> Result<bool, BufferError> {
        let Some(width) = self.rows.front().map(Vec::len) else {
            log::debug!("no more rows after {} fetched", self.fetched);
            return Ok(false);
        };

        if let Some(index) = self
            .bindings
            .iter()
            .map(|(index, _)| *index)
            .filter(|index| *index >= width)
            .max()
        {
            log::warn!("row {} has {} columns, column {} is bound", self.fetched + 1, width, index);
            return Err(BufferError::ColumnOutOfRange { index, width });
        }

        let Some(row) = self.rows.pop_front() else {
            return Ok(false);
        };

        for (index, binding) in &self.bindings {
            let raw = row[*index].as_deref();

            match binding {
                Binding::Boolean(slot) => slot.decode_from::<Boolean>(raw),
                Binding::Integral(slot) => slot.decode_from::<Integral>(raw),
            }
        }

        self.fetched += 1;
        log::trace!("fetched row {} ({} columns)", self.fetched, row.len());
        Ok(true)
    }
}
