//! Binding seam between result fields and driver row buffers.

use crate::types::SqlType;
use parking_lot::Mutex;
use std::sync::Arc;

/// Value and null flag of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotState<V> {
    pub value: V,
    pub is_null: bool,
}

impl<V: Default> SlotState<V> {
    pub fn null() -> Self {
        Self {
            value: V::default(),
            is_null: true,
        }
    }

    pub fn non_null(value: V) -> Self {
        Self {
            value,
            is_null: false,
        }
    }
}

/// Column storage shared between a result field and the buffer it is bound to.
///
/// Clones refer to the same storage, so a field and its buffer can move to
/// another thread together.
#[derive(Debug)]
pub struct ColumnSlot<V: Copy> {
    cell: Arc<Mutex<SlotState<V>>>,
}

impl<V: Copy + Default> ColumnSlot<V> {
    /// New slot holding NULL
    pub fn new() -> Self {
        Self {
            cell: Arc::new(Mutex::new(SlotState::null())),
        }
    }

    pub fn get(&self) -> SlotState<V> {
        *self.cell.lock()
    }

    pub fn store(&self, state: SlotState<V>) {
        *self.cell.lock() = state;
    }

    pub fn set(&self, value: V) {
        self.store(SlotState::non_null(value));
    }

    pub fn set_null(&self) {
        self.store(SlotState::null());
    }

    /// Decode raw column bytes with the rules of domain `T`. `None` is NULL.
    pub fn decode_from<T>(&self, raw: Option<&[u8]>)
    where
        T: SqlType<Native = V>,
    {
        match raw {
            Some(bytes) => self.set(T::decode(bytes)),
            None => self.set_null(),
        }
    }

    pub fn is_shared_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<V: Copy + Default> Default for ColumnSlot<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Copy> Clone for ColumnSlot<V> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

/// A driver-side row buffer that result fields can be bound to.
///
/// After `bind_*_result(index, slot)`, every fetch writes column `index`
/// (zero-based) of the new row into `slot`. Binding an index again replaces
/// the earlier slot.
pub trait ResultBinder {
    fn bind_boolean_result(&mut self, index: usize, slot: ColumnSlot<bool>);

    fn bind_integral_result(&mut self, index: usize, slot: ColumnSlot<i64>);
}

/// A row buffer that can fetch rows into its bound slots.
pub trait RowSource: ResultBinder {
    type Error: std::error::Error;

    /// Fetch the next row. `Ok(true)` if a row was written to the bound
    /// slots, `Ok(false)` if there are no more rows.
    fn fetch(&mut self) -> Result<bool, Self::Error>;
}
