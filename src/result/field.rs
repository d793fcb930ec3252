//! Decoded result column.

use crate::error::AccessError;
use crate::expression::{Expression, SingleValued};
use crate::result::bind::{ColumnSlot, ResultBinder, SlotState};
use crate::serialize::{Context, Serialize, SerializeResult};
use crate::types::SqlType;
use std::fmt;
use std::marker::PhantomData;

/// One column of a result row, decoded into domain `T`.
///
/// A field is either valid (a row has been fetched into it) or not. Reading an
/// invalid field is an [`AccessError`], which is different from reading a
/// valid field whose column is NULL.
#[derive(Debug)]
pub struct ResultField<T: SqlType> {
    is_valid: bool,
    slot: ColumnSlot<T::Native>,
    _type: PhantomData<T>,
}

impl<T: SqlType> ResultField<T> {
    /// A field with no row
    pub fn new() -> Self {
        Self {
            is_valid: false,
            slot: ColumnSlot::new(),
            _type: PhantomData,
        }
    }

    /// A valid field decoded from raw column bytes. `None` is SQL NULL.
    pub fn from_raw(raw: Option<&[u8]>) -> Self {
        let mut field = Self::new();
        field.assign(raw);
        field
    }

    /// Decode a new row's column bytes into this field.
    pub fn assign(&mut self, raw: Option<&[u8]>) {
        self.slot.decode_from::<T>(raw);
        self.is_valid = true;
    }

    /// Mark the field valid after a bound buffer wrote its slot.
    pub fn validate(&mut self) {
        self.is_valid = true;
    }

    /// Drop the current row, e.g. when the cursor moves past the end.
    pub fn invalidate(&mut self) {
        self.is_valid = false;
        self.slot.set_null();
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn value(&self) -> Result<T::Native, AccessError> {
        Ok(self.state("value")?.value)
    }

    pub fn is_null(&self) -> Result<bool, AccessError> {
        Ok(self.state("is_null")?.is_null)
    }

    /// `None` for NULL, the value otherwise
    pub fn as_option(&self) -> Result<Option<T::Native>, AccessError> {
        let state = self.state("value")?;
        Ok((!state.is_null).then_some(state.value))
    }

    /// Register this field's storage with `target` at the zero-based column `index`.
    pub fn bind<B: ResultBinder + ?Sized>(&self, target: &mut B, index: usize) {
        log::trace!("binding {} result field to column {}", T::NAME, index);
        T::bind_result(target, index, self.slot.clone());
    }

    fn state(&self, accessor: &'static str) -> Result<SlotState<T::Native>, AccessError> {
        if !self.is_valid {
            return Err(AccessError::NonExistentRow(accessor));
        }
        Ok(self.slot.get())
    }
}

impl<T: SqlType> Default for ResultField<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the decoded value. Fails with [`AccessError`] when there is no row.
impl<T: SqlType> Serialize for ResultField<T> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        T::serialize_value(&self.value()?, ctx)?;
        Ok(())
    }
}

/// Writes the value as a `String` context would, or `NULL`. Without a row
/// formatting fails with `fmt::Error`.
impl<T: SqlType> fmt::Display for ResultField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state("value").map_err(|_| fmt::Error)?;
        let mut text = String::new();
        if state.is_null {
            text.write_null()?;
        } else {
            T::serialize_value(&state.value, &mut text)?;
        }
        f.write_str(&text)
    }
}

impl<T: SqlType> Expression for ResultField<T> {
    type SqlType = T;
}

impl<T: SqlType> SingleValued for ResultField<T> {}
