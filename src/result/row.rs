//! Result rows made of bound fields.

use crate::result::bind::ResultBinder;
use crate::result::field::ResultField;
use crate::types::SqlType;

/// A set of result fields occupying consecutive columns.
pub trait ResultRow {
    /// Bind every field, starting at column `first_index`. Returns the index
    /// after the last bound column.
    fn bind_fields<B: ResultBinder + ?Sized>(&self, binder: &mut B, first_index: usize) -> usize;

    /// Mark every field valid after a row was fetched.
    fn validate(&mut self);

    /// Mark every field invalid.
    fn invalidate(&mut self);
}

impl<T: SqlType> ResultRow for ResultField<T> {
    fn bind_fields<B: ResultBinder + ?Sized>(&self, binder: &mut B, first_index: usize) -> usize {
        self.bind(binder, first_index);
        first_index + 1
    }

    fn validate(&mut self) {
        ResultField::validate(self);
    }

    fn invalidate(&mut self) {
        ResultField::invalidate(self);
    }
}

macro_rules! tuple_result_row {
    ($($name:ident: $idx:tt),+) => {
        impl<$($name: ResultRow),+> ResultRow for ($($name,)+) {
            fn bind_fields<Binder: ResultBinder + ?Sized>(
                &self,
                binder: &mut Binder,
                first_index: usize,
            ) -> usize {
                let next = first_index;
                $(let next = self.$idx.bind_fields(binder, next);)+
                next
            }

            fn validate(&mut self) {
                $(self.$idx.validate();)+
            }

            fn invalidate(&mut self) {
                $(self.$idx.invalidate();)+
            }
        }
    };
}

tuple_result_row!(A: 0);
tuple_result_row!(A: 0, B: 1);
tuple_result_row!(A: 0, B: 1, C: 2);
tuple_result_row!(A: 0, B: 1, C: 2, D: 3);
tuple_result_row!(A: 0, B: 1, C: 2, D: 3, E: 4);
tuple_result_row!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
