//! Boolean domain.

use crate::expression::Literal;
use crate::result::{ColumnSlot, ResultBinder};
use crate::serialize::Context;
use crate::types::{AsExpression, SqlType};
use std::fmt;

/// Type tag of the boolean domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Boolean;

impl SqlType for Boolean {
    type Native = bool;

    const NAME: &'static str = "boolean";

    /// Truthy iff the first byte is `t` or `1`. Anything else, including an
    /// empty value, is false.
    fn decode(raw: &[u8]) -> bool {
        matches!(raw.first(), Some(b't' | b'1'))
    }

    fn serialize_value<C: Context + ?Sized>(value: &bool, ctx: &mut C) -> fmt::Result {
        ctx.write_boolean(*value)
    }

    fn bind_result<B: ResultBinder + ?Sized>(target: &mut B, index: usize, slot: ColumnSlot<bool>) {
        target.bind_boolean_result(index, slot);
    }
}

impl AsExpression<Boolean> for bool {
    type Expression = Literal<Boolean>;

    fn as_expression(self) -> Literal<Boolean> {
        Literal::new(self)
    }
}
