//! Scalar domains and the operand constraint.
//!
//! Every domain is a zero-size tag implementing [`SqlType`]. The tag names the
//! native Rust type of the domain and carries the rules that differ between
//! domains: the trivial value, the decoding of raw column bytes, the dialect
//! text of a value and the driver binding of a result column. Parameters,
//! result fields and expression nodes are generic over the tag, so domain
//! membership is part of every type and checked by the compiler.
//!
//! - **Boolean**: `bool`, with the AND / OR / NOT operator set
//! - **Integral**: `i64`, leaves only

pub mod boolean;
pub mod integral;

pub use boolean::Boolean;
pub use integral::Integral;

use crate::expression::{Expression, SingleValued};
use crate::result::{ColumnSlot, ResultBinder};
use crate::serialize::Context;
use std::fmt;

/// Compile-time marker for a scalar domain.
pub trait SqlType: Copy + Default + fmt::Debug + 'static {
    /// Rust representation of a value in this domain.
    type Native: Copy + Default + PartialEq + fmt::Debug + 'static;

    /// Domain name used in log output.
    const NAME: &'static str;

    /// Whether `value` is the domain default (the value a policy may treat as NULL).
    fn is_trivial(value: &Self::Native) -> bool {
        *value == Self::Native::default()
    }

    /// Decode the raw bytes of a non-null column.
    fn decode(raw: &[u8]) -> Self::Native;

    /// Write the dialect text of `value`.
    fn serialize_value<C: Context + ?Sized>(value: &Self::Native, ctx: &mut C) -> fmt::Result;

    /// Register `slot` with the driver buffer at the zero-based column `index`.
    fn bind_result<B: ResultBinder + ?Sized>(
        target: &mut B,
        index: usize,
        slot: ColumnSlot<Self::Native>,
    );
}

/// Accepts single-valued expressions of domain `T`.
///
/// This is the only gate operators use for their operands. It is implemented
/// for every qualifying type and cannot be implemented by hand.
pub trait OperandOf<T: SqlType>: Expression<SqlType = T> + SingleValued {}

impl<T, E> OperandOf<T> for E
where
    T: SqlType,
    E: Expression<SqlType = T> + SingleValued,
{
}

/// Operands accepted by the boolean operators.
pub trait BooleanOperand: OperandOf<Boolean> {}

impl<E: OperandOf<Boolean>> BooleanOperand for E {}

/// Conversion of an operand into an expression of domain `T`.
///
/// Expressions convert to themselves; native values become literals.
pub trait AsExpression<T: SqlType> {
    type Expression: Expression<SqlType = T>;

    fn as_expression(self) -> Self::Expression;
}

impl<E: Expression> AsExpression<E::SqlType> for E {
    type Expression = Self;

    fn as_expression(self) -> Self {
        self
    }
}
