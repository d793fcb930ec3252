//! Integral domain.
//!
//! Only the leaf contract is provided here (literals, parameters, result
//! fields). Comparison operators belong to the statement layer.

use crate::expression::Literal;
use crate::result::{ColumnSlot, ResultBinder};
use crate::serialize::Context;
use crate::types::{AsExpression, SqlType};
use std::fmt;

/// Type tag of the integral domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Integral;

impl SqlType for Integral {
    type Native = i64;

    const NAME: &'static str = "integral";

    /// Parses an optional sign and the leading decimal digits. Input without a
    /// parsable prefix, or out of range for `i64`, decodes to `0`.
    fn decode(raw: &[u8]) -> i64 {
        let end = raw
            .iter()
            .enumerate()
            .position(|(i, b)| !(b.is_ascii_digit() || (i == 0 && matches!(b, b'-' | b'+'))))
            .unwrap_or(raw.len());

        std::str::from_utf8(&raw[..end])
            .ok()
            .and_then(|digits| digits.parse().ok())
            .unwrap_or_default()
    }

    fn serialize_value<C: Context + ?Sized>(value: &i64, ctx: &mut C) -> fmt::Result {
        ctx.write_integral(*value)
    }

    fn bind_result<B: ResultBinder + ?Sized>(target: &mut B, index: usize, slot: ColumnSlot<i64>) {
        target.bind_integral_result(index, slot);
    }
}

impl AsExpression<Integral> for i64 {
    type Expression = Literal<Integral>;

    fn as_expression(self) -> Literal<Integral> {
        Literal::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        assert_eq!(Integral::decode(b"42"), 42);
        assert_eq!(Integral::decode(b"-17"), -17);
        assert_eq!(Integral::decode(b"+8"), 8);
        assert_eq!(Integral::decode(b"12abc"), 12);
    }

    #[test]
    fn test_decode_unparsable() {
        assert_eq!(Integral::decode(b""), 0);
        assert_eq!(Integral::decode(b"abc"), 0);
        assert_eq!(Integral::decode(b"-"), 0);
        assert_eq!(Integral::decode(b"99999999999999999999"), 0);
    }

    #[test]
    fn test_trivial_value() {
        assert!(Integral::is_trivial(&0));
        assert!(!Integral::is_trivial(&-1));
    }
}
