//! Expression trait and leaf nodes.

use crate::serialize::{Context, Serialize, SerializeResult};
use crate::types::SqlType;
use std::marker::PhantomData;

/// A typed expression node.
///
/// `SqlType` is the domain of the value the expression yields. Rendering goes
/// through the [`Serialize`] supertrait.
pub trait Expression: Serialize {
    type SqlType: SqlType;
}

/// Marker for expressions yielding exactly one value.
///
/// Scalar operators require it of their operands. Expressions producing
/// several values (such as [`ExpressionList`]) leave it unimplemented, which
/// turns their use as an operand into a compile error.
pub trait SingleValued: Expression {}

impl<E: Expression + ?Sized> Expression for &E {
    type SqlType = E::SqlType;
}

impl<E: SingleValued + ?Sized> SingleValued for &E {}

/// Literal constant value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Literal<T: SqlType> {
    value: T::Native,
}

impl<T: SqlType> Literal<T> {
    pub fn new(value: T::Native) -> Self {
        Self { value }
    }

    pub fn value(&self) -> T::Native {
        self.value
    }
}

impl<T: SqlType> Serialize for Literal<T> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        T::serialize_value(&self.value, ctx)?;
        Ok(())
    }
}

impl<T: SqlType> Expression for Literal<T> {
    type SqlType = T;
}

impl<T: SqlType> SingleValued for Literal<T> {}

/// Column reference, rendered as `table.name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column<T: SqlType> {
    table: &'static str,
    name: &'static str,
    _type: PhantomData<T>,
}

impl<T: SqlType> Column<T> {
    pub const fn new(table: &'static str, name: &'static str) -> Self {
        Self {
            table,
            name,
            _type: PhantomData,
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: SqlType> Serialize for Column<T> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        ctx.write_str(self.table)?;
        ctx.write_char('.')?;
        ctx.write_str(self.name)?;
        Ok(())
    }
}

impl<T: SqlType> Expression for Column<T> {
    type SqlType = T;
}

impl<T: SqlType> SingleValued for Column<T> {}

/// Comma separated list of expressions, e.g. the right side of `IN`.
///
/// Yields several values, so it is not [`SingleValued`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionList<E> {
    items: Vec<E>,
}

impl<E: Expression> ExpressionList<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }
}

impl<E: Expression> FromIterator<E> for ExpressionList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E: Expression> Serialize for ExpressionList<E> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                ctx.write_str(", ")?;
            }
            item.serialize(ctx)?;
        }
        Ok(())
    }
}

impl<E: Expression> Expression for ExpressionList<E> {
    type SqlType = E::SqlType;
}
