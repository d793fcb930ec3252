//! Operator definitions and the boolean operator set.
//!
//! Operators are zero-size marker types plugged into the generic
//! [`BinaryExpression`] / [`UnaryExpression`] containers. A marker names the
//! domain its operands must belong to and the domain of the result; both
//! containers only exist as expressions when their operands pass
//! [`OperandOf`] for that domain.
//!
//! ```
//! use typedsql::config::{DialectConfig, DialectKind};
//! use typedsql::expression::{not, BooleanExpressionMethods, Column};
//! use typedsql::serialize::Renderer;
//! use typedsql::types::Boolean;
//!
//! let active = Column::<Boolean>::new("users", "active");
//! let banned = Column::<Boolean>::new("users", "banned");
//! let predicate = active.and(not(banned)).or(false);
//!
//! let sql = Renderer::render(DialectConfig::new(DialectKind::Postgres), &predicate).unwrap();
//! assert_eq!(sql, "((users.active AND (NOT users.banned)) OR false)");
//! ```

use crate::expression::{Column, Expression, Literal, SingleValued};
use crate::parameter::Parameter;
use crate::result::ResultField;
use crate::serialize::{Context, Serialize, SerializeResult};
use crate::types::{AsExpression, Boolean, BooleanOperand, OperandOf, SqlType};
use std::marker::PhantomData;
use std::ops;

/// Binary operator marker
pub trait BinaryOperator {
    /// Domain both operands must belong to
    type Operand: SqlType;
    /// Domain of the result
    type SqlType: SqlType;
    /// Token written between the operands
    const NAME: &'static str;
}

/// Unary operator marker
pub trait UnaryOperator {
    type Operand: SqlType;
    type SqlType: SqlType;
    /// Token written before the operand
    const NAME: &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AndOp;

impl BinaryOperator for AndOp {
    type Operand = Boolean;
    type SqlType = Boolean;
    const NAME: &'static str = "AND";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrOp;

impl BinaryOperator for OrOp {
    type Operand = Boolean;
    type SqlType = Boolean;
    const NAME: &'static str = "OR";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotOp;

impl UnaryOperator for NotOp {
    type Operand = Boolean;
    type SqlType = Boolean;
    const NAME: &'static str = "NOT";
}

/// Binary operation node, rendered as `(left OP right)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryExpression<L, Op, R> {
    left: L,
    right: R,
    _op: PhantomData<Op>,
}

impl<L, Op, R> BinaryExpression<L, Op, R>
where
    Op: BinaryOperator,
    L: OperandOf<Op::Operand>,
    R: OperandOf<Op::Operand>,
{
    pub fn new(left: L, right: R) -> Self {
        Self {
            left,
            right,
            _op: PhantomData,
        }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn operator(&self) -> &'static str {
        Op::NAME
    }
}

impl<L, Op, R> Serialize for BinaryExpression<L, Op, R>
where
    Op: BinaryOperator,
    L: OperandOf<Op::Operand>,
    R: OperandOf<Op::Operand>,
{
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        ctx.write_char('(')?;
        self.left.serialize(ctx)?;
        ctx.write_char(' ')?;
        ctx.write_str(Op::NAME)?;
        ctx.write_char(' ')?;
        self.right.serialize(ctx)?;
        ctx.write_char(')')?;
        Ok(())
    }
}

impl<L, Op, R> Expression for BinaryExpression<L, Op, R>
where
    Op: BinaryOperator,
    L: OperandOf<Op::Operand>,
    R: OperandOf<Op::Operand>,
{
    type SqlType = Op::SqlType;
}

impl<L, Op, R> SingleValued for BinaryExpression<L, Op, R>
where
    Op: BinaryOperator,
    L: OperandOf<Op::Operand>,
    R: OperandOf<Op::Operand>,
{
}

/// Unary operation node, rendered as `(OP operand)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnaryExpression<Op, E> {
    operand: E,
    _op: PhantomData<Op>,
}

impl<Op, E> UnaryExpression<Op, E>
where
    Op: UnaryOperator,
    E: OperandOf<Op::Operand>,
{
    pub fn new(operand: E) -> Self {
        Self {
            operand,
            _op: PhantomData,
        }
    }

    pub fn operand(&self) -> &E {
        &self.operand
    }

    pub fn operator(&self) -> &'static str {
        Op::NAME
    }
}

impl<Op, E> Serialize for UnaryExpression<Op, E>
where
    Op: UnaryOperator,
    E: OperandOf<Op::Operand>,
{
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        ctx.write_char('(')?;
        ctx.write_str(Op::NAME)?;
        ctx.write_char(' ')?;
        self.operand.serialize(ctx)?;
        ctx.write_char(')')?;
        Ok(())
    }
}

impl<Op, E> Expression for UnaryExpression<Op, E>
where
    Op: UnaryOperator,
    E: OperandOf<Op::Operand>,
{
    type SqlType = Op::SqlType;
}

impl<Op, E> SingleValued for UnaryExpression<Op, E>
where
    Op: UnaryOperator,
    E: OperandOf<Op::Operand>,
{
}

pub type And<L, R> = BinaryExpression<L, AndOp, R>;
pub type Or<L, R> = BinaryExpression<L, OrOp, R>;
pub type Not<E> = UnaryExpression<NotOp, E>;

/// Build `(left AND right)`.
///
/// Both sides must be single-valued boolean expressions, or `bool` values.
/// Anything else is rejected by the compiler:
///
/// ```compile_fail
/// use typedsql::expression::{and, Column};
/// use typedsql::types::{Boolean, Integral};
///
/// let active = Column::<Boolean>::new("users", "active");
/// let age = Column::<Integral>::new("users", "age");
/// let _ = and(active, age);
/// ```
///
/// A multi-valued expression is rejected on either side, the left included:
///
/// ```compile_fail
/// use typedsql::expression::{and, ExpressionList, Literal};
/// use typedsql::types::Boolean;
///
/// let list = ExpressionList::new(vec![Literal::<Boolean>::new(true)]);
/// let _ = and(list, true);
/// ```
pub fn and<L, R>(left: L, right: R) -> And<L::Expression, R::Expression>
where
    L: AsExpression<Boolean>,
    R: AsExpression<Boolean>,
    L::Expression: BooleanOperand,
    R::Expression: BooleanOperand,
{
    BinaryExpression::new(left.as_expression(), right.as_expression())
}

/// Build `(left OR right)`.
///
/// ```compile_fail
/// use typedsql::expression::{or, Column};
/// use typedsql::types::Boolean;
///
/// let active = Column::<Boolean>::new("users", "active");
/// let _ = or(active, 5_i64);
/// ```
///
/// ```compile_fail
/// use typedsql::expression::{or, ExpressionList, Literal};
/// use typedsql::types::Boolean;
///
/// let list = ExpressionList::new(vec![Literal::<Boolean>::new(true)]);
/// let _ = or(true, list);
/// ```
pub fn or<L, R>(left: L, right: R) -> Or<L::Expression, R::Expression>
where
    L: AsExpression<Boolean>,
    R: AsExpression<Boolean>,
    L::Expression: BooleanOperand,
    R::Expression: BooleanOperand,
{
    BinaryExpression::new(left.as_expression(), right.as_expression())
}

/// Build `(NOT operand)`.
///
/// Multi-valued expressions are not accepted:
///
/// ```compile_fail
/// use typedsql::expression::{not, ExpressionList, Literal};
/// use typedsql::types::Boolean;
///
/// let list = ExpressionList::new(vec![
///     Literal::<Boolean>::new(true),
///     Literal::<Boolean>::new(false),
/// ]);
/// let _ = not(list);
/// ```
pub fn not<E>(operand: E) -> Not<E::Expression>
where
    E: AsExpression<Boolean>,
    E::Expression: BooleanOperand,
{
    UnaryExpression::new(operand.as_expression())
}

/// `and` / `or` as methods on every boolean operand.
///
/// The receiver goes through the same constraint as the free functions:
///
/// ```compile_fail
/// use typedsql::expression::{BooleanExpressionMethods, Column};
/// use typedsql::types::Integral;
///
/// let age = Column::<Integral>::new("users", "age");
/// let _ = age.and(true);
/// ```
///
/// Nor is a multi-valued receiver:
///
/// ```compile_fail
/// use typedsql::expression::{BooleanExpressionMethods, ExpressionList, Literal};
/// use typedsql::types::Boolean;
///
/// let list = ExpressionList::new(vec![Literal::<Boolean>::new(true)]);
/// let _ = list.and(true);
/// ```
///
/// Building the container directly does not bypass it either:
///
/// ```compile_fail
/// use typedsql::expression::{AndOp, BinaryExpression, Column};
/// use typedsql::types::Integral;
///
/// let age = Column::<Integral>::new("users", "age");
/// let _ = BinaryExpression::<_, AndOp, _>::new(age, age);
/// ```
pub trait BooleanExpressionMethods: BooleanOperand + Sized {
    fn and<R>(self, rhs: R) -> And<Self, R::Expression>
    where
        R: AsExpression<Boolean>,
        R::Expression: BooleanOperand,
    {
        BinaryExpression::new(self, rhs.as_expression())
    }

    fn or<R>(self, rhs: R) -> Or<Self, R::Expression>
    where
        R: AsExpression<Boolean>,
        R::Expression: BooleanOperand,
    {
        BinaryExpression::new(self, rhs.as_expression())
    }
}

impl<E: BooleanOperand> BooleanExpressionMethods for E {}

// `a & b`, `a | b` and `!a` for every boolean node type
macro_rules! boolean_operators {
    ($([$($params:tt)*] $ty:ty),* $(,)?) => {$(
        impl<$($params)*, Rhs> ops::BitAnd<Rhs> for $ty
        where
            Self: BooleanOperand,
            Rhs: AsExpression<Boolean>,
            Rhs::Expression: BooleanOperand,
        {
            type Output = And<Self, Rhs::Expression>;

            fn bitand(self, rhs: Rhs) -> Self::Output {
                BinaryExpression::new(self, rhs.as_expression())
            }
        }

        impl<$($params)*, Rhs> ops::BitOr<Rhs> for $ty
        where
            Self: BooleanOperand,
            Rhs: AsExpression<Boolean>,
            Rhs::Expression: BooleanOperand,
        {
            type Output = Or<Self, Rhs::Expression>;

            fn bitor(self, rhs: Rhs) -> Self::Output {
                BinaryExpression::new(self, rhs.as_expression())
            }
        }

        impl<$($params)*> ops::Not for $ty
        where
            Self: BooleanOperand,
        {
            type Output = Not<Self>;

            fn not(self) -> Self::Output {
                UnaryExpression::new(self)
            }
        }
    )*};
}

boolean_operators! {
    [T: SqlType] Literal<T>,
    [T: SqlType] Column<T>,
    [T: SqlType] Parameter<T>,
    [T: SqlType] ResultField<T>,
    [L, Op, R] BinaryExpression<L, Op, R>,
    [Op, E] UnaryExpression<Op, E>,
}
