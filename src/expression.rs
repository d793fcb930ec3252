//! Typed expression trees.
//!
//! This module provides:
//! - The [`Expression`] trait tying every node to its domain
//! - Leaf nodes: literals, columns and multi-valued expression lists
//! - Generic binary and unary tree containers
//! - The boolean operator set (AND, OR, NOT)
//!
//! Nothing here evaluates anything. Operators only build nodes, and the
//! database evaluates the rendered text.

pub mod expr;
pub mod operator;

pub use expr::{Column, Expression, ExpressionList, Literal, SingleValued};
pub use operator::{
    and, not, or, And, AndOp, BinaryExpression, BinaryOperator, BooleanExpressionMethods, Not,
    NotOp, Or, OrOp, UnaryExpression, UnaryOperator,
};
