//! Input-side values bound to query placeholders.
//!
//! A [`Parameter`] is rebound between executions of a prepared statement. It
//! can be NULL for two separate reasons, and both are kept apart:
//!
//! - **TrivialAsNull**: the holder was created with the policy that the
//!   domain default (`false`, `0`, ...) means NULL, and it currently holds
//!   that default
//! - **Forced**: [`Parameter::set_null`] was called, and no value was set since
//!
//! Serializing a parameter always writes its value. Wrap it with
//! [`Parameter::or_null`] to write `NULL` instead whenever it is null.

use crate::expression::{Expression, SingleValued};
use crate::serialize::{Context, Serialize, SerializeResult};
use crate::types::{Boolean, Integral, SqlType};
use std::marker::PhantomData;

/// Why a parameter is (or is not) NULL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullState {
    NotNull,
    /// The value is trivial and the holder's policy maps trivial values to NULL
    TrivialAsNull,
    /// Explicitly set to NULL
    Forced,
}

/// A bound query parameter of domain `T`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameter<T: SqlType> {
    value: T::Native,
    /// Fixed at construction
    trivial_value_is_null: bool,
    forced_null: bool,
    _type: PhantomData<T>,
}

impl<T: SqlType> Parameter<T> {
    /// Create a parameter holding the domain default.
    ///
    /// With `trivial_value_is_null` set, the new parameter reads as NULL.
    pub fn with_policy(trivial_value_is_null: bool) -> Self {
        Self::with_value(trivial_value_is_null, T::Native::default())
    }

    /// Create a parameter holding `value`, with trivial values staying non-null.
    pub fn new(value: T::Native) -> Self {
        Self::with_value(false, value)
    }

    pub fn with_value(trivial_value_is_null: bool, value: T::Native) -> Self {
        Self {
            value,
            trivial_value_is_null,
            forced_null: false,
            _type: PhantomData,
        }
    }

    /// Bind a new value. Clears an explicit NULL.
    pub fn set(&mut self, value: T::Native) -> &mut Self {
        self.value = value;
        self.forced_null = false;
        self
    }

    /// Bind NULL. The value is reset to the domain default.
    pub fn set_null(&mut self) -> &mut Self {
        self.value = T::Native::default();
        self.forced_null = true;
        self
    }

    pub fn set_option(&mut self, value: Option<T::Native>) -> &mut Self {
        match value {
            Some(value) => self.set(value),
            None => self.set_null(),
        }
    }

    /// Current value. Defined even when the parameter is NULL.
    pub fn value(&self) -> T::Native {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.null_state() != NullState::NotNull
    }

    pub fn null_state(&self) -> NullState {
        if self.forced_null {
            NullState::Forced
        } else if self.trivial_value_is_null && T::is_trivial(&self.value) {
            NullState::TrivialAsNull
        } else {
            NullState::NotNull
        }
    }

    pub fn trivial_value_is_null(&self) -> bool {
        self.trivial_value_is_null
    }

    /// `None` when NULL, the value otherwise
    pub fn as_option(&self) -> Option<T::Native> {
        if self.is_null() {
            None
        } else {
            Some(self.value)
        }
    }

    /// Borrow as an expression that writes `NULL` while [`is_null`](Self::is_null) holds.
    pub fn or_null(&self) -> NullableParameter<'_, T> {
        NullableParameter { param: self }
    }
}

impl<T: SqlType> Default for Parameter<T> {
    fn default() -> Self {
        Self::with_policy(false)
    }
}

/// Writes the current value. Callers that want a NULL literal check
/// [`Parameter::is_null`] first.
impl<T: SqlType> Serialize for Parameter<T> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        T::serialize_value(&self.value, ctx)?;
        Ok(())
    }
}

impl<T: SqlType> Expression for Parameter<T> {
    type SqlType = T;
}

impl<T: SqlType> SingleValued for Parameter<T> {}

impl From<Parameter<Boolean>> for bool {
    fn from(param: Parameter<Boolean>) -> Self {
        param.value
    }
}

impl From<Parameter<Integral>> for i64 {
    fn from(param: Parameter<Integral>) -> Self {
        param.value
    }
}

/// A parameter that renders as `NULL` while it is null. See [`Parameter::or_null`].
#[derive(Debug, Clone, Copy)]
pub struct NullableParameter<'a, T: SqlType> {
    param: &'a Parameter<T>,
}

impl<T: SqlType> NullableParameter<'_, T> {
    pub fn parameter(&self) -> &Parameter<T> {
        self.param
    }
}

impl<T: SqlType> Serialize for NullableParameter<'_, T> {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        if self.param.is_null() {
            ctx.write_null()?;
            return Ok(());
        }
        self.param.serialize(ctx)
    }
}

impl<T: SqlType> Expression for NullableParameter<'_, T> {
    type SqlType = T;
}

impl<T: SqlType> SingleValued for NullableParameter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_construction() {
        for policy in [false, true] {
            let param = Parameter::<Boolean>::with_policy(policy);
            assert!(!param.value());
            assert_eq!(param.is_null(), policy);
            assert_eq!(param.trivial_value_is_null(), policy);
        }

        let param = Parameter::<Boolean>::default();
        assert!(!param.is_null());
    }

    #[test]
    fn test_set_recomputes_null() {
        for policy in [false, true] {
            for value in [false, true] {
                let mut param = Parameter::<Boolean>::with_policy(policy);
                param.set(value);
                assert_eq!(param.value(), value);
                assert_eq!(param.is_null(), policy && !value);
            }
        }
    }

    #[test]
    fn test_construct_from_value() {
        let param = Parameter::<Boolean>::new(false);
        assert!(!param.is_null());
        assert_eq!(param.null_state(), NullState::NotNull);

        let param = Parameter::<Boolean>::with_value(true, false);
        assert!(param.is_null());
        assert_eq!(param.null_state(), NullState::TrivialAsNull);

        let param = Parameter::<Boolean>::with_value(true, true);
        assert!(!param.is_null());
    }

    #[test]
    fn test_set_null_overrides_policy() {
        for policy in [false, true] {
            let mut param = Parameter::<Boolean>::with_value(policy, true);
            param.set_null();
            assert!(param.is_null());
            assert!(!param.value());
            assert_eq!(param.null_state(), NullState::Forced);

            // A non-null value lifts the forced state again
            param.set(true);
            assert!(!param.is_null());
            assert_eq!(param.null_state(), NullState::NotNull);
        }
    }

    #[test]
    fn test_forced_and_trivial_are_distinct() {
        let mut param = Parameter::<Boolean>::with_policy(true);
        assert_eq!(param.null_state(), NullState::TrivialAsNull);

        param.set_null();
        assert_eq!(param.null_state(), NullState::Forced);

        // Same value as before, but the explicit NULL is gone
        param.set(false);
        assert_eq!(param.null_state(), NullState::TrivialAsNull);
    }

    #[test]
    fn test_set_option_and_chaining() {
        let mut param = Parameter::<Boolean>::default();
        param.set_option(Some(true));
        assert_eq!(param.as_option(), Some(true));

        param.set_option(None);
        assert_eq!(param.as_option(), None);

        param.set(true).set_null().set(false);
        assert_eq!(param.as_option(), Some(false));
    }

    #[test]
    fn test_serialize() {
        let mut out = String::new();
        Parameter::<Boolean>::new(true).serialize(&mut out).unwrap();
        assert_eq!(out, "1");

        // Still writes the value; NULL rendering is the caller's call
        let mut param = Parameter::<Boolean>::new(true);
        param.set_null();
        let mut out = String::new();
        param.serialize(&mut out).unwrap();
        assert_eq!(out, "0");
    }

    #[test]
    fn test_or_null_renders_null_literal() {
        let mut param = Parameter::<Boolean>::with_policy(true);
        let mut out = String::new();
        param.or_null().serialize(&mut out).unwrap();
        assert_eq!(out, "NULL");

        param.set(true);
        let mut out = String::new();
        param.or_null().serialize(&mut out).unwrap();
        assert_eq!(out, "1");

        param.set_null();
        let mut out = String::new();
        param.or_null().serialize(&mut out).unwrap();
        assert_eq!(out, "NULL");
        assert_eq!(param.or_null().parameter().null_state(), NullState::Forced);
    }

    #[test]
    fn test_into_native() {
        assert!(bool::from(Parameter::<Boolean>::new(true)));

        let mut param = Parameter::<Boolean>::with_value(false, true);
        param.set_null();
        let value: bool = param.into();
        assert!(!value);

        assert_eq!(i64::from(Parameter::<Integral>::new(-4)), -4);
    }

    #[test]
    fn test_integral_parameter() {
        let mut param = Parameter::<Integral>::with_policy(true);
        assert!(param.is_null());
        param.set(12);
        assert_eq!(param.value(), 12);
        assert!(!param.is_null());

        let mut out = String::new();
        param.serialize(&mut out).unwrap();
        assert_eq!(out, "12");
    }
}
