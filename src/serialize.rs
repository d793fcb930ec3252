//! Serialization of expressions to dialect text.
//!
//! Expressions write themselves into a [`Context`], which is any
//! `fmt::Write` sink that knows how the target dialect spells literals. The
//! statement layer drives rendering; the core only supplies leaf and
//! operator text.

use crate::config::DialectConfig;
use std::fmt;

pub use crate::error::{SerializeError, SerializeResult};

/// A dialect-aware output sink.
pub trait Context: fmt::Write {
    /// Write a boolean literal. Defaults to `1` / `0`.
    fn write_boolean(&mut self, value: bool) -> fmt::Result {
        self.write_str(if value { "1" } else { "0" })
    }

    /// Write an integral literal in decimal.
    fn write_integral(&mut self, value: i64) -> fmt::Result {
        write!(self, "{}", value)
    }

    /// Write the SQL NULL literal.
    fn write_null(&mut self) -> fmt::Result {
        self.write_str("NULL")
    }
}

/// Plain strings use the default literal spelling.
impl Context for String {}

/// Serialization hook implemented by every expression node.
pub trait Serialize {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()>;
}

impl<S: Serialize + ?Sized> Serialize for &S {
    fn serialize<C: Context + ?Sized>(&self, ctx: &mut C) -> SerializeResult<()> {
        (**self).serialize(ctx)
    }
}

/// Context that renders into an owned buffer using a [`DialectConfig`].
#[derive(Debug, Clone)]
pub struct Renderer {
    config: DialectConfig,
    out: String,
}

impl Renderer {
    pub fn new(config: DialectConfig) -> Self {
        Self {
            config,
            out: String::new(),
        }
    }

    /// Render a single expression with `config`.
    pub fn render<S: Serialize + ?Sized>(config: DialectConfig, expr: &S) -> SerializeResult<String> {
        let mut renderer = Self::new(config);
        expr.serialize(&mut renderer)?;
        Ok(renderer.finish())
    }

    pub fn config(&self) -> &DialectConfig {
        &self.config
    }

    /// Text rendered so far
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl fmt::Write for Renderer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.out.push_str(s);
        Ok(())
    }
}

impl Context for Renderer {
    fn write_boolean(&mut self, value: bool) -> fmt::Result {
        self.out.push_str(self.config.boolean_literal(value));
        Ok(())
    }
}
