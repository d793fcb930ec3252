//! typedsql - render typed boolean predicates and decode boolean columns

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use typedsql::config::{DialectConfig, DialectKind};
use typedsql::expression::{not, BooleanExpressionMethods, Column};
use typedsql::parameter::{NullState, Parameter};
use typedsql::result::{Cursor, MemoryRowBuffer, ResultField};
use typedsql::serialize::Renderer;
use typedsql::types::Boolean;

const ACTIVE: Column<Boolean> = Column::new("users", "active");
const BANNED: Column<Boolean> = Column::new("users", "banned");

/// typedsql - typed boolean expressions, parameters and result columns
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// SQL dialect to render for (postgres, sqlite, mysql)
    #[arg(short, long, global = true, default_value = "postgres")]
    dialect: DialectKind,

    /// JSON dialect config file, takes precedence over --dialect
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render `(users.active AND (NOT users.banned)) OR <param>`
    Render {
        /// Parameter value: true, false or null
        #[arg(short, long, default_value = "false")]
        param: String,

        /// Treat a false parameter as NULL
        #[arg(long)]
        trivial_is_null: bool,
    },
    /// Decode raw boolean column values, one row each (`NULL` for SQL NULL)
    Decode {
        #[arg(required = true)]
        values: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match &args.config {
        Some(path) => DialectConfig::from_path(path)
            .with_context(|| format!("Failed to load dialect config {}", path.display()))?,
        None => DialectConfig::new(args.dialect),
    };

    match args.command {
        Command::Render {
            param,
            trivial_is_null,
        } => render(config, &param, trivial_is_null),
        Command::Decode { values } => decode(&values),
    }
}

fn render(config: DialectConfig, param: &str, trivial_is_null: bool) -> Result<()> {
    let mut parameter = Parameter::<Boolean>::with_policy(trivial_is_null);
    parameter.set_option(parse_param(param)?);

    let sql = render_predicate(config, &parameter)?;

    println!("dialect:   {}", config.kind.as_str());
    println!("predicate: {}", sql);
    match parameter.null_state() {
        NullState::NotNull => println!("parameter: {}", config.boolean_literal(parameter.value())),
        NullState::TrivialAsNull => println!("parameter: NULL (trivial value)"),
        NullState::Forced => println!("parameter: NULL"),
    }
    Ok(())
}

fn render_predicate(config: DialectConfig, parameter: &Parameter<Boolean>) -> Result<String> {
    let predicate = ACTIVE.and(not(BANNED)).or(parameter.or_null());
    Renderer::render(config, &predicate).context("Failed to render predicate")
}

fn decode(values: &[String]) -> Result<()> {
    let buffer = MemoryRowBuffer::from_text_rows(values.iter().map(|value| {
        [(!value.eq_ignore_ascii_case("null")).then_some(value.as_str())]
    }));
    let mut cursor = Cursor::new(ResultField::<Boolean>::new(), buffer);

    let mut row = 0;
    while let Some(field) = cursor.next()? {
        row += 1;
        println!(
            "row {}: value={} is_null={}",
            row,
            field.value()?,
            field.is_null()?
        );
    }

    if let Err(e) = cursor.row().value() {
        println!("after last row: {}", e);
    }
    Ok(())
}

fn parse_param(param: &str) -> Result<Option<bool>> {
    match param.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(Some(true)),
        "false" | "f" | "0" => Ok(Some(false)),
        "null" => Ok(None),
        _ => bail!("Invalid parameter value: {} (expected true, false or null)", param),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_parameter_renders_null() -> Result<()> {
        let config = DialectConfig::new(DialectKind::Postgres);

        let mut parameter = Parameter::<Boolean>::with_policy(false);
        parameter.set_option(parse_param("null")?);
        assert_eq!(
            render_predicate(config, &parameter)?,
            "((users.active AND (NOT users.banned)) OR NULL)"
        );

        parameter.set_option(parse_param("false")?);
        assert_eq!(
            render_predicate(config, &parameter)?,
            "((users.active AND (NOT users.banned)) OR false)"
        );

        let parameter = Parameter::<Boolean>::with_policy(true);
        assert_eq!(
            render_predicate(config, &parameter)?,
            "((users.active AND (NOT users.banned)) OR NULL)"
        );
        Ok(())
    }

    #[test]
    fn test_dialect_after_subcommand() -> Result<()> {
        let args = Args::try_parse_from(["typedsql", "render", "--dialect", "sqlite", "--param", "true"])?;
        assert_eq!(args.dialect, DialectKind::Sqlite);
        assert!(matches!(args.command, Command::Render { .. }));

        let args = Args::try_parse_from(["typedsql", "decode", "t", "--config", "dialect.json"])?;
        assert_eq!(args.config, Some(PathBuf::from("dialect.json")));
        Ok(())
    }

    #[test]
    fn test_invalid_param() {
        assert!(parse_param("maybe").is_err());
    }
}
