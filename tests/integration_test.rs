use bytes::Bytes;
use std::io::Write;
use typedsql::config::{BooleanStyle, DialectConfig, DialectKind};
use typedsql::error::{AccessError, SerializeError};
use typedsql::expression::{and, not, or, BooleanExpressionMethods, Column, Expression, SingleValued};
use typedsql::parameter::Parameter;
use typedsql::result::{Cursor, MemoryRowBuffer, ResultField, RowSource};
use typedsql::serialize::{Renderer, Serialize};
use typedsql::types::{Boolean, Integral, SqlType};

const ACTIVE: Column<Boolean> = Column::new("users", "active");
const VERIFIED: Column<Boolean> = Column::new("users", "verified");

fn all_dialects() -> Vec<DialectConfig> {
    vec![
        DialectConfig::new(DialectKind::Postgres),
        DialectConfig::new(DialectKind::Sqlite),
        DialectConfig::new(DialectKind::Mysql),
        DialectConfig::new(DialectKind::Postgres).with_boolean_style(BooleanStyle::Numeric),
        DialectConfig::new(DialectKind::Sqlite).with_boolean_style(BooleanStyle::Keyword),
    ]
}

#[test]
fn test_cursor_fetch_null_and_exhaustion() {
    let buffer = MemoryRowBuffer::from_rows(vec![
        vec![Some(Bytes::from_static(b"t"))],
        vec![None],
    ]);
    let mut cursor = Cursor::new(ResultField::<Boolean>::new(), buffer);

    let field = cursor.next().unwrap().unwrap();
    assert_eq!(field.value(), Ok(true));
    assert_eq!(field.is_null(), Ok(false));

    let field = cursor.next().unwrap().unwrap();
    assert_eq!(field.value(), Ok(false));
    assert_eq!(field.is_null(), Ok(true));

    assert!(cursor.next().unwrap().is_none());
    assert_eq!(
        cursor.row().value(),
        Err(AccessError::NonExistentRow("value"))
    );
    assert_eq!(
        cursor.row().is_null(),
        Err(AccessError::NonExistentRow("is_null"))
    );
}

#[test]
fn test_parameter_round_trip_through_decoder() {
    for config in all_dialects() {
        for value in [true, false] {
            let param = Parameter::<Boolean>::new(value);
            let text = Renderer::render(config, &param).unwrap();

            let field = ResultField::<Boolean>::from_raw(Some(text.as_bytes()));
            assert_eq!(field.value(), Ok(value), "{:?} rendered {:?}", config, text);
        }
    }
}

#[test]
fn test_rebound_parameter_rerenders() {
    let mut param = Parameter::<Boolean>::with_policy(true);
    let config = DialectConfig::new(DialectKind::Postgres);

    assert!(param.is_null());
    {
        let predicate = and(ACTIVE, &param);
        assert_eq!(
            Renderer::render(config, &predicate).unwrap(),
            "(users.active AND false)"
        );
    }

    param.set(true);
    assert!(!param.is_null());
    let predicate = and(ACTIVE, &param);
    assert_eq!(
        Renderer::render(config, &predicate).unwrap(),
        "(users.active AND true)"
    );
}

#[test]
fn test_null_parameter_renders_null_in_every_dialect() {
    let mut param = Parameter::<Boolean>::with_policy(true);
    for config in all_dialects() {
        let predicate = or(ACTIVE, param.or_null());
        assert_eq!(
            Renderer::render(config, &predicate).unwrap(),
            "(users.active OR NULL)"
        );
    }

    param.set(true);
    let predicate = ACTIVE.or(param.or_null());
    assert_eq!(
        Renderer::render(DialectConfig::new(DialectKind::Mysql), &predicate).unwrap(),
        "(users.active OR 1)"
    );
}

#[test]
fn test_six_column_row() -> anyhow::Result<()> {
    let buffer = MemoryRowBuffer::from_text_rows([[
        Some("t"),
        Some("1"),
        Some("f"),
        None,
        Some("9"),
        Some("true"),
    ]]);
    let row = (
        ResultField::<Boolean>::new(),
        ResultField::<Integral>::new(),
        ResultField::<Boolean>::new(),
        ResultField::<Boolean>::new(),
        ResultField::<Integral>::new(),
        ResultField::<Boolean>::new(),
    );
    let mut cursor = Cursor::new(row, buffer);

    let (a, b, c, d, e, f) = cursor.next()?.expect("one row");
    assert_eq!(a.as_option()?, Some(true));
    assert_eq!(b.as_option()?, Some(1));
    assert_eq!(c.as_option()?, Some(false));
    assert_eq!(d.as_option()?, None);
    assert_eq!(e.as_option()?, Some(9));
    assert_eq!(f.as_option()?, Some(true));
    Ok(())
}

#[test]
fn test_decoded_field_reused_as_operand() {
    let config = DialectConfig::new(DialectKind::Sqlite);
    let buffer = MemoryRowBuffer::from_text_rows([[Some("1")]]);
    let mut cursor = Cursor::new(ResultField::<Boolean>::new(), buffer);

    let field = cursor.next().unwrap().unwrap();
    let predicate = or(not(ACTIVE), field);
    assert_eq!(
        Renderer::render(config, &predicate).unwrap(),
        "((NOT users.active) OR 1)"
    );

    assert!(cursor.next().unwrap().is_none());
    let predicate = or(not(ACTIVE), cursor.row());
    assert_eq!(
        Renderer::render(config, &predicate),
        Err(SerializeError::Access(AccessError::NonExistentRow("value")))
    );
}

#[test]
fn test_operator_results_are_boolean() {
    fn domain<E: Expression + SingleValued>(_: &E) -> &'static str {
        <E::SqlType as SqlType>::NAME
    }

    let param = Parameter::<Boolean>::default();
    assert_eq!(domain(&and(ACTIVE, VERIFIED)), "boolean");
    assert_eq!(domain(&or(&param, false)), "boolean");
    assert_eq!(domain(&not(ACTIVE.and(VERIFIED))), "boolean");
    assert_eq!(domain(&(!ACTIVE | VERIFIED)), "boolean");
    assert_eq!(domain(&Column::<Integral>::new("users", "age")), "integral");
}

#[test]
fn test_mixed_row_through_raw_buffer() {
    let mut buffer = MemoryRowBuffer::new();
    buffer.push_row(vec![
        Some(Bytes::from_static(b"42")),
        Some(Bytes::from_static(b"true")),
    ]);
    buffer.push_row(vec![None, Some(Bytes::from_static(b"no"))]);

    let row = (ResultField::<Integral>::new(), ResultField::<Boolean>::new());
    let mut cursor = Cursor::new(row, buffer);

    let (age, active) = cursor.next().unwrap().unwrap();
    assert_eq!(age.as_option(), Ok(Some(42)));
    assert_eq!(active.as_option(), Ok(Some(true)));

    let (age, active) = cursor.next().unwrap().unwrap();
    assert_eq!(age.as_option(), Ok(None));
    assert_eq!(active.as_option(), Ok(Some(false)));

    assert!(cursor.next().unwrap().is_none());
    let (_, mut buffer) = cursor.into_parts();
    assert_eq!(buffer.fetch(), Ok(false));
}

#[test]
fn test_config_file_drives_rendering() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, r#"{{ "kind": "postgres", "boolean_literals": "numeric" }}"#)?;

    let config = DialectConfig::from_path(file.path())?;
    let predicate = ACTIVE.and(true);
    let mut renderer = Renderer::new(config);
    predicate.serialize(&mut renderer)?;
    assert_eq!(renderer.finish(), "(users.active AND 1)");
    Ok(())
}
