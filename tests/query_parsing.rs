//! Integration tests exercising the public csvql-core API.

use csvql_core::{parse, ConstantValue, CsvqlError, SelectClause, Term};

#[test]
fn parses_through_public_api() {
    let query = parse("SELECT id, total * 1.2 AS gross FROM orders WHERE paid").unwrap();

    let SelectClause::Columns(columns) = &query.select else {
        panic!("expected a column list");
    };
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[1].alias.as_deref(), Some("gross"));
    assert_eq!(query.from.target, "orders");
    assert!(query.from.where_clause.is_some());
}

#[test]
fn errors_are_typed_and_positioned() {
    match parse("SELECT ; FROM t") {
        Err(CsvqlError::Lexical { offset, .. }) => assert_eq!(offset, 7),
        other => panic!("expected a lexical error, got {:?}", other),
    }

    match parse("SELECT a FROM") {
        Err(CsvqlError::Syntax { offset, .. }) => assert_eq!(offset, 13),
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn error_display_is_stable() {
    let err = parse("SELECT a FROM WHERE a < 3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error at position 14: Expected identifier, found Where"
    );
}

#[test]
fn trees_serialize_to_json() {
    let query = parse("SELECT * FROM sometable WHERE x < 3").unwrap();
    let value = serde_json::to_value(&query).unwrap();

    assert_eq!(value["select"], serde_json::json!("All"));
    assert_eq!(value["from"]["target"], serde_json::json!("sometable"));
    assert!(value["from"]["where_clause"].is_object());

    // Errors serialize as their display string
    let err = parse("SELECT a FROM").unwrap_err();
    let serialized = serde_json::to_value(&err).unwrap();
    assert!(serialized.as_str().unwrap().starts_with("Syntax error"));
}

#[test]
fn constants_carry_their_type() {
    let query = parse("SELECT 1.5, 'text', true FROM t").unwrap();
    let SelectClause::Columns(columns) = &query.select else {
        panic!("expected a column list");
    };

    let constants: Vec<&ConstantValue> = columns
        .iter()
        .map(|c| {
            match &c.expression.disjuncts[0].conjuncts[0].lhs.lhs.lhs {
                Term::Constant(value) => value,
                other => panic!("expected a constant, got {:?}", other),
            }
        })
        .collect();

    assert_eq!(constants[0], &ConstantValue::Number(1.5));
    assert_eq!(constants[1], &ConstantValue::String("text".to_string()));
    assert_eq!(constants[2], &ConstantValue::Boolean(true));
}

#[test]
fn parse_is_safe_to_call_concurrently() {
    let inputs = [
        "SELECT * FROM a WHERE x < 1",
        "SELECT b, c FROM d",
        "SELECT e AS f FROM g WHERE h = 'i' OR j",
    ];

    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            std::thread::spawn(move || {
                let first = parse(input).unwrap();
                for _ in 0..100 {
                    assert_eq!(parse(input).unwrap(), first);
                }
                first
            })
        })
        .collect();

    for (handle, input) in handles.into_iter().zip(inputs) {
        let from_thread = handle.join().unwrap();
        assert_eq!(from_thread, parse(input).unwrap());
    }
}
