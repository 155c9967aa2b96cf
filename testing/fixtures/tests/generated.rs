use quarry::core::{
    predicate::{CompareOp, ComparePredicate, Predicate},
    row::DecodeError,
    traits::QuerySource,
    value::{Value, ValueKind},
};
use quarry_testing_fixtures::{
    AuditEvent, AuditEventFilter, AuditEventQuery, User, UserFilter, UserQuery,
};
use time::OffsetDateTime;

fn ts(unix: i64) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(unix).unwrap()
}

fn user_row() -> Vec<Value> {
    vec![
        Value::Int(7),
        Value::Text("ada".to_string()),
        Value::Bool(true),
        Value::DateTime(ts(1_700_000_000)),
        Value::Double(0.75),
    ]
}

#[test]
fn query_type_carries_table_and_field_order() {
    assert_eq!(UserQuery::TABLE, "users");
    assert_eq!(
        UserQuery::FIELDS,
        ["id", "name", "active", "created_at", "score"]
    );

    // the trait surface agrees with the inherent one
    assert_eq!(<UserQuery as QuerySource>::TABLE, UserQuery::TABLE);
    assert_eq!(<UserQuery as QuerySource>::FIELDS, UserQuery::FIELDS);
}

#[test]
fn decode_row_builds_the_model_positionally() {
    let user = UserQuery::decode_row(&user_row()).unwrap();

    assert_eq!(
        user,
        User {
            id: 7,
            name: "ada".to_string(),
            active: true,
            created_at: ts(1_700_000_000),
            score: 0.75,
        }
    );
}

#[test]
fn decode_rejects_arity_mismatches() {
    let mut row = user_row();
    row.pop();

    assert_eq!(
        UserQuery::decode_row(&row),
        Err(DecodeError::ColumnCount {
            expected: 5,
            found: 4
        })
    );
}

#[test]
fn decode_rejects_cross_kind_cells() {
    let mut row = user_row();
    row[2] = Value::Text("yes".to_string());

    assert_eq!(
        UserQuery::decode_row(&row),
        Err(DecodeError::TypeMismatch {
            column: 2,
            field: "active",
            expected: ValueKind::Bool,
            found: ValueKind::Text,
        })
    );
}

#[test]
fn decode_is_positional_not_named() {
    // swapping two same-kind cells decodes cleanly into the wrong fields;
    // column order is the execution layer's contract
    let row = vec![
        Value::Int(128), // payloadSize cell handed over in the id slot
        Value::Text("login".to_string()),
        Value::Int(1),
        Value::DateTime(ts(1_700_000_000)),
        Value::DateTime(ts(1_700_000_000)),
    ];
    let event = AuditEventQuery::decode_row(&row).unwrap();

    assert_eq!(event.id, 128);
    assert_eq!(event.payloadSize, 1);

    // cross-kind reordering fails loudly instead
    let mut row = user_row();
    row.swap(1, 2);
    assert!(UserQuery::decode_row(&row).is_err());
}

#[test]
fn filter_builders_use_declared_columns() {
    assert_eq!(
        UserFilter::name().eq("ada"),
        Predicate::Compare(ComparePredicate::eq(
            "name",
            Value::Text("ada".to_string())
        ))
    );

    assert_eq!(
        UserFilter::score().gt(0.5),
        Predicate::Compare(ComparePredicate::gt("score", Value::Double(0.5)))
    );

    assert_eq!(UserFilter::active().is_true(), UserFilter::active().eq(true));
}

#[test]
fn filters_compose_with_bit_ops() {
    let pred = UserFilter::active().is_true() & UserFilter::id().lt(100);

    let Predicate::And(parts) = pred else {
        panic!("expected a conjunction");
    };
    assert_eq!(parts.len(), 2);
}

#[test]
fn audit_event_columns_are_snake_cased() {
    let pred = AuditEventFilter::eventName().eq("login");

    match pred {
        Predicate::Compare(cmp) => {
            assert_eq!(cmp.column, "event_name");
            assert_eq!(cmp.op, CompareOp::Eq);
        }
        other => panic!("expected a compare predicate, got {other:?}"),
    }
}

#[test]
fn audit_event_gains_injected_fields() {
    assert_eq!(
        AuditEventQuery::FIELDS,
        ["id", "eventName", "payloadSize", "created_at", "updated_at"]
    );

    let row = vec![
        Value::Int(1),
        Value::Text("login".to_string()),
        Value::Int(128),
        Value::DateTime(ts(1_700_000_000)),
        Value::DateTime(ts(1_700_000_100)),
    ];
    let event = AuditEventQuery::decode_row(&row).unwrap();

    assert_eq!(
        event,
        AuditEvent {
            id: 1,
            eventName: "login".to_string(),
            payloadSize: 128,
            created_at: ts(1_700_000_000),
            updated_at: ts(1_700_000_100),
        }
    );
}
