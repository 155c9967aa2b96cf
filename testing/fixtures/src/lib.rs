//! Model types whose query and filter artifacts are generated by `build.rs`
//! and compiled into this crate via `include!`.

use time::OffsetDateTime;

///
/// User
///

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub created_at: OffsetDateTime,
    pub score: f64,
}

///
/// AuditEvent
///
/// Declared with camelCase fields and generated with snake_case column
/// resolution plus id/date injection.
///

#[allow(non_snake_case)]
#[derive(Clone, Debug, PartialEq)]
pub struct AuditEvent {
    pub id: i64,
    pub eventName: String,
    pub payloadSize: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

include!(concat!(env!("OUT_DIR"), "/generated.rs"));
