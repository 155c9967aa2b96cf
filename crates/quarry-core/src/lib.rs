pub mod filter;
pub mod predicate;
pub mod row;
pub mod traits;
pub mod value;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        filter::{BoolExpr, DateTimeExpr, NumericExpr, TextExpr},
        predicate::{CompareOp, ComparePredicate, Predicate},
        row::DecodeError,
        traits::QuerySource,
        value::{Value, ValueKind},
    };
}
