use crate::value::ValueKind;
use thiserror::Error as ThisError;

///
/// DecodeError
///
/// Failure while decoding a positional row into a model instance. Decoding is
/// strictly positional: cell `i` must carry the kind declared for field `i`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DecodeError {
    #[error("row has {found} columns, expected {expected}")]
    ColumnCount { expected: usize, found: usize },

    #[error("column {column} ('{field}'): expected {expected}, found {found}")]
    TypeMismatch {
        column: usize,
        field: &'static str,
        expected: ValueKind,
        found: ValueKind,
    },
}
