mod field;
mod model;

pub use field::{Field, FieldList};
pub use model::Model;

use thiserror::Error as ThisError;

///
/// NodeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NodeError {
    #[error("duplicate field '{ident}'")]
    DuplicateField { ident: String },

    #[error("identifier cannot be empty")]
    EmptyIdent,

    #[error("table name cannot be empty")]
    EmptyTable,

    #[error("identifier '{ident}' exceeds max length {max_len}")]
    IdentTooLong { ident: String, max_len: usize },

    #[error("identifier '{ident}' is not a valid identifier")]
    InvalidIdent { ident: String },

    #[error("table name '{table}' is not a valid table identifier")]
    InvalidTable { table: String },

    #[error("model '{model}' declares no fields")]
    NoFields { model: String },

    #[error("the word '{ident}' is reserved")]
    ReservedIdent { ident: String },

    #[error("table name '{table}' exceeds max length {max_len}")]
    TableTooLong { table: String, max_len: usize },
}
