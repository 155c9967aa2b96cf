pub mod config;
pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for model type identifiers.
pub const MAX_MODEL_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum length for table names.
pub const MAX_TABLE_NAME_LEN: usize = 64;

use crate::node::NodeError;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::Config,
        node::{Field, FieldList, Model},
        types::FieldType,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    NodeError(#[from] NodeError),
}
