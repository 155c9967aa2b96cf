//! ## Crate layout
//! - `build`: the model-to-query translator producing source artifacts.
//! - `core`: the runtime surface generated artifacts compile against —
//!   values, row decoding, the predicate AST, and expression builders.
//! - `schema`: model descriptors, generation config, and validation.
//!
//! A typical setup runs [`build::generate`] from a `build.rs`, writes
//! [`build::Artifact::render`] output into `OUT_DIR`, and `include!`s it next
//! to the model types. Generated code references `::quarry::core::*` paths
//! only, so consumers need this one dependency.

pub use quarry_build as build;
pub use quarry_core as core;
pub use quarry_schema as schema;

use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] build::BuildError),

    #[error(transparent)]
    Schema(#[from] schema::Error),
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{Artifact, BuildError, generate},
        core::{
            filter::{BoolExpr, DateTimeExpr, NumericExpr, TextExpr},
            predicate::{CompareOp, ComparePredicate, Predicate},
            row::DecodeError,
            traits::QuerySource,
            value::{Value, ValueKind},
        },
        schema::{
            config::Config,
            node::{Field, FieldList, Model},
            types::FieldType,
        },
    };
}
