mod column;
mod filter;
mod prepare;
mod query;

use proc_macro2::TokenStream;
use quarry_schema::{config::Config, node::Model};
use quote::quote;
use thiserror::Error as ThisError;

///
/// BuildError
///
/// Generation is all-or-nothing: any error aborts the run before a single
/// token of output exists.
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("fields '{first}' and '{second}' on model '{model}' both resolve to column '{column}'")]
    DuplicateColumn {
        model: String,
        column: String,
        first: String,
        second: String,
    },

    #[error("target '{target}' is not a plain type path; models must name a constructible type")]
    InvalidTarget { target: String },

    #[error(
        "field '{field}' on model '{model}' has an unsupported type; supported types are String, Bool, DateTime, Int and Double"
    )]
    UnsupportedFieldType { model: String, field: String },

    #[error(transparent)]
    Schema(#[from] quarry_schema::Error),
}

///
/// Artifact
///
/// The two generated type definitions for one model: the query type (table
/// identity, field enumeration, row decoder) and the filter type (one
/// expression builder per field).
///

#[derive(Clone, Debug)]
pub struct Artifact {
    pub query: TokenStream,
    pub filter: TokenStream,
}

impl Artifact {
    /// Both artifacts as one token stream, query first.
    #[must_use]
    pub fn to_token_stream(&self) -> TokenStream {
        let query = &self.query;
        let filter = &self.filter;

        quote! {
            #query
            #filter
        }
    }

    /// Render to source text. Rendering is deterministic: the same model and
    /// config always produce byte-identical output.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_token_stream().to_string()
    }
}

/// Translate one model descriptor into its query and filter artifacts.
///
/// The effective model is the declared one plus any fields injected by
/// `config`; validation covers the effective model, and every error is fatal
/// with no partial output.
pub fn generate(model: &Model, config: &Config) -> Result<Artifact, BuildError> {
    let effective = prepare::apply(model, config);
    effective.validate().map_err(quarry_schema::Error::from)?;

    let resolved = prepare::resolve(&effective, config)?;

    Ok(Artifact {
        query: query::emit(&resolved),
        filter: filter::emit(&resolved),
    })
}
