use crate::{BuildError, column};
use quarry_schema::{
    config::Config,
    node::{Field, Model},
    types::FieldType,
};
use quote::format_ident;
use syn::{Ident, Path};

///
/// FieldKind
///
/// The supported, closed set of field kinds after resolution. `FieldType::Other`
/// never survives into a `FieldKind`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Bool,
    DateTime,
    Double,
    Int,
    Text,
}

///
/// ResolvedField
///

#[derive(Clone, Debug)]
pub struct ResolvedField {
    /// Struct-construction ident.
    pub ident: Ident,

    /// Declared name, verbatim; the `FIELDS` entry.
    pub name: String,

    /// Resolved column name the filter builder is constructed with.
    pub column: String,

    pub kind: FieldKind,
}

///
/// ResolvedModel
///
/// Fully validated, emission-ready form of a model descriptor. Emission over
/// a resolved model is infallible.
///

#[derive(Clone, Debug)]
pub struct ResolvedModel {
    pub target: Path,
    pub type_name: Ident,
    pub table: String,
    pub fields: Vec<ResolvedField>,
}

/// Apply configuration to a declared model, producing the effective model.
/// With `auto_id_and_date_fields` set, an `id` key field is injected at the
/// front and `created_at`/`updated_at` audit fields at the end, each only
/// when the caller has not declared a field of that name.
pub fn apply(model: &Model, config: &Config) -> Model {
    let mut model = model.clone();

    if config.auto_id_and_date_fields {
        if !model.fields.contains("id") {
            model.fields.insert(0, Field::id());
        }
        if !model.fields.contains("created_at") {
            model.fields.push(Field::created_at());
        }
        if !model.fields.contains("updated_at") {
            model.fields.push(Field::updated_at());
        }
    }

    model
}

/// Resolve an effective model for emission. All generation-time errors
/// surface here; the caller must have run schema validation first.
pub fn resolve(model: &Model, config: &Config) -> Result<ResolvedModel, BuildError> {
    let target = parse_target(&model.ident)?;
    let type_name = format_ident!("{}", model.type_name());

    let mut fields: Vec<ResolvedField> = Vec::with_capacity(model.fields.len());
    for field in &model.fields {
        let kind = field_kind(field.ty).ok_or_else(|| BuildError::UnsupportedFieldType {
            model: model.ident.clone(),
            field: field.ident.clone(),
        })?;

        let column = column::resolved(&field.ident, config);

        // distinct idents may collide once column names are rewritten
        if let Some(prior) = fields.iter().find(|f| f.column == column) {
            return Err(BuildError::DuplicateColumn {
                model: model.ident.clone(),
                column,
                first: prior.name.clone(),
                second: field.ident.clone(),
            });
        }

        fields.push(ResolvedField {
            ident: format_ident!("{}", field.ident),
            name: field.ident.clone(),
            column,
            kind,
        });
    }

    Ok(ResolvedModel {
        target,
        type_name,
        table: model.table.clone(),
        fields,
    })
}

const fn field_kind(ty: FieldType) -> Option<FieldKind> {
    match ty {
        FieldType::Bool => Some(FieldKind::Bool),
        FieldType::DateTime => Some(FieldKind::DateTime),
        FieldType::Double => Some(FieldKind::Double),
        FieldType::Int => Some(FieldKind::Int),
        FieldType::String => Some(FieldKind::Text),
        FieldType::Other => None,
    }
}

fn parse_target(ident: &str) -> Result<Path, BuildError> {
    let invalid = || BuildError::InvalidTarget {
        target: ident.to_string(),
    };

    let path = syn::parse_str::<Path>(ident).map_err(|_| invalid())?;

    for (index, segment) in path.segments.iter().enumerate() {
        // Generic arguments mean the target is not a constructible named type.
        if !segment.arguments.is_none() {
            return Err(invalid());
        }

        // Path qualifiers are only meaningful in the leading position of a
        // longer path; a bare keyword never names a constructible type.
        if segment.ident == "self" || segment.ident == "crate" || segment.ident == "super" {
            if index > 0 || path.segments.len() == 1 {
                return Err(invalid());
            }
        } else if syn::parse_str::<Ident>(&segment.ident.to_string()).is_err() {
            return Err(invalid());
        }
    }

    Ok(path)
}
