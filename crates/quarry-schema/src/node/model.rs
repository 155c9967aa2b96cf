use crate::{
    MAX_MODEL_NAME_LEN,
    node::{Field, FieldList, NodeError},
    prelude::*,
    validate::naming::validate_table,
};

///
/// Model
///
/// Declarative description of a data type's persisted fields. `ident` is the
/// path of the target type the generated decoder constructs; it may be a bare
/// name (`User`) or a full path (`crate::models::User`).
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Model {
    pub ident: String,
    pub table: String,

    #[serde(default)]
    pub fields: FieldList,
}

impl Model {
    #[must_use]
    pub fn new(ident: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            table: table.into(),
            fields: FieldList::default(),
        }
    }

    /// Append a field, preserving declaration order.
    #[must_use]
    pub fn field(mut self, ident: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(Field::new(ident, ty));
        self
    }

    /// The bare type name: the last segment of `ident`.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.ident.rsplit("::").next().unwrap_or(&self.ident)
    }

    pub fn validate(&self) -> Result<(), NodeError> {
        if self.ident.is_empty() {
            return Err(NodeError::EmptyIdent);
        }

        if self.type_name().len() > MAX_MODEL_NAME_LEN {
            return Err(NodeError::IdentTooLong {
                ident: self.type_name().to_string(),
                max_len: MAX_MODEL_NAME_LEN,
            });
        }

        validate_table(&self.table)?;

        if self.fields.is_empty() {
            return Err(NodeError::NoFields {
                model: self.ident.clone(),
            });
        }

        self.fields.validate()
    }
}
