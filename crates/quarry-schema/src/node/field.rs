use crate::{
    MAX_FIELD_NAME_LEN,
    node::NodeError,
    prelude::*,
    validate::naming::validate_ident,
};
use std::slice::Iter;

///
/// FieldList
///
/// Ordered set of fields. Order is the positional row-decode order and is
/// preserved exactly as declared.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn contains(&self, ident: &str) -> bool {
        self.get(ident).is_some()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Field> {
        self.fields.iter()
    }

    /// Field idents in declaration order.
    #[must_use]
    pub fn idents(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.ident.as_str()).collect()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn insert(&mut self, index: usize, field: Field) {
        self.fields.insert(index, field);
    }

    pub fn validate(&self) -> Result<(), NodeError> {
        for (i, field) in self.fields.iter().enumerate() {
            field.validate()?;

            if self.fields[..i].iter().any(|f| f.ident == field.ident) {
                return Err(NodeError::DuplicateField {
                    ident: field.ident.clone(),
                });
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// Field
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub ident: String,
    pub ty: FieldType,

    /// Injected by configuration rather than declared by the caller.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub system: bool,
}

impl Field {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: FieldType) -> Self {
        Self {
            ident: ident.into(),
            ty,
            system: false,
        }
    }

    #[must_use]
    pub fn id() -> Self {
        Self {
            ident: "id".to_string(),
            ty: FieldType::Int,
            system: true,
        }
    }

    #[must_use]
    pub fn created_at() -> Self {
        Self {
            ident: "created_at".to_string(),
            ty: FieldType::DateTime,
            system: true,
        }
    }

    #[must_use]
    pub fn updated_at() -> Self {
        Self {
            ident: "updated_at".to_string(),
            ty: FieldType::DateTime,
            system: true,
        }
    }

    pub fn validate(&self) -> Result<(), NodeError> {
        validate_ident(&self.ident, MAX_FIELD_NAME_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idents_preserve_declaration_order() {
        let mut fields = FieldList::default();
        fields.push(Field::new("id", FieldType::Int));
        fields.push(Field::new("name", FieldType::String));
        fields.push(Field::new("active", FieldType::Bool));
        fields.push(Field::new("createdAt", FieldType::DateTime));

        assert_eq!(fields.idents(), vec!["id", "name", "active", "createdAt"]);
    }

    #[test]
    fn duplicate_idents_fail_validation() {
        let mut fields = FieldList::default();
        fields.push(Field::new("name", FieldType::String));
        fields.push(Field::new("name", FieldType::Int));

        assert_eq!(
            fields.validate(),
            Err(NodeError::DuplicateField {
                ident: "name".to_string()
            })
        );
    }

    #[test]
    fn system_fields_carry_the_marker() {
        assert!(Field::id().system);
        assert!(Field::created_at().system);
        assert!(Field::updated_at().system);
        assert!(!Field::new("name", FieldType::String).system);
    }
}
