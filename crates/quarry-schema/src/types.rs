use crate::prelude::*;
use derive_more::{Display, FromStr};

///
/// FieldType
///
/// Closed set of semantic field types a model may declare. `Other` is
/// representable so callers can describe any source model faithfully, but it
/// is rejected at generation time.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, PartialEq, Serialize)]
#[remain::sorted]
pub enum FieldType {
    Bool,
    DateTime,
    Double,
    Int,
    Other,
    String,
}

impl FieldType {
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Other)
    }

    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Double | Self::Int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_the_only_unsupported_type() {
        let supported = [
            FieldType::Bool,
            FieldType::DateTime,
            FieldType::Double,
            FieldType::Int,
            FieldType::String,
        ];

        for ty in supported {
            assert!(ty.is_supported(), "{ty} must be supported");
        }
        assert!(!FieldType::Other.is_supported());
    }

    #[test]
    fn numeric_covers_int_and_double_only() {
        assert!(FieldType::Int.is_numeric());
        assert!(FieldType::Double.is_numeric());
        assert!(!FieldType::String.is_numeric());
        assert!(!FieldType::Bool.is_numeric());
        assert!(!FieldType::DateTime.is_numeric());
    }

    #[test]
    fn field_type_round_trips_through_display() {
        for ty in [
            FieldType::Bool,
            FieldType::DateTime,
            FieldType::Double,
            FieldType::Int,
            FieldType::Other,
            FieldType::String,
        ] {
            let parsed: FieldType = ty.to_string().parse().unwrap();
            assert_eq!(parsed, ty);
        }
    }
}
