use crate::{row::DecodeError, value::Value};

///
/// QuerySource
///
/// Implemented by generated query types. Carries the table identity, the
/// field enumeration in declaration order, and the positional row decoder.
///
/// Decoding is positional, not by name: a reordered row whose cells still
/// match the declared kinds decodes without error into the wrong fields. The
/// execution layer owns column ordering and must hand rows over in
/// `FIELDS` order.
///

pub trait QuerySource {
    /// The model type this source decodes into.
    type Model;

    /// Table identity, exactly as configured on the model descriptor.
    const TABLE: &'static str;

    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Decode one positional row into a model instance.
    fn decode_row(row: &[Value]) -> Result<Self::Model, DecodeError>;
}
