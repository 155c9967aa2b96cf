use crate::{
    predicate::{ComparePredicate, Predicate},
    value::Value,
};
use std::marker::PhantomData;
use time::OffsetDateTime;

///
/// Expression builders
///
/// One builder kind per semantic field type. Generated filter types expose
/// one constructed builder per field; each builder knows its resolved column
/// name and only offers the comparisons valid for its type.
///

///
/// TextExpr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextExpr {
    column: String,
}

impl TextExpr {
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[must_use]
    pub fn eq(&self, value: impl Into<String>) -> Predicate {
        ComparePredicate::eq(self.column.clone(), Value::Text(value.into())).into()
    }

    #[must_use]
    pub fn ne(&self, value: impl Into<String>) -> Predicate {
        ComparePredicate::ne(self.column.clone(), Value::Text(value.into())).into()
    }

    #[must_use]
    pub fn contains(&self, value: impl Into<String>) -> Predicate {
        ComparePredicate::contains(self.column.clone(), Value::Text(value.into())).into()
    }

    #[must_use]
    pub fn starts_with(&self, value: impl Into<String>) -> Predicate {
        ComparePredicate::starts_with(self.column.clone(), Value::Text(value.into())).into()
    }

    #[must_use]
    pub fn ends_with(&self, value: impl Into<String>) -> Predicate {
        ComparePredicate::ends_with(self.column.clone(), Value::Text(value.into())).into()
    }

    #[must_use]
    pub fn in_<I, S>(&self, values: I) -> Predicate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|v| Value::Text(v.into()))
            .collect::<Vec<_>>();

        ComparePredicate::in_(self.column.clone(), values).into()
    }

    #[must_use]
    pub fn is_null(&self) -> Predicate {
        Predicate::is_null(self.column.clone())
    }
}

///
/// BoolExpr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoolExpr {
    column: String,
}

impl BoolExpr {
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[must_use]
    pub fn eq(&self, value: bool) -> Predicate {
        ComparePredicate::eq(self.column.clone(), Value::Bool(value)).into()
    }

    #[must_use]
    pub fn is_true(&self) -> Predicate {
        self.eq(true)
    }

    #[must_use]
    pub fn is_false(&self) -> Predicate {
        self.eq(false)
    }

    #[must_use]
    pub fn is_null(&self) -> Predicate {
        Predicate::is_null(self.column.clone())
    }
}

///
/// DateTimeExpr
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateTimeExpr {
    column: String,
}

impl DateTimeExpr {
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[must_use]
    pub fn eq(&self, value: OffsetDateTime) -> Predicate {
        ComparePredicate::eq(self.column.clone(), Value::DateTime(value)).into()
    }

    #[must_use]
    pub fn ne(&self, value: OffsetDateTime) -> Predicate {
        ComparePredicate::ne(self.column.clone(), Value::DateTime(value)).into()
    }

    #[must_use]
    pub fn before(&self, value: OffsetDateTime) -> Predicate {
        ComparePredicate::lt(self.column.clone(), Value::DateTime(value)).into()
    }

    #[must_use]
    pub fn at_or_before(&self, value: OffsetDateTime) -> Predicate {
        ComparePredicate::lte(self.column.clone(), Value::DateTime(value)).into()
    }

    #[must_use]
    pub fn after(&self, value: OffsetDateTime) -> Predicate {
        ComparePredicate::gt(self.column.clone(), Value::DateTime(value)).into()
    }

    #[must_use]
    pub fn at_or_after(&self, value: OffsetDateTime) -> Predicate {
        ComparePredicate::gte(self.column.clone(), Value::DateTime(value)).into()
    }

    /// Inclusive range over both bounds.
    #[must_use]
    pub fn between(&self, lo: OffsetDateTime, hi: OffsetDateTime) -> Predicate {
        self.at_or_after(lo) & self.at_or_before(hi)
    }

    #[must_use]
    pub fn is_null(&self) -> Predicate {
        Predicate::is_null(self.column.clone())
    }
}

///
/// NumericExpr
///
/// Parameterized by the numeric representation so int and double columns get
/// distinct, correctly-typed builders from the same implementation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumericExpr<T> {
    column: String,
    _marker: PhantomData<T>,
}

impl<T> NumericExpr<T>
where
    T: Copy + Into<Value>,
{
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[must_use]
    pub fn eq(&self, value: T) -> Predicate {
        ComparePredicate::eq(self.column.clone(), value.into()).into()
    }

    #[must_use]
    pub fn ne(&self, value: T) -> Predicate {
        ComparePredicate::ne(self.column.clone(), value.into()).into()
    }

    #[must_use]
    pub fn lt(&self, value: T) -> Predicate {
        ComparePredicate::lt(self.column.clone(), value.into()).into()
    }

    #[must_use]
    pub fn lte(&self, value: T) -> Predicate {
        ComparePredicate::lte(self.column.clone(), value.into()).into()
    }

    #[must_use]
    pub fn gt(&self, value: T) -> Predicate {
        ComparePredicate::gt(self.column.clone(), value.into()).into()
    }

    #[must_use]
    pub fn gte(&self, value: T) -> Predicate {
        ComparePredicate::gte(self.column.clone(), value.into()).into()
    }

    /// Inclusive range over both bounds.
    #[must_use]
    pub fn between(&self, lo: T, hi: T) -> Predicate {
        self.gte(lo) & self.lte(hi)
    }

    #[must_use]
    pub fn in_(&self, values: impl IntoIterator<Item = T>) -> Predicate {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();

        ComparePredicate::in_(self.column.clone(), values).into()
    }

    #[must_use]
    pub fn not_in(&self, values: impl IntoIterator<Item = T>) -> Predicate {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();

        ComparePredicate::not_in(self.column.clone(), values).into()
    }

    #[must_use]
    pub fn is_null(&self) -> Predicate {
        Predicate::is_null(self.column.clone())
    }
}
