use crate::value::Value;
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure representation of filter predicates. This layer carries no schema
/// knowledge, planning, or execution semantics; it is the hand-off shape
/// between generated filter types and an execution layer.
///

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CompareOp {
    Eq = 0x01,
    Ne = 0x02,
    Lt = 0x03,
    Lte = 0x04,
    Gt = 0x05,
    Gte = 0x06,
    In = 0x07,
    NotIn = 0x08,
    Contains = 0x09,
    StartsWith = 0x0a,
    EndsWith = 0x0b,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, PartialEq)]
pub struct ComparePredicate {
    pub column: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(column: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            column: column.into(),
            op,
            value,
        }
    }

    #[must_use]
    pub fn eq(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::Eq, value)
    }

    #[must_use]
    pub fn ne(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::Ne, value)
    }

    #[must_use]
    pub fn lt(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::Lt, value)
    }

    #[must_use]
    pub fn lte(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::Lte, value)
    }

    #[must_use]
    pub fn gt(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::Gt, value)
    }

    #[must_use]
    pub fn gte(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::Gte, value)
    }

    #[must_use]
    pub fn in_(column: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(column, CompareOp::In, Value::List(values))
    }

    #[must_use]
    pub fn not_in(column: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(column, CompareOp::NotIn, Value::List(values))
    }

    #[must_use]
    pub fn contains(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::Contains, value)
    }

    #[must_use]
    pub fn starts_with(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::StartsWith, value)
    }

    #[must_use]
    pub fn ends_with(column: impl Into<String>, value: Value) -> Self {
        Self::new(column, CompareOp::EndsWith, value)
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, PartialEq)]
pub enum Predicate {
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    IsNull { column: String },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn is_null(column: impl Into<String>) -> Self {
        Self::IsNull {
            column: column.into(),
        }
    }
}

impl From<ComparePredicate> for Predicate {
    fn from(cmp: ComparePredicate) -> Self {
        Self::Compare(cmp)
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        Predicate::And(vec![self.clone(), rhs.clone()])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl BitOr for &Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Self) -> Self::Output {
        Predicate::Or(vec![self.clone(), rhs.clone()])
    }
}
