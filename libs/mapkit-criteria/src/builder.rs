//! Free-function constructors for criteria.
//!
//! The vocabulary mirrors the comparison set of [`ComparisonOp`]: one
//! constructor per operator plus the composite forms. Null checks are
//! expressed through `Eq`/`Ne` against [`Value::Null`], which backends
//! rewrite into the IS NULL forms.
//!
//! ```
//! use mapkit_criteria::builder::{all_of, contains, eq, is_in};
//!
//! let filter = all_of([
//!     eq("status", "active"),
//!     contains("name", "smith"),
//!     is_in("group_id", [1, 2, 3]),
//! ]);
//! ```

use crate::expr::{ComparisonOp, CompositeOp, Criterion};
use crate::value::Value;

pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Eq, value)
}

pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Ne, value)
}

pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Gt, value)
}

pub fn ge(field: impl Into<String>, value: impl Into<Value>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Ge, value)
}

pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Lt, value)
}

pub fn le(field: impl Into<String>, value: impl Into<Value>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Le, value)
}

pub fn is_null(field: impl Into<String>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Eq, Value::Null)
}

pub fn is_not_null(field: impl Into<String>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Ne, Value::Null)
}

pub fn is_in<V: Into<Value>>(
    field: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Criterion {
    Criterion::comparison(field, ComparisonOp::In, values.into_iter().collect::<Value>())
}

pub fn not_in<V: Into<Value>>(
    field: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Criterion {
    Criterion::comparison(
        field,
        ComparisonOp::NotIn,
        values.into_iter().collect::<Value>(),
    )
}

pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::Contains, value.into())
}

pub fn starts_with(field: impl Into<String>, value: impl Into<String>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::StartsWith, value.into())
}

pub fn ends_with(field: impl Into<String>, value: impl Into<String>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::EndsWith, value.into())
}

/// `value member of field`, where the field names a collection association.
pub fn member_of(value: impl Into<Value>, field: impl Into<String>) -> Criterion {
    Criterion::comparison(field, ComparisonOp::MemberOf, value)
}

/// AND of all parts.
pub fn all_of(parts: impl IntoIterator<Item = Criterion>) -> Criterion {
    Criterion::Composite {
        op: CompositeOp::And,
        parts: parts.into_iter().collect(),
    }
}

/// OR of any part.
pub fn any_of(parts: impl IntoIterator<Item = Criterion>) -> Criterion {
    Criterion::Composite {
        op: CompositeOp::Or,
        parts: parts.into_iter().collect(),
    }
}

pub fn not(inner: Criterion) -> Criterion {
    Criterion::Not(Box::new(inner))
}
