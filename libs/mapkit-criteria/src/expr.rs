//! The criteria expression tree.

use std::fmt;

use crate::value::Value;

/// Comparison operators available on a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    /// Membership in a literal list: `field in (v1, v2, ...)`.
    In,
    /// Negated list membership.
    NotIn,
    /// Substring match on string fields.
    Contains,
    /// Prefix match on string fields.
    StartsWith,
    /// Suffix match on string fields.
    EndsWith,
    /// Value is a member of the collection association named by the field.
    MemberOf,
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOp::Eq => write!(f, "eq"),
            ComparisonOp::Ne => write!(f, "ne"),
            ComparisonOp::Gt => write!(f, "gt"),
            ComparisonOp::Ge => write!(f, "ge"),
            ComparisonOp::Lt => write!(f, "lt"),
            ComparisonOp::Le => write!(f, "le"),
            ComparisonOp::In => write!(f, "in"),
            ComparisonOp::NotIn => write!(f, "notin"),
            ComparisonOp::Contains => write!(f, "contains"),
            ComparisonOp::StartsWith => write!(f, "startswith"),
            ComparisonOp::EndsWith => write!(f, "endswith"),
            ComparisonOp::MemberOf => write!(f, "memberof"),
        }
    }
}

/// Logical connective of an n-ary composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CompositeOp {
    And,
    Or,
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompositeOp::And => write!(f, "and"),
            CompositeOp::Or => write!(f, "or"),
        }
    }
}

/// A node of the portable criteria tree.
///
/// Fields are plain strings at this level; whether a field names a column,
/// a dotted path, or a collection association is a backend concern.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Criterion {
    /// `field op value`
    Comparison {
        field: String,
        op: ComparisonOp,
        value: Value,
    },
    /// AND / OR over any number of parts.
    Composite {
        op: CompositeOp,
        parts: Vec<Criterion>,
    },
    /// Negation of the inner criterion.
    Not(Box<Criterion>),
}

impl Criterion {
    pub fn comparison(field: impl Into<String>, op: ComparisonOp, value: impl Into<Value>) -> Self {
        Criterion::Comparison {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Combine with AND: `self and other`.
    #[must_use]
    pub fn and(self, other: Criterion) -> Self {
        Criterion::Composite {
            op: CompositeOp::And,
            parts: vec![self, other],
        }
    }

    /// Combine with OR: `self or other`.
    #[must_use]
    pub fn or(self, other: Criterion) -> Self {
        Criterion::Composite {
            op: CompositeOp::Or,
            parts: vec![self, other],
        }
    }

    /// Maximum nesting depth of the tree; a lone comparison has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Criterion::Comparison { .. } => 1,
            Criterion::Composite { parts, .. } => {
                1 + parts.iter().map(Criterion::depth).max().unwrap_or(0)
            }
            Criterion::Not(inner) => 1 + inner.depth(),
        }
    }

    /// Total number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Criterion::Comparison { .. } => 1,
            Criterion::Composite { parts, .. } => {
                1 + parts.iter().map(Criterion::node_count).sum::<usize>()
            }
            Criterion::Not(inner) => 1 + inner.node_count(),
        }
    }
}

impl std::ops::Not for Criterion {
    type Output = Criterion;

    fn not(self) -> Self::Output {
        Criterion::Not(Box::new(self))
    }
}
