//! The target query-expression tree.
//!
//! This is the owned form of what a query builder consumes: qualified field
//! paths, named placeholders, literal operands, and the comparison, pattern,
//! membership and composite forms over them. `Display` renders the portable
//! textual shape (`o.name = :name`, `NOT(o.id IN(:ids))`).

use std::fmt;

use mapkit_criteria::Value;

/// One side of a comparison, or a membership/pattern operand.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Operand {
    /// A qualified field path, e.g. `o.name`.
    Path(String),
    /// A named parameter placeholder; renders with a leading colon.
    Placeholder(String),
    /// An inline literal.
    Literal(Value),
}

impl Operand {
    pub fn path(path: impl Into<String>) -> Self {
        Operand::Path(path.into())
    }

    /// A placeholder by bare name: `Operand::placeholder("name")` renders
    /// as `:name`.
    pub fn placeholder(name: impl Into<String>) -> Self {
        Operand::Placeholder(name.into())
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Operand::Literal(value.into())
    }
}

fn fmt_literal(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => write!(f, "NULL"),
        Value::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        Value::Number(n) => write!(f, "{n}"),
        Value::Uuid(u) => write!(f, "'{u}'"),
        Value::DateTime(dt) => write!(f, "'{}'", dt.to_rfc3339()),
        Value::Date(d) => write!(f, "'{d}'"),
        Value::Time(t) => write!(f, "'{t}'"),
        Value::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        Value::List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_literal(item, f)?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Path(p) => write!(f, "{p}"),
            Operand::Placeholder(name) => write!(f, ":{name}"),
            Operand::Literal(v) => fmt_literal(v, f),
        }
    }
}

/// Binary comparison operators of the query language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    /// Collection membership: `value MEMBER OF path`.
    MemberOf,
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CmpOp::Eq => write!(f, "="),
            CmpOp::Ne => write!(f, "<>"),
            CmpOp::Gt => write!(f, ">"),
            CmpOp::Ge => write!(f, ">="),
            CmpOp::Lt => write!(f, "<"),
            CmpOp::Le => write!(f, "<="),
            CmpOp::MemberOf => write!(f, "MEMBER OF"),
        }
    }
}

/// A node of the query-expression tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum QueryExpr {
    Comparison {
        left: Operand,
        op: CmpOp,
        right: Operand,
    },
    IsNull(Operand),
    IsNotNull(Operand),
    Like {
        subject: Operand,
        pattern: Operand,
    },
    NotLike {
        subject: Operand,
        pattern: Operand,
    },
    In {
        subject: Operand,
        list: Operand,
    },
    NotIn {
        subject: Operand,
        list: Operand,
    },
    /// n-ary conjunction.
    And(Vec<QueryExpr>),
    /// n-ary disjunction.
    Or(Vec<QueryExpr>),
    /// Named function application over sub-expressions. Negation is the
    /// one-argument `NOT` function.
    Func {
        name: String,
        args: Vec<QueryExpr>,
    },
}

impl QueryExpr {
    fn cmp(left: Operand, op: CmpOp, right: Operand) -> Self {
        QueryExpr::Comparison { left, op, right }
    }

    pub fn eq(left: Operand, right: Operand) -> Self {
        Self::cmp(left, CmpOp::Eq, right)
    }

    pub fn ne(left: Operand, right: Operand) -> Self {
        Self::cmp(left, CmpOp::Ne, right)
    }

    pub fn gt(left: Operand, right: Operand) -> Self {
        Self::cmp(left, CmpOp::Gt, right)
    }

    pub fn ge(left: Operand, right: Operand) -> Self {
        Self::cmp(left, CmpOp::Ge, right)
    }

    pub fn lt(left: Operand, right: Operand) -> Self {
        Self::cmp(left, CmpOp::Lt, right)
    }

    pub fn le(left: Operand, right: Operand) -> Self {
        Self::cmp(left, CmpOp::Le, right)
    }

    pub fn is_null(operand: Operand) -> Self {
        QueryExpr::IsNull(operand)
    }

    pub fn is_not_null(operand: Operand) -> Self {
        QueryExpr::IsNotNull(operand)
    }

    pub fn like(subject: Operand, pattern: Operand) -> Self {
        QueryExpr::Like { subject, pattern }
    }

    pub fn not_like(subject: Operand, pattern: Operand) -> Self {
        QueryExpr::NotLike { subject, pattern }
    }

    pub fn is_in(subject: Operand, list: Operand) -> Self {
        QueryExpr::In { subject, list }
    }

    pub fn not_in(subject: Operand, list: Operand) -> Self {
        QueryExpr::NotIn { subject, list }
    }

    /// `value MEMBER OF path`, with the collection path on the right.
    pub fn is_member_of(value: Operand, path: Operand) -> Self {
        Self::cmp(value, CmpOp::MemberOf, path)
    }

    pub fn and_all(parts: impl IntoIterator<Item = QueryExpr>) -> Self {
        QueryExpr::And(parts.into_iter().collect())
    }

    pub fn or_any(parts: impl IntoIterator<Item = QueryExpr>) -> Self {
        QueryExpr::Or(parts.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: QueryExpr) -> Self {
        QueryExpr::Func {
            name: "NOT".to_owned(),
            args: vec![inner],
        }
    }
}

fn fmt_composite(parts: &[QueryExpr], sep: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let [single] = parts {
        return write!(f, "{single}");
    }
    write!(f, "(")?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{part}")?;
    }
    write!(f, ")")
}

impl fmt::Display for QueryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryExpr::Comparison { left, op, right } => write!(f, "{left} {op} {right}"),
            QueryExpr::IsNull(x) => write!(f, "{x} IS NULL"),
            QueryExpr::IsNotNull(x) => write!(f, "{x} IS NOT NULL"),
            QueryExpr::Like { subject, pattern } => write!(f, "{subject} LIKE {pattern}"),
            QueryExpr::NotLike { subject, pattern } => write!(f, "{subject} NOT LIKE {pattern}"),
            QueryExpr::In { subject, list } => write!(f, "{subject} IN({list})"),
            QueryExpr::NotIn { subject, list } => write!(f, "{subject} NOT IN({list})"),
            QueryExpr::And(parts) => fmt_composite(parts, " AND ", f),
            QueryExpr::Or(parts) => fmt_composite(parts, " OR ", f),
            QueryExpr::Func { name, args } => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}
