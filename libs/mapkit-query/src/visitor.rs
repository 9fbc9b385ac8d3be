//! Criteria → query-expression translation with parameter extraction.

use mapkit_criteria::{ComparisonOp, CompositeOp, Criterion, CriteriaError, CriteriaLimits, Value};
use thiserror::Error;

use crate::expr::{Operand, QueryExpr};
use crate::param::Parameter;

/// Errors raised while translating a criteria tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("no root alias configured")]
    NoRootAlias,

    #[error("{op} requires a string value for field {field}")]
    PatternRequiresString { field: String, op: ComparisonOp },

    #[error(transparent)]
    Limits(#[from] CriteriaError),
}

pub type TranslateResult<T> = Result<T, TranslateError>;

/// Walks a [`Criterion`] tree and produces the equivalent [`QueryExpr`]
/// plus the extracted parameter list.
///
/// The visitor is configured with the query's root aliases. Criteria fields
/// that do not already carry one of those aliases as a dotted prefix are
/// qualified with the first alias; fields that do are used verbatim.
/// Every value-carrying comparison becomes a named placeholder, with the
/// parameter name derived from the field (dots become underscores) and
/// deduplicated against previously collected parameters.
pub struct QueryExpressionVisitor {
    root_aliases: Vec<String>,
    parameters: Vec<Parameter>,
}

impl QueryExpressionVisitor {
    pub fn new<I, S>(root_aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root_aliases: root_aliases.into_iter().map(Into::into).collect(),
            parameters: Vec::new(),
        }
    }

    /// Parameters collected so far, in visit order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn clear_parameters(&mut self) {
        self.parameters.clear();
    }

    /// Consume the visitor, keeping only the collected parameters.
    #[must_use]
    pub fn into_parameters(self) -> Vec<Parameter> {
        self.parameters
    }

    /// Translate a criterion of any shape.
    ///
    /// # Errors
    /// Returns a [`TranslateError`] when no root alias is configured or a
    /// pattern comparison carries a non-string value.
    pub fn walk(&mut self, criterion: &Criterion) -> TranslateResult<QueryExpr> {
        match criterion {
            Criterion::Comparison { field, op, value } => self.walk_comparison(field, *op, value),
            Criterion::Composite { op, parts } => self.walk_composite(*op, parts),
            Criterion::Not(inner) => Ok(QueryExpr::not(self.walk(inner)?)),
        }
    }

    /// Validate against `limits`, then translate.
    ///
    /// # Errors
    /// As [`walk`](Self::walk), plus [`CriteriaError`] for violated caps.
    pub fn walk_checked(
        &mut self,
        criterion: &Criterion,
        limits: &CriteriaLimits,
    ) -> TranslateResult<QueryExpr> {
        limits.validate(criterion)?;
        self.walk(criterion)
    }

    /// Translate a single comparison.
    ///
    /// # Errors
    /// Returns a [`TranslateError`] when no root alias is configured or a
    /// pattern comparison carries a non-string value.
    pub fn walk_comparison(
        &mut self,
        field: &str,
        op: ComparisonOp,
        value: &Value,
    ) -> TranslateResult<QueryExpr> {
        let path = self.qualify_field(field)?;

        match op {
            ComparisonOp::In => {
                let placeholder = self.add_parameter(field, value.clone());
                Ok(QueryExpr::is_in(Operand::Path(path), placeholder))
            }
            ComparisonOp::NotIn => {
                let placeholder = self.add_parameter(field, value.clone());
                Ok(QueryExpr::not_in(Operand::Path(path), placeholder))
            }
            ComparisonOp::Eq => {
                if value.is_null() {
                    return Ok(QueryExpr::is_null(Operand::Path(path)));
                }
                let placeholder = self.add_parameter(field, value.clone());
                Ok(QueryExpr::eq(Operand::Path(path), placeholder))
            }
            ComparisonOp::Ne => {
                if value.is_null() {
                    return Ok(QueryExpr::is_not_null(Operand::Path(path)));
                }
                let placeholder = self.add_parameter(field, value.clone());
                Ok(QueryExpr::ne(Operand::Path(path), placeholder))
            }
            ComparisonOp::Gt => {
                let placeholder = self.add_parameter(field, value.clone());
                Ok(QueryExpr::gt(Operand::Path(path), placeholder))
            }
            ComparisonOp::Ge => {
                let placeholder = self.add_parameter(field, value.clone());
                Ok(QueryExpr::ge(Operand::Path(path), placeholder))
            }
            ComparisonOp::Lt => {
                let placeholder = self.add_parameter(field, value.clone());
                Ok(QueryExpr::lt(Operand::Path(path), placeholder))
            }
            ComparisonOp::Le => {
                let placeholder = self.add_parameter(field, value.clone());
                Ok(QueryExpr::le(Operand::Path(path), placeholder))
            }
            ComparisonOp::Contains => self.walk_pattern(field, path, op, value, |s| format!("%{s}%")),
            ComparisonOp::StartsWith => {
                self.walk_pattern(field, path, op, value, |s| format!("{s}%"))
            }
            ComparisonOp::EndsWith => {
                self.walk_pattern(field, path, op, value, |s| format!("%{s}"))
            }
            ComparisonOp::MemberOf => {
                let member = match value {
                    Value::String(s) if s.starts_with(':') => {
                        Operand::Placeholder(s[1..].to_owned())
                    }
                    other => Operand::Literal(other.clone()),
                };
                Ok(QueryExpr::is_member_of(member, Operand::Path(path)))
            }
        }
    }

    /// Translate an AND/OR composite.
    ///
    /// # Errors
    /// Propagates errors from walking the parts.
    pub fn walk_composite(
        &mut self,
        op: CompositeOp,
        parts: &[Criterion],
    ) -> TranslateResult<QueryExpr> {
        let walked = parts
            .iter()
            .map(|part| self.walk(part))
            .collect::<TranslateResult<Vec<_>>>()?;

        Ok(match op {
            CompositeOp::And => QueryExpr::And(walked),
            CompositeOp::Or => QueryExpr::Or(walked),
        })
    }

    /// Values pass through translation unchanged.
    #[must_use]
    pub fn walk_value(value: &Value) -> Value {
        value.clone()
    }

    fn walk_pattern(
        &mut self,
        field: &str,
        path: String,
        op: ComparisonOp,
        value: &Value,
        wrap: fn(&str) -> String,
    ) -> TranslateResult<QueryExpr> {
        let Value::String(s) = value else {
            return Err(TranslateError::PatternRequiresString {
                field: field.to_owned(),
                op,
            });
        };
        let placeholder = self.add_parameter(field, Value::String(wrap(s)));
        Ok(QueryExpr::like(Operand::Path(path), placeholder))
    }

    /// Record a parameter for `field` and return its placeholder operand.
    fn add_parameter(&mut self, field: &str, value: Value) -> Operand {
        let mut name = field.replace('.', "_");
        if self.parameters.iter().any(|p| p.name == name) {
            name = format!("{}_{}", name, self.parameters.len());
        }
        self.parameters.push(Parameter { name: name.clone(), value });
        Operand::Placeholder(name)
    }

    fn qualify_field(&self, field: &str) -> TranslateResult<String> {
        let first = self.root_aliases.first().ok_or(TranslateError::NoRootAlias)?;
        for alias in &self.root_aliases {
            if has_alias_prefix(field, alias) {
                return Ok(field.to_owned());
            }
        }
        Ok(format!("{first}.{field}"))
    }
}

fn has_alias_prefix(field: &str, alias: &str) -> bool {
    field == alias
        || (field.starts_with(alias) && field.as_bytes().get(alias.len()) == Some(&b'.'))
}
