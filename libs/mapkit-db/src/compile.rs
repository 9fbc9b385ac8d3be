//! Criteria → `sea_orm::Condition` compiler.

use mapkit_criteria::{ComparisonOp, CompositeOp, Criterion, Value};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, Condition, EntityTrait};

use crate::coerce::{coerce, coerce_list};
use crate::error::{CompileError, CompileResult};
use crate::field::{Field, FieldKind, FieldMap};

/* ---------- LIKE helpers ---------- */

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}

fn like_starts(s: &str) -> String {
    format!("{}%", like_escape(s))
}

fn like_ends(s: &str) -> String {
    format!("%{}", like_escape(s))
}

/* ---------- small guards ---------- */

#[inline]
fn ensure_string_field<E: EntityTrait>(
    f: &Field<E>,
    field_name: &str,
    op: ComparisonOp,
) -> CompileResult<()> {
    if f.kind != FieldKind::String {
        return Err(CompileError::PatternRequiresString {
            op,
            field: field_name.to_owned(),
        });
    }
    Ok(())
}

fn pattern_string<'a>(
    value: &'a Value,
    field_name: &str,
    op: ComparisonOp,
) -> CompileResult<&'a str> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(CompileError::PatternRequiresString {
            op,
            field: field_name.to_owned(),
        }),
    }
}

/* ---------- Criterion -> Condition ---------- */

/// Compile a criteria tree into a `SeaORM` condition against the fields the
/// entity declared in `fmap`.
///
/// # Errors
/// Returns `CompileError` for unknown fields, value/kind mismatches, and
/// operators the condition layer cannot express (`MemberOf` needs join
/// context and is rejected here).
pub fn criterion_to_condition<E>(
    criterion: &Criterion,
    fmap: &FieldMap<E>,
) -> CompileResult<Condition>
where
    E: EntityTrait,
    E::Column: ColumnTrait + Copy,
{
    match criterion {
        Criterion::Composite { op, parts } => {
            let mut cond = match op {
                CompositeOp::And => Condition::all(),
                CompositeOp::Or => Condition::any(),
            };
            for part in parts {
                cond = cond.add(criterion_to_condition::<E>(part, fmap)?);
            }
            Ok(cond)
        }

        Criterion::Not(inner) => {
            let inner = criterion_to_condition::<E>(inner, fmap)?;
            Ok(Condition::all().add(inner).not())
        }

        Criterion::Comparison { field, op, value } => {
            compile_comparison::<E>(field, *op, value, fmap)
        }
    }
}

fn compile_comparison<E>(
    field_name: &str,
    op: ComparisonOp,
    value: &Value,
    fmap: &FieldMap<E>,
) -> CompileResult<Condition>
where
    E: EntityTrait,
    E::Column: ColumnTrait + Copy,
{
    let field = fmap
        .get(field_name)
        .ok_or_else(|| CompileError::UnknownField(field_name.to_owned()))?;
    let col = field.col;

    // null handling
    if value.is_null() {
        return match op {
            ComparisonOp::Eq => Ok(Condition::all().add(Expr::col(col).is_null())),
            ComparisonOp::Ne => Ok(Condition::all().add(Expr::col(col).is_not_null())),
            _ => Err(CompileError::NullComparison { op }),
        };
    }

    match op {
        ComparisonOp::Eq => {
            let v = coerce(field.kind, value)?;
            Ok(Condition::all().add(Expr::col(col).eq(v)))
        }
        ComparisonOp::Ne => {
            let v = coerce(field.kind, value)?;
            Ok(Condition::all().add(Expr::col(col).ne(v)))
        }
        ComparisonOp::Gt => {
            let v = coerce(field.kind, value)?;
            Ok(Condition::all().add(Expr::col(col).gt(v)))
        }
        ComparisonOp::Ge => {
            let v = coerce(field.kind, value)?;
            Ok(Condition::all().add(Expr::col(col).gte(v)))
        }
        ComparisonOp::Lt => {
            let v = coerce(field.kind, value)?;
            Ok(Condition::all().add(Expr::col(col).lt(v)))
        }
        ComparisonOp::Le => {
            let v = coerce(field.kind, value)?;
            Ok(Condition::all().add(Expr::col(col).lte(v)))
        }

        ComparisonOp::In | ComparisonOp::NotIn => {
            let Value::List(items) = value else {
                return Err(CompileError::ListRequired { op });
            };
            let vals = coerce_list(field.kind, items)?;
            if vals.is_empty() {
                // IN () is always false, NOT IN () always true
                let guard = if op == ComparisonOp::In { "1=0" } else { "1=1" };
                return Ok(Condition::all().add(Expr::cust(guard)));
            }
            let expr = if op == ComparisonOp::In {
                Expr::col(col).is_in(vals)
            } else {
                Expr::col(col).is_not_in(vals)
            };
            Ok(Condition::all().add(expr))
        }

        ComparisonOp::Contains => {
            ensure_string_field(field, field_name, op)?;
            let s = pattern_string(value, field_name, op)?;
            Ok(Condition::all().add(Expr::col(col).like(like_contains(s))))
        }
        ComparisonOp::StartsWith => {
            ensure_string_field(field, field_name, op)?;
            let s = pattern_string(value, field_name, op)?;
            Ok(Condition::all().add(Expr::col(col).like(like_starts(s))))
        }
        ComparisonOp::EndsWith => {
            ensure_string_field(field, field_name, op)?;
            let s = pattern_string(value, field_name, op)?;
            Ok(Condition::all().add(Expr::col(col).like(like_ends(s))))
        }

        ComparisonOp::MemberOf => Err(CompileError::UnsupportedOperator(op)),
    }
}
