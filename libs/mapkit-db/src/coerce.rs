//! Criteria value → `sea_orm::Value` coercion.

use bigdecimal::{BigDecimal, ToPrimitive};
use mapkit_criteria::Value;
use rust_decimal::Decimal;

use crate::error::{CompileError, CompileResult};
use crate::field::FieldKind;

fn bigdecimal_to_decimal(bd: &BigDecimal) -> CompileResult<Decimal> {
    // Convert via string to preserve precision.
    let s = bd.normalized().to_string();
    Decimal::from_str_exact(&s)
        .or_else(|_| s.parse::<Decimal>())
        .map_err(|_| CompileError::InvalidNumber)
}

/// Coerce a single criteria value against the declared field kind.
///
/// # Errors
/// Returns `CompileError::TypeMismatch` when the value does not fit the
/// kind, or `CompileError::InvalidNumber` when a number overflows it.
pub fn coerce(kind: FieldKind, value: &Value) -> CompileResult<sea_orm::Value> {
    Ok(match (kind, value) {
        (FieldKind::String, Value::String(s)) => sea_orm::Value::String(Some(Box::new(s.clone()))),

        (FieldKind::I64, Value::Number(n)) => {
            let i = n.to_i64().ok_or(CompileError::InvalidNumber)?;
            sea_orm::Value::BigInt(Some(i))
        }

        (FieldKind::F64, Value::Number(n)) => {
            let f = n.to_f64().ok_or(CompileError::InvalidNumber)?;
            sea_orm::Value::Double(Some(f))
        }

        (FieldKind::Decimal, Value::Number(n)) => {
            sea_orm::Value::Decimal(Some(Box::new(bigdecimal_to_decimal(n)?)))
        }

        (FieldKind::Bool, Value::Bool(b)) => sea_orm::Value::Bool(Some(*b)),

        (FieldKind::Uuid, Value::Uuid(u)) => sea_orm::Value::Uuid(Some(Box::new(*u))),

        (FieldKind::DateTimeUtc, Value::DateTime(dt)) => {
            sea_orm::Value::ChronoDateTimeUtc(Some(Box::new(*dt)))
        }
        (FieldKind::Date, Value::Date(d)) => sea_orm::Value::ChronoDate(Some(Box::new(*d))),
        (FieldKind::Time, Value::Time(t)) => sea_orm::Value::ChronoTime(Some(Box::new(*t))),

        (expected, other) => {
            return Err(CompileError::TypeMismatch {
                expected,
                got: other.type_label(),
            })
        }
    })
}

/// Coerce every element of a membership list.
///
/// # Errors
/// Propagates the first element that fails to coerce.
pub fn coerce_list(kind: FieldKind, items: &[Value]) -> CompileResult<Vec<sea_orm::Value>> {
    items.iter().map(|v| coerce(kind, v)).collect()
}
