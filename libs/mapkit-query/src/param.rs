//! Extracted query parameters.

use mapkit_criteria::Value;

/// A named parameter extracted during criteria translation.
///
/// The visitor accumulates parameters in visit order; the list pairs with
/// the placeholders embedded in the produced [`QueryExpr`](crate::QueryExpr).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: Value,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
