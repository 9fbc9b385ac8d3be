//! Portable query criteria for data-mapper backends.
//!
//! This crate defines a backend-agnostic criteria model: literal [`Value`]s,
//! the [`Criterion`] expression tree (comparisons, n-ary AND/OR composites,
//! negation), the [`builder`] vocabulary for constructing criteria, and the
//! [`Criteria`] container pairing a filter with ordering and paging.
//!
//! Criteria carry no knowledge of any query language or storage engine.
//! Translation lives in consumer crates: `mapkit-query` rewrites criteria
//! into a query-expression tree with extracted parameters, and `mapkit-db`
//! compiles them into `sea_orm` conditions.

pub mod builder;
pub mod criteria;
pub mod expr;
pub mod limits;
pub mod value;

pub use criteria::{Criteria, OrderKey, SortDir};
pub use expr::{ComparisonOp, CompositeOp, Criterion};
pub use limits::{CriteriaError, CriteriaLimits};
pub use value::Value;
