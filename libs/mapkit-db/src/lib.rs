//! `sea_orm` binding for MapKit criteria (criteria in, conditions out).
//!
//! Criteria construction and validation belong to `mapkit-criteria`; this
//! crate only consumes finished [`Criterion`](mapkit_criteria::Criterion)
//! trees. Entities declare which api-visible fields are filterable through a
//! [`FieldMap`], and [`criterion_to_condition`] compiles a criteria tree
//! against that map into a `sea_orm::Condition`. [`ApplyCriteria`] applies a
//! complete [`Criteria`](mapkit_criteria::Criteria) (filter, ordering and
//! paging) to a `Select`.
//!
//! The persistence engine itself (connections, transactions, SQL
//! generation, schema management) is sea-orm's business; nothing here
//! reaches past the `Condition`/`Select` surface.

pub mod coerce;
pub mod compile;
pub mod error;
pub mod field;
pub mod select;

pub use coerce::coerce;
pub use compile::criterion_to_condition;
pub use error::{CompileError, CompileResult};
pub use field::{Field, FieldKind, FieldMap};
pub use select::ApplyCriteria;
