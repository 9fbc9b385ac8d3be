//! Applying a full `Criteria` to a `SeaORM` select.

use mapkit_criteria::{Criteria, SortDir};
use sea_orm::sea_query::Order;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select};

use crate::compile::criterion_to_condition;
use crate::error::{CompileError, CompileResult};
use crate::field::FieldMap;

/// Extension trait applying a [`Criteria`] (filter, ordering, paging) to
/// a `Select<E>`.
pub trait ApplyCriteria<E: EntityTrait>: Sized {
    /// Apply the criteria to the query.
    ///
    /// # Errors
    /// Returns `CompileError` if the filter fails to compile or an order
    /// key names an undeclared field.
    fn apply_criteria(self, criteria: &Criteria, fmap: &FieldMap<E>) -> CompileResult<Self>;
}

impl<E> ApplyCriteria<E> for Select<E>
where
    E: EntityTrait,
    E::Column: ColumnTrait + Copy,
{
    fn apply_criteria(self, criteria: &Criteria, fmap: &FieldMap<E>) -> CompileResult<Self> {
        tracing::debug!(
            filtered = criteria.filter().is_some(),
            order_keys = criteria.order().len(),
            "applying criteria to select"
        );

        let mut query = self;

        if let Some(filter) = criteria.filter() {
            let cond = criterion_to_condition::<E>(filter, fmap)?;
            query = query.filter(cond);
        }

        for key in criteria.order() {
            let field = fmap
                .get(&key.field)
                .ok_or_else(|| CompileError::UnknownField(key.field.clone()))?;

            let order = match key.dir {
                SortDir::Asc => Order::Asc,
                SortDir::Desc => Order::Desc,
            };

            query = query.order_by(field.col, order);
        }

        if let Some(offset) = criteria.offset() {
            query = query.offset(offset);
        }
        if let Some(limit) = criteria.limit() {
            query = query.limit(limit);
        }

        Ok(query)
    }
}
