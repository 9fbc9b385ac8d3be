//! The `Criteria` container: a filter plus ordering and paging.

use crate::expr::Criterion;
use crate::limits::{CriteriaError, CriteriaLimits};

/// Sort direction for an order key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SortDir {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl SortDir {
    /// Reverse the sort direction (Asc <-> Desc).
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }
}

/// A single ordering key.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderKey {
    pub field: String,
    pub dir: SortDir,
}

/// A complete, portable selection request: optional filter, ordering keys
/// in priority order, and offset/limit paging.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[must_use]
pub struct Criteria {
    filter: Option<Criterion>,
    order: Vec<OrderKey>,
    offset: Option<u64>,
    limit: Option<u64>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: Criterion) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Append an order key. Call repeatedly for multi-key ordering.
    pub fn order_by(mut self, field: impl Into<String>, dir: SortDir) -> Self {
        self.order.push(OrderKey {
            field: field.into(),
            dir,
        });
        self
    }

    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn filter(&self) -> Option<&Criterion> {
        self.filter.as_ref()
    }

    #[must_use]
    pub fn order(&self) -> &[OrderKey] {
        &self.order
    }

    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    #[must_use]
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Validate the filter tree and order keys against the given limits.
    ///
    /// # Errors
    /// Returns the first violated cap as a [`CriteriaError`].
    pub fn validate(&self, limits: &CriteriaLimits) -> Result<(), CriteriaError> {
        if let Some(filter) = &self.filter {
            limits.validate(filter)?;
        }
        limits.validate_order(&self.order)
    }
}
