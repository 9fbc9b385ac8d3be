//! Input validation and safety limits for criteria trees.
//!
//! Criteria often arrive from untrusted callers (API filters, saved
//! searches). These caps bound the work any translator has to do:
//! - maximum tree depth
//! - maximum total node count
//! - maximum membership-list length
//! - maximum number of order keys

use thiserror::Error;

use crate::criteria::OrderKey;
use crate::expr::{ComparisonOp, Criterion};
use crate::value::Value;

/// Violated criteria caps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("criteria tree exceeds maximum depth of {max}")]
    DepthExceeded { max: usize },

    #[error("criteria tree exceeds maximum node count of {max}")]
    NodesExceeded { max: usize },

    #[error("membership list for field {field} exceeds maximum length of {max}")]
    InListTooLong { field: String, max: usize },

    #[error("too many order fields (max: {max})")]
    TooManyOrderFields { max: usize },
}

/// Default caps for criteria accepted from callers.
#[derive(Debug, Clone)]
pub struct CriteriaLimits {
    /// Maximum nesting depth of the filter tree (default: 32).
    pub max_depth: usize,
    /// Maximum total nodes in the filter tree (default: 256).
    pub max_nodes: usize,
    /// Maximum number of values in an `In`/`NotIn` list (default: 100).
    pub max_in_list: usize,
    /// Maximum number of order keys (default: 5).
    pub max_order_fields: usize,
}

impl Default for CriteriaLimits {
    fn default() -> Self {
        Self {
            max_depth: 32,
            max_nodes: 256,
            max_in_list: 100,
            max_order_fields: 5,
        }
    }
}

impl CriteriaLimits {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = max;
        self
    }

    #[must_use]
    pub fn with_max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = max;
        self
    }

    #[must_use]
    pub fn with_max_in_list(mut self, max: usize) -> Self {
        self.max_in_list = max;
        self
    }

    #[must_use]
    pub fn with_max_order_fields(mut self, max: usize) -> Self {
        self.max_order_fields = max;
        self
    }

    /// Validate a criterion tree against the configured caps.
    ///
    /// # Errors
    /// Returns the first violated cap.
    pub fn validate(&self, criterion: &Criterion) -> Result<(), CriteriaError> {
        if criterion.depth() > self.max_depth {
            return Err(CriteriaError::DepthExceeded {
                max: self.max_depth,
            });
        }
        if criterion.node_count() > self.max_nodes {
            return Err(CriteriaError::NodesExceeded {
                max: self.max_nodes,
            });
        }
        self.validate_in_lists(criterion)
    }

    /// Validate the number of order keys.
    ///
    /// # Errors
    /// Returns `CriteriaError::TooManyOrderFields` when over the cap.
    pub fn validate_order(&self, order: &[OrderKey]) -> Result<(), CriteriaError> {
        if order.len() > self.max_order_fields {
            return Err(CriteriaError::TooManyOrderFields {
                max: self.max_order_fields,
            });
        }
        Ok(())
    }

    fn validate_in_lists(&self, criterion: &Criterion) -> Result<(), CriteriaError> {
        match criterion {
            Criterion::Comparison { field, op, value } => {
                if matches!(op, ComparisonOp::In | ComparisonOp::NotIn) {
                    if let Value::List(items) = value {
                        if items.len() > self.max_in_list {
                            return Err(CriteriaError::InListTooLong {
                                field: field.clone(),
                                max: self.max_in_list,
                            });
                        }
                    }
                }
                Ok(())
            }
            Criterion::Composite { parts, .. } => {
                for part in parts {
                    self.validate_in_lists(part)?;
                }
                Ok(())
            }
            Criterion::Not(inner) => self.validate_in_lists(inner),
        }
    }
}
