//! Query-expression tree and the criteria-to-query translation.
//!
//! `mapkit-criteria` trees are portable and storage-agnostic; this crate
//! rewrites them into the textual query-expression form a query language
//! consumes: qualified field paths, named placeholders, and an extracted
//! parameter list. The heart of the crate is [`QueryExpressionVisitor`].
//!
//! ```
//! use mapkit_criteria::builder;
//! use mapkit_query::QueryExpressionVisitor;
//!
//! let mut visitor = QueryExpressionVisitor::new(["o"]);
//! let expr = visitor.walk(&builder::eq("name", "smith")).unwrap();
//!
//! assert_eq!(expr.to_string(), "o.name = :name");
//! assert_eq!(visitor.parameters().len(), 1);
//! ```

pub mod expr;
pub mod param;
pub mod visitor;

pub use expr::{CmpOp, Operand, QueryExpr};
pub use param::Parameter;
pub use visitor::{QueryExpressionVisitor, TranslateError};
