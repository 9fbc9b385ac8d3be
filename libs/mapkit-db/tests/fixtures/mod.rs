//! Shared entity fixtures and sqlite helpers for the integration tests.
//!
//! Three fixture families, each mirroring a distinct mapping shape:
//! - `directory`: custom column names, one-to-many, many-to-many via a
//!   junction entity, a composite-key self-referencing link
//! - `accounts`: composite-key memberships joining two owners, with a
//!   three-column privilege junction
//! - `activity`: string primary keys and a composite key made of two
//!   foreign keys into the same table

#![allow(dead_code)]

pub mod activity;
pub mod directory;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Open a private in-memory sqlite database.
///
/// A single pooled connection keeps every statement on the same in-memory
/// instance.
pub async fn connect() -> Result<DatabaseConnection> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    Ok(Database::connect(opts).await?)
}
