//! Catalog schema initialization.

use crate::error::{DatabaseResultExt, Result};

impl super::Catalog {
    /// Creates the tables and indexes from the embedded SQL file. Safe to run
    /// against an existing catalog.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize catalog schema")
    }
}
