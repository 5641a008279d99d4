//! Batched record insertion.
//!
//! All records of a run are written in one transaction on one pooled
//! connection, as multi-row INSERT statements. A failed write is logged and
//! dropped; it is never retried and never propagated to the caller.

use log::{error, info, warn};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::config::{validate_table_name, ConfigError, DEFAULT_DB_TABLE, MAX_ROWS_PER_STATEMENT};
use crate::error_handling::DatabaseError;

use super::models::{ProductRecord, PRODUCT_COLUMNS};
use super::pool::ConnectionPool;

/// Result of one persistence attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The batch was committed; holds the number of rows inserted.
    Saved(u64),
    /// Persistence is disabled (degraded mode); nothing was written.
    Skipped,
    /// The write failed and was rolled back; the batch is dropped.
    Failed(String),
}

/// Writes a run's records into the configured table.
#[derive(Debug, Clone)]
pub struct BatchPersister {
    pool: ConnectionPool,
    table: String,
}

impl BatchPersister {
    /// Creates a persister over `pool` targeting `table`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTableName` if `table` is not a plain SQL
    /// identifier; the name is interpolated into the statement text.
    pub fn new(pool: ConnectionPool, table: impl Into<String>) -> Result<Self, ConfigError> {
        let table = table.into();
        validate_table_name(&table)?;
        Ok(BatchPersister { pool, table })
    }

    /// Creates a persister in degraded mode; every `save` is skipped.
    pub fn disabled(reason: impl Into<String>) -> Self {
        BatchPersister {
            pool: ConnectionPool::unavailable(reason),
            table: DEFAULT_DB_TABLE.to_string(),
        }
    }

    /// Returns `true` unless the run is in degraded mode.
    pub fn is_available(&self) -> bool {
        self.pool.is_available()
    }

    /// Target table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Persists `records` in a single transaction.
    ///
    /// Never returns an error: an unavailable pool yields `Skipped`, and any
    /// database failure is logged and reported as `Failed`. The connection
    /// goes back to the pool in every case.
    pub async fn save(&self, records: &[ProductRecord]) -> SaveOutcome {
        let Some(pool) = self.pool.pg_pool() else {
            warn!("Skipping PostgreSQL save because the connection pool is not initialized.");
            return SaveOutcome::Skipped;
        };

        match insert_products(pool, &self.table, records).await {
            Ok(rows) => {
                info!(
                    "Successfully saved {} products to the PostgreSQL table {}.",
                    rows, self.table
                );
                SaveOutcome::Saved(rows)
            }
            Err(e) => {
                error!(
                    "An error occurred while saving {} products to the database: {}",
                    records.len(),
                    e
                );
                SaveOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Inserts `records` into `table` inside one transaction.
///
/// Rows are sent in statements of at most `MAX_ROWS_PER_STATEMENT` rows and
/// committed once. If any statement fails the transaction is dropped, which
/// rolls it back and returns the connection to the pool.
pub async fn insert_products(
    pool: &PgPool,
    table: &str,
    records: &[ProductRecord],
) -> Result<u64, DatabaseError> {
    if records.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await.map_err(DatabaseError::SqlError)?;

    let mut inserted = 0u64;
    for chunk in statement_chunks(records) {
        let result = build_insert(table, chunk)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(DatabaseError::SqlError)?;
        inserted += result.rows_affected();
    }

    tx.commit().await.map_err(DatabaseError::SqlError)?;
    Ok(inserted)
}

/// Splits a batch into the row groups sent as separate statements.
pub(crate) fn statement_chunks(records: &[ProductRecord]) -> std::slice::Chunks<'_, ProductRecord> {
    records.chunks(MAX_ROWS_PER_STATEMENT)
}

/// Builds one multi-row INSERT for `rows`.
///
/// `datetime` is cast to `timestamp` so the statement works whether the
/// column is declared as a timestamp or as text.
pub(crate) fn build_insert<'a>(
    table: &str,
    rows: &'a [ProductRecord],
) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) ",
        table,
        PRODUCT_COLUMNS.join(", ")
    ));

    builder.push_values(rows, |mut row, record| {
        row.push_bind(record.name.as_str())
            .push_bind(record.specs.as_str())
            .push_bind(record.new_price)
            .push_bind(record.old_price)
            .push_bind(record.link.as_str())
            .push_bind(record.brand.as_str())
            .push_bind(record.category.as_str())
            .push("CAST(")
            .push_bind_unseparated(record.datetime.as_str())
            .push_unseparated(" AS timestamp)")
            .push_bind(record.stock)
            .push_bind(record.store.as_str());
    });

    builder
}
