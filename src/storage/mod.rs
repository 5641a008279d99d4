//! PostgreSQL storage: record model, connection pool and batched inserts.

pub mod insert;
pub mod models;
pub mod pool;

// Re-export commonly used items
pub use insert::{insert_products, BatchPersister, SaveOutcome};
pub use models::{ProductRecord, PRODUCT_COLUMNS};
pub use pool::{init_pool, init_pool_lazy, ConnectionPool};
