use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

use crate::domain::errors::{DomainError, StorageStage};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Build the process-wide connection pool.
pub fn create_pool(database_url: &str) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder().build(manager)
}

/// Check a connection out of the pool.
pub fn checkout(pool: &DbPool) -> Result<DbConn, DomainError> {
    pool.get()
        .map_err(|e| DomainError::storage(StorageStage::Connection, e))
}
