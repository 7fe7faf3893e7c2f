use crate::{async_trait, schema::db::Table, Result};

use std::fmt::Debug;

/// A handle to a database that can hand out catalog connections.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a connection to the database.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// A live database connection able to introspect table schemas.
///
/// This is the boundary to the storage engine's metadata catalog: the
/// driver owns connection management and the catalog query, and yields the
/// canonical [`Table`] representation. Cancellation and timeout policy, if
/// any, belongs to the driver as well.
#[async_trait]
pub trait Connection: Send {
    /// Builds the table representation of `table` as it currently exists
    /// in `database`, by reading the metadata catalog.
    async fn table_schema(&mut self, database: &str, table: &str) -> Result<Table>;
}
