use modeler_core::{
    async_trait,
    driver::Driver,
    schema::db::{CatalogRow, Table},
    Error, Result,
};
use mysql_async::{prelude::Queryable, Conn, Pool};
use url::Url;

/// The fixed four-value catalog projection the introspection path is
/// built around. `ORDER BY ORDINAL_POSITION` keeps discovery order stable.
const CATALOG_QUERY: &str = "\
    SELECT COLUMN_NAME, COLUMN_DEFAULT, IS_NULLABLE, DATA_TYPE \
    FROM information_schema.columns \
    WHERE TABLE_SCHEMA = ? AND TABLE_NAME = ? \
    ORDER BY ORDINAL_POSITION";

#[derive(Debug)]
pub struct MySql {
    pool: Pool,
}

impl MySql {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "expected a `mysql` scheme; url={url}"
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::invalid_connection_url(format!(
                "missing host; url={url}"
            )));
        }

        let opts = mysql_async::Opts::from_url(url.as_ref())
            .map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        Ok(Self {
            pool: Pool::new(opts),
        })
    }
}

impl From<Pool> for MySql {
    fn from(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Driver for MySql {
    async fn connect(&self) -> Result<Box<dyn modeler_core::driver::Connection>> {
        let conn = self.pool.get_conn().await.map_err(Error::driver)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl modeler_core::driver::Connection for Connection {
    async fn table_schema(&mut self, database: &str, table: &str) -> Result<Table> {
        tracing::debug!(database, table, "introspecting table schema");

        let mut result = self
            .conn
            .exec_iter(CATALOG_QUERY, (database, table))
            .await
            .map_err(Error::driver)?;

        // Drain the result set in full before the connection is reused;
        // a failure while reading rows is a row source failure, not a
        // driver failure.
        let rows: Vec<mysql_async::Row> =
            result.collect().await.map_err(Error::row_sequence)?;

        Table::from_catalog_rows(table, rows.into_iter().map(decode_catalog_row))
    }
}

fn decode_catalog_row(row: mysql_async::Row) -> Result<CatalogRow> {
    let (column_name, column_default, is_nullable, data_type) =
        mysql_async::from_row_opt::<(String, Option<String>, String, String)>(row)
            .map_err(Error::scan)?;

    Ok(CatalogRow {
        column_name,
        column_default,
        is_nullable,
        data_type,
    })
}
