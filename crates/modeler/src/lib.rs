pub use modeler_core::{
    async_trait,
    driver::{self, Connection, Driver},
    schema::{
        app::{Directive, FieldDescriptor, FieldType, Model, ModelDescriptor},
        db::{CatalogRow, Column, ColumnsDiff, ColumnsDiffItem, Table},
    },
    Error, Result,
};

#[cfg(feature = "mysql")]
pub use modeler_driver_mysql as mysql;

/// Reflects `M` into a table representation, introspects the live table of
/// the same name, and reports whether the two are equivalent.
///
/// `false` is the signal that a migration is required; producing the
/// migration statements is the statement builder's job, not this crate's.
pub async fn in_sync<M: Model>(conn: &mut dyn Connection, database: &str) -> Result<bool> {
    let expected = Table::from_model::<M>()?;
    let actual = conn.table_schema(database, &expected.name).await?;
    Ok(expected.equivalent(&actual))
}
