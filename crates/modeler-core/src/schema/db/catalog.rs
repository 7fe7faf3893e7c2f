/// One row of the metadata catalog describing an existing column.
///
/// The introspection path depends on exactly this four-value shape, in
/// this order. A catalog with a different projection needs an adapter at
/// the driver level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    /// `COLUMN_NAME`
    pub column_name: String,

    /// `COLUMN_DEFAULT`; `None` when the column declares no default.
    pub column_default: Option<String>,

    /// `IS_NULLABLE`, the engine's `"YES"` / `"NO"` indicator.
    pub is_nullable: String,

    /// `DATA_TYPE`, the engine's type tag.
    pub data_type: String,
}
