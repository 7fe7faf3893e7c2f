mod catalog;
pub use catalog::CatalogRow;

mod column;
pub use column::{Column, ColumnsDiff, ColumnsDiffItem};

mod table;
pub use table::Table;
