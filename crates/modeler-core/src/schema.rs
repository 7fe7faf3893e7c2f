pub mod app;
pub mod db;

pub use app::{FieldDescriptor, FieldType, Model, ModelDescriptor};
pub use db::{CatalogRow, Column, Table};
