use super::{Directive, FieldType};
use crate::{
    schema::db::{Column, Table},
    Error, Result,
};

/// Static description of one model field: its name, native type, and
/// storage directive.
///
/// Descriptor tables replace runtime reflection: each model declares, once,
/// the fields that may participate in its storage schema. A field whose
/// `directive` is empty is not part of the schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// The field name as declared on the model type.
    pub name: &'static str,

    /// The field's native value type.
    pub ty: FieldType,

    /// The storage directive, `""` when the field carries none.
    pub directive: &'static str,
}

/// Static description of a model type: its table name and field
/// descriptors in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct ModelDescriptor {
    /// The table name the model maps to.
    pub name: &'static str,

    /// Field descriptors, in declaration order.
    pub fields: &'static [FieldDescriptor],
}

/// A model type that maps to a database table.
///
/// Implemented by hand (or by a future derive macro) as a descriptor
/// table:
///
/// ```
/// use modeler_core::schema::app::{FieldDescriptor, FieldType, Model, ModelDescriptor};
///
/// struct Session {
///     id: i64,
///     ended: bool,
/// }
///
/// impl Model for Session {
///     const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
///         name: "sessions",
///         fields: &[
///             FieldDescriptor { name: "id", ty: FieldType::I64, directive: "id,primary,autoinc" },
///             FieldDescriptor { name: "ended", ty: FieldType::Bool, directive: "ended,null" },
///         ],
///     };
/// }
/// ```
pub trait Model {
    /// The model's descriptor table.
    const DESCRIPTOR: ModelDescriptor;
}

impl FieldDescriptor {
    /// Maps this field to a column definition.
    ///
    /// Returns `Ok(None)` when the field carries no directive. The column
    /// type and implicit default come from the field's native type; the
    /// directive tokens then override name, nullability, primary key and
    /// auto increment. When no token names the column, the field name is
    /// used as-is.
    pub fn to_column(&self) -> Result<Option<Column>> {
        let Some(directive) = Directive::parse(self.directive)? else {
            return Ok(None);
        };

        let Some(data_type) = self.ty.storage_type() else {
            return Err(Error::unsupported_type(self.name, self.ty));
        };

        Ok(Some(Column {
            name: directive.column_name.unwrap_or(self.name).to_string(),
            data_type: data_type.to_string(),
            default: self.ty.storage_default().map(str::to_string),
            nullable: directive.nullable,
            primary_key: directive.primary_key,
            auto_increment: directive.auto_increment,
        }))
    }
}

impl ModelDescriptor {
    /// Builds the table representation this model declares.
    ///
    /// Fields without a directive are skipped; the remaining columns keep
    /// declaration order. The first unsupported field type aborts the
    /// extraction.
    pub fn to_table(&self) -> Result<Table> {
        let mut columns = Vec::with_capacity(self.fields.len());

        for field in self.fields {
            if let Some(column) = field.to_column()? {
                columns.push(column);
            }
        }

        Ok(Table {
            name: self.name.to_string(),
            columns,
        })
    }
}
