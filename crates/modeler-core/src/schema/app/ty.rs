/// A model field's native value type.
///
/// This is the application-level type of a field as declared in its
/// descriptor table. Only a subset of kinds has a storage mapping; the
/// rest surface as unsupported-type errors when a directive asks for them
/// to be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A boolean value
    Bool,
    /// A 64-bit signed integer
    I64,
    /// A 64-bit floating point number
    F64,
    /// A UTF-8 string
    String,
    /// An opaque byte blob
    Bytes,
    /// An instant in time
    Timestamp,
}

impl FieldType {
    /// The storage column type this field maps to, or `None` when the
    /// type has no mapping.
    pub fn storage_type(&self) -> Option<&'static str> {
        match self {
            FieldType::Bool => Some("TINYINT"),
            FieldType::I64 => Some("INT"),
            FieldType::String => Some("TEXT"),
            FieldType::Timestamp => Some("TIMESTAMP"),
            FieldType::F64 | FieldType::Bytes => None,
        }
    }

    /// The implicit column default for this field type.
    ///
    /// `None` means the column carries no default. `CURRENT_TIMESTAMP` is a
    /// keyword evaluated by the database server, not a literal.
    pub fn storage_default(&self) -> Option<&'static str> {
        match self {
            FieldType::Bool | FieldType::I64 => Some("0"),
            FieldType::Timestamp => Some("CURRENT_TIMESTAMP"),
            _ => None,
        }
    }
}
