use super::Error;
use crate::schema::app::FieldType;

/// Error when a model field's native type has no known mapping to a
/// storage column type and default.
///
/// This is a per-field condition: it names the offending field so the
/// caller can decide whether to abort the extraction or drop the field.
#[derive(Debug)]
pub(super) struct UnsupportedTypeError {
    pub(super) field: Box<str>,
    pub(super) ty: FieldType,
}

impl std::error::Error for UnsupportedTypeError {}

impl core::fmt::Display for UnsupportedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported type: cannot map field `{}` of type {:?} to a storage column",
            self.field, self.ty
        )
    }
}

impl Error {
    /// Creates an unsupported type error for a model field.
    pub fn unsupported_type(field: impl Into<String>, ty: FieldType) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedTypeError {
            field: field.into().into(),
            ty,
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
