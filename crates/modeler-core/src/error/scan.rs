use super::Error;

/// Error when a catalog row cannot be decoded into the expected
/// four-value shape (name, default, nullability, data type).
///
/// Fatal to the extraction call that hit it: no partial table is returned.
#[derive(Debug)]
pub(super) struct ScanError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ScanError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to decode catalog row: {}", self.inner)
    }
}

impl Error {
    /// Creates an error from a catalog row decode failure.
    pub fn scan(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Scan(ScanError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a catalog row decode error.
    pub fn is_scan(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Scan(_))
    }
}
