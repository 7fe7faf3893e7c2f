use super::Error;

/// Error when the catalog row source itself fails while (or after) the
/// rows are being read.
///
/// Distinguishes "the read failed" from "no more rows": a clean end of the
/// sequence is never an error, a mid-iteration failure always is.
#[derive(Debug)]
pub(super) struct RowSequenceError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for RowSequenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for RowSequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "catalog row source failed: {}", self.inner)
    }
}

impl Error {
    /// Creates an error from a catalog row source failure.
    pub fn row_sequence(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::RowSequence(RowSequenceError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a row source failure.
    pub fn is_row_sequence(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RowSequence(_))
    }
}
