use super::Error;

/// Error when a field directive string does not match the
/// `token ("," token)*` grammar.
#[derive(Debug)]
pub(super) struct MalformedDirectiveError {
    pub(super) directive: Box<str>,
    pub(super) detail: Box<str>,
}

impl std::error::Error for MalformedDirectiveError {}

impl core::fmt::Display for MalformedDirectiveError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "malformed directive `{}`: {}",
            self.directive, self.detail
        )
    }
}

impl Error {
    /// Creates a malformed directive error.
    pub fn malformed_directive(
        directive: impl Into<String>,
        detail: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MalformedDirective(
            MalformedDirectiveError {
                directive: directive.into().into(),
                detail: detail.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a malformed directive error.
    pub fn is_malformed_directive(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MalformedDirective(_))
    }
}
