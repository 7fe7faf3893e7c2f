mod driver;
mod invalid_connection_url;
mod malformed_directive;
mod row_sequence;
mod scan;
mod unsupported_type;

use driver::DriverError;
use invalid_connection_url::InvalidConnectionUrl;
use malformed_directive::MalformedDirectiveError;
use row_sequence::RowSequenceError;
use scan::ScanError;
use std::sync::Arc;
use unsupported_type::UnsupportedTypeError;

/// An error that can occur in Modeler.
#[derive(Clone)]
pub struct Error {
    kind: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Driver(DriverError),
    InvalidConnectionUrl(InvalidConnectionUrl),
    MalformedDirective(MalformedDirectiveError),
    RowSequence(RowSequenceError),
    Scan(ScanError),
    UnsupportedType(UnsupportedTypeError),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        self.kind.as_ref()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            ErrorKind::Driver(err) => Some(err),
            ErrorKind::RowSequence(err) => Some(err),
            ErrorKind::Scan(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self.kind(), f)
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Driver(err) => core::fmt::Display::fmt(err, f),
            InvalidConnectionUrl(err) => core::fmt::Display::fmt(err, f),
            MalformedDirective(err) => core::fmt::Display::fmt(err, f),
            RowSequence(err) => core::fmt::Display::fmt(err, f),
            Scan(err) => core::fmt::Display::fmt(err, f),
            UnsupportedType(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind: Arc::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}
