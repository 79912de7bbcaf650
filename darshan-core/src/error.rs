use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    CatalogUnavailable,
    UnexpectedResponse,
    XrUnsupported,
    JsonError(Box<dyn error::Error + Send>),
    TransportError(Box<dyn error::Error + Send>),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogUnavailable => write!(f, "Catalog reported failure"),
            Self::UnexpectedResponse => write!(f, "Unknown server response"),
            Self::XrUnsupported => write!(f, "Immersive sessions are not supported on this device"),
            Self::JsonError(err) | Self::TransportError(err) => err.fmt(f),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        Error::TransportError(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(Box::new(err))
    }
}
