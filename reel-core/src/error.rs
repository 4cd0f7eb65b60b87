use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    MissingApiKey,
    UnexpectedStatus(u16),
    InvalidUrl(url::ParseError),
    HttpError(Box<dyn error::Error + Send>),
    JsonError(Box<dyn error::Error + Send>),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "Catalog API key is not configured"),
            Self::UnexpectedStatus(code) => write!(f, "Unexpected server response: {code}"),
            Self::InvalidUrl(err) => write!(f, "Invalid URL: {err}"),
            Self::HttpError(err) | Self::JsonError(err) => err.fmt(f),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::InvalidUrl(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(Box::new(err))
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        match err {
            ureq::Error::StatusCode(code) => Error::UnexpectedStatus(code),
            ureq::Error::Io(err) => Error::IoError(err),
            err => Error::HttpError(Box::new(err)),
        }
    }
}
