use std::{error, fmt};

use druid::Data;

#[derive(Clone, Debug, Data)]
pub enum Error {
    CatalogError(String),
    ImageError(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::CatalogError(err) => f.write_str(err),
            Self::ImageError(err) => write!(f, "Cannot decode image: {err}"),
        }
    }
}

impl From<reel_core::error::Error> for Error {
    fn from(err: reel_core::error::Error) -> Self {
        Self::CatalogError(err.to_string())
    }
}

impl From<druid::image::ImageError> for Error {
    fn from(err: druid::image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_keep_their_message() {
        let err = Error::from(reel_core::error::Error::UnexpectedStatus(401));
        assert_eq!(err.to_string(), "Unexpected server response: 401");
    }

    #[test]
    fn undecodable_bytes_are_image_errors() {
        let err = druid::image::load_from_memory(b"not an image").unwrap_err();
        assert!(matches!(Error::from(err), Error::ImageError(_)));
    }
}
