use std::sync::Arc;

use crate::{error::Error, title::Title};

pub type CatalogHandle = Arc<dyn Catalog>;

/// Blocking access to the remote catalog.  Callers are expected to run these off the UI
/// thread.
pub trait Catalog: Send + Sync {
    fn trending_movies(&self) -> Result<Vec<Title>, Error>;

    fn trending_tv(&self) -> Result<Vec<Title>, Error>;

    fn popular(&self) -> Result<Vec<Title>, Error>;

    fn upcoming_movies(&self) -> Result<Vec<Title>, Error>;

    fn top_rated(&self) -> Result<Vec<Title>, Error>;

    /// Raw bytes of the image at the relative `poster_path`.
    fn poster(&self, poster_path: &str) -> Result<Vec<u8>, Error>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub api_key: String,
    pub api_base: String,
    pub image_base: String,
    pub language: String,
    pub proxy_url: Option<String>,
}

impl CatalogConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://api.themoviedb.org";
    pub const DEFAULT_IMAGE_BASE: &'static str = "https://image.tmdb.org/t/p/w500";
    pub const DEFAULT_LANGUAGE: &'static str = "en-US";

    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: Self::DEFAULT_API_BASE.to_string(),
            image_base: Self::DEFAULT_IMAGE_BASE.to_string(),
            language: Self::DEFAULT_LANGUAGE.to_string(),
            proxy_url: None,
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use parking_lot::Mutex;

    use super::*;

    /// Records which catalog operation was called, in order.
    #[derive(Default)]
    pub struct RecordingCatalog {
        pub calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingCatalog {
        fn record(&self, op: &'static str) -> Result<Vec<Title>, Error> {
            self.calls.lock().push(op);
            Ok(vec![Title {
                original_title: Some(op.to_string()),
                ..Title::default()
            }])
        }

        pub fn take_calls(&self) -> Vec<&'static str> {
            std::mem::take(&mut *self.calls.lock())
        }
    }

    impl Catalog for RecordingCatalog {
        fn trending_movies(&self) -> Result<Vec<Title>, Error> {
            self.record("trending_movies")
        }

        fn trending_tv(&self) -> Result<Vec<Title>, Error> {
            self.record("trending_tv")
        }

        fn popular(&self) -> Result<Vec<Title>, Error> {
            self.record("popular")
        }

        fn upcoming_movies(&self) -> Result<Vec<Title>, Error> {
            self.record("upcoming_movies")
        }

        fn top_rated(&self) -> Result<Vec<Title>, Error> {
            self.record("top_rated")
        }

        fn poster(&self, _poster_path: &str) -> Result<Vec<u8>, Error> {
            self.calls.lock().push("poster");
            Ok(Vec::new())
        }
    }
}
