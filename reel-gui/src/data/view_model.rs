use std::sync::Arc;

use druid::{Data, Lens};
use reel_core::title::Title;
use url::Url;

const TRAILER_SEARCH_URL: &str = "https://www.youtube.com/results";

/// What the hero banner shows.
#[derive(Clone, Debug, Data, Lens, PartialEq, Eq, Hash)]
pub struct TitleViewModel {
    pub title_name: Arc<str>,
    pub poster_path: Option<Arc<str>>,
}

impl From<&Title> for TitleViewModel {
    fn from(title: &Title) -> Self {
        Self {
            title_name: title.display_name().into(),
            poster_path: title.poster_path().map(Arc::from),
        }
    }
}

/// Everything the preview screen needs to know about a title.
#[derive(Clone, Debug, Data, Lens, PartialEq, Eq, Hash)]
pub struct TitlePreviewViewModel {
    pub title: Arc<str>,
    pub overview: Arc<str>,
    pub poster_path: Option<Arc<str>>,
    pub release_date: Option<Arc<str>>,
}

impl TitlePreviewViewModel {
    pub fn trailer_search_url(&self) -> Option<Url> {
        let query = format!("{} trailer", self.title);
        Url::parse_with_params(TRAILER_SEARCH_URL, &[("search_query", query)]).ok()
    }

    pub fn release_line(&self) -> String {
        match &self.release_date {
            Some(date) => format!("Released {date}"),
            None => String::new(),
        }
    }
}

impl From<&Title> for TitlePreviewViewModel {
    fn from(title: &Title) -> Self {
        Self {
            title: title.display_name().into(),
            overview: title.overview.as_deref().unwrap_or_default().into(),
            poster_path: title.poster_path().map(Arc::from),
            release_date: title
                .release_date
                .as_deref()
                .filter(|date| !date.is_empty())
                .map(Arc::from),
        }
    }
}
