use serde::{Deserialize, Serialize};

use crate::util::deserialize_null_default;

/// A movie or TV show as listed by the catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Title {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub id: u64,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    /// Relative reference into the image CDN, e.g. `/abc.jpg`.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub vote_count: u64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub vote_average: f64,
}

impl Title {
    /// Movies carry `original_title`, TV shows `original_name`.
    pub fn display_name(&self) -> &str {
        self.original_title
            .as_deref()
            .or(self.original_name.as_deref())
            .unwrap_or("")
    }

    pub fn poster_path(&self) -> Option<&str> {
        self.poster_path.as_deref().filter(|path| !path.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TitlesPage {
    #[serde(default)]
    pub results: Vec<Title>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_trending_page_with_missing_fields() {
        let body = r#"{
            "page": 1,
            "results": [
                {
                    "id": 550,
                    "media_type": "movie",
                    "original_title": "Fight Club",
                    "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
                    "overview": "A ticking-time-bomb insomniac...",
                    "vote_count": 26280,
                    "release_date": "1999-10-15",
                    "vote_average": 8.4
                },
                {
                    "id": 1399,
                    "media_type": "tv",
                    "original_name": "Game of Thrones",
                    "poster_path": null
                }
            ],
            "total_pages": 1000
        }"#;
        let page: TitlesPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].display_name(), "Fight Club");
        assert_eq!(
            page.results[0].poster_path(),
            Some("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg")
        );
        assert_eq!(page.results[1].display_name(), "Game of Thrones");
        assert_eq!(page.results[1].poster_path(), None);
        assert_eq!(page.results[1].vote_count, 0);
    }

    #[test]
    fn null_numbers_do_not_reject_the_page() {
        let body = r#"{"results": [
            {"id": 1, "original_title": "A", "vote_count": null, "vote_average": null},
            {"id": null, "original_title": "B"},
            {"original_title": "C", "vote_average": 6.5}
        ]}"#;
        let page: TitlesPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.results.len(), 3);
        assert_eq!(page.results[0].id, 1);
        assert_eq!(page.results[0].vote_count, 0);
        assert_eq!(page.results[0].vote_average, 0.0);
        assert_eq!(page.results[1].id, 0);
        assert_eq!(page.results[2].id, 0);
        assert_eq!(page.results[2].vote_average, 6.5);
    }

    #[test]
    fn display_name_prefers_original_title() {
        let title = Title {
            original_title: Some("Le Samouraï".into()),
            original_name: Some("The Samurai".into()),
            ..Title::default()
        };
        assert_eq!(title.display_name(), "Le Samouraï");
        assert_eq!(Title::default().display_name(), "");
    }

    #[test]
    fn empty_poster_path_counts_as_missing() {
        let title = Title {
            poster_path: Some(String::new()),
            ..Title::default()
        };
        assert_eq!(title.poster_path(), None);
    }

    #[test]
    fn empty_page_has_no_results() {
        let page: TitlesPage = serde_json::from_str("{}").unwrap();
        assert!(page.results.is_empty());
    }
}
