use ureq::Agent;
use url::Url;

use crate::{
    catalog::{Catalog, CatalogConfig},
    error::Error,
    title::{Title, TitlesPage},
    util::{default_ureq_agent_builder, join_path},
};

const TRENDING_MOVIES_PATH: &str = "3/trending/movie/day";
const TRENDING_TV_PATH: &str = "3/trending/tv/day";
const POPULAR_PATH: &str = "3/movie/popular";
const UPCOMING_PATH: &str = "3/movie/upcoming";
const TOP_RATED_PATH: &str = "3/movie/top_rated";

/// `Catalog` backed by the TMDB v3 REST API.
pub struct TmdbClient {
    agent: Agent,
    config: CatalogConfig,
}

impl TmdbClient {
    pub fn new(config: CatalogConfig) -> Self {
        let agent = default_ureq_agent_builder(config.proxy_url.as_deref())
            .build()
            .into();
        Self { agent, config }
    }

    /// Full URL of a list endpoint, including the credentials.  Do not log the result.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        if !self.config.has_api_key() {
            return Err(Error::MissingApiKey);
        }
        let mut url = Url::parse(&join_path(&self.config.api_base, path))?;
        url.query_pairs_mut()
            .append_pair("api_key", self.config.api_key.trim())
            .append_pair("language", &self.config.language)
            .append_pair("page", "1");
        Ok(url)
    }

    pub fn poster_url(&self, poster_path: &str) -> Result<Url, Error> {
        Ok(Url::parse(&join_path(&self.config.image_base, poster_path))?)
    }

    fn load_titles(&self, path: &str) -> Result<Vec<Title>, Error> {
        let url = self.endpoint_url(path)?;
        log::debug!("loading titles: {path}");
        let mut response = self.agent.get(url.as_str()).call()?;
        let page: TitlesPage = response.body_mut().read_json()?;
        log::debug!("loaded {} titles: {path}", page.results.len());
        Ok(page.results)
    }
}

impl Catalog for TmdbClient {
    fn trending_movies(&self) -> Result<Vec<Title>, Error> {
        self.load_titles(TRENDING_MOVIES_PATH)
    }

    fn trending_tv(&self) -> Result<Vec<Title>, Error> {
        self.load_titles(TRENDING_TV_PATH)
    }

    fn popular(&self) -> Result<Vec<Title>, Error> {
        self.load_titles(POPULAR_PATH)
    }

    fn upcoming_movies(&self) -> Result<Vec<Title>, Error> {
        self.load_titles(UPCOMING_PATH)
    }

    fn top_rated(&self) -> Result<Vec<Title>, Error> {
        self.load_titles(TOP_RATED_PATH)
    }

    fn poster(&self, poster_path: &str) -> Result<Vec<u8>, Error> {
        let url = self.poster_url(poster_path)?;
        let mut response = self.agent.get(url.as_str()).call()?;
        Ok(response.body_mut().read_to_vec()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_key: &str) -> TmdbClient {
        TmdbClient::new(CatalogConfig::with_api_key(api_key))
    }

    #[test]
    fn endpoint_url_carries_path_and_query() {
        let url = client("secret").endpoint_url(UPCOMING_PATH).unwrap();
        assert_eq!(url.host_str(), Some("api.themoviedb.org"));
        assert_eq!(url.path(), "/3/movie/upcoming");

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            query,
            vec![
                ("api_key".to_string(), "secret".to_string()),
                ("language".to_string(), "en-US".to_string()),
                ("page".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn trending_paths_are_daily() {
        let client = client("k");
        assert_eq!(
            client.endpoint_url(TRENDING_MOVIES_PATH).unwrap().path(),
            "/3/trending/movie/day"
        );
        assert_eq!(
            client.endpoint_url(TRENDING_TV_PATH).unwrap().path(),
            "/3/trending/tv/day"
        );
    }

    #[test]
    fn missing_api_key_fails_without_network() {
        let client = client("  ");
        assert!(matches!(client.trending_movies(), Err(Error::MissingApiKey)));
        assert!(matches!(client.top_rated(), Err(Error::MissingApiKey)));
    }

    #[test]
    fn poster_url_joins_relative_path() {
        let url = client("k").poster_url("/abc.jpg").unwrap();
        assert_eq!(url.as_str(), "https://image.tmdb.org/t/p/w500/abc.jpg");
    }

    #[test]
    fn invalid_base_is_reported() {
        let client = TmdbClient::new(CatalogConfig {
            api_base: "not a url".into(),
            ..CatalogConfig::with_api_key("k")
        });
        assert!(matches!(
            client.endpoint_url(POPULAR_PATH),
            Err(Error::InvalidUrl(_))
        ));
    }
}
