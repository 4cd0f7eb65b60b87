use std::{fmt, str::FromStr};

use crate::{catalog::Catalog, error::Error, title::Title};

/// The fixed categories of the home screen.  The ordinal is both the display order and
/// the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    TrendingMovies = 0,
    TrendingTv = 1,
    Popular = 2,
    Upcoming = 3,
    TopRated = 4,
}

impl Section {
    pub const COUNT: usize = 5;

    pub const ALL: [Section; Self::COUNT] = [
        Section::TrendingMovies,
        Section::TrendingTv,
        Section::Popular,
        Section::Upcoming,
        Section::TopRated,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::TrendingMovies => "Trending Movies",
            Section::TrendingTv => "Trending TV",
            Section::Popular => "Popular",
            Section::Upcoming => "Upcoming Movies",
            Section::TopRated => "Top rated",
        }
    }

    pub fn header(self) -> String {
        self.label().to_lowercase()
    }

    /// Short machine-friendly name, used on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            Section::TrendingMovies => "trending-movies",
            Section::TrendingTv => "trending-tv",
            Section::Popular => "popular",
            Section::Upcoming => "upcoming",
            Section::TopRated => "top-rated",
        }
    }

    pub fn fetch(self, catalog: &dyn Catalog) -> Result<Vec<Title>, Error> {
        match self {
            Section::TrendingMovies => catalog.trending_movies(),
            Section::TrendingTv => catalog.trending_tv(),
            Section::Popular => catalog.popular(),
            Section::Upcoming => catalog.upcoming_movies(),
            Section::TopRated => catalog.top_rated(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}
