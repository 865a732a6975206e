use super::fetch_json;
use crate::domain::content::{
    ContentDetails, ContentItem, ContentSource, SearchQuery, SourceError, SourceQuery,
};
use crate::infrastructure::config::is_api_key_configured;
use async_trait::async_trait;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Deserialize;

const NAME: &str = "tmdb";
const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const MOVIE_PAGE_URL: &str = "https://www.themoviedb.org/movie";

/// Body of both /movie/popular and /search/movie
#[derive(Debug, Deserialize)]
struct MoviesResponse {
    #[serde(default)]
    results: Vec<Movie>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genre_ids: Vec<i64>,
}

/// TMDB popular movies and movie search
pub struct TmdbSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbSource {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.trim().to_string(),
        }
    }
}

fn release_instant(movie: &Movie) -> Option<DateTime<Utc>> {
    movie
        .release_date
        .as_deref()
        .or(movie.first_air_date.as_deref())
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}

pub fn transform_movie(movie: Movie, now: DateTime<Utc>) -> ContentItem {
    let published_at = release_instant(&movie).unwrap_or(now);
    let genre = Some(
        movie
            .genre_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    )
    .filter(|g| !g.is_empty());

    let title = movie
        .title
        .or(movie.name)
        .unwrap_or_else(|| "No title".to_string());

    let mut item = ContentItem::new(
        format!("rec-{}", movie.id),
        title,
        "entertainment",
        published_at,
        ContentDetails::Recommendation {
            rating: movie.vote_average,
            genre,
            year: Some(published_at.year()),
        },
    )
    .with_description(movie.overview.unwrap_or_default())
    .with_source("TMDB")
    .with_url(format!("{}/{}", MOVIE_PAGE_URL, movie.id));
    item.image_url = movie
        .poster_path
        .map(|path| format!("{}{}", IMAGE_BASE_URL, path));
    item
}

#[async_trait]
impl ContentSource for TmdbSource {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_configured(&self) -> bool {
        is_api_key_configured(&self.api_key)
    }

    async fn fetch(&self, query: &SourceQuery) -> Result<Vec<ContentItem>, SourceError> {
        if !self.is_configured() {
            return Err(SourceError::NotConfigured(NAME));
        }

        let request = self
            .client
            .get(format!("{}/movie/popular", self.base_url))
            .bearer_auth(&self.api_key)
            .query(&[("page", query.page)]);

        let response: MoviesResponse = fetch_json(NAME, request).await?;

        tracing::debug!(count = response.results.len(), "Fetched TMDB popular movies");

        Ok(response
            .results
            .into_iter()
            .map(|movie| transform_movie(movie, query.now))
            .collect())
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ContentItem>, SourceError> {
        if !self.is_configured() {
            return Err(SourceError::NotConfigured(NAME));
        }

        let request = self
            .client
            .get(format!("{}/search/movie", self.base_url))
            .bearer_auth(&self.api_key)
            .query(&[("query", query.text.clone()), ("page", query.page.to_string())]);

        let response: MoviesResponse = fetch_json(NAME, request).await?;

        tracing::debug!(count = response.results.len(), "Searched TMDB movies");

        Ok(response
            .results
            .into_iter()
            .map(|movie| transform_movie(movie, query.now))
            .collect())
    }
}
