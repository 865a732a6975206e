pub mod news_api;
pub mod social;
pub mod tmdb;

pub use news_api::NewsApiSource;
pub use social::SocialSource;
pub use tmdb::TmdbSource;

use crate::domain::content::SourceError;
use std::time::Duration;

/// Shared HTTP client for every content source
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("content-dashboard-backend/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Send a prepared request and decode its JSON body
async fn fetch_json<T: serde::de::DeserializeOwned>(
    upstream: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<T, SourceError> {
    let response = request.send().await.map_err(|e| SourceError::Http {
        upstream,
        message: e.to_string(),
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(upstream, status = status.as_u16(), "Content source returned an error status");
        return Err(SourceError::Status {
            upstream,
            status: status.as_u16(),
        });
    }

    response.json::<T>().await.map_err(|e| SourceError::Decode {
        upstream,
        message: e.to_string(),
    })
}
