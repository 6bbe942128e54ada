//! Category Source backed by the jService trivia HTTP API.

use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use trivia_core::{CategoryDetail, CategoryId, CategorySource, CategorySummary};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        source: gloo::net::Error,
    },
    #[error("{url} answered {status} {status_text}")]
    Status {
        url: String,
        status: u16,
        status_text: String,
    },
    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct JServiceSource {
    base_url: String,
}

impl JServiceSource {
    pub const DEFAULT_ENDPOINT: &'static str = "https://jservice.io";

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn pool_url(&self, count: usize) -> String {
        format!("{}/api/categories?count={}", self.base_url, count)
    }

    pub fn category_url(&self, id: CategoryId) -> String {
        format!("{}/api/category?id={}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, FetchError> {
        log::debug!("GET {}", url);
        let response = match Request::get(&url).send().await {
            Ok(response) => response,
            Err(source) => return Err(FetchError::Network { url, source }),
        };

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                status_text: response.status_text(),
                url,
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(FetchError::Network { url, source }),
        };
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

impl Default for JServiceSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ENDPOINT)
    }
}

impl CategorySource for JServiceSource {
    type Error = FetchError;

    async fn category_pool(&self, count: usize) -> Result<Vec<CategorySummary>, Self::Error> {
        self.get_json(self.pool_url(count)).await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, Self::Error> {
        self.get_json(self.category_url(id)).await
    }
}
