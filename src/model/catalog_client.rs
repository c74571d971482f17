//! Song catalog client reached through a CORS relay

use futures::future::BoxFuture;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use urlencoding::encode;

use crate::config::Config;
use super::status::SearchFailure;
use super::types::SongRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog answered with HTTP {0}")]
    Status(u16),
    #[error("response body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response has no results array")]
    MissingResults,
    #[error("result {index} is not a song record")]
    MalformedRecord { index: usize },
}

impl CatalogError {
    /// The user-facing failure kind this error is reported as
    pub fn failure(&self) -> SearchFailure {
        match self {
            CatalogError::Transport(_) | CatalogError::Status(_) | CatalogError::Decode(_) => {
                SearchFailure::Connection
            }
            CatalogError::MissingResults | CatalogError::MalformedRecord { .. } => {
                SearchFailure::UnexpectedResponse
            }
        }
    }
}

/// Anything that can answer a song search
pub trait CatalogSource: Send + Sync {
    fn search<'a>(&'a self, term: &'a str) -> BoxFuture<'a, Result<Vec<SongRecord>, CatalogError>>;
}

/// Where search requests go
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEndpoint {
    pub relay_base_url: String,
    pub search_base_url: String,
    pub entity: String,
}

impl From<&Config> for CatalogEndpoint {
    fn from(config: &Config) -> Self {
        Self {
            relay_base_url: config.relay_base_url.clone(),
            search_base_url: config.search_base_url.clone(),
            entity: config.entity.clone(),
        }
    }
}

/// Build the outbound URL for a term.
///
/// Behind a relay the whole endpoint URL (already carrying an encoded term)
/// is encoded again and appended to the relay prefix.
pub fn search_url(endpoint: &CatalogEndpoint, term: &str) -> String {
    let target = format!(
        "{}?term={}&entity={}",
        endpoint.search_base_url,
        encode(term),
        encode(&endpoint.entity)
    );

    if endpoint.relay_base_url.trim().is_empty() {
        target
    } else {
        format!("{}{}", endpoint.relay_base_url, encode(&target))
    }
}

/// Pull the `results` array out of a response body.
///
/// Only an element that is not an object makes the response malformed.
/// Wrongly typed fields inside an object decode as empty.
pub fn decode_results(body: &[u8]) -> Result<Vec<SongRecord>, CatalogError> {
    let json: Value = serde_json::from_slice(body)?;

    let items = json
        .get("results")
        .and_then(Value::as_array)
        .ok_or(CatalogError::MissingResults)?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(CatalogError::MalformedRecord { index });
            }
            SongRecord::deserialize(item).map_err(|_| CatalogError::MalformedRecord { index })
        })
        .collect()
}

/// HTTP client for the public song search endpoint
#[derive(Clone, Debug)]
pub struct ItunesCatalog {
    client: Client,
    endpoint: CatalogEndpoint,
}

impl ItunesCatalog {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: CatalogEndpoint::from(config),
        })
    }

    async fn fetch(&self, term: &str) -> Result<Vec<SongRecord>, CatalogError> {
        let url = search_url(&self.endpoint, term);
        crate::log_api_request!("search", term, url = %url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        decode_results(&body)
    }
}

impl CatalogSource for ItunesCatalog {
    fn search<'a>(&'a self, term: &'a str) -> BoxFuture<'a, Result<Vec<SongRecord>, CatalogError>> {
        Box::pin(async move {
            let result = self.fetch(term).await;
            crate::log_api_result!("search", result);
            result
        })
    }
}
