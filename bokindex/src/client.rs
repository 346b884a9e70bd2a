use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    domain::{Book, FacetOptions, SearchFilters},
    CatalogUrl,
};

pub struct CatalogClient {
    client: reqwest::Client,
    base_url: CatalogUrl,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: CatalogUrl::new(base_url),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: impl AsRef<str>) -> Result<T, CatalogError> {
        debug!(url = url.as_ref(), "fetching from catalog");

        let resp = self
            .client
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(url = url.as_ref(), status = status.as_u16(), "catalog request failed");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let resp_data = resp
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parsing(e.to_string()))?;

        Ok(resp_data)
    }

    /// `GET /filters/`: the facet vocabulary backing the filter panel.
    pub async fn fetch_facets(&self) -> Result<FacetOptions, CatalogError> {
        let url = self.base_url.append_path("/filters/");
        self.fetch(url).await
    }

    /// `GET /suggest/`: autocomplete candidates for a partial query.
    pub async fn fetch_suggestions(&self, query: &str) -> Result<Vec<String>, CatalogError> {
        let url = self
            .base_url
            .append_path("/suggest/")
            .with_param("q", query);

        let response: SuggestResponse = self.fetch(url).await?;
        Ok(response.suggestions)
    }

    /// `GET /search/`: full-text search constrained by `filters`. An empty
    /// query and unset filters produce no query parameters at all.
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Book>, CatalogError> {
        let url = self.search_url(query, filters);

        let response: SearchResponse = self.fetch(url).await?;
        Ok(response.response.docs)
    }

    fn search_url(&self, query: &str, filters: &SearchFilters) -> CatalogUrl {
        let mut url = self.base_url.append_path("/search/");
        if !query.is_empty() {
            url = url.with_param("q", query);
        }
        for (key, value) in filters.query_params() {
            url = url.with_param(key, &value);
        }
        url
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("failed to parse catalog response: {0}")]
    Parsing(String),
}

/// Solr-style wrapper around search hits. Either level may be missing from
/// the body, in which case the hit list is empty.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    response: ResponseBody,
}

#[derive(Default, Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    docs: Vec<Book>,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    #[serde(default)]
    suggestions: Vec<String>,
}
