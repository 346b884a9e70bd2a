//! Boundary trait over the catalog endpoints.
//!
//! The HTTP client, the in-memory dev backend, and the test mock all live
//! behind this trait, so the controllers never know where responses come
//! from.

use async_trait::async_trait;
use bokindex::{Book, CatalogClient, CatalogError, FacetOptions, SearchFilters};

#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Fetch the filter vocabulary (`GET /filters/`).
    async fn facets(&self) -> Result<FacetOptions, CatalogError>;

    /// Fetch autocomplete candidates for a partial query (`GET /suggest/`).
    async fn suggest(&self, query: &str) -> Result<Vec<String>, CatalogError>;

    /// Run a filtered search (`GET /search/`).
    async fn search(&self, query: &str, filters: &SearchFilters)
        -> Result<Vec<Book>, CatalogError>;
}

#[async_trait]
impl CatalogBackend for CatalogClient {
    async fn facets(&self) -> Result<FacetOptions, CatalogError> {
        self.fetch_facets().await
    }

    async fn suggest(&self, query: &str) -> Result<Vec<String>, CatalogError> {
        self.fetch_suggestions(query).await
    }

    async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Book>, CatalogError> {
        CatalogClient::search(self, query, filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Verify the trait is object-safe (the app holds it as Arc<dyn ...>)
    fn _assert_backend_object_safe(_: &dyn CatalogBackend) {}
}
