use std::sync::Arc;

use bokindex::{CatalogError, FacetOptions};

use crate::runtime::{Completion, CompletionTx};

use super::CatalogBackend;

/// Loads and holds the filter vocabulary. Fetched once at startup and never
/// refreshed; a failed load leaves the vocabulary empty for the session.
pub struct FacetStore {
    backend: Arc<dyn CatalogBackend>,
    completion_tx: CompletionTx,
    pub options: FacetOptions,
}

impl FacetStore {
    pub fn new(backend: Arc<dyn CatalogBackend>, completion_tx: CompletionTx) -> Self {
        Self {
            backend,
            completion_tx,
            options: FacetOptions::default(),
        }
    }

    /// Spawn the vocabulary fetch.
    pub fn load(&self) {
        let backend = Arc::clone(&self.backend);
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.facets().await;
            let _ = completion_tx.send(Completion::FacetsLoaded(outcome));
        });
    }

    /// Apply the finished load. Returns the error to surface, if any.
    pub fn apply(&mut self, outcome: Result<FacetOptions, CatalogError>) -> Option<CatalogError> {
        match outcome {
            Ok(options) => {
                self.options = options;
                None
            }
            Err(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{channel, CompletionRx};
    use crate::search::MockCatalog;

    async fn next_facets(rx: &mut CompletionRx) -> Result<FacetOptions, CatalogError> {
        match rx.recv().await.expect("completion") {
            Completion::FacetsLoaded(outcome) => outcome,
            other => panic!("unexpected completion: {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_populates_vocabulary() {
        let mock = Arc::new(MockCatalog::new().with_facets(FacetOptions {
            categories: vec!["Fiction".to_string(), "History".to_string()],
            authors: vec!["Frank Herbert".to_string()],
        }));
        let (tx, mut rx) = channel();
        let mut store = FacetStore::new(mock, tx);

        store.load();
        let outcome = next_facets(&mut rx).await;
        assert!(store.apply(outcome).is_none());
        assert_eq!(store.options.categories, vec!["Fiction", "History"]);
        assert_eq!(store.options.authors, vec!["Frank Herbert"]);
    }

    #[tokio::test]
    async fn failed_load_keeps_vocabulary_empty_and_reports() {
        let mock = Arc::new(MockCatalog::new().failing_facets());
        let (tx, mut rx) = channel();
        let mut store = FacetStore::new(mock, tx);

        store.load();
        let outcome = next_facets(&mut rx).await;
        assert!(store.apply(outcome).is_some());
        assert!(store.options.categories.is_empty());
        assert!(store.options.authors.is_empty());
    }
}
