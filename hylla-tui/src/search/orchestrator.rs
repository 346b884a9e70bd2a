use std::sync::Arc;

use bokindex::{Book, CatalogError, SearchFilters};

use crate::runtime::{Completion, CompletionTx};

use super::CatalogBackend;

/// Owns the applied filters, the result set, and the loading flag.
///
/// `loading` goes up synchronously when a search is issued and belongs to
/// the newest epoch alone: a stale completion may not lower it, so the
/// indicator keeps going until the search that currently owns the result
/// set resolves.
pub struct SearchOrchestrator {
    backend: Arc<dyn CatalogBackend>,
    completion_tx: CompletionTx,
    epoch: u64,
    pub filters: SearchFilters,
    pub results: Vec<Book>,
    pub loading: bool,
}

impl SearchOrchestrator {
    pub fn new(backend: Arc<dyn CatalogBackend>, completion_tx: CompletionTx) -> Self {
        Self {
            backend,
            completion_tx,
            epoch: 0,
            filters: SearchFilters::default(),
            results: Vec::new(),
            loading: false,
        }
    }

    /// Issue a search for `query` under the current filters.
    pub fn search(&mut self, query: &str) {
        self.epoch += 1;
        self.loading = true;

        let epoch = self.epoch;
        let query = query.to_string();
        let filters = self.filters.clone();
        let backend = Arc::clone(&self.backend);
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.search(&query, &filters).await;
            let _ = completion_tx.send(Completion::SearchFinished { epoch, outcome });
        });
    }

    /// Clear every filter, then issue exactly one search for `query`.
    pub fn reset_filters(&mut self, query: &str) {
        self.filters.clear();
        self.search(query);
    }

    /// Apply a finished search. Stale completions are dropped wholesale.
    /// Returns the error to surface when the current search failed; the
    /// result set is emptied in that case.
    pub fn apply(
        &mut self,
        epoch: u64,
        outcome: Result<Vec<Book>, CatalogError>,
    ) -> Option<CatalogError> {
        if !self.is_current(epoch) {
            return None;
        }
        self.loading = false;
        match outcome {
            Ok(books) => {
                self.results = books;
                None
            }
            Err(err) => {
                self.results = Vec::new();
                Some(err)
            }
        }
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.epoch
    }
}
