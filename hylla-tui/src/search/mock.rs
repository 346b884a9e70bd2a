//! Mock catalog backend for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bokindex::{Book, CatalogError, FacetOptions, SearchFilters};
use tokio::sync::oneshot;

use super::CatalogBackend;

type Gate<T> = oneshot::Receiver<Result<T, CatalogError>>;
type GateHandle<T> = oneshot::Sender<Result<T, CatalogError>>;

/// Mock backend with canned responses, call counters, and recorded request
/// parameters.
///
/// By default every call resolves immediately. `gated_suggest`/`gated_search`
/// queue gates instead: the n-th gated call awaits the n-th gate, so a test
/// decides the order in which concurrent fetches resolve.
#[derive(Default)]
pub struct MockCatalog {
    facet_options: FacetOptions,
    suggestions: Vec<String>,
    books: Vec<Book>,
    fail_facets: bool,
    fail_suggest: bool,
    fail_search: bool,
    suggest_count: AtomicUsize,
    search_count: AtomicUsize,
    last_suggest: Mutex<Option<String>>,
    last_search: Mutex<Option<(String, SearchFilters)>>,
    suggest_gates: Mutex<VecDeque<Gate<Vec<String>>>>,
    search_gates: Mutex<VecDeque<Gate<Vec<Book>>>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_facets(mut self, options: FacetOptions) -> Self {
        self.facet_options = options;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<&str>) -> Self {
        self.suggestions = suggestions.into_iter().map(String::from).collect();
        self
    }

    pub fn with_books(mut self, books: Vec<Book>) -> Self {
        self.books = books;
        self
    }

    pub fn failing_facets(mut self) -> Self {
        self.fail_facets = true;
        self
    }

    pub fn failing_suggest(mut self) -> Self {
        self.fail_suggest = true;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    /// Queue `n` suggestion gates and hand back their senders in call order.
    pub fn gated_suggest(&self, n: usize) -> Vec<GateHandle<Vec<String>>> {
        let mut gates = self.suggest_gates.lock().unwrap();
        (0..n)
            .map(|_| {
                let (tx, rx) = oneshot::channel();
                gates.push_back(rx);
                tx
            })
            .collect()
    }

    /// Queue `n` search gates and hand back their senders in call order.
    pub fn gated_search(&self, n: usize) -> Vec<GateHandle<Vec<Book>>> {
        let mut gates = self.search_gates.lock().unwrap();
        (0..n)
            .map(|_| {
                let (tx, rx) = oneshot::channel();
                gates.push_back(rx);
                tx
            })
            .collect()
    }

    pub fn suggest_calls(&self) -> usize {
        self.suggest_count.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_count.load(Ordering::SeqCst)
    }

    pub fn last_suggest_query(&self) -> Option<String> {
        self.last_suggest.lock().unwrap().clone()
    }

    pub fn last_search(&self) -> Option<(String, SearchFilters)> {
        self.last_search.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogBackend for MockCatalog {
    async fn facets(&self) -> Result<FacetOptions, CatalogError> {
        if self.fail_facets {
            return Err(CatalogError::Status(500));
        }
        Ok(self.facet_options.clone())
    }

    async fn suggest(&self, query: &str) -> Result<Vec<String>, CatalogError> {
        self.suggest_count.fetch_add(1, Ordering::SeqCst);
        *self.last_suggest.lock().unwrap() = Some(query.to_string());

        let gate = self.suggest_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            return gate
                .await
                .unwrap_or_else(|_| Err(CatalogError::Transport("gate dropped".to_string())));
        }
        if self.fail_suggest {
            return Err(CatalogError::Status(500));
        }
        Ok(self.suggestions.clone())
    }

    async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
    ) -> Result<Vec<Book>, CatalogError> {
        self.search_count.fetch_add(1, Ordering::SeqCst);
        *self.last_search.lock().unwrap() = Some((query.to_string(), filters.clone()));

        let gate = self.search_gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            return gate
                .await
                .unwrap_or_else(|_| Err(CatalogError::Transport("gate dropped".to_string())));
        }
        if self.fail_search {
            return Err(CatalogError::Status(500));
        }
        Ok(self.books.clone())
    }
}
