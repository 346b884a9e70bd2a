use std::sync::Arc;

use bokindex::CatalogError;

use crate::app::TextInput;
use crate::runtime::{Completion, CompletionTx};

use super::CatalogBackend;

/// Minimum trimmed query length before suggestion fetches are issued.
pub const MIN_QUERY_LEN: usize = 2;

/// Owns the query input and the autocomplete popup.
///
/// Every fetch carries the epoch it was issued under. `apply` compares that
/// tag against the live counter and drops anything stale, and `dismiss`
/// bumps the counter, so a fetch that was in flight when the popup was
/// dismissed can never resurrect it.
pub struct SuggestionController {
    backend: Arc<dyn CatalogBackend>,
    completion_tx: CompletionTx,
    epoch: u64,
    pub query: TextInput,
    pub suggestions: Vec<String>,
    pub visible: bool,
}

impl SuggestionController {
    pub fn new(backend: Arc<dyn CatalogBackend>, completion_tx: CompletionTx) -> Self {
        Self {
            backend,
            completion_tx,
            epoch: 0,
            query: TextInput::new(),
            suggestions: Vec::new(),
            visible: false,
        }
    }

    /// Replace the query text wholesale, e.g. when a suggestion is picked.
    /// Never issues a fetch.
    pub fn set_query(&mut self, text: &str) {
        self.query = TextInput::from_str(text);
    }

    /// Must run after every edit of the query text. Below the length
    /// threshold the popup is cleared without touching the network;
    /// otherwise a fetch goes out under a fresh epoch.
    pub fn on_query_change(&mut self) {
        if self.query.value.trim().chars().count() < MIN_QUERY_LEN {
            self.dismiss();
            return;
        }

        self.epoch += 1;
        let epoch = self.epoch;
        let query = self.query.value.clone();
        let backend = Arc::clone(&self.backend);
        let completion_tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.suggest(&query).await;
            let _ = completion_tx.send(Completion::SuggestionsLoaded { epoch, outcome });
        });
    }

    /// Apply a finished suggestion fetch. Stale epochs are dropped
    /// wholesale; a current-epoch failure hides the popup and raises no
    /// notice.
    pub fn apply(&mut self, epoch: u64, outcome: Result<Vec<String>, CatalogError>) {
        if !self.is_current(epoch) {
            return;
        }
        match outcome {
            Ok(suggestions) => {
                self.visible = !suggestions.is_empty();
                self.suggestions = suggestions;
            }
            Err(_) => {
                self.suggestions.clear();
                self.visible = false;
            }
        }
    }

    /// Hide and empty the popup, invalidating any fetch still in flight.
    pub fn dismiss(&mut self) {
        self.epoch += 1;
        self.suggestions.clear();
        self.visible = false;
    }

    pub fn is_current(&self, epoch: u64) -> bool {
        epoch == self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{channel, CompletionRx};
    use crate::search::MockCatalog;

    fn controller(mock: &Arc<MockCatalog>) -> (SuggestionController, CompletionRx) {
        let (tx, rx) = channel();
        (SuggestionController::new(Arc::<MockCatalog>::clone(mock), tx), rx)
    }

    async fn next_suggestions(rx: &mut CompletionRx) -> (u64, Result<Vec<String>, CatalogError>) {
        match rx.recv().await.expect("completion") {
            Completion::SuggestionsLoaded { epoch, outcome } => (epoch, outcome),
            other => panic!("unexpected completion: {:?}", other),
        }
    }

    #[tokio::test]
    async fn short_queries_never_hit_the_backend() {
        let mock = Arc::new(MockCatalog::new().with_suggestions(vec!["dune"]));
        let (mut ctrl, _rx) = controller(&mock);

        for text in ["", " ", "d", " d "] {
            ctrl.set_query(text);
            ctrl.on_query_change();
            assert!(!ctrl.visible, "{text:?} should not open the popup");
            assert!(ctrl.suggestions.is_empty());
        }
        assert_eq!(mock.suggest_calls(), 0);
    }

    #[tokio::test]
    async fn two_character_query_fetches_suggestions() {
        let mock = Arc::new(MockCatalog::new().with_suggestions(vec!["Dune", "Dune Messiah"]));
        let (mut ctrl, mut rx) = controller(&mock);

        ctrl.set_query("Du");
        ctrl.on_query_change();

        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);

        assert!(ctrl.visible);
        assert_eq!(ctrl.suggestions, vec!["Dune", "Dune Messiah"]);
        assert_eq!(mock.last_suggest_query().as_deref(), Some("Du"));
    }

    #[tokio::test]
    async fn empty_suggestion_list_keeps_popup_hidden() {
        let mock = Arc::new(MockCatalog::new());
        let (mut ctrl, mut rx) = controller(&mock);

        ctrl.set_query("zzzz");
        ctrl.on_query_change();

        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);

        assert!(!ctrl.visible);
        assert!(ctrl.suggestions.is_empty());
    }

    #[tokio::test]
    async fn stale_fetch_resolving_last_is_discarded() {
        let mock = Arc::new(MockCatalog::new());
        let mut gates = mock.gated_suggest(2).into_iter();
        let first = gates.next().unwrap();
        let second = gates.next().unwrap();
        let (mut ctrl, mut rx) = controller(&mock);

        ctrl.set_query("du");
        ctrl.on_query_change();
        ctrl.set_query("dun");
        ctrl.on_query_change();

        // The newer fetch resolves first and owns the popup.
        second.send(Ok(vec!["dune".to_string()])).unwrap();
        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);
        assert_eq!(ctrl.suggestions, vec!["dune"]);
        assert!(ctrl.visible);

        // The older fetch limps in afterwards and must change nothing.
        first.send(Ok(vec!["dumas".to_string()])).unwrap();
        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);
        assert_eq!(ctrl.suggestions, vec!["dune"]);
        assert!(ctrl.visible);
    }

    #[tokio::test]
    async fn in_order_resolutions_converge_on_newest() {
        let mock = Arc::new(MockCatalog::new());
        let mut gates = mock.gated_suggest(2).into_iter();
        let first = gates.next().unwrap();
        let second = gates.next().unwrap();
        let (mut ctrl, mut rx) = controller(&mock);

        ctrl.set_query("du");
        ctrl.on_query_change();
        ctrl.set_query("dun");
        ctrl.on_query_change();

        // The older fetch is already superseded when it resolves.
        first.send(Ok(vec!["dumas".to_string()])).unwrap();
        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);
        assert!(!ctrl.visible);
        assert!(ctrl.suggestions.is_empty());

        second.send(Ok(vec!["dune".to_string()])).unwrap();
        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);
        assert!(ctrl.visible);
        assert_eq!(ctrl.suggestions, vec!["dune"]);
    }

    #[tokio::test]
    async fn failure_hides_popup_silently() {
        let mock = Arc::new(MockCatalog::new().failing_suggest());
        let (mut ctrl, mut rx) = controller(&mock);

        ctrl.set_query("du");
        ctrl.on_query_change();

        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);

        assert!(!ctrl.visible);
        assert!(ctrl.suggestions.is_empty());
    }

    #[tokio::test]
    async fn failure_clears_previously_visible_popup() {
        let mock = Arc::new(MockCatalog::new());
        let mut gates = mock.gated_suggest(2).into_iter();
        let first = gates.next().unwrap();
        let second = gates.next().unwrap();
        let (mut ctrl, mut rx) = controller(&mock);

        ctrl.set_query("du");
        ctrl.on_query_change();
        first.send(Ok(vec!["dune".to_string()])).unwrap();
        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);
        assert!(ctrl.visible);

        ctrl.set_query("dun");
        ctrl.on_query_change();
        second.send(Err(CatalogError::Status(500))).unwrap();
        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);
        assert!(!ctrl.visible);
        assert!(ctrl.suggestions.is_empty());
    }

    #[tokio::test]
    async fn shrinking_below_threshold_discards_in_flight_fetch() {
        let mock = Arc::new(MockCatalog::new());
        let mut gates = mock.gated_suggest(1).into_iter();
        let gate = gates.next().unwrap();
        let (mut ctrl, mut rx) = controller(&mock);

        ctrl.set_query("du");
        ctrl.on_query_change();

        // Backspace down to one character before the fetch resolves.
        ctrl.set_query("d");
        ctrl.on_query_change();
        assert!(!ctrl.visible);

        gate.send(Ok(vec!["dune".to_string()])).unwrap();
        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);
        assert!(!ctrl.visible);
        assert!(ctrl.suggestions.is_empty());
    }

    #[tokio::test]
    async fn dismissal_invalidates_in_flight_fetch() {
        let mock = Arc::new(MockCatalog::new());
        let mut gates = mock.gated_suggest(1).into_iter();
        let gate = gates.next().unwrap();
        let (mut ctrl, mut rx) = controller(&mock);

        ctrl.set_query("du");
        ctrl.on_query_change();
        ctrl.dismiss();

        gate.send(Ok(vec!["dune".to_string()])).unwrap();
        let (epoch, outcome) = next_suggestions(&mut rx).await;
        ctrl.apply(epoch, outcome);
        assert!(!ctrl.visible);
        assert!(ctrl.suggestions.is_empty());
    }
}
