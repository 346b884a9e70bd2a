use bokindex::{Book, CatalogError, FacetOptions};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// A finished background fetch, reported back to the UI thread. Spawned
/// tasks never touch app state directly; the event loop drains these and
/// applies them in order. The epoch tag lets the owning controller discard
/// completions that a newer request has superseded.
#[derive(Debug)]
pub enum Completion {
    FacetsLoaded(Result<FacetOptions, CatalogError>),
    SuggestionsLoaded {
        epoch: u64,
        outcome: Result<Vec<String>, CatalogError>,
    },
    SearchFinished {
        epoch: u64,
        outcome: Result<Vec<Book>, CatalogError>,
    },
}

pub type CompletionTx = UnboundedSender<Completion>;
pub type CompletionRx = UnboundedReceiver<Completion>;

pub fn channel() -> (CompletionTx, CompletionRx) {
    mpsc::unbounded_channel()
}
