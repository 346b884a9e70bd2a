//! Request orchestration for the three catalog fetch classes.
//!
//! Each controller owns the state a fetch class feeds (suggestion popup,
//! result set, facet vocabulary) and an epoch counter. Issuing a request
//! bumps the epoch and spawns a task that reports back over the completion
//! channel; applying a completion first checks its epoch against the live
//! counter, so out-of-order resolutions always converge on the newest
//! request. Nothing is ever aborted: a superseded fetch simply finds its
//! epoch stale and gets discarded.

mod backend;
mod dev;
mod facets;
#[cfg(test)]
mod mock;
mod orchestrator;
mod suggest;

pub use backend::CatalogBackend;
pub use dev::DevCatalog;
pub use facets::FacetStore;
#[cfg(test)]
pub use mock::MockCatalog;
pub use orchestrator::SearchOrchestrator;
pub use suggest::SuggestionController;
