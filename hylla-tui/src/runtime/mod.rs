mod completions;
mod dismissal;
mod event_loop;
mod views;

pub(crate) use completions::{channel, Completion, CompletionRx, CompletionTx};
pub use event_loop::run_app;
