use crate::app::App;

/// Kick off the fetches every session starts with: the facet vocabulary for
/// the filter pickers, loaded once, and an unfiltered search over the whole
/// catalog. Both land through the completion channel once they finish.
pub fn initialize_app_state(app: &mut App) {
    app.facets.load();
    app.perform_search();
}
