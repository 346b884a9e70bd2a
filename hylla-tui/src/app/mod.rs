use std::sync::Arc;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use ratatui::layout::Rect;

use crate::runtime::{Completion, CompletionTx};
use crate::search::{CatalogBackend, FacetStore, SearchOrchestrator, SuggestionController};

mod state;
pub use state::{FacetPicker, FilterField, Notice, Severity, TextInput, View};

pub struct App {
    pub running: bool,
    pub current_view: View,

    // Request orchestration: one controller per fetch class
    pub facets: FacetStore,
    pub suggest: SuggestionController,
    pub search: SearchOrchestrator,

    // Suggestion popup: keyboard highlight, plus the rect the renderer drew
    // the popup into this frame (None when it is not on screen)
    pub suggestion_cursor: Option<usize>,
    pub suggestion_area: Option<Rect>,

    // Result list navigation
    pub result_index: usize,

    // Filter panel and facet pickers
    pub filter_field: FilterField,
    pub picker: Option<FacetPicker>,

    // Status line
    pub notice: Option<Notice>,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(backend: Arc<dyn CatalogBackend>, completion_tx: CompletionTx) -> Self {
        Self {
            running: true,
            current_view: View::Browse,
            facets: FacetStore::new(Arc::clone(&backend), completion_tx.clone()),
            suggest: SuggestionController::new(Arc::clone(&backend), completion_tx.clone()),
            search: SearchOrchestrator::new(backend, completion_tx),
            suggestion_cursor: None,
            suggestion_area: None,
            result_index: 0,
            filter_field: FilterField::Category,
            picker: None,
            notice: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Apply a drained completion. This is the only place fetch results
    /// reach app state, and it runs on the UI thread between input events.
    pub fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::FacetsLoaded(outcome) => {
                if let Some(err) = self.facets.apply(outcome) {
                    self.set_notice(Notice::destructive(format!(
                        "Failed to load filters: {}",
                        err
                    )));
                }
            }
            Completion::SuggestionsLoaded { epoch, outcome } => {
                if !self.suggest.is_current(epoch) {
                    return;
                }
                self.suggest.apply(epoch, outcome);
                self.suggestion_cursor = None;
            }
            Completion::SearchFinished { epoch, outcome } => {
                if !self.search.is_current(epoch) {
                    return;
                }
                if let Some(err) = self.search.apply(epoch, outcome) {
                    self.set_notice(Notice::destructive(format!("Search failed: {}", err)));
                }
                self.result_index = 0;
            }
        }
    }

    // --- Query editing ---

    pub fn query_input_char(&mut self, c: char) {
        self.suggest.query.insert(c);
        self.suggestion_cursor = None;
        self.suggest.on_query_change();
    }

    pub fn query_input_backspace(&mut self) {
        self.suggest.query.backspace();
        self.suggestion_cursor = None;
        self.suggest.on_query_change();
    }

    pub fn clear_query(&mut self) {
        self.suggest.query.clear();
        self.suggestion_cursor = None;
        self.suggest.on_query_change();
    }

    /// Cursor motion only; the text is unchanged, so no fetch is issued.
    pub fn query_move_cursor(&mut self, left: bool) {
        if left {
            self.suggest.query.move_left();
        } else {
            self.suggest.query.move_right();
        }
    }

    pub fn query_cursor_home_end(&mut self, home: bool) {
        if home {
            self.suggest.query.home();
        } else {
            self.suggest.query.end();
        }
    }

    // --- Search triggers ---

    /// Search for the current query text under the current filters.
    pub fn perform_search(&mut self) {
        let query = self.suggest.query.value.clone();
        self.search.search(&query);
    }

    /// Explicit submit: the popup goes away and the query is searched as-is.
    pub fn submit_search(&mut self) {
        self.suggest.dismiss();
        self.suggestion_cursor = None;
        self.perform_search();
    }

    /// Adopt the picked suggestion as the whole query and search for it.
    /// No new suggestion fetch is issued for the adopted text.
    pub fn select_suggestion(&mut self, index: usize) {
        let Some(text) = self.suggest.suggestions.get(index).cloned() else {
            return;
        };
        self.suggest.set_query(&text);
        self.suggest.dismiss();
        self.suggestion_cursor = None;
        self.search.search(&text);
    }

    pub fn dismiss_suggestions(&mut self) {
        self.suggest.dismiss();
        self.suggestion_cursor = None;
    }

    // --- Suggestion popup navigation ---

    pub fn suggestion_move_down(&mut self) {
        let len = self.suggest.suggestions.len();
        if len == 0 {
            return;
        }
        self.suggestion_cursor = Some(match self.suggestion_cursor {
            None => 0,
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
        });
    }

    /// Moving up from the first row returns focus to the input line.
    pub fn suggestion_move_up(&mut self) {
        self.suggestion_cursor = match self.suggestion_cursor {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    // --- Result list navigation ---

    pub fn select_next_result(&mut self) {
        let len = self.search.results.len();
        if len > 0 {
            self.result_index = (self.result_index + 1) % len;
        }
    }

    pub fn select_previous_result(&mut self) {
        let len = self.search.results.len();
        if len > 0 {
            self.result_index = if self.result_index == 0 {
                len - 1
            } else {
                self.result_index - 1
            };
        }
    }

    // --- Filter panel ---

    pub fn open_filters(&mut self) {
        self.dismiss_suggestions();
        self.filter_field = FilterField::Category;
        self.current_view = View::Filters;
    }

    pub fn close_filters(&mut self) {
        self.current_view = View::Browse;
    }

    /// Leave the panel and search with whatever the panel now holds.
    pub fn apply_filters(&mut self) {
        self.current_view = View::Browse;
        self.set_notice(Notice::info("Filters applied"));
        self.perform_search();
    }

    /// Drop every filter and re-run the current query once.
    pub fn reset_filters(&mut self) {
        let query = self.suggest.query.value.clone();
        self.search.reset_filters(&query);
        self.current_view = View::Browse;
        self.set_notice(Notice::info("Filters cleared"));
    }

    pub fn next_filter_field(&mut self) {
        self.filter_field = self.filter_field.next();
    }

    pub fn previous_filter_field(&mut self) {
        self.filter_field = self.filter_field.previous();
    }

    /// Cycle the publication row: any -> published -> unpublished -> any.
    pub fn cycle_published(&mut self, forward: bool) {
        use bokindex::PublishedFilter as P;
        let published = self.search.filters.published;
        self.search.filters.published = if forward {
            match published {
                P::Unset => P::Published,
                P::Published => P::Unpublished,
                P::Unpublished => P::Unset,
            }
        } else {
            match published {
                P::Unset => P::Unpublished,
                P::Published => P::Unset,
                P::Unpublished => P::Published,
            }
        };
    }

    // --- Facet pickers ---

    /// Open the fuzzy picker for the category or author row. The published
    /// row cycles in place and has no picker.
    pub fn open_picker(&mut self, target: FilterField) {
        let options = match target {
            FilterField::Category => self.facets.options.categories.clone(),
            FilterField::Author => self.facets.options.authors.clone(),
            FilterField::Published => return,
        };
        self.current_view = match target {
            FilterField::Category => View::SelectCategory,
            FilterField::Author => View::SelectAuthor,
            FilterField::Published => unreachable!(),
        };
        self.picker = Some(FacetPicker::new(target, options));
    }

    pub fn picker_input_char(&mut self, c: char) {
        if let Some(picker) = &mut self.picker {
            picker.input.insert(c);
        }
        self.refilter_picker();
    }

    pub fn picker_input_backspace(&mut self) {
        if let Some(picker) = &mut self.picker {
            picker.input.backspace();
        }
        self.refilter_picker();
    }

    pub fn picker_input_clear(&mut self) {
        if let Some(picker) = &mut self.picker {
            picker.input.clear();
        }
        self.refilter_picker();
    }

    pub fn picker_move_cursor(&mut self, left: bool) {
        if let Some(picker) = &mut self.picker {
            if left {
                picker.input.move_left();
            } else {
                picker.input.move_right();
            }
        }
    }

    pub fn picker_cursor_home_end(&mut self, home: bool) {
        if let Some(picker) = &mut self.picker {
            if home {
                picker.input.home();
            } else {
                picker.input.end();
            }
        }
    }

    fn refilter_picker(&mut self) {
        let Some(picker) = &mut self.picker else {
            return;
        };
        let query = picker.input.value.clone();
        let matches = if query.is_empty() {
            picker.options.clone()
        } else {
            let matcher = SkimMatcherV2::default();
            let mut scored: Vec<(String, i64)> = picker
                .options
                .iter()
                .filter_map(|option| {
                    matcher
                        .fuzzy_match(option, &query)
                        .map(|score| (option.clone(), score))
                })
                .collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1));
            scored.into_iter().map(|(option, _)| option).collect()
        };
        picker.matches = matches;
        picker.index = 0;
    }

    /// The picker list shows "All" at index 0, then the fuzzy matches.
    pub fn picker_select_next(&mut self) {
        if let Some(picker) = &mut self.picker {
            picker.index = (picker.index + 1) % (picker.matches.len() + 1);
        }
    }

    pub fn picker_select_previous(&mut self) {
        if let Some(picker) = &mut self.picker {
            picker.index = if picker.index == 0 {
                picker.matches.len()
            } else {
                picker.index - 1
            };
        }
    }

    /// Adopt the highlighted row into the target filter; "All" clears it.
    /// The search itself waits for Apply.
    pub fn confirm_picker(&mut self) {
        let Some(picker) = self.picker.take() else {
            return;
        };
        let selection = if picker.index == 0 {
            None
        } else {
            picker.matches.get(picker.index - 1).cloned()
        };
        match picker.target {
            FilterField::Category => self.search.filters.category = selection,
            FilterField::Author => self.search.filters.author = selection,
            FilterField::Published => {}
        }
        self.filter_field = picker.target;
        self.current_view = View::Filters;
    }

    pub fn cancel_picker(&mut self) {
        if let Some(picker) = self.picker.take() {
            self.filter_field = picker.target;
        }
        self.current_view = View::Filters;
    }

    // --- Render helpers ---

    /// One-line summary of the applied filters for the browse view.
    pub fn filter_summary(&self) -> Option<String> {
        use bokindex::PublishedFilter as P;
        let filters = &self.search.filters;
        if filters.is_empty() {
            return None;
        }
        let mut parts = Vec::new();
        if let Some(category) = &filters.category {
            parts.push(format!("category: {}", category));
        }
        if let Some(author) = &filters.author {
            parts.push(format!("author: {}", author));
        }
        match filters.published {
            P::Unset => {}
            P::Published => parts.push("published".to_string()),
            P::Unpublished => parts.push("unpublished".to_string()),
        }
        Some(parts.join("  ·  "))
    }
}
