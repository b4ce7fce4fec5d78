//! Search form with debounced location autocomplete.
//!
//! Keystrokes in the location field go through a [`Debouncer`]; once the input
//! has been quiet for the configured window a single lookup is issued. Every
//! lookup carries a sequence number and only the latest one issued may write
//! suggestions or clear the loading flag. Short input and selection invalidate
//! both pending and in-flight lookups.

use crate::api::ListingsApi;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::models::{LocationSuggestion, SearchCriteria, SearchField};
use crate::navigation::{results_path, Navigator};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingDebounce,
    Loading,
}

/// Everything the form renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub criteria: SearchCriteria,
    pub suggestions: Vec<LocationSuggestion>,
    pub loading: bool,
    pub phase: Phase,
}

pub struct SearchForm {
    api: Arc<dyn ListingsApi>,
    state: Arc<watch::Sender<FormState>>,
    debouncer: Debouncer,
    latest_request: Arc<AtomicU64>,
    min_query_len: usize,
}

impl SearchForm {
    pub fn new(api: Arc<dyn ListingsApi>, config: &Config) -> Self {
        Self::with_settings(api, config.debounce, config.min_query_len)
    }

    pub fn with_settings(api: Arc<dyn ListingsApi>, debounce: Duration, min_query_len: usize) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            api,
            state: Arc::new(state),
            debouncer: Debouncer::new(debounce),
            latest_request: Arc::new(AtomicU64::new(0)),
            min_query_len,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> FormState {
        self.state.borrow().clone()
    }

    /// Handle one edit of the location text field
    pub fn on_location_input(&self, text: &str) {
        let query = text.trim().to_string();

        self.state.send_modify(|s| s.criteria.location = text.to_string());

        if query.chars().count() < self.min_query_len {
            self.invalidate_lookups();
            self.state.send_modify(|s| {
                s.suggestions.clear();
                s.loading = false;
                s.phase = Phase::Idle;
            });
            return;
        }

        self.state.send_modify(|s| s.phase = Phase::AwaitingDebounce);

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let latest_request = Arc::clone(&self.latest_request);
        let debouncer = self.debouncer.clone();
        self.debouncer
            .call(move || lookup(api, state, latest_request, debouncer, query));
    }

    /// Set any field other than the autocompleted location
    pub fn set_field(&self, field: SearchField, value: &str) {
        if field == SearchField::Location {
            self.on_location_input(value);
            return;
        }
        self.state.send_modify(|s| s.criteria.set(field, value));
    }

    /// Pick the suggestion at `index`; false if there is none
    pub fn select_suggestion(&self, index: usize) -> bool {
        let picked = self.state.borrow().suggestions.get(index).cloned();
        match picked {
            Some(suggestion) => {
                self.select(&suggestion);
                true
            }
            None => false,
        }
    }

    /// Resolve the free text into `suggestion` and close the dropdown
    pub fn select(&self, suggestion: &LocationSuggestion) {
        self.invalidate_lookups();
        debug!("Selected location {} ({})", suggestion.name, suggestion.id);

        self.state.send_modify(|s| {
            s.criteria.location = suggestion.name.clone();
            if let Some(district) = &suggestion.district {
                s.criteria.district = district.clone();
            }
            s.criteria.latitude = suggestion.latitude;
            s.criteria.longitude = suggestion.longitude;
            s.suggestions.clear();
            s.loading = false;
            s.phase = Phase::Idle;
        });
    }

    /// Navigate to the results page with every non-empty field as a query parameter
    pub fn submit(&self, navigator: &dyn Navigator) -> String {
        let path = results_path(self.state.borrow().criteria.query_pairs());
        info!("Submitting search: {}", path);
        navigator.navigate(&path);
        path
    }

    fn invalidate_lookups(&self) {
        self.debouncer.cancel();
        self.latest_request.fetch_add(1, Ordering::SeqCst);
    }
}

async fn lookup(
    api: Arc<dyn ListingsApi>,
    state: Arc<watch::Sender<FormState>>,
    latest_request: Arc<AtomicU64>,
    debouncer: Debouncer,
    query: String,
) {
    let seq = latest_request.fetch_add(1, Ordering::SeqCst) + 1;
    state.send_modify(|s| {
        s.loading = true;
        s.phase = Phase::Loading;
    });

    debug!("Location lookup #{} for {:?}", seq, query);
    let result = api.search_locations(&query).await;

    if latest_request.load(Ordering::SeqCst) != seq {
        debug!("Discarding stale location lookup #{} for {:?}", seq, query);
        return;
    }

    state.send_modify(|s| {
        match result {
            Ok(records) => {
                s.suggestions = records.into_iter().map(LocationSuggestion::from).collect();
                debug!("{} suggestions for {:?}", s.suggestions.len(), query);
            }
            Err(e) => error!("Error fetching locations for {:?}: {}", query, e),
        }
        s.loading = false;
        s.phase = if debouncer.is_pending() {
            Phase::AwaitingDebounce
        } else {
            Phase::Idle
        };
    });
}
