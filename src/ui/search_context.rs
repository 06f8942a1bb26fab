use crate::api::SearchClient;
use crate::config::Config;
use crate::export;
use crate::state::{SearchAction, SearchState, EMPTY_SEQUENCE_ERROR};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{info, warn};

// Helper function to reduce boilerplate when setting signals
fn set_signal<T: 'static>(mut signal: Signal<T>, value: T) {
    signal.set(value);
}

const DEFAULT_TOP_K: u32 = 5;

/// Signal container for the search view.
///
/// Form fields and the presentation flag live in their own signals; result
/// rows, loading, and error live in `state` and change only through
/// `SearchAction` transitions.
pub struct SearchContext {
    pub sequence: Signal<String>,
    pub top_k: Signal<u32>,
    pub dark_mode: Signal<bool>,
    pub state: Signal<SearchState>,
    /// Current results-table page (client-side pagination)
    pub page: Signal<usize>,
    client: SearchClient,
}

impl SearchContext {
    pub fn new(config: &Config) -> Self {
        Self {
            sequence: Signal::new(String::new()),
            top_k: Signal::new(DEFAULT_TOP_K),
            dark_mode: Signal::new(false),
            state: Signal::new(SearchState::default()),
            page: Signal::new(0),
            client: SearchClient::new(config.api_base_url.clone()),
        }
    }

    /// Submit the current form.
    ///
    /// An empty (trimmed) sequence fails validation without touching the
    /// network. A valid submission takes a fresh generation number; when its
    /// completion arrives it is applied only if no newer submission has been
    /// issued since.
    pub fn submit(&self) {
        let mut state = self.state;

        let sequence = self.sequence.read().trim().to_string();
        if sequence.is_empty() {
            state.with_mut(|s| {
                s.apply(SearchAction::ValidationFailed {
                    message: EMPTY_SEQUENCE_ERROR.to_string(),
                })
            });
            return;
        }

        if state.read().loading {
            // The form is disabled while a request is pending.
            return;
        }

        let top_k = (*self.top_k.read()).max(1);
        let generation = state.read().generation + 1;
        state.with_mut(|s| s.apply(SearchAction::SubmitStarted { generation }));
        info!("Submitting search (generation {}, top_k {})", generation, top_k);

        let client = self.client.clone();
        let page = self.page;
        spawn(async move {
            let action = match client.recommend_sequence(&sequence, top_k).await {
                Ok(matches) => SearchAction::SubmitSucceeded {
                    generation,
                    matches,
                },
                Err(e) => {
                    warn!("Search failed: {}", e);
                    SearchAction::SubmitFailed {
                        generation,
                        message: e.user_message(),
                    }
                }
            };
            let was_success = matches!(action, SearchAction::SubmitSucceeded { .. });
            let accepted = state.with_mut(|s| s.apply(action));
            // The page follows the rows: reset only when this completion
            // actually replaced them, never for a stale or failed one.
            if accepted && was_success {
                set_signal(page, 0);
            }
        });
    }

    /// Flip the palette flag. Purely presentational.
    pub fn toggle_theme(&self) {
        let current = *self.dark_mode.read();
        set_signal(self.dark_mode, !current);
    }

    /// Export the current rows through a save dialog.
    pub fn export_csv(&self) {
        let rows = self.state.read().rows.clone();
        spawn(async move {
            match export::save_results(&rows).await {
                Ok(Some(path)) => info!("CSV export written to {}", path.display()),
                Ok(None) => info!("CSV export cancelled"),
                Err(e) => warn!("CSV export failed: {}", e),
            }
        });
    }
}

/// Provider component to make the search context available throughout the app
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = Config::load();
        Rc::new(SearchContext::new(&config))
    });

    rsx! {
        {children}
    }
}
