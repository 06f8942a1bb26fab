use crate::api::models::{ResultRow, SearchMatch};
use tracing::debug;

/// Fixed message for an empty-sequence submission
pub const EMPTY_SEQUENCE_ERROR: &str = "Please enter a protein sequence.";

/// View state for the search page.
///
/// `generation` tags the latest accepted submission; completions carrying an
/// older generation are discarded so rapid resubmission cannot let a stale
/// response overwrite a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub rows: Vec<ResultRow>,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchAction {
    /// A valid submission left the form
    SubmitStarted { generation: u64 },
    /// The service answered with ranked matches
    SubmitSucceeded {
        generation: u64,
        matches: Vec<SearchMatch>,
    },
    /// The service or the transport failed
    SubmitFailed { generation: u64, message: String },
    /// The submission was rejected before any network call
    ValidationFailed { message: String },
}

impl SearchState {
    /// Apply one action. Pure with respect to everything but `self`.
    ///
    /// Returns `false` when a completion carried a stale generation and was
    /// discarded, so callers can gate their own follow-up effects on the
    /// outcome actually being accepted.
    pub fn apply(&mut self, action: SearchAction) -> bool {
        match action {
            SearchAction::SubmitStarted { generation } => {
                self.generation = generation;
                self.loading = true;
                self.error = None;
            }
            SearchAction::SubmitSucceeded {
                generation,
                matches,
            } => {
                if generation != self.generation {
                    debug!(
                        "Discarding stale success (generation {} < {})",
                        generation, self.generation
                    );
                    return false;
                }
                // Rows are replaced wholesale, never merged.
                self.rows = matches
                    .into_iter()
                    .enumerate()
                    .map(|(idx, m)| ResultRow::from_match(idx, m))
                    .collect();
                self.error = None;
                self.loading = false;
            }
            SearchAction::SubmitFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    debug!(
                        "Discarding stale failure (generation {} < {})",
                        generation, self.generation
                    );
                    return false;
                }
                self.error = Some(message);
                self.loading = false;
            }
            SearchAction::ValidationFailed { message } => {
                self.error = Some(message);
            }
        }
        true
    }
}
