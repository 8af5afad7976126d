use super::page::Page;
use crate::services::PatternOutcome;

/// Central application state.
///
/// Holds the page currently on screen plus, for each tool page, the text last submitted and
/// the result it produced. Nothing here outlives the process.
///
/// Always access this through [`StateManager`](crate::state::StateManager).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Page currently displayed
    pub current_page: Page,

    /// Text last submitted on the join page
    pub join_input: String,

    /// Result of the last join, `None` until the button is first pressed
    pub join_result: Option<String>,

    /// Text last submitted on the pattern page
    pub pattern_input: String,

    /// Outcome of the last pattern request
    pub pattern_outcome: Option<PatternOutcome>,

    /// Verbose logging enabled
    pub debug_mode: bool,

    /// Number of join requests handled this session
    pub joins_performed: usize,

    /// Number of pattern requests handled this session, rejected ones included
    pub patterns_requested: usize,
}

impl AppState {
    /// Label text for the join page
    pub fn join_label(&self) -> &str {
        self.join_result.as_deref().unwrap_or_default()
    }

    /// Label text for the pattern page
    pub fn pattern_label(&self) -> String {
        self.pattern_outcome
            .as_ref()
            .map(PatternOutcome::label)
            .unwrap_or_default()
    }

    /// Clear inputs and results, keeping the current page and settings.
    pub fn clear_results(&mut self) {
        self.join_input.clear();
        self.join_result = None;
        self.pattern_input.clear();
        self.pattern_outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_page, Page::Home);
        assert_eq!(state.join_label(), "");
        assert_eq!(state.pattern_label(), "");
        assert_eq!(state.joins_performed, 0);
    }

    #[test]
    fn test_labels_follow_results() {
        let mut state = AppState {
            join_result: Some("a; b".to_string()),
            pattern_outcome: Some(PatternOutcome::NoStrings),
            ..AppState::default()
        };
        assert_eq!(state.join_label(), "a; b");
        assert_eq!(state.pattern_label(), "Enter at least one string.");

        state.current_page = Page::MaskedPattern;
        state.clear_results();
        assert_eq!(state.join_label(), "");
        assert_eq!(state.pattern_label(), "");
        assert_eq!(state.current_page, Page::MaskedPattern);
    }
}
