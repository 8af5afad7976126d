// State management module
//
// This module provides the StateManager which wraps AppState behind Arc<RwLock<T>>
// and reports what changed on every mutation so the GUI can refresh only that.

use crate::models::{AppState, Page, UserConfig};
use crate::services::PatternOutcome;
use std::sync::{Arc, RwLock};

/// Change events produced when state is modified
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// A different page is now displayed
    PageChanged { page: Page },

    /// A join request finished
    JoinCompleted { result: String },

    /// A pattern request finished
    PatternCompleted { label: String, accepted: bool },

    /// Settings have been updated
    SettingsChanged,

    /// Inputs and results have been cleared
    StateReset,
}

/// Thread-safe state manager with change detection
///
/// - Provides access to [`AppState`] via `Arc<RwLock<T>>`
/// - Detects state changes and returns them as [`StateChange`] events
///
/// # Usage
///
/// Always use `StateManager` instead of accessing [`AppState`] directly:
/// - [`read()`](Self::read) for reading state
/// - [`update()`](Self::update) for mutations
///
/// # Related Types
///
/// - [`crate::models::AppState`]: The underlying state structure
/// - [`crate::ui::controller::GuiController`]: Applies the returned events to the window
pub struct StateManager {
    state: Arc<RwLock<AppState>>,
}

impl StateManager {
    /// Create a new StateManager with default state
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn snapshot(&self) -> AppState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state
    ///
    /// # Example
    /// ```ignore
    /// let page = state_manager.read(|state| state.current_page);
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Update the state and return what changed
    ///
    /// 1. Captures the old state
    /// 2. Applies the update function
    /// 3. Detects what changed
    ///
    /// # Example
    /// ```ignore
    /// state_manager.update(|state| {
    ///     state.current_page = Page::JoinLines;
    /// });
    /// ```
    pub fn update<F>(&self, update_fn: F) -> Vec<StateChange>
    where
        F: FnOnce(&mut AppState),
    {
        let mut state = self.state.write().unwrap();
        let old_state = state.clone();

        update_fn(&mut state);

        let changes = Self::detect_changes(&old_state, &state);
        for change in &changes {
            tracing::trace!("State change: {:?}", change);
        }

        changes
    }

    /// Detect what changed between two states and generate events
    fn detect_changes(old: &AppState, new: &AppState) -> Vec<StateChange> {
        let mut changes = Vec::new();

        if old.current_page != new.current_page {
            changes.push(StateChange::PageChanged {
                page: new.current_page,
            });
        }

        // A repeated request with the same result still counts as completed
        if old.joins_performed != new.joins_performed || old.join_result != new.join_result {
            if let Some(result) = &new.join_result {
                changes.push(StateChange::JoinCompleted {
                    result: result.clone(),
                });
            }
        }

        if old.patterns_requested != new.patterns_requested
            || old.pattern_outcome != new.pattern_outcome
        {
            if let Some(outcome) = &new.pattern_outcome {
                changes.push(StateChange::PatternCompleted {
                    label: outcome.label(),
                    accepted: outcome.is_pattern(),
                });
            }
        }

        if old.debug_mode != new.debug_mode {
            changes.push(StateChange::SettingsChanged);
        }

        changes
    }

    // Convenience methods for common state updates

    /// Switch to the page for a route path; unknown paths go home
    pub fn navigate(&self, path: &str) -> Vec<StateChange> {
        self.set_page(Page::from_path(path))
    }

    /// Switch to a page
    pub fn set_page(&self, page: Page) -> Vec<StateChange> {
        self.update(|state| {
            state.current_page = page;
        })
    }

    /// Record a finished join request
    pub fn record_join(&self, input: String, result: String) -> Vec<StateChange> {
        self.update(|state| {
            state.join_input = input;
            state.join_result = Some(result);
            state.joins_performed += 1;
        })
    }

    /// Record a finished pattern request
    pub fn record_pattern(&self, input: String, outcome: PatternOutcome) -> Vec<StateChange> {
        self.update(|state| {
            state.pattern_input = input;
            state.pattern_outcome = Some(outcome);
            state.patterns_requested += 1;
        })
    }

    /// Clear inputs and results
    pub fn reset(&self) -> Vec<StateChange> {
        let mut changes = self.update(|state| {
            state.clear_results();
        });
        changes.push(StateChange::StateReset);
        changes
    }

    /// Load preferences from UserConfig
    ///
    /// Sets the start page and debug flag.
    pub fn load_from_user_config(&self, user_config: &UserConfig) -> Vec<StateChange> {
        self.update(|state| {
            let settings = &user_config.settings;

            state.current_page = Page::from_path(&settings.start_page);
            state.debug_mode = settings.debug_mode;

            tracing::info!(
                "Loaded user config: start_page={}, debug={}",
                state.current_page,
                state.debug_mode
            );
        })
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
