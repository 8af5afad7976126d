// GUI Controller - Bridges the Slint UI with the text services
//
// Every button press runs synchronously on the Slint event loop:
// callback -> request handler -> StateManager -> returned StateChanges -> UI properties

use crate::metrics::Metrics;
use crate::services::{PatternOutcome, handle_join_request, handle_pattern_request};
use crate::state::{StateChange, StateManager};
use anyhow::{Context, Result};
use slint::ComponentHandle;
use std::sync::Arc;

// Include the generated Slint code
slint::include_modules!();

/// GUI Controller that wires up the Slint UI with application state and logic
///
/// # Example
/// ```ignore
/// let state_manager = Arc::new(StateManager::new());
/// let metrics = Arc::new(Metrics::new());
///
/// let controller = GuiController::new(state_manager, metrics)?;
/// controller.run()?;  // Blocks until window is closed
/// ```
pub struct GuiController {
    /// The Slint UI window
    ui: MainWindow,

    /// Shared state manager
    state_manager: Arc<StateManager>,
}

impl GuiController {
    /// Create a new GUI controller
    ///
    /// # Arguments
    /// * `state_manager` - Shared application state manager
    /// * `metrics` - Session metrics updated by the callbacks
    pub fn new(state_manager: Arc<StateManager>, metrics: Arc<Metrics>) -> Result<Self> {
        let ui = MainWindow::new().context("Failed to create Slint UI")?;

        Self::sync_ui_with_state(&ui, &state_manager);
        Self::setup_callbacks(&ui, &state_manager, &metrics);

        tracing::info!("GUI controller initialized");

        Ok(Self { ui, state_manager })
    }

    /// Run the GUI (blocks until window is closed)
    pub fn run(self) -> Result<(), slint::PlatformError> {
        tracing::info!(
            "Starting GUI event loop on page {}",
            self.state_manager.read(|s| s.current_page)
        );
        self.ui.run()
    }

    /// Synchronize UI with current state
    ///
    /// Called once at startup.
    fn sync_ui_with_state(ui: &MainWindow, state_manager: &StateManager) {
        let state = state_manager.snapshot();

        ui.set_current_page(state.current_page.index() as i32);
        ui.set_join_input(state.join_input.as_str().into());
        ui.set_join_result(state.join_label().into());
        ui.set_pattern_input(state.pattern_input.as_str().into());
        ui.set_pattern_result(state.pattern_label().into());

        tracing::debug!("UI synchronized with initial state");
    }

    /// Set up Slint UI callbacks
    fn setup_callbacks(ui: &MainWindow, state_manager: &Arc<StateManager>, metrics: &Arc<Metrics>) {
        let state = Arc::clone(state_manager);
        let metrics_clone = Arc::clone(metrics);
        let ui_weak = ui.as_weak();

        ui.on_navigate(move |path| {
            tracing::debug!("Navigation requested: {}", path);
            let changes = Self::navigate(&state, &metrics_clone, &path);
            if let Some(ui) = ui_weak.upgrade() {
                Self::apply_changes(&ui, &changes);
            }
        });

        let state = Arc::clone(state_manager);
        let metrics_clone = Arc::clone(metrics);
        let ui_weak = ui.as_weak();

        ui.on_join_requested(move |text| {
            tracing::info!("Join Lines button clicked");
            let changes = Self::submit_join(&state, &metrics_clone, &text);
            if let Some(ui) = ui_weak.upgrade() {
                Self::apply_changes(&ui, &changes);
            }
        });

        let state = Arc::clone(state_manager);
        let metrics_clone = Arc::clone(metrics);
        let ui_weak = ui.as_weak();

        ui.on_pattern_requested(move |text| {
            tracing::info!("Build Pattern button clicked");
            let changes = Self::submit_pattern(&state, &metrics_clone, &text);
            if let Some(ui) = ui_weak.upgrade() {
                Self::apply_changes(&ui, &changes);
            }
        });

        ui.window().on_close_requested(|| {
            tracing::info!("Close requested - allowing window to close");
            slint::CloseRequestResponse::HideWindow
        });

        tracing::debug!("UI callbacks configured");
    }

    /// Switch page for a route path
    fn navigate(state: &StateManager, metrics: &Metrics, path: &str) -> Vec<StateChange> {
        let changes = state.navigate(path);
        if !changes.is_empty() {
            metrics.record_page_view();
        }
        changes
    }

    /// Run a join request and record its result
    fn submit_join(state: &StateManager, metrics: &Metrics, text: &str) -> Vec<StateChange> {
        let result = handle_join_request(text);
        metrics.record_join();
        state.record_join(text.to_string(), result)
    }

    /// Run a pattern request and record its outcome
    fn submit_pattern(state: &StateManager, metrics: &Metrics, text: &str) -> Vec<StateChange> {
        let outcome = handle_pattern_request(text);
        match &outcome {
            PatternOutcome::Pattern(_) => metrics.record_pattern_built(),
            PatternOutcome::NoStrings | PatternOutcome::MixedLengths { .. } => {
                metrics.record_pattern_rejected()
            }
            PatternOutcome::Failed(_) => metrics.record_pattern_error(),
        }
        state.record_pattern(text.to_string(), outcome)
    }

    /// Push state changes into the window's properties
    fn apply_changes(ui: &MainWindow, changes: &[StateChange]) {
        for change in changes {
            tracing::trace!("Applying state change: {:?}", change);

            match change {
                StateChange::PageChanged { page } => {
                    ui.set_current_page(page.index() as i32);
                }
                StateChange::JoinCompleted { result } => {
                    ui.set_join_result(result.as_str().into());
                }
                StateChange::PatternCompleted { label, accepted } => {
                    if !accepted {
                        tracing::debug!("Pattern request rejected: {}", label);
                    }
                    ui.set_pattern_result(label.as_str().into());
                }
                StateChange::StateReset => {
                    ui.set_join_input("".into());
                    ui.set_join_result("".into());
                    ui.set_pattern_input("".into());
                    ui.set_pattern_result("".into());
                }
                StateChange::SettingsChanged => {}
            }
        }
    }
}
