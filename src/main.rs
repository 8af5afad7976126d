//! Text Utils - join lines and build masked patterns
//!
//! Main entry point for the GUI application.
//!
//! # Overview
//!
//! The window has three pages reachable from the navigation bar:
//! - **Home** (`/`): links to the two tools
//! - **Join Lines** (`/join`): joins the non-blank lines of the input with `"; "`
//! - **Masked Pattern** (`/pattern`): keeps the common prefix of equal-length strings and
//!   masks the rest with `X`
//!
//! # Execution Flow
//!
//! 1. Load `Text Utils Data/Text Utils Config.yaml` (defaults if missing)
//! 2. Initialize logging → `<log dir>/text-utils.<date>`
//! 3. Create StateManager and apply the start page from the config
//! 4. Create GuiController and run the Slint event loop (blocks until window closed)
//! 5. Log the session summary

use anyhow::Result;
use std::sync::Arc;
use text_utils::config::DEFAULT_CONFIG_DIR;
use text_utils::ui::GuiController;
use text_utils::{APP_NAME, ConfigManager, Metrics, StateManager, VERSION};

fn main() -> Result<()> {
    let config_manager = ConfigManager::new(DEFAULT_CONFIG_DIR)?;
    let user_config = config_manager.load_user_config()?;
    let settings = &user_config.settings;

    // Hold the guard until exit so buffered log lines are flushed
    let _log_guard = text_utils::logging::setup_logging_with_console(
        &settings.log_dir,
        APP_NAME,
        settings.debug_mode,
        settings.console_logging,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    tracing::info!("Configuration directory: {}", config_manager.config_dir());

    let state_manager = Arc::new(StateManager::new());
    state_manager.load_from_user_config(&user_config);

    let metrics = Arc::new(Metrics::new());

    let gui_controller = GuiController::new(state_manager, Arc::clone(&metrics))?;

    tracing::info!("GUI controller initialized, launching window");

    let result = gui_controller.run();

    tracing::info!("GUI closed, shutting down");
    metrics.log_summary();

    result.map_err(|e| {
        tracing::error!("GUI error: {}", e);
        anyhow::anyhow!("GUI error: {}", e)
    })
}
