//! Data models for the Text Utils application.
//!
//! - [`AppState`]: current page plus the last input and result of each tool page
//! - [`Page`]: navigation targets and their route paths (`/`, `/join`, `/pattern`)
//! - [`UserConfig`]: user preferences loaded from `Text Utils Config.yaml`
//!
//! [`AppState`] is wrapped in `Arc<RwLock<>>` by [`StateManager`](crate::state::StateManager);
//! updates go through its `update()` method so every change is reported.

pub mod app_state;
pub mod config;
pub mod page;

pub use app_state::AppState;
pub use config::{Settings, UserConfig};
pub use page::Page;
