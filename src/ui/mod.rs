// UI module - GUI logic
//
// GuiController wires the Slint window to the request handlers and StateManager.

pub mod controller;

pub use controller::GuiController;
