//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`bars`]: The bar chart being sorted, with the latest step's bars marked
//! - [`history`]: Dataset listings and metric blocks for each run
//! - [`scoreboard`]: Latest steps and speed per algorithm
//! - [`status`]: Status bar with keybindings and run state
//!
//! Each pane module exports a primary `render_*` function; none of them hold
//! state beyond what the caller passes in.

pub mod bars;
pub mod history;
pub mod scoreboard;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use history::render_log_pane;
pub use scoreboard::render_scoreboard_pane;
pub use status::{render_status_bar, StatusRenderData};
