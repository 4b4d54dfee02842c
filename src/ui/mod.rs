//! Terminal User Interface module.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background task event processing
//! - `render` - Layout and per-frame dispatch
//! - `helpers` - Task spawning and panic containment
//! - `search_bar` - Search field with placeholder and clear affordance
//! - `list_head` - Category tabs, match banner or no-results notice
//! - `faq_list` - Questions with the expanded answer inline
//! - `pagination` - Page indicators
//! - `status` - Status bar widget
//! - `help` - Keybinding overlay

mod events;
mod faq_list;
mod help;
mod helpers;
mod input;
mod list_head;
mod loop_runner;
mod pagination;
mod render;
mod search_bar;
mod status;

pub use loop_runner::{run, Action};
