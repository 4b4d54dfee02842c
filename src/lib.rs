//! Terminal browser for FAQ collections.
//!
//! The heart of the crate is [`view_state::ViewState`], a synchronous state
//! machine that filters a loaded FAQ list by category or by search term,
//! pages it, and tracks the single expanded answer. Everything else is the
//! terminal shell around it.

pub mod app;
pub mod config;
pub mod faq;
pub mod keybindings;
pub mod pager;
pub mod projection;
pub mod theme;
pub mod ui;
pub mod util;
pub mod view_state;
