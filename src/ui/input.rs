//! Input handling for the TUI.
//!
//! Keys are resolved through the keybinding registry and applied to the
//! view-state machine synchronously, in arrival order.

use crate::app::{App, Focus};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crate::util::MAX_SEARCH_TERM_LENGTH;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

fn focus_to_context(focus: Focus) -> KbContext {
    match focus {
        Focus::List => KbContext::List,
        Focus::Search => KbContext::Search,
    }
}

/// Main input dispatch function.
pub(super) fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Result<Action> {
    // Help overlay captures all keys when visible
    if app.show_help {
        return Ok(handle_help_input(app, code));
    }

    match app.focus {
        Focus::List => Ok(handle_list_input(app, code, modifiers)),
        Focus::Search => Ok(handle_search_input(app, code, modifiers)),
    }
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) -> Action {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
    Action::Continue
}

/// Handle input while the question list has focus.
fn handle_list_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    // Digits pick a category tab by position
    if let KeyCode::Char(c @ '1'..='9') = code {
        if modifiers.is_empty() {
            let index = (c as usize) - ('1' as usize);
            if app.view.select_category_at(index) {
                app.reset_cursor();
            }
            return Action::Continue;
        }
    }

    let action = app
        .keybindings
        .action_for_key(code, modifiers, focus_to_context(app.focus));

    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::ToggleExpand) => app.toggle_selected(),
        Some(KbAction::NextPage) => change_page(app, |view| view.next_page()),
        Some(KbAction::PrevPage) => change_page(app, |view| view.prev_page()),
        Some(KbAction::FirstPage) => change_page(app, |view| view.go_to_page(1)),
        Some(KbAction::LastPage) => change_page(app, |view| view.last_page()),
        Some(KbAction::NextCategory) => {
            app.view.next_category();
            app.reset_cursor();
        }
        Some(KbAction::PrevCategory) => {
            app.view.prev_category();
            app.reset_cursor();
        }
        Some(KbAction::FocusSearch) => app.focus = Focus::Search,
        Some(KbAction::ClearSearch) => {
            app.view.clear_search();
            app.reset_cursor();
        }
        Some(KbAction::Back) => {
            // Collapse the open answer first, then fall back to the idle view
            if let Some(id) = app.view.expanded_id() {
                app.view.toggle_expand(id);
            } else if !app.view.is_idle() {
                app.view.select_category_at(0);
                app.reset_cursor();
            }
        }
        Some(KbAction::CycleTheme) => {
            let name = app.cycle_theme();
            app.set_status(format!("Theme: {}", name));
        }
        Some(KbAction::ShowHelp) => app.show_help = true,
        Some(KbAction::CommitSearch) | None => {}
    }
    Action::Continue
}

/// Handle input while the search field has focus.
///
/// Printable keys are text here; each one is applied to the view as it arrives.
fn handle_search_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    let action = app
        .keybindings
        .action_for_key(code, modifiers, focus_to_context(app.focus));

    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::CommitSearch) => {
            let matches = app.view.commit_search();
            app.reset_cursor();
            if !app.view.search_term().trim().is_empty() {
                app.set_status(format!("{} matching questions", matches));
                app.focus = Focus::List;
            }
        }
        Some(KbAction::Back) => app.focus = Focus::List,
        Some(KbAction::ClearSearch) => {
            app.view.clear_search();
            app.reset_cursor();
        }
        Some(_) => {}
        None => edit_search_text(app, code, modifiers),
    }
    Action::Continue
}

fn edit_search_text(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let mut term = app.view.search_term().to_string();
    match code {
        KeyCode::Backspace => {
            if term.pop().is_none() {
                return;
            }
        }
        KeyCode::Char(c)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if term.chars().count() >= MAX_SEARCH_TERM_LENGTH {
                app.set_status(format!(
                    "Search term at max length ({} chars)",
                    MAX_SEARCH_TERM_LENGTH
                ));
                return;
            }
            term.push(c);
        }
        _ => return,
    }
    app.view.edit_search_term(term);
    app.reset_cursor();
}

fn change_page(app: &mut App, turn: impl FnOnce(&mut crate::view_state::ViewState)) {
    let before = app.view.current_page();
    turn(&mut app.view);
    if app.view.current_page() != before {
        app.reset_cursor();
    }
}
