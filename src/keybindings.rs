//! Keybinding registry — maps actions to key events with config overrides.
//!
//! Bindings are data, not match arms, so users can remap them from the
//! `[keybindings]` table in config.toml.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    ToggleExpand,
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,
    NextCategory,
    PrevCategory,
    FocusSearch,
    CommitSearch,
    ClearSearch,
    Back,
    CycleTheme,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Quit application",
            Self::NavDown => "Next question",
            Self::NavUp => "Previous question",
            Self::ToggleExpand => "Show / hide answer",
            Self::NextPage => "Next page",
            Self::PrevPage => "Previous page",
            Self::FirstPage => "First page",
            Self::LastPage => "Last page",
            Self::NextCategory => "Next category",
            Self::PrevCategory => "Previous category",
            Self::FocusSearch => "Focus search field",
            Self::CommitSearch => "Run search",
            Self::ClearSearch => "Clear search",
            Self::Back => "Leave field / dismiss",
            Self::CycleTheme => "Cycle theme",
            Self::ShowHelp => "Show help",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context — determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    Global,
    List,
    /// The search field. Printable keys are text here, so Global bindings
    /// are not consulted.
    Search,
}

// ============================================================================
// KeySpec
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    /// Shift is dropped for character keys and BackTab: terminals report
    /// 'G' as Shift+'G', and the case already carries it.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let modifiers = match code {
            KeyCode::Char(_) | KeyCode::BackTab => modifiers - KeyModifiers::SHIFT,
            _ => modifiers,
        };
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(c: char) -> Self {
        Self {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "BackTab", "Up", "Down", "Left",
///   "Right", "Backspace", "Space", "PageUp", "PageDown", "Home", "End"
/// - Modifier combos: "Ctrl+u"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.trim().chars();
        let c = chars.next()?;
        return match chars.next() {
            None => Some(KeySpec::ctrl(c)),
            Some(_) => None,
        };
    }

    match s.to_lowercase().as_str() {
        "enter" | "return" => return Some(KeySpec::plain(KeyCode::Enter)),
        "esc" | "escape" => return Some(KeySpec::plain(KeyCode::Esc)),
        "tab" => return Some(KeySpec::plain(KeyCode::Tab)),
        "backtab" | "shift+tab" => return Some(KeySpec::plain(KeyCode::BackTab)),
        "up" => return Some(KeySpec::plain(KeyCode::Up)),
        "down" => return Some(KeySpec::plain(KeyCode::Down)),
        "left" => return Some(KeySpec::plain(KeyCode::Left)),
        "right" => return Some(KeySpec::plain(KeyCode::Right)),
        "backspace" => return Some(KeySpec::plain(KeyCode::Backspace)),
        "space" => return Some(KeySpec::plain(KeyCode::Char(' '))),
        "pageup" => return Some(KeySpec::plain(KeyCode::PageUp)),
        "pagedown" => return Some(KeySpec::plain(KeyCode::PageDown)),
        "home" => return Some(KeySpec::plain(KeyCode::Home)),
        "end" => return Some(KeySpec::plain(KeyCode::End)),
        _ => {}
    }

    if let Some(n) = s
        .strip_prefix('F')
        .or_else(|| s.strip_prefix('f'))
        .and_then(|n| n.parse::<u8>().ok())
    {
        if (1..=12).contains(&n) {
            return Some(KeySpec::plain(KeyCode::F(n)));
        }
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::plain(KeyCode::Char(c))),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts.
pub struct KeybindingRegistry {
    /// Primary lookup: (Context, KeySpec) -> Action
    lookup: HashMap<(Context, KeySpec), Action>,
    /// All bindings for help screen enumeration
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::new(),
        };
        registry.register_defaults();
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    fn register_defaults(&mut self) {
        use Action::*;
        use KeyCode::*;

        let defaults: &[(Context, KeySpec, Action)] = &[
            // === Global ===
            (Context::Global, KeySpec::plain(Char('q')), Quit),
            (Context::Global, KeySpec::ctrl('c'), Quit),
            (Context::Global, KeySpec::plain(Char('?')), ShowHelp),
            (Context::Global, KeySpec::plain(Char('t')), CycleTheme),
            // === Question list ===
            (Context::List, KeySpec::plain(Char('j')), NavDown),
            (Context::List, KeySpec::plain(Down), NavDown),
            (Context::List, KeySpec::plain(Char('k')), NavUp),
            (Context::List, KeySpec::plain(Up), NavUp),
            (Context::List, KeySpec::plain(Enter), ToggleExpand),
            (Context::List, KeySpec::plain(Char(' ')), ToggleExpand),
            (Context::List, KeySpec::plain(Char('l')), NextPage),
            (Context::List, KeySpec::plain(Right), NextPage),
            (Context::List, KeySpec::plain(Char(']')), NextPage),
            (Context::List, KeySpec::plain(PageDown), NextPage),
            (Context::List, KeySpec::plain(Char('h')), PrevPage),
            (Context::List, KeySpec::plain(Left), PrevPage),
            (Context::List, KeySpec::plain(Char('[')), PrevPage),
            (Context::List, KeySpec::plain(PageUp), PrevPage),
            (Context::List, KeySpec::plain(Char('g')), FirstPage),
            (Context::List, KeySpec::plain(Home), FirstPage),
            (Context::List, KeySpec::plain(Char('G')), LastPage),
            (Context::List, KeySpec::plain(End), LastPage),
            (Context::List, KeySpec::plain(Tab), NextCategory),
            (Context::List, KeySpec::plain(BackTab), PrevCategory),
            (Context::List, KeySpec::plain(Char('/')), FocusSearch),
            (Context::List, KeySpec::plain(Char('x')), ClearSearch),
            (Context::List, KeySpec::plain(Esc), Back),
            // === Search field ===
            (Context::Search, KeySpec::plain(Enter), CommitSearch),
            (Context::Search, KeySpec::plain(Esc), Back),
            (Context::Search, KeySpec::ctrl('u'), ClearSearch),
            (Context::Search, KeySpec::ctrl('c'), Quit),
        ];

        for &(context, key, action) in defaults {
            self.bind(context, key, action);
        }
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "next_page").
    /// Values are key strings (e.g., "q", "Ctrl+d", "F5").
    ///
    /// Returns a list of warnings for unrecognized action names or unparseable keys.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!("Unknown action '{}', ignoring", action_name));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Cannot parse key '{}' for action '{}', ignoring",
                    key_str, action_name
                ));
                continue;
            };

            // Re-bind in every context the action had, with the new key
            let mut contexts: Vec<Context> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(c, _, _)| *c)
                .collect();
            contexts.dedup();

            self.lookup.retain(|_, a| *a != action);
            self.bindings.retain(|(_, _, a)| *a != action);

            for ctx in contexts {
                self.bind(ctx, key, action);
            }

            tracing::info!(
                action = %action_name,
                key = %key_str,
                "Applied keybinding override"
            );
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Tries the specific context first, then falls back to Global. The
    /// search field never falls back, so typing "q" there is just text.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let key = KeySpec::new(code, modifiers);

        if let Some(&action) = self.lookup.get(&(context, key)) {
            return Some(action);
        }

        if context == Context::List {
            return self.lookup.get(&(Context::Global, key)).copied();
        }

        None
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_down" | "navdown" | "down" => Some(Action::NavDown),
        "nav_up" | "navup" | "up" => Some(Action::NavUp),
        "toggle_expand" | "toggleexpand" | "expand" | "select" => Some(Action::ToggleExpand),
        "next_page" | "nextpage" => Some(Action::NextPage),
        "prev_page" | "prevpage" => Some(Action::PrevPage),
        "first_page" | "firstpage" => Some(Action::FirstPage),
        "last_page" | "lastpage" => Some(Action::LastPage),
        "next_category" | "nextcategory" => Some(Action::NextCategory),
        "prev_category" | "prevcategory" => Some(Action::PrevCategory),
        "focus_search" | "focussearch" | "search" => Some(Action::FocusSearch),
        "commit_search" | "commitsearch" => Some(Action::CommitSearch),
        "clear_search" | "clearsearch" | "clear" => Some(Action::ClearSearch),
        "back" => Some(Action::Back),
        "cycle_theme" | "cycletheme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "showhelp" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
