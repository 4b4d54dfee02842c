use crate::config::Config;
use crate::faq::{FaqRecord, LoadError};
use crate::keybindings::KeybindingRegistry;
use crate::theme::{StyleMap, ThemeVariant};
use crate::view_state::ViewState;
use anyhow::Result;
use ratatui::style::Style;
use reqwest::redirect::Policy;
use std::borrow::Cow;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;

/// How long a status message stays on screen.
const STATUS_TTL: Duration = Duration::from_secs(3);

// ============================================================================
// Data Source
// ============================================================================

/// Where the FAQ list comes from. Loaded exactly once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote { url: String, timeout: Duration },
    File(PathBuf),
}

impl DataSource {
    /// Short description for the status bar and logs.
    pub fn describe(&self) -> Cow<'_, str> {
        match self {
            Self::Remote { url, .. } => Cow::Borrowed(url.as_str()),
            Self::File(path) => path.to_string_lossy(),
        }
    }
}

// ============================================================================
// Focus and Load State
// ============================================================================

/// Which widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Search,
}

/// Progress of the one-shot initial fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    /// Load failed; the view runs over an empty list.
    Failed(String),
}

/// Events from background tasks
pub enum AppEvent {
    /// Result of the initial fetch.
    FaqsLoaded(Result<Vec<FaqRecord>, LoadError>),
    /// A spawned task panicked; the panic was caught and reported here.
    TaskPanicked { task: &'static str, error: String },
}

/// Create a redirect policy that stays on http/https and stops after 5 hops.
fn create_redirect_policy() -> Policy {
    Policy::custom(|attempt| {
        if attempt.previous().len() >= 5 {
            return attempt.error("too many redirects");
        }
        match attempt.url().scheme() {
            "http" | "https" => attempt.follow(),
            _ => attempt.stop(),
        }
    })
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state
pub struct App {
    pub http_client: reqwest::Client,
    pub source: DataSource,

    // Theme
    /// Current theme variant (for cycling).
    pub theme_variant: ThemeVariant,
    /// Active style map for all UI rendering.
    pub theme: StyleMap,

    /// Keybinding registry for action-key mapping with config overrides.
    pub keybindings: KeybindingRegistry,

    /// The FAQ view-state machine. All filtering, paging and expansion lives here.
    pub view: ViewState,

    // UI State
    pub focus: Focus,
    /// Row cursor within the current page.
    pub cursor: usize,
    pub load_state: LoadState,

    // Status message with expiry; Cow avoids allocation for static literals
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    /// Dirty flag to skip unnecessary frame renders
    pub needs_redraw: bool,

    /// Current frame of the loading spinner animation.
    pub spinner_frame: usize,

    /// Whether the help overlay is currently displayed.
    pub show_help: bool,
    /// Scroll offset in the help screen for long keybinding lists.
    pub help_scroll_offset: usize,
}

impl App {
    pub fn new(config: &Config, source: DataSource) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .redirect(create_redirect_policy())
            .user_agent(concat!("faqview/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(config.request_timeout())
            .timeout(config.request_timeout())
            .build()?;

        let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, falling back to dark");
            ThemeVariant::Dark
        });

        Ok(Self {
            http_client,
            source,
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            keybindings: KeybindingRegistry::new(),
            view: ViewState::new(config.faq_config()),
            focus: Focus::List,
            cursor: 0,
            load_state: LoadState::Loading,
            status_message: None,
            needs_redraw: true,
            spinner_frame: 0,
            show_help: false,
            help_scroll_offset: 0,
        })
    }

    /// Resolve a semantic role name to its `Style`.
    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Cycle to the next theme variant and return its name.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    /// Seed the view from the initial fetch, or degrade to an empty list.
    pub fn apply_load_result(&mut self, result: Result<Vec<FaqRecord>, LoadError>) {
        match result {
            Ok(records) => {
                let count = records.len();
                self.view.load(records);
                self.load_state = LoadState::Loaded;
                self.set_status(format!("Loaded {} questions", count));
            }
            Err(e) => {
                tracing::error!(
                    source = %self.source.describe(),
                    error = %e,
                    "Failed to load FAQ list"
                );
                self.view.load(Vec::new());
                self.load_state = LoadState::Failed(e.to_string());
                self.set_status(format!("Failed to load FAQs: {}", e));
            }
        }
        self.cursor = 0;
    }

    // ------------------------------------------------------------------------
    // Row cursor
    // ------------------------------------------------------------------------

    pub fn nav_down(&mut self) {
        let rows = self.view.page_items().len();
        if self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    pub fn nav_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Put the cursor back on the first row after the page contents changed.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// The record under the cursor.
    pub fn selected_record(&self) -> Option<&FaqRecord> {
        self.view.page_items().get(self.cursor).copied()
    }

    /// Expand or collapse the record under the cursor.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_record().map(|r| r.id) {
            self.view.toggle_expand(id);
        }
    }

    // ------------------------------------------------------------------------
    // Status bar
    // ------------------------------------------------------------------------

    /// Set status message (will auto-expire after 3 seconds)
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired.
    /// Returns true if a message was actually cleared
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed() >= STATUS_TTL {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time;

    fn test_app() -> App {
        let config = Config {
            page_size: 2,
            ..Config::default()
        };
        App::new(
            &config,
            DataSource::File(PathBuf::from("/nonexistent/faqs.json")),
        )
        .unwrap()
    }

    fn records() -> Vec<FaqRecord> {
        vec![
            FaqRecord::new(1, "Buying", "How do I pay?", "Cards"),
            FaqRecord::new(2, "Selling", "Fees", "Five percent"),
            FaqRecord::new(3, "Buying", "Refunds", "Seven days"),
        ]
    }

    #[tokio::test]
    async fn test_new_app_is_loading_and_idle() {
        let app = test_app();
        assert_eq!(app.load_state, LoadState::Loading);
        assert_eq!(app.focus, Focus::List);
        assert!(app.view.is_idle());
        assert!(app.selected_record().is_none());
    }

    #[tokio::test]
    async fn test_load_success_seeds_view() {
        let mut app = test_app();
        app.apply_load_result(Ok(records()));
        assert_eq!(app.load_state, LoadState::Loaded);
        assert_eq!(app.view.visible_len(), 3);
        assert_eq!(app.selected_record().map(|r| r.id), Some(1));
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_empty_list() {
        let mut app = test_app();
        app.apply_load_result(Err(LoadError::HttpStatus(500)));
        assert!(matches!(app.load_state, LoadState::Failed(_)));
        assert_eq!(app.view.visible_len(), 0);
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert!(msg.contains("500"));
    }

    #[tokio::test]
    async fn test_cursor_stays_on_page() {
        let mut app = test_app();
        app.apply_load_result(Ok(records()));
        app.nav_down();
        app.nav_down();
        assert_eq!(app.cursor, 1);
        app.nav_up();
        app.nav_up();
        assert_eq!(app.cursor, 0);
    }

    #[tokio::test]
    async fn test_toggle_selected_expands_cursor_row() {
        let mut app = test_app();
        app.apply_load_result(Ok(records()));
        app.nav_down();
        app.toggle_selected();
        assert_eq!(app.view.expanded_id(), Some(2));
        app.toggle_selected();
        assert_eq!(app.view.expanded_id(), None);
    }

    #[tokio::test]
    async fn test_unknown_theme_falls_back_to_dark() {
        let config = Config {
            theme: "solarized".into(),
            ..Config::default()
        };
        let app = App::new(&config, DataSource::File(PathBuf::from("x.json"))).unwrap();
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
    }

    #[tokio::test]
    async fn test_cycle_theme() {
        let mut app = test_app();
        assert_eq!(app.cycle_theme(), "Light");
        assert_eq!(app.theme_variant, ThemeVariant::Light);
        assert_eq!(app.cycle_theme(), "Dark");
    }

    // Status message expiry with time control
    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test message");

        time::advance(Duration::from_secs(2)).await;
        assert!(!app.clear_expired_status());
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_status_not_expired_before_3_seconds() {
        let mut app = test_app();
        time::pause();
        app.set_status("Test");

        time::advance(Duration::from_millis(2999)).await;
        app.clear_expired_status();
        assert!(app.status_message.is_some());
    }
}
