//! The FAQ view-state machine.
//!
//! [`ViewState`] owns a read-only snapshot of the loaded records and derives
//! the visible list from exactly one of two filters:
//!
//! - **Category mode** (idle/default): records whose category equals the
//!   selected tab, or every record for the "all" tab.
//! - **Search mode**: records whose title or content contains the committed
//!   term, case-insensitively, always taken from the full list.
//!
//! Every transition is synchronous and total. After each one the current page
//! lies in `[1, page_count]` and the expanded record, if any, is on that page.

use crate::config::{DEFAULT_CATEGORIES, DEFAULT_PAGE_SIZE};
use crate::faq::{FaqId, FaqRecord};
use crate::pager;
use std::sync::Arc;

/// Construction-time settings for the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqConfig {
    /// Ordered category tabs. The first entry is the "all" category.
    pub categories: Vec<String>,
    /// Records per page. Fixed for the lifetime of the view.
    pub page_size: usize,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    categories: Vec<String>,
    page_size: usize,
    /// Full record list as loaded. Never mutated, only replaced by `load`.
    canonical: Arc<[FaqRecord]>,
    /// Indices into `canonical`, in canonical order.
    visible: Vec<usize>,
    category: String,
    search_term: String,
    search_active: bool,
    current_page: usize,
    expanded_id: Option<FaqId>,
}

impl ViewState {
    pub fn new(config: FaqConfig) -> Self {
        let mut categories = config.categories;
        if categories.is_empty() {
            categories.push(DEFAULT_CATEGORIES[0].to_string());
        }
        let category = categories[0].clone();

        Self {
            categories,
            page_size: config.page_size.max(1),
            canonical: Arc::from(Vec::new()),
            visible: Vec::new(),
            category,
            search_term: String::new(),
            search_active: false,
            current_page: 1,
            expanded_id: None,
        }
    }

    /// Replace the canonical list and return to idle mode over it.
    ///
    /// The search text is kept so anything typed while the load was in flight
    /// stays in the field.
    pub fn load(&mut self, records: Vec<FaqRecord>) {
        tracing::debug!(count = records.len(), "Seeding view with loaded records");
        self.canonical = Arc::from(records);
        self.reset_to_idle();
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Switch to category mode showing `category`.
    ///
    /// Leaves the search text untouched; only its effect is superseded.
    /// Returns false (and changes nothing) for a category outside the
    /// configured set.
    pub fn select_category(&mut self, category: &str) -> bool {
        if !self.categories.iter().any(|c| c == category) {
            tracing::debug!(category, "Ignoring unknown category");
            return false;
        }

        self.visible = if self.is_all_category(category) {
            (0..self.canonical.len()).collect()
        } else {
            self.canonical
                .iter()
                .enumerate()
                .filter(|(_, r)| r.category == category)
                .map(|(i, _)| i)
                .collect()
        };
        self.category = category.to_string();
        self.search_active = false;
        self.current_page = 1;
        self.prune_expansion();
        true
    }

    /// Select the tab at `index` in the configured order.
    pub fn select_category_at(&mut self, index: usize) -> bool {
        match self.categories.get(index).cloned() {
            Some(category) => self.select_category(&category),
            None => false,
        }
    }

    /// Select the tab after the current one, wrapping around.
    pub fn next_category(&mut self) {
        let next = (self.category_index() + 1) % self.categories.len();
        self.select_category_at(next);
    }

    /// Select the tab before the current one, wrapping around.
    pub fn prev_category(&mut self) {
        let len = self.categories.len();
        let prev = (self.category_index() + len - 1) % len;
        self.select_category_at(prev);
    }

    /// Record a keystroke's worth of search text.
    ///
    /// Does not search. Blank text reverts to idle mode.
    pub fn edit_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
        self.current_page = 1;
        if self.search_term.trim().is_empty() {
            self.reset_to_idle();
        } else {
            self.prune_expansion();
        }
    }

    /// Run the search for the current term over the full list.
    ///
    /// Search mode only becomes active when something matched; a committed
    /// search with no matches leaves an empty visible list with the flag off.
    /// Returns the number of matches.
    pub fn commit_search(&mut self) -> usize {
        if self.search_term.trim().is_empty() {
            self.reset_to_idle();
            return self.visible.len();
        }

        let needle = self.search_term.to_lowercase();
        self.visible = self
            .canonical
            .iter()
            .enumerate()
            .filter(|(_, r)| r.matches_lowered(&needle))
            .map(|(i, _)| i)
            .collect();
        self.search_active = !self.visible.is_empty();
        self.current_page = 1;
        self.prune_expansion();

        tracing::debug!(
            term = %self.search_term,
            matches = self.visible.len(),
            "Committed search"
        );
        self.visible.len()
    }

    /// Empty the search field and return to idle mode.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
        self.reset_to_idle();
    }

    /// Expand `id`, or collapse it if it is already expanded.
    ///
    /// Only records on the current page can be toggled; any other id is a no-op.
    pub fn toggle_expand(&mut self, id: FaqId) {
        if self.expanded_id == Some(id) {
            self.expanded_id = None;
        } else if self.page_items().iter().any(|r| r.id == id) {
            self.expanded_id = Some(id);
        }
    }

    /// Move to page `n`, clamped into the valid range.
    pub fn go_to_page(&mut self, n: usize) {
        self.current_page = pager::clamp_page(n, self.visible.len(), self.page_size);
        self.prune_expansion();
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.page_count());
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn canonical(&self) -> &[FaqRecord] {
        &self.canonical
    }

    /// The visible list, in canonical order.
    pub fn visible(&self) -> impl Iterator<Item = &FaqRecord> + '_ {
        self.visible.iter().map(|&i| &self.canonical[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Records on the current page.
    pub fn page_items(&self) -> Vec<&FaqRecord> {
        pager::page_items(&self.visible, self.current_page, self.page_size)
            .iter()
            .map(|&i| &self.canonical[i])
            .collect()
    }

    pub fn page_count(&self) -> usize {
        pager::page_count(self.visible.len(), self.page_size)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Position of the selected category in the configured order.
    pub fn category_index(&self) -> usize {
        self.categories
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    pub fn expanded_id(&self) -> Option<FaqId> {
        self.expanded_id
    }

    /// True in the default state: "all" category and no active search.
    pub fn is_idle(&self) -> bool {
        !self.search_active && self.is_all_category(&self.category)
    }

    fn is_all_category(&self, category: &str) -> bool {
        self.categories[0] == category
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn reset_to_idle(&mut self) {
        self.visible = (0..self.canonical.len()).collect();
        self.category = self.categories[0].clone();
        self.search_active = false;
        self.current_page = 1;
        self.prune_expansion();
    }

    /// Drop the expansion when its record is no longer on the current page.
    fn prune_expansion(&mut self) {
        if let Some(id) = self.expanded_id {
            if !self.page_items().iter().any(|r| r.id == id) {
                self.expanded_id = None;
            }
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(FaqConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: FaqId, category: &str, title: &str, content: &str) -> FaqRecord {
        FaqRecord::new(id, category, title, content)
    }

    fn small_view() -> ViewState {
        let mut view = ViewState::new(FaqConfig {
            categories: vec!["All".into(), "Policy".into(), "Buying".into()],
            page_size: 2,
        });
        view.load(vec![
            record(1, "Policy", "Privacy policy", "We keep <b>nothing</b>"),
            record(2, "Buying", "How to pay", "Cards and transfers"),
            record(3, "Buying", "Refunds", "Within 7 days"),
            record(4, "Policy", "Terms of use", "Be nice"),
            record(5, "Buying", "Shipping", "Usually 3 days"),
        ]);
        view
    }

    fn visible_ids(view: &ViewState) -> Vec<FaqId> {
        view.visible().map(|r| r.id).collect()
    }

    #[test]
    fn test_new_is_idle_and_empty() {
        let view = ViewState::default();
        assert!(view.is_idle());
        assert_eq!(view.category(), "All");
        assert_eq!(view.visible_len(), 0);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.page_count(), 1);
        assert!(view.page_items().is_empty());
    }

    #[test]
    fn test_load_seeds_visible_list() {
        let view = small_view();
        assert_eq!(visible_ids(&view), vec![1, 2, 3, 4, 5]);
        assert_eq!(view.page_count(), 3);
    }

    #[test]
    fn test_load_keeps_search_text_but_returns_to_idle() {
        let mut view = ViewState::default();
        view.edit_search_term("ref");
        view.load(vec![record(1, "Buying", "Refunds", "")]);
        assert_eq!(view.search_term(), "ref");
        assert!(view.is_idle());
        assert_eq!(view.visible_len(), 1);
    }

    #[test]
    fn test_select_category_filters() {
        let mut view = small_view();
        assert!(view.select_category("Buying"));
        assert_eq!(visible_ids(&view), vec![2, 3, 5]);
        assert_eq!(view.category(), "Buying");
        assert!(!view.is_idle());

        assert!(view.select_category("All"));
        assert_eq!(visible_ids(&view), vec![1, 2, 3, 4, 5]);
        assert!(view.is_idle());
    }

    #[test]
    fn test_select_unknown_category_is_ignored() {
        let mut view = small_view();
        view.select_category("Buying");
        assert!(!view.select_category("Selling"));
        assert_eq!(view.category(), "Buying");
        assert_eq!(visible_ids(&view), vec![2, 3, 5]);
    }

    #[test]
    fn test_select_category_keeps_search_text_and_ends_search() {
        let mut view = small_view();
        view.edit_search_term("days");
        assert_eq!(view.commit_search(), 2);
        assert!(view.is_search_active());

        view.select_category("Policy");
        assert!(!view.is_search_active());
        assert_eq!(view.search_term(), "days");
        assert_eq!(visible_ids(&view), vec![1, 4]);
    }

    #[test]
    fn test_category_cycling_wraps() {
        let mut view = small_view();
        view.prev_category();
        assert_eq!(view.category(), "Buying");
        view.next_category();
        assert_eq!(view.category(), "All");
        view.next_category();
        assert_eq!(view.category(), "Policy");
    }

    #[test]
    fn test_select_category_at_out_of_range() {
        let mut view = small_view();
        assert!(!view.select_category_at(9));
        assert!(view.select_category_at(2));
        assert_eq!(view.category(), "Buying");
    }

    #[test]
    fn test_edit_search_term_does_not_search() {
        let mut view = small_view();
        view.go_to_page(2);
        view.edit_search_term("refund");
        assert_eq!(view.current_page(), 1);
        assert!(!view.is_search_active());
        assert_eq!(view.visible_len(), 5);
    }

    #[test]
    fn test_search_overlays_full_list_not_category() {
        let mut view = small_view();
        view.select_category("Policy");
        view.edit_search_term("DAYS");
        assert_eq!(view.commit_search(), 2);
        assert_eq!(visible_ids(&view), vec![3, 5]);
    }

    #[test]
    fn test_search_matches_content() {
        let mut view = small_view();
        view.edit_search_term("nothing");
        view.commit_search();
        assert_eq!(visible_ids(&view), vec![1]);
    }

    #[test]
    fn test_blank_commit_reverts_to_idle() {
        let mut view = small_view();
        view.select_category("Buying");
        view.edit_search_term("   ");
        assert!(view.is_idle());
        view.select_category("Buying");
        view.commit_search();
        assert!(view.is_idle());
        assert_eq!(view.visible_len(), 5);
    }

    #[test]
    fn test_no_match_leaves_flag_off() {
        let mut view = small_view();
        view.edit_search_term("xyz-no-match");
        assert_eq!(view.commit_search(), 0);
        assert_eq!(view.visible_len(), 0);
        assert!(!view.is_search_active());
        assert_eq!(view.page_count(), 1);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_clear_search() {
        let mut view = small_view();
        view.edit_search_term("ship");
        view.commit_search();
        view.clear_search();
        assert_eq!(view.search_term(), "");
        assert!(view.is_idle());
        assert_eq!(view.visible_len(), 5);
    }

    #[test]
    fn test_toggle_expand_single_record() {
        let mut view = small_view();
        view.toggle_expand(1);
        assert_eq!(view.expanded_id(), Some(1));
        view.toggle_expand(2);
        assert_eq!(view.expanded_id(), Some(2));
        view.toggle_expand(2);
        assert_eq!(view.expanded_id(), None);
    }

    #[test]
    fn test_toggle_expand_off_page_is_noop() {
        let mut view = small_view();
        view.toggle_expand(5);
        assert_eq!(view.expanded_id(), None);
        view.toggle_expand(42);
        assert_eq!(view.expanded_id(), None);
    }

    #[test]
    fn test_page_change_collapses_expanded_row() {
        let mut view = small_view();
        view.toggle_expand(1);
        view.go_to_page(2);
        assert_eq!(view.expanded_id(), None);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut view = small_view();
        view.go_to_page(0);
        assert_eq!(view.current_page(), 1);
        view.go_to_page(99);
        assert_eq!(view.current_page(), 3);
        view.next_page();
        assert_eq!(view.current_page(), 3);
        view.prev_page();
        assert_eq!(view.current_page(), 2);
        view.last_page();
        assert_eq!(view.current_page(), 3);
        assert_eq!(
            view.page_items().iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![5]
        );
    }

    #[test]
    fn test_empty_category_list_falls_back_to_all() {
        let view = ViewState::new(FaqConfig {
            categories: Vec::new(),
            page_size: 0,
        });
        assert_eq!(view.categories(), ["All".to_string()]);
        assert_eq!(view.page_size(), 1);
    }
}
